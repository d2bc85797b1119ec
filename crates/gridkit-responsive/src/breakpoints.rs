//! Breakpoint tiers and the current-tier lookup.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// A named screen-width tier, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All tiers, smallest first.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// This tier and every smaller one, largest first.
    pub fn cascade(self) -> impl Iterator<Item = Breakpoint> {
        Breakpoint::ALL.into_iter().rev().filter(move |tier| *tier <= self)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum width of each tier. Undefined tiers are never selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<f32>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: Some(0.0),
            sm: Some(576.0),
            md: Some(768.0),
            lg: Some(992.0),
            xl: Some(1200.0),
        }
    }
}

impl Breakpoints {
    /// No tier defined.
    pub fn empty() -> Self {
        Self {
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    pub fn with(mut self, tier: Breakpoint, min_width: f32) -> Self {
        *self.slot(tier) = Some(min_width);
        self
    }

    pub fn min_width(&self, tier: Breakpoint) -> Option<f32> {
        match tier {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    fn slot(&mut self, tier: Breakpoint) -> &mut Option<f32> {
        match tier {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }
}

/// The tier with the largest minimum width that `width` reaches.
///
/// Ties go to the smaller tier. Falls back to `Xs` when no defined tier matches.
pub fn current_breakpoint(width: f32, breakpoints: &Breakpoints) -> Breakpoint {
    let mut defined: Vec<(Breakpoint, f32)> = Breakpoint::ALL
        .into_iter()
        .filter_map(|tier| breakpoints.min_width(tier).map(|min| (tier, min)))
        .collect();
    defined.sort_by(|a, b| b.1.total_cmp(&a.1));

    let tier = defined
        .into_iter()
        .find(|(_, min)| width >= *min)
        .map_or(Breakpoint::Xs, |(tier, _)| tier);

    trace!("Width {} is breakpoint {}", width, tier);
    tier
}
