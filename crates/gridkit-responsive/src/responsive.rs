//! Per-tier values and their cascading resolution.

use gridkit_layout::TrackSize;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakpoints::{current_breakpoint, Breakpoint, Breakpoints};

/// An optional value per breakpoint tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Responsive<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
}

impl<T> Default for Responsive<T> {
    fn default() -> Self {
        Self {
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }
}

impl<T> Responsive<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, tier: Breakpoint, value: T) -> Self {
        self.set(tier, value);
        self
    }

    pub fn set(&mut self, tier: Breakpoint, value: T) {
        let slot = match tier {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        };
        *slot = Some(value);
    }

    pub fn get(&self, tier: Breakpoint) -> Option<&T> {
        match tier {
            Breakpoint::Xs => self.xs.as_ref(),
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Breakpoint::ALL.into_iter().all(|tier| self.get(tier).is_none())
    }

    /// The value for a screen `width`.
    ///
    /// Cascades from the current tier down to `Xs`. If nothing below the
    /// current tier is defined, the smallest defined tier wins.
    pub fn resolve(&self, width: f32, breakpoints: &Breakpoints) -> Option<&T> {
        let current = current_breakpoint(width, breakpoints);

        let resolved = current
            .cascade()
            .find_map(|tier| self.get(tier).map(|value| (tier, value)))
            .or_else(|| {
                Breakpoint::ALL
                    .into_iter()
                    .find_map(|tier| self.get(tier).map(|value| (tier, value)))
            });

        resolved.map(|(tier, value)| {
            debug!("Width {} ({}) resolved to tier {}", width, current, tier);
            value
        })
    }
}

/// Columns and gap for one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    pub columns: Vec<TrackSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
}

impl TierConfig {
    pub fn new(columns: Vec<TrackSize>) -> Self {
        Self { columns, gap: None }
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }
}

impl Default for TierConfig {
    fn default() -> Self {
        Self::new(vec![TrackSize::fr(1.0)])
    }
}

/// Column template for a screen `width`. A single `1fr` column when no tier is defined.
pub fn responsive_columns(
    config: &Responsive<Vec<TrackSize>>,
    width: f32,
    breakpoints: &Breakpoints,
) -> Vec<TrackSize> {
    config
        .resolve(width, breakpoints)
        .cloned()
        .unwrap_or_else(|| vec![TrackSize::fr(1.0)])
}

/// Columns and gap for a screen `width`. A single `1fr` column without gap when no tier is defined.
pub fn responsive_grid_config(
    config: &Responsive<TierConfig>,
    width: f32,
    breakpoints: &Breakpoints,
) -> TierConfig {
    config.resolve(width, breakpoints).cloned().unwrap_or_default()
}
