//! Ready-made column templates for common page layouts.

use gridkit_layout::TrackSize;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::breakpoints::Breakpoint;
use crate::responsive::Responsive;

/// Which side a sidebar sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// `count` equal `1fr` columns.
pub fn equal(count: usize) -> Vec<TrackSize> {
    vec![TrackSize::fr(1.0); count]
}

/// Equal columns per tier, e.g. `(1, 2, 3, 4, 5)` for one column on phones
/// up to five on wide desktops.
pub fn responsive_equal(
    xs: usize,
    sm: usize,
    md: usize,
    lg: usize,
    xl: usize,
) -> Responsive<Vec<TrackSize>> {
    [xs, sm, md, lg, xl]
        .into_iter()
        .zip(Breakpoint::ALL)
        .fold(Responsive::new(), |config, (count, tier)| {
            config.with(tier, equal(count))
        })
}

/// A fixed-width sidebar next to a flexible main column.
pub fn sidebar(width: impl Into<TrackSize>, side: Side) -> Vec<TrackSize> {
    match side {
        Side::Left => vec![width.into(), TrackSize::fr(1.0)],
        Side::Right => vec![TrackSize::fr(1.0), width.into()],
    }
}

/// Left column, flexible main column, right column.
pub fn holy_grail(left: impl Into<TrackSize>, right: impl Into<TrackSize>) -> Vec<TrackSize> {
    vec![left.into(), TrackSize::fr(1.0), right.into()]
}

/// Alternating `1fr 1.5fr 1fr` columns, truncated to `count`.
///
/// Only the column widths vary; items are still placed in regular rows.
pub fn masonry(count: usize) -> Vec<TrackSize> {
    const RATIOS: [f32; 3] = [1.0, 1.5, 1.0];
    RATIOS.iter().cycle().take(count).map(|&fr| TrackSize::fr(fr)).collect()
}

/// As many equal columns as fit `min_item_width` on the screen, at least one.
pub fn gallery(min_item_width: f32, screen_width: f32) -> Vec<TrackSize> {
    if min_item_width.is_nan() || min_item_width <= 0.0 {
        warn!("Invalid gallery item width {}, using one column", min_item_width);
        return equal(1);
    }

    let fit = (screen_width / min_item_width).floor();
    let columns = if fit >= 1.0 { fit as usize } else { 1 };
    equal(columns)
}
