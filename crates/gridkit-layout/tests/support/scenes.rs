//! Item lists shared by layout tests.

use gridkit_layout::{PlacementRequest, TrackSize};

/// `count` fully auto-placed items.
pub fn auto_items(count: usize) -> Vec<PlacementRequest> {
    (0..count).map(PlacementRequest::auto).collect()
}

/// Track list from string declarations.
pub fn tracks(decls: &[&str]) -> Vec<TrackSize> {
    decls.iter().map(|d| TrackSize::from(*d)).collect()
}

/// A dashboard-like mix: a wide header, a tall sidebar, and unit cards.
pub fn dashboard_items() -> Vec<PlacementRequest> {
    vec![
        PlacementRequest::auto(0).with_col_span(3),
        PlacementRequest::auto(1).with_row_span(2),
        PlacementRequest::auto(2),
        PlacementRequest::auto(3),
        PlacementRequest::auto(4).with_col_span(2),
        PlacementRequest::auto(5),
    ]
}
