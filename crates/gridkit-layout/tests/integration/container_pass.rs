//! Full layout passes through `GridContainer`.

use gridkit_layout::{
    GridAutoFlow, GridConfig, GridContainer, MeasuredHeights, Rect, RowSizing, TrackSize,
    FALLBACK_CONTAINER_HEIGHT, MIN_CONTENT_ROW_HEIGHT,
};

use crate::support::*;

fn dashboard_config() -> GridConfig {
    GridConfig::new(tracks(&["200", "1fr", "1fr"]))
        .with_gap(20.0)
        .with_auto_rows("80")
}

#[test]
fn test_dashboard_fixed_rows() {
    init_tracing();

    let container = GridContainer::new(dashboard_config());
    let geometry = container
        .layout(&dashboard_items(), 640.0, 0.0, &MeasuredHeights::new())
        .unwrap();

    assert_eq!(geometry.column_sizes, vec![200.0, 200.0, 200.0]);
    assert_eq!(geometry.row_sizes, vec![80.0; 4]);
    assert_eq!(geometry.row_sizing, RowSizing::Fixed);

    assert_rect_near(rect_of(&geometry, 0), Rect::new(0.0, 0.0, 640.0, 80.0), 0.01);
    assert_rect_near(rect_of(&geometry, 1), Rect::new(0.0, 100.0, 200.0, 180.0), 0.01);
    assert_rect_near(rect_of(&geometry, 4), Rect::new(220.0, 200.0, 420.0, 80.0), 0.01);
    assert_rect_near(rect_of(&geometry, 5), Rect::new(0.0, 300.0, 200.0, 80.0), 0.01);

    assert_eq!(geometry.total_width, 640.0);
    assert_eq!(geometry.total_height, 380.0);
    assert_rects_disjoint(&geometry);
}

#[test]
fn test_dashboard_content_rows() {
    init_tracing();

    let config = dashboard_config().with_gap(10.0).with_auto_rows("auto");
    let mut heights = MeasuredHeights::new();
    heights.record(0, 60.0);
    heights.record(1, 300.0);
    heights.record(2, 100.0);
    heights.record(3, 120.0);
    heights.record(4, 90.0);

    let geometry = GridContainer::new(config)
        .layout(&dashboard_items(), 640.0, 0.0, &heights)
        .unwrap();

    assert_eq!(geometry.row_sizing, RowSizing::Content);
    assert_eq!(geometry.row_sizes, vec![60.0, 145.0, 145.0, MIN_CONTENT_ROW_HEIGHT]);
    assert_rect_near(rect_of(&geometry, 1), Rect::new(0.0, 70.0, 200.0, 300.0), 0.01);
    assert_rects_disjoint(&geometry);
}

#[test]
fn test_remeasured_heights_change_next_pass() {
    let config = GridConfig::new(vec![TrackSize::fr(1.0)]).with_auto_rows("auto");
    let container = GridContainer::new(config);
    let items = auto_items(2);

    let mut heights = MeasuredHeights::new();
    let first = container.layout(&items, 300.0, 0.0, &heights).unwrap();
    assert_eq!(first.row_sizes, vec![MIN_CONTENT_ROW_HEIGHT; 2]);

    heights.record(1, 240.0);
    let second = container.layout(&items, 300.0, 0.0, &heights).unwrap();
    assert_eq!(second.row_sizes, vec![MIN_CONTENT_ROW_HEIGHT, 240.0]);
}

#[test]
fn test_fr_rows_without_height_use_fallback() {
    let config = GridConfig::new(tracks(&["1fr", "1fr"]))
        .with_rows(tracks(&["1fr", "3fr"]))
        .with_auto_flow(GridAutoFlow::RowDense);
    let geometry = GridContainer::new(config)
        .layout(&auto_items(4), 200.0, -1.0, &MeasuredHeights::new())
        .unwrap();

    assert_eq!(
        geometry.row_sizes,
        vec![FALLBACK_CONTAINER_HEIGHT / 4.0, FALLBACK_CONTAINER_HEIGHT * 3.0 / 4.0]
    );
}

#[test]
fn test_layout_is_deterministic() {
    let container = GridContainer::new(dashboard_config());
    let heights: MeasuredHeights = [(1, 200.0)].into_iter().collect();

    let first = container.layout(&dashboard_items(), 800.0, 600.0, &heights).unwrap();
    let second = container.layout(&dashboard_items(), 800.0, 600.0, &heights).unwrap();
    assert_eq!(first, second);
}
