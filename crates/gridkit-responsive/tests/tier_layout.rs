//! Responsive templates driving full layout passes.

use gridkit_layout::{GridConfig, GridContainer, MeasuredHeights, PlacementRequest};
use gridkit_responsive::{
    patterns, responsive_grid_config, Breakpoint, Breakpoints, Responsive, TierConfig,
};

fn cards(count: usize) -> Vec<PlacementRequest> {
    (0..count).map(PlacementRequest::auto).collect()
}

fn layout_at(width: f32, config: &Responsive<TierConfig>) -> (usize, f32) {
    let tier = responsive_grid_config(config, width, &Breakpoints::default());
    let mut grid = GridConfig::new(tier.columns);
    if let Some(gap) = tier.gap {
        grid = grid.with_gap(gap);
    }

    let geometry = GridContainer::new(grid)
        .layout(&cards(6), width, 0.0, &MeasuredHeights::new())
        .unwrap();
    (geometry.row_count(), geometry.column_sizes[0])
}

#[test]
fn test_column_count_follows_screen_width() {
    let config = Responsive::new()
        .with(Breakpoint::Xs, TierConfig::new(patterns::equal(1)))
        .with(Breakpoint::Md, TierConfig::new(patterns::equal(2)).with_gap(20.0))
        .with(Breakpoint::Xl, TierConfig::new(patterns::equal(3)).with_gap(30.0));

    assert_eq!(layout_at(400.0, &config), (6, 400.0));
    assert_eq!(layout_at(820.0, &config), (3, 400.0));
    assert_eq!(layout_at(1260.0, &config), (2, 400.0));
}

#[test]
fn test_pattern_templates_lay_out() {
    let grid = GridConfig::new(patterns::holy_grail(200.0, 150.0)).with_gap(10.0);
    let geometry = GridContainer::new(grid)
        .layout(&cards(3), 1000.0, 300.0, &MeasuredHeights::new())
        .unwrap();

    assert_eq!(geometry.column_sizes, vec![200.0, 630.0, 150.0]);
    assert_eq!(geometry.total_width, 1000.0);
}

#[test]
fn test_gallery_uses_whole_screen() {
    let columns = patterns::gallery(180.0, 1000.0);
    assert_eq!(columns.len(), 5);

    let geometry = GridContainer::new(GridConfig::new(columns))
        .layout(&cards(12), 1000.0, 0.0, &MeasuredHeights::new())
        .unwrap();
    assert_eq!(geometry.column_sizes, vec![200.0; 5]);
    assert_eq!(geometry.row_count(), 3);
}
