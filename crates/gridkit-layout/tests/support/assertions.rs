//! Custom assertions for layout tests.

use gridkit_layout::{GridCell, GridGeometry, Rect};

/// Assert that no two cells share a unit cell.
#[track_caller]
pub fn assert_no_overlap(cells: &[GridCell]) {
    for (i, a) in cells.iter().enumerate() {
        for b in &cells[i + 1..] {
            assert!(
                !a.overlaps(b),
                "Cells overlap: item {} at {}..{} x {}..{}, item {} at {}..{} x {}..{}",
                a.index,
                a.col_start,
                a.col_end,
                a.row_start,
                a.row_end,
                b.index,
                b.col_start,
                b.col_end,
                b.row_start,
                b.row_end
            );
        }
    }
}

/// Assert that every cell is non-empty and inside the column range.
#[track_caller]
pub fn assert_cells_in_bounds(cells: &[GridCell], column_count: usize) {
    for cell in cells {
        assert!(
            cell.col_start < cell.col_end && cell.col_end <= column_count,
            "Item {} has columns {}..{} in a {}-column grid",
            cell.index,
            cell.col_start,
            cell.col_end,
            column_count
        );
        assert!(
            cell.row_start < cell.row_end,
            "Item {} has empty rows {}..{}",
            cell.index,
            cell.row_start,
            cell.row_end
        );
    }
}

/// Assert that a rectangle matches expected within tolerance.
#[track_caller]
pub fn assert_rect_near(actual: Rect, expected: Rect, tolerance: f32) {
    let near = (actual.x - expected.x).abs() <= tolerance
        && (actual.y - expected.y).abs() <= tolerance
        && (actual.width - expected.width).abs() <= tolerance
        && (actual.height - expected.height).abs() <= tolerance;

    assert!(
        near,
        "Rect mismatch: expected {:?}, got {:?} (tolerance: {})",
        expected, actual, tolerance
    );
}

/// Assert that an item was laid out and return its rectangle.
#[track_caller]
pub fn rect_of(geometry: &GridGeometry, index: usize) -> Rect {
    match geometry.rect_for(index) {
        Some(rect) => rect,
        None => panic!("Item {} has no rectangle", index),
    }
}

/// Assert that no two item rectangles intersect.
#[track_caller]
pub fn assert_rects_disjoint(geometry: &GridGeometry) {
    for (i, a) in geometry.items.iter().enumerate() {
        for b in &geometry.items[i + 1..] {
            assert!(
                !a.rect.intersects(&b.rect),
                "Rects of items {} and {} intersect: {:?} vs {:?}",
                a.index,
                b.index,
                a.rect,
                b.rect
            );
        }
    }
}
