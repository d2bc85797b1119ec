//! Auto-placement of mixed item lists.

use gridkit_layout::{place_items, required_rows, GridAutoFlow, GridCell, PlacementRequest};

use crate::support::*;

#[test]
fn test_dashboard_sparse_flow() {
    init_tracing();

    let cells = place_items(&dashboard_items(), 3, GridAutoFlow::Row).unwrap();

    assert_eq!(
        cells,
        vec![
            GridCell::new(0, 0, 3, 0, 1),
            GridCell::new(1, 0, 1, 1, 3),
            GridCell::new(2, 1, 2, 1, 2),
            GridCell::new(3, 2, 3, 1, 2),
            GridCell::new(4, 1, 3, 2, 3),
            GridCell::new(5, 0, 1, 3, 4),
        ]
    );
    assert_eq!(required_rows(&cells), 4);
    assert_no_overlap(&cells);
}

#[test]
fn test_dense_flow_fills_earlier_holes() {
    let items = vec![
        PlacementRequest::auto(0),
        PlacementRequest::auto(1).with_col_span(3),
        PlacementRequest::auto(2),
        PlacementRequest::auto(3),
    ];

    let sparse = place_items(&items, 3, GridAutoFlow::Row).unwrap();
    assert_eq!(sparse[2], GridCell::new(2, 0, 1, 2, 3));
    assert_eq!(required_rows(&sparse), 3);

    let dense = place_items(&items, 3, GridAutoFlow::RowDense).unwrap();
    assert_eq!(dense[2], GridCell::new(2, 1, 2, 0, 1));
    assert_eq!(dense[3], GridCell::new(3, 2, 3, 0, 1));
    assert_eq!(required_rows(&dense), 2);

    assert_no_overlap(&sparse);
    assert_no_overlap(&dense);
}

#[test]
fn test_explicit_items_are_routed_around() {
    let items = vec![
        PlacementRequest::cell(0, 1, 0).with_col_span(2),
        PlacementRequest::auto(1),
        PlacementRequest::auto(2),
        PlacementRequest::auto(3).with_col_span(2),
    ];
    let sparse = place_items(&items, 3, GridAutoFlow::Row).unwrap();

    // Explicit items advance the sparse cursor too, past the end of row 0
    assert_eq!(sparse[1], GridCell::new(1, 0, 1, 1, 2));
    assert_eq!(sparse[2], GridCell::new(2, 1, 2, 1, 2));
    assert_eq!(sparse[3], GridCell::new(3, 0, 2, 2, 3));

    let dense = place_items(&items, 3, GridAutoFlow::RowDense).unwrap();
    assert_eq!(dense[1], GridCell::new(1, 0, 1, 0, 1));
    assert_eq!(dense[2], GridCell::new(2, 0, 1, 1, 2));
    assert_eq!(dense[3], GridCell::new(3, 1, 3, 1, 2));

    for cells in [&sparse, &dense] {
        assert_no_overlap(cells);
        assert_cells_in_bounds(cells, 3);
    }
}

#[test]
fn test_single_column_stacks_items() {
    let cells = place_items(&dashboard_items(), 1, GridAutoFlow::ColumnDense).unwrap();

    assert_cells_in_bounds(&cells, 1);
    assert_no_overlap(&cells);
    // Spans are clamped to the single column; the tall sidebar keeps its rows
    assert_eq!(required_rows(&cells), 7);
}
