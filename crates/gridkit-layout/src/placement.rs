//! # Auto-Placement
//!
//! Resolves grid item placement requests to integer cells.
//!
//! ## Overview
//!
//! Every item ends up with a `[col_start, col_end) x [row_start, row_end)` cell
//! (0-based, exclusive ends). Items that give an explicit start on an axis keep
//! it; everything else is found by scanning candidate origins in row-major
//! order for the first spot whose whole area is unoccupied.
//!
//! - Sparse flows (`row`, `column`) keep a cursor that only moves forward, so
//!   holes left behind by wide items stay empty.
//! - Dense flows (`row-dense`, `column-dense`) restart every search at the
//!   origin and backfill holes.
//!
//! The column count is fixed; rows grow as needed. Both flow directions scan
//! row-major because only the column axis is bounded.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::LayoutError;

/// Highest row line a cell may end on. Placement fails past it.
pub const MAX_GRID_ROWS: usize = 10_000;

/// Auto-placement flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridAutoFlow {
    #[default]
    Row,
    Column,
    RowDense,
    ColumnDense,
}

impl GridAutoFlow {
    /// Check if this uses dense packing.
    pub fn is_dense(self) -> bool {
        matches!(self, GridAutoFlow::RowDense | GridAutoFlow::ColumnDense)
    }
}

/// Placement request for one item. All positions are 0-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementRequest {
    pub col_start: Option<usize>,
    pub col_end: Option<usize>,
    pub col_span: Option<usize>,
    pub row_start: Option<usize>,
    pub row_end: Option<usize>,
    pub row_span: Option<usize>,
    /// Position of the item in the original sequence.
    pub index: usize,
}

impl PlacementRequest {
    /// A fully auto-placed item.
    pub fn auto(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// An item pinned to a single cell.
    pub fn cell(index: usize, column: usize, row: usize) -> Self {
        Self {
            col_start: Some(column),
            row_start: Some(row),
            index,
            ..Default::default()
        }
    }

    pub fn with_col_span(mut self, span: usize) -> Self {
        self.col_span = Some(span);
        self
    }

    pub fn with_row_span(mut self, span: usize) -> Self {
        self.row_span = Some(span);
        self
    }

    pub fn with_columns(mut self, start: usize, end: usize) -> Self {
        self.col_start = Some(start);
        self.col_end = Some(end);
        self
    }

    pub fn with_rows(mut self, start: usize, end: usize) -> Self {
        self.row_start = Some(start);
        self.row_end = Some(end);
        self
    }

    pub fn with_col_start(mut self, start: usize) -> Self {
        self.col_start = Some(start);
        self
    }

    pub fn with_row_start(mut self, start: usize) -> Self {
        self.row_start = Some(start);
        self
    }
}

/// A resolved grid cell. Ends are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub col_start: usize,
    pub col_end: usize,
    pub row_start: usize,
    pub row_end: usize,
    pub index: usize,
}

impl GridCell {
    pub fn new(index: usize, col_start: usize, col_end: usize, row_start: usize, row_end: usize) -> Self {
        Self {
            col_start,
            col_end,
            row_start,
            row_end,
            index,
        }
    }

    pub fn col_span(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    pub fn row_span(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Check if two cells share at least one unit cell.
    pub fn overlaps(&self, other: &GridCell) -> bool {
        self.col_start < other.col_end
            && other.col_start < self.col_end
            && self.row_start < other.row_end
            && other.row_start < self.row_end
    }
}

/// Resolved placement along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisPlacement {
    Definite { start: usize, end: usize },
    Auto { span: usize },
}

impl AxisPlacement {
    fn resolve(start: Option<usize>, end: Option<usize>, span: Option<usize>) -> Self {
        match (start, end, span) {
            (Some(start), Some(end), _) => AxisPlacement::Definite {
                start,
                end: end.max(start.saturating_add(1)),
            },
            (Some(start), None, Some(span)) => AxisPlacement::Definite {
                start,
                end: start.saturating_add(span.max(1)),
            },
            (Some(start), None, None) => AxisPlacement::Definite {
                start,
                end: start.saturating_add(1),
            },
            (None, _, span) => AxisPlacement::Auto {
                span: span.unwrap_or(1).max(1),
            },
        }
    }

    fn span(self) -> usize {
        match self {
            AxisPlacement::Definite { start, end } => end - start,
            AxisPlacement::Auto { span } => span,
        }
    }

    /// Row line this placement needs to reach, at the very least.
    fn min_end(self) -> usize {
        match self {
            AxisPlacement::Definite { end, .. } => end,
            AxisPlacement::Auto { span } => span,
        }
    }
}

/// Occupied unit cells, one row of flags per grid row.
///
/// Rows and their flags grow on demand, so untouched rows cost an empty `Vec`.
#[derive(Debug, Clone, Default)]
struct OccupancyMap {
    rows: Vec<Vec<bool>>,
}

impl OccupancyMap {
    /// Number of rows that may contain occupied cells.
    fn row_extent(&self) -> usize {
        self.rows.len()
    }

    fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    fn is_area_free(&self, row: usize, col: usize, col_span: usize, row_span: usize) -> bool {
        let last_row = row.saturating_add(row_span).min(self.row_extent());
        (row..last_row).all(|r| (col..col + col_span).all(|c| !self.is_occupied(r, c)))
    }

    fn mark(&mut self, cell: &GridCell) {
        if self.rows.len() < cell.row_end {
            self.rows.resize_with(cell.row_end, Vec::new);
        }
        for row in &mut self.rows[cell.row_start..cell.row_end] {
            if row.len() < cell.col_end {
                row.resize(cell.col_end, false);
            }
            row[cell.col_start..cell.col_end].fill(true);
        }
    }
}

/// Auto-placement state for one `place_items` call.
struct AutoPlacer {
    column_count: usize,
    flow: GridAutoFlow,
    item_count: usize,
    cursor_row: usize,
    cursor_col: usize,
    occupied: OccupancyMap,
}

impl AutoPlacer {
    fn new(column_count: usize, flow: GridAutoFlow, item_count: usize) -> Self {
        Self {
            column_count,
            flow,
            item_count,
            cursor_row: 0,
            cursor_col: 0,
            occupied: OccupancyMap::default(),
        }
    }

    fn place(&mut self, item: &PlacementRequest) -> Result<GridCell, LayoutError> {
        let columns = self.clamp_columns(
            item,
            AxisPlacement::resolve(item.col_start, item.col_end, item.col_span),
        );
        let rows = AxisPlacement::resolve(item.row_start, item.row_end, item.row_span);

        if rows.min_end() > MAX_GRID_ROWS {
            return Err(LayoutError::RowLimitExceeded {
                index: item.index,
                rows: rows.min_end(),
                limit: MAX_GRID_ROWS,
            });
        }

        let (col_start, col_end, row_start, row_end) = match (columns, rows) {
            (
                AxisPlacement::Definite { start: cs, end: ce },
                AxisPlacement::Definite { start: rs, end: re },
            ) => (cs, ce, rs, re),
            _ => {
                let col_span = columns.span().min(self.column_count);
                let row_span = rows.span();
                let (row, col) = self.find_slot(item.index, columns, rows, col_span, row_span)?;

                let (cs, ce) = match columns {
                    AxisPlacement::Definite { start, end } => (start, end),
                    AxisPlacement::Auto { .. } => (col, col + col_span),
                };
                let (rs, re) = match rows {
                    AxisPlacement::Definite { start, end } => (start, end),
                    AxisPlacement::Auto { .. } => (row, row + row_span),
                };
                (cs, ce, rs, re)
            }
        };

        let cell = GridCell::new(item.index, col_start, col_end, row_start, row_end);
        self.occupied.mark(&cell);

        if !self.flow.is_dense() {
            self.cursor_col = cell.col_end;
            if self.cursor_col >= self.column_count {
                self.cursor_row = cell.row_end;
                self.cursor_col = 0;
            }
        }

        trace!(
            "Placed item {} at columns {}..{}, rows {}..{}",
            cell.index,
            cell.col_start,
            cell.col_end,
            cell.row_start,
            cell.row_end
        );

        Ok(cell)
    }

    /// Keep explicit columns inside the grid. A start past the last column
    /// resets to column 0.
    fn clamp_columns(&self, item: &PlacementRequest, columns: AxisPlacement) -> AxisPlacement {
        match columns {
            AxisPlacement::Definite { start, .. } if start >= self.column_count => {
                debug!(
                    "Item {} starts at column {} of {}, resetting to column 0",
                    item.index, start, self.column_count
                );
                AxisPlacement::Definite {
                    start: 0,
                    end: item.col_span.unwrap_or(1).max(1).min(self.column_count),
                }
            }
            AxisPlacement::Definite { start, end } => AxisPlacement::Definite {
                start,
                end: end.min(self.column_count),
            },
            auto => auto,
        }
    }

    /// Find an origin for an item with at least one auto axis.
    fn find_slot(
        &self,
        index: usize,
        columns: AxisPlacement,
        rows: AxisPlacement,
        col_span: usize,
        row_span: usize,
    ) -> Result<(usize, usize), LayoutError> {
        let origin = if self.flow.is_dense() {
            (0, 0)
        } else {
            (self.cursor_row, self.cursor_col)
        };

        // Explicit row: only that row is a candidate
        if let AxisPlacement::Definite { start: row, .. } = rows {
            if let Some(col) = self.find_next_column_at_row(row, col_span, row_span) {
                return Ok((row, col));
            }
            warn!(
                "Item {} does not fit in row {}, it may overlap other items",
                index, row
            );
            let (_, col) = self.find_next_cell(index, origin, None, col_span, row_span)?;
            return Ok((row, col));
        }

        // Explicit column: already clamped, so the column always fits
        let locked_col = match columns {
            AxisPlacement::Definite { start, .. } => Some(start),
            AxisPlacement::Auto { .. } => None,
        };

        self.find_next_cell(index, origin, locked_col, col_span, row_span)
    }

    /// Scan row-major from `origin` for the first free area.
    fn find_next_cell(
        &self,
        index: usize,
        origin: (usize, usize),
        locked_col: Option<usize>,
        col_span: usize,
        row_span: usize,
    ) -> Result<(usize, usize), LayoutError> {
        let (origin_row, origin_col) = origin;
        let last_col = self.column_count.saturating_sub(col_span);

        // Rows past the occupied extent are empty, so the search ends early
        // unless the grid is close to its row limit
        let last_origin = MAX_GRID_ROWS.saturating_sub(row_span);
        let limit = origin_row
            .max(self.occupied.row_extent())
            .checked_add(self.item_count)
            .and_then(|rows| rows.checked_add(row_span))
            .map_or(last_origin, |rows| rows.min(last_origin));

        for row in origin_row..=limit {
            let first_col = if row == origin_row { origin_col } else { 0 };
            let candidates = match locked_col {
                Some(col) if col >= first_col => col..col + 1,
                Some(_) => continue,
                None => first_col..last_col + 1,
            };

            for col in candidates {
                if self.occupied.is_area_free(row, col, col_span, row_span) {
                    return Ok((row, col));
                }
            }
        }

        Err(LayoutError::PlacementExhausted {
            index,
            col_span,
            row_span,
            rows_scanned: (limit + 1).saturating_sub(origin_row),
        })
    }

    /// Find the first free column in a fixed row.
    fn find_next_column_at_row(&self, row: usize, col_span: usize, row_span: usize) -> Option<usize> {
        (0..=self.column_count.saturating_sub(col_span))
            .find(|&col| self.occupied.is_area_free(row, col, col_span, row_span))
    }
}

/// Resolve every placement request to a cell.
///
/// The output has the same order and length as `items`. Fails when
/// `column_count` is zero, when an item reaches past [`MAX_GRID_ROWS`], or
/// when an item cannot be placed within the bounded search.
pub fn place_items(
    items: &[PlacementRequest],
    column_count: usize,
    flow: GridAutoFlow,
) -> Result<Vec<GridCell>, LayoutError> {
    if column_count == 0 {
        return Err(LayoutError::InvalidColumnCount(column_count));
    }

    let mut placer = AutoPlacer::new(column_count, flow, items.len());
    let cells = items
        .iter()
        .map(|item| placer.place(item))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Placed {} items in {} columns ({:?}), {} rows",
        cells.len(),
        column_count,
        flow,
        required_rows(&cells)
    );

    Ok(cells)
}

/// Minimum number of rows needed to hold `cells`. Never less than 1.
pub fn required_rows(cells: &[GridCell]) -> usize {
    cells.iter().map(|cell| cell.row_end).max().unwrap_or(1).max(1)
}
