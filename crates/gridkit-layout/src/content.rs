//! Content-driven row sizing.
//!
//! When rows are sized by their content, each row is as tall as the tallest
//! item that starts and ends in it. Items spanning several rows spread their
//! height evenly over those rows, minus the gaps in between. This is an
//! approximation: a tall spanning item can overstate the height of a row that
//! its single-row neighbours would have kept shorter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::placement::{required_rows, GridCell};

/// Height given to rows that no item contributes to.
pub const MIN_CONTENT_ROW_HEIGHT: f32 = 50.0;

/// Source of measured item heights, keyed by item index.
pub trait HeightLookup {
    /// Measured height of the item, if it has been measured.
    fn height_of(&self, index: usize) -> Option<f32>;
}

impl<F> HeightLookup for F
where
    F: Fn(usize) -> Option<f32>,
{
    fn height_of(&self, index: usize) -> Option<f32> {
        self(index)
    }
}

/// Measured item heights, owned by whoever renders the items.
///
/// The renderer records a height whenever it measures an item. A layout pass
/// only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasuredHeights {
    heights: HashMap<usize, f32>,
}

impl MeasuredHeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the measured height of an item.
    pub fn record(&mut self, index: usize, height: f32) {
        self.heights.insert(index, height);
    }

    /// Forget an item, e.g. when it leaves the grid.
    pub fn remove(&mut self, index: usize) -> Option<f32> {
        self.heights.remove(&index)
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.heights.get(&index).copied()
    }

    pub fn clear(&mut self) {
        self.heights.clear();
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

impl HeightLookup for MeasuredHeights {
    fn height_of(&self, index: usize) -> Option<f32> {
        self.get(index)
    }
}

impl From<HashMap<usize, f32>> for MeasuredHeights {
    fn from(heights: HashMap<usize, f32>) -> Self {
        Self { heights }
    }
}

impl FromIterator<(usize, f32)> for MeasuredHeights {
    fn from_iter<I: IntoIterator<Item = (usize, f32)>>(iter: I) -> Self {
        Self {
            heights: iter.into_iter().collect(),
        }
    }
}

/// Size rows from measured item heights.
///
/// Returns one height per row, `required_rows(cells)` rows in total.
pub fn size_content_rows<L>(cells: &[GridCell], row_gap: f32, heights: &L) -> Vec<f32>
where
    L: HeightLookup + ?Sized,
{
    let mut rows = vec![0.0_f32; required_rows(cells)];

    for cell in cells {
        let height = heights.height_of(cell.index).unwrap_or(0.0);
        let span = cell.row_span();

        if span == 1 {
            rows[cell.row_start] = rows[cell.row_start].max(height);
        } else if span > 1 {
            let per_row = (height - (span - 1) as f32 * row_gap) / span as f32;
            for row in &mut rows[cell.row_start..cell.row_end] {
                *row = row.max(per_row);
            }
        }
    }

    for row in &mut rows {
        if row.is_nan() || *row <= 0.0 {
            *row = MIN_CONTENT_ROW_HEIGHT;
        }
    }

    trace!("Content row heights: {:?}", rows);

    rows
}
