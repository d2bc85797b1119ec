//! Projection of grid cells onto pixel rectangles.

use serde::{Deserialize, Serialize};

use crate::placement::GridCell;

/// A 2D rectangle, relative to the grid container's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(rename = "left")]
    pub x: f32,
    #[serde(rename = "top")]
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if the interiors of two rectangles intersect. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

fn size_at(sizes: &[f32], index: usize) -> f32 {
    sizes.get(index).copied().unwrap_or(0.0)
}

/// Offset of a track's start edge: every track before it plus one gap per track.
pub fn track_offset(sizes: &[f32], gap: f32, index: usize) -> f32 {
    (0..index).map(|i| size_at(sizes, i) + gap).sum()
}

/// Length covered by tracks `[start, end)`, including the gaps between them.
pub fn track_span_length(sizes: &[f32], gap: f32, start: usize, end: usize) -> f32 {
    if end <= start {
        return 0.0;
    }
    let tracks: f32 = (start..end).map(|i| size_at(sizes, i)).sum();
    tracks + (end - start - 1) as f32 * gap
}

/// Total length of a track list, gaps included.
pub fn track_extent(sizes: &[f32], gap: f32) -> f32 {
    track_span_length(sizes, gap, 0, sizes.len())
}

/// Project a cell onto absolute pixel geometry.
///
/// Track indices past the end of `col_sizes`/`row_sizes` count as zero-sized.
pub fn project_rect(cell: &GridCell, col_sizes: &[f32], row_sizes: &[f32], col_gap: f32, row_gap: f32) -> Rect {
    Rect::new(
        track_offset(col_sizes, col_gap, cell.col_start),
        track_offset(row_sizes, row_gap, cell.row_start),
        track_span_length(col_sizes, col_gap, cell.col_start, cell.col_end),
        track_span_length(row_sizes, row_gap, cell.row_start, cell.row_end),
    )
}
