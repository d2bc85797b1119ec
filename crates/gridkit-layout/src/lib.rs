//! # GridKit Layout
//!
//! Track sizing and auto-placement engine for two-dimensional grids.
//! Produces absolute pixel geometry for a list of grid items.
//!
//! ## Design Goals
//!
//! 1. **Track sizing**: Distribute space across `px`, `%`, `fr` and `auto` tracks
//! 2. **Auto-placement**: Place items row-major with sparse or dense packing
//! 3. **Content rows**: Size rows from measured item heights when asked to
//! 4. **Geometry**: Project cells onto left/top/width/height rectangles
//!
//! Every pass is a pure function of its inputs. The only state that outlives a
//! pass is the caller's [`MeasuredHeights`] store, which the engine reads
//! through [`HeightLookup`].

pub mod content;
pub mod geometry;
pub mod grid;
pub mod placement;
pub mod sizing;
pub mod track;

pub use content::{size_content_rows, HeightLookup, MeasuredHeights, MIN_CONTENT_ROW_HEIGHT};
pub use geometry::{project_rect, track_extent, Rect};
pub use grid::{
    GridConfig, GridContainer, GridGeometry, ItemRect, RowSizing, FALLBACK_CONTAINER_HEIGHT,
};
pub use placement::{
    place_items, required_rows, GridAutoFlow, GridCell, PlacementRequest, MAX_GRID_ROWS,
};
pub use sizing::{resolve_parsed_tracks, resolve_tracks};
pub use track::{parse_track_size, ParsedTrack, TrackSize, TrackUnit};

use thiserror::Error;

/// Errors that can occur in layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Grid needs at least one column, got {0}")]
    InvalidColumnCount(usize),

    #[error(
        "No free area for item {index} ({col_span}x{row_span} cells) after scanning {rows_scanned} rows"
    )]
    PlacementExhausted {
        index: usize,
        col_span: usize,
        row_span: usize,
        rows_scanned: usize,
    },

    #[error("Item {index} needs {rows} rows, grid is limited to {limit}")]
    RowLimitExceeded { index: usize, rows: usize, limit: usize },
}
