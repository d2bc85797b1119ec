//! # Grid Container
//!
//! One layout pass over a grid container: place the items, size the column
//! and row tracks, and project every cell onto a pixel rectangle.
//!
//! ## Row sizing
//!
//! Rows come from the explicit `rows` template when one is configured.
//! Otherwise the grid has as many implicit rows as placement needs, each
//! declared as `auto_rows`. When that declaration is `auto`, rows are sized by
//! the measured heights of their items instead of by the container height.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{size_content_rows, HeightLookup};
use crate::geometry::{project_rect, track_extent, Rect};
use crate::placement::{place_items, required_rows, GridAutoFlow, GridCell, PlacementRequest};
use crate::sizing::resolve_tracks;
use crate::track::TrackSize;
use crate::LayoutError;

/// Height used to size fixed rows when the container has no usable height.
pub const FALLBACK_CONTAINER_HEIGHT: f32 = 10_000.0;

/// Configuration of a grid container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Column template. Its length is the column count.
    pub columns: Vec<TrackSize>,
    /// Explicit row template. Implicit rows are used when absent.
    pub rows: Option<Vec<TrackSize>>,
    pub column_gap: f32,
    pub row_gap: f32,
    /// Shorthand that overrides both `column_gap` and `row_gap`.
    pub gap: Option<f32>,
    pub auto_flow: GridAutoFlow,
    /// Declaration for every implicit row.
    pub auto_rows: TrackSize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: vec![TrackSize::fr(1.0)],
            rows: None,
            column_gap: 0.0,
            row_gap: 0.0,
            gap: None,
            auto_flow: GridAutoFlow::Row,
            auto_rows: TrackSize::Declared("100".to_string()),
        }
    }
}

impl GridConfig {
    /// Create a config with the given column template.
    pub fn new(columns: Vec<TrackSize>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    pub fn with_rows(mut self, rows: Vec<TrackSize>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn with_column_gap(mut self, gap: f32) -> Self {
        self.column_gap = gap;
        self
    }

    pub fn with_row_gap(mut self, gap: f32) -> Self {
        self.row_gap = gap;
        self
    }

    pub fn with_auto_flow(mut self, flow: GridAutoFlow) -> Self {
        self.auto_flow = flow;
        self
    }

    pub fn with_auto_rows(mut self, auto_rows: impl Into<TrackSize>) -> Self {
        self.auto_rows = auto_rows.into();
        self
    }

    /// Effective column gap, after the shorthand.
    pub fn effective_column_gap(&self) -> f32 {
        self.gap.unwrap_or(self.column_gap)
    }

    /// Effective row gap, after the shorthand.
    pub fn effective_row_gap(&self) -> f32 {
        self.gap.unwrap_or(self.row_gap)
    }

    /// Check if rows are sized from measured content.
    ///
    /// Only a literal `auto` declaration counts. Declarations that merely
    /// fall back to auto while parsing still size rows from the container.
    pub fn has_content_rows(&self) -> bool {
        self.rows.is_none()
            && match &self.auto_rows {
                TrackSize::Auto => true,
                TrackSize::Declared(raw) => raw.trim() == "auto",
                _ => false,
            }
    }
}

/// How the rows of a pass were sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowSizing {
    /// Rows resolved from track declarations against the container height.
    Fixed,
    /// Rows sized from measured item heights. Rect heights are minimums.
    Content,
}

/// The rectangle of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemRect {
    pub index: usize,
    #[serde(flatten)]
    pub rect: Rect,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGeometry {
    pub column_sizes: Vec<f32>,
    pub row_sizes: Vec<f32>,
    pub cells: Vec<GridCell>,
    /// One rectangle per item, in input order.
    pub items: Vec<ItemRect>,
    pub row_sizing: RowSizing,
    pub total_width: f32,
    pub total_height: f32,
}

impl GridGeometry {
    /// Rectangle of the item with the given index.
    pub fn rect_for(&self, index: usize) -> Option<Rect> {
        self.items
            .iter()
            .find(|item| item.index == index)
            .map(|item| item.rect)
    }

    pub fn row_count(&self) -> usize {
        self.row_sizes.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_sizes.len()
    }
}

/// A grid container. Holds configuration only; every pass is independent.
#[derive(Debug, Clone, Default)]
pub struct GridContainer {
    config: GridConfig,
}

impl GridContainer {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Run one layout pass.
    ///
    /// `heights` is only consulted when rows are content-driven.
    pub fn layout<L>(
        &self,
        items: &[PlacementRequest],
        container_width: f32,
        container_height: f32,
        heights: &L,
    ) -> Result<GridGeometry, LayoutError>
    where
        L: HeightLookup + ?Sized,
    {
        let config = &self.config;
        let column_gap = config.effective_column_gap();
        let row_gap = config.effective_row_gap();

        debug!(
            "Grid layout: container {}x{}, {} items, {} columns",
            container_width,
            container_height,
            items.len(),
            config.columns.len()
        );

        let cells = place_items(items, config.columns.len(), config.auto_flow)?;
        let column_sizes = resolve_tracks(&config.columns, container_width, column_gap);

        let (row_sizes, row_sizing) = if config.has_content_rows() {
            (size_content_rows(&cells, row_gap, heights), RowSizing::Content)
        } else {
            let template = match &config.rows {
                Some(rows) => rows.clone(),
                None => vec![config.auto_rows.clone(); required_rows(&cells)],
            };
            let height = if container_height > 0.0 {
                container_height
            } else {
                FALLBACK_CONTAINER_HEIGHT
            };
            (resolve_tracks(&template, height, row_gap), RowSizing::Fixed)
        };

        let rects = cells
            .iter()
            .map(|cell| ItemRect {
                index: cell.index,
                rect: project_rect(cell, &column_sizes, &row_sizes, column_gap, row_gap),
            })
            .collect();

        let geometry = GridGeometry {
            total_width: track_extent(&column_sizes, column_gap),
            total_height: track_extent(&row_sizes, row_gap),
            column_sizes,
            row_sizes,
            cells,
            items: rects,
            row_sizing,
        };

        debug!(
            "Grid layout complete: {} rows ({:?}), {}x{}",
            geometry.row_count(),
            geometry.row_sizing,
            geometry.total_width,
            geometry.total_height
        );

        Ok(geometry)
    }
}
