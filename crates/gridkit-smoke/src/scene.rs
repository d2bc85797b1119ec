//! Scene files: a grid config, the items to place, and their measured heights.

use std::path::Path;

use anyhow::{Context, Result};
use gridkit_layout::{
    GridAutoFlow, GridConfig, GridContainer, GridGeometry, MeasuredHeights, PlacementRequest,
    TrackSize,
};
use gridkit_responsive::{
    current_breakpoint, patterns, responsive_grid_config, Breakpoint, Breakpoints, Responsive,
    TierConfig,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything one layout pass needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scene {
    pub config: GridConfig,
    pub items: Vec<PlacementRequest>,
    pub heights: MeasuredHeights,
    /// Per-tier columns and gap. Overrides `config.columns` when present.
    pub responsive: Option<Responsive<TierConfig>>,
    pub breakpoints: Option<Breakpoints>,
}

/// What the harness prints.
#[derive(Debug, Clone, Serialize)]
pub struct SmokeReport {
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoint: Option<Breakpoint>,
    pub geometry: GridGeometry,
}

impl Scene {
    /// Read a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse scene file {}", path.display()))
    }

    /// A small dashboard: header, sidebar, cards, content-sized rows.
    pub fn demo() -> Self {
        let mut items = vec![
            PlacementRequest::auto(0).with_col_span(3),
            PlacementRequest::auto(1).with_row_span(2),
        ];
        items.extend((2..7).map(PlacementRequest::auto));

        let heights = [(0, 64.0), (1, 320.0), (2, 120.0), (3, 140.0), (4, 96.0)]
            .into_iter()
            .collect();

        let responsive = Responsive::new()
            .with(Breakpoint::Xs, TierConfig::new(patterns::equal(1)).with_gap(8.0))
            .with(Breakpoint::Md, TierConfig::new(patterns::sidebar(220.0, patterns::Side::Left)).with_gap(16.0))
            .with(Breakpoint::Lg, TierConfig::new(patterns::holy_grail(220.0, 180.0)).with_gap(24.0));

        Self {
            config: GridConfig::new(vec![TrackSize::fr(1.0)])
                .with_auto_rows("auto")
                .with_auto_flow(GridAutoFlow::RowDense),
            items,
            heights,
            responsive: Some(responsive),
            breakpoints: None,
        }
    }

    /// The grid config for a screen `width`, after tier selection.
    pub fn config_for(&self, width: f32) -> (GridConfig, Option<Breakpoint>) {
        let Some(responsive) = &self.responsive else {
            return (self.config.clone(), None);
        };

        let breakpoints = self.breakpoints.unwrap_or_default();
        let tier = responsive_grid_config(responsive, width, &breakpoints);
        let mut config = self.config.clone();
        config.columns = tier.columns;
        if tier.gap.is_some() {
            config.gap = tier.gap;
        }

        (config, Some(current_breakpoint(width, &breakpoints)))
    }

    /// Run one layout pass.
    pub fn run(&self, width: f32, height: f32) -> Result<SmokeReport> {
        let (config, breakpoint) = self.config_for(width);
        info!(
            columns = config.columns.len(),
            items = self.items.len(),
            breakpoint = ?breakpoint,
            "Running layout pass"
        );

        let geometry = GridContainer::new(config)
            .layout(&self.items, width, height, &self.heights)
            .context("Layout pass failed")?;

        Ok(SmokeReport {
            width,
            height,
            breakpoint,
            geometry,
        })
    }
}
