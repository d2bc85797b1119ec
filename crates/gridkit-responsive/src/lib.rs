//! # GridKit Responsive
//!
//! Breakpoint tiers for choosing a grid's column template by screen width,
//! plus helpers that build common column templates.
//!
//! Tiers cascade downward: a screen in the `lg` tier uses the `lg` value if
//! one is defined, else `md`, then `sm`, then `xs`. The chosen template is
//! handed to a `gridkit_layout::GridConfig` like any other track list.

pub mod breakpoints;
pub mod patterns;
pub mod responsive;

pub use breakpoints::{current_breakpoint, Breakpoint, Breakpoints};
pub use patterns::Side;
pub use responsive::{responsive_columns, responsive_grid_config, Responsive, TierConfig};
