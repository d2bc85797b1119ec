//! Integration tests for the layout engine.

mod container_pass;
mod placement_flows;
