//! Test support utilities for GridKit layout integration tests
//!
//! - Assertions: cell and rectangle checks shared across test modules
//! - Scenes: small item lists used by several tests
//! - Tracing: opt-in log output via `RUST_LOG`

#![allow(dead_code)]

mod assertions;
mod scenes;

pub use assertions::*;
pub use scenes::*;

/// Route layout logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
