//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for float and CSV comparisons
//! - Workspace and fleet fixtures
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::assertions::*;
//!
//! fn test_daily_total() {
//!     let daily = total_daily();
//!     assert_kg_approx(daily, 1674.0);
//! }
//! ```

pub mod assertions;
pub mod fixtures;

use assert_cmd::Command;

/// Helper to get the carbontrack binary command
#[allow(dead_code)]
pub fn get_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_carbontrack"));
    // Keep test output free of user logging settings
    cmd.env_remove("RUST_LOG");
    cmd
}
