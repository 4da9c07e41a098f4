//! Configuration for carbontrack
//!
//! This module provides:
//! - .carbontrack.toml config file support
//! - Emission budget thresholds and their validation
//! - Assessment history settings

pub mod file;
pub mod loader;

pub use file::{
    ConfigFile, EmissionBudget, HistorySettings, CONFIG_FILE_NAME, DEFAULT_FLEET_FILE,
};
pub use loader::ConfigLoader;
