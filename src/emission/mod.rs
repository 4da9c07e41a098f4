//! Emission estimation
//!
//! Converts a machine's energy source, daily consumption and unit count into
//! CO₂ figures. Everything here is a pure function over plain numbers.

pub mod estimator;
pub mod source;

pub use estimator::{
    estimate, predict_after_maintenance, EmissionResult, DAYS_PER_MONTH, DAYS_PER_YEAR,
    MAINTENANCE_RETENTION,
};
pub use source::{emission_factor, EnergySource, DEFAULT_EMISSION_FACTOR};
