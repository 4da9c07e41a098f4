//! Daily, monthly and yearly CO₂ figures for a machine

use super::source::emission_factor;
use serde::{Deserialize, Serialize};

/// Days used to scale a daily figure to a month (calendar approximation)
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Days used to scale a daily figure to a year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Fraction of the daily emission expected to remain after maintenance
pub const MAINTENANCE_RETENTION: f64 = 0.82;

/// Emission figures derived from one machine's consumption
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    /// kg CO₂ per day
    pub daily_kg: f64,
    /// kg CO₂ per 30-day month
    pub monthly_kg: f64,
    /// kg CO₂ per 365-day year
    pub yearly_kg: f64,
    /// Projected kg CO₂ per day once preventive maintenance is done
    pub predicted_daily_after_maintenance_kg: f64,
}

/// Estimate emissions for `active_units` identical units
///
/// `daily = consumption × units × factor`, in that order. No input
/// validation happens here; see
/// [`MachineSnapshot::validate`](crate::machine::MachineSnapshot::validate).
///
/// # Examples
///
/// ```
/// use carbontrack::emission::estimate;
///
/// let result = estimate("Electricity", 250.0, 2);
/// assert_eq!(result.daily_kg, 425.0);
/// assert_eq!(result.monthly_kg, 12750.0);
/// assert_eq!(result.yearly_kg, 155125.0);
/// ```
pub fn estimate(
    energy_source: &str,
    daily_consumption_kwh: f64,
    active_units: u32,
) -> EmissionResult {
    let factor = emission_factor(energy_source);
    let daily_kg = daily_consumption_kwh * f64::from(active_units) * factor;

    EmissionResult {
        daily_kg,
        monthly_kg: daily_kg * DAYS_PER_MONTH,
        yearly_kg: daily_kg * DAYS_PER_YEAR,
        predicted_daily_after_maintenance_kg: predict_after_maintenance(daily_kg),
    }
}

/// Flat 18% reduction heuristic applied after preventive maintenance
///
/// Negative input is passed through unchanged in sign.
pub fn predict_after_maintenance(current_daily_kg: f64) -> f64 {
    current_daily_kg * MAINTENANCE_RETENTION
}
