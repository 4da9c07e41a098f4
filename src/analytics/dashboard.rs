//! Headline figures for a fleet

use crate::emission::DAYS_PER_MONTH;
use crate::machine::Fleet;
use serde::Serialize;

/// Fleet-wide totals shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Registered machines
    pub total_machines: usize,
    /// Σ per-unit daily consumption in kWh
    pub total_daily_energy_kwh: f64,
    /// Σ stored daily emissions in kg CO₂
    pub total_daily_co2_kg: f64,
    /// `total_daily_co2_kg × 30`
    pub monthly_estimate_kg: f64,
    /// Machines louder than the maintenance threshold
    pub maintenance_alerts: usize,
}

impl DashboardStats {
    /// Aggregate stored records without re-running the estimator
    pub fn from_fleet(fleet: &Fleet) -> Self {
        let total_daily_energy_kwh = fleet.machines.iter().map(|m| m.daily_consumption).sum();
        let total_daily_co2_kg: f64 = fleet.emissions.iter().map(|e| e.daily_emission).sum();
        let maintenance_alerts = fleet
            .machines
            .iter()
            .filter(|m| m.needs_maintenance())
            .count();

        Self {
            total_machines: fleet.machines.len(),
            total_daily_energy_kwh,
            total_daily_co2_kg,
            monthly_estimate_kg: total_daily_co2_kg * DAYS_PER_MONTH,
            maintenance_alerts,
        }
    }
}
