//! Dashboard command implementation
//!
//! Handles `carbontrack dashboard`, a read-only summary of stored records.

use anyhow::Result;
use console::style;
use serde::Serialize;
use std::path::Path;

use super::Workspace;
use crate::analytics::{
    before_after, consumption_by_source, emission_trend, energy_by_machine, machines_by_source,
    BeforeAfter, DashboardStats, NamedValue, TrendPoint,
};
use crate::fmt::{format_kg, to_fixed, CHART, CLOUD, FACTORY, WARNING};
use crate::machine::Fleet;

/// Everything the dashboard shows, in one serializable value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Headline figures
    pub stats: DashboardStats,
    /// kWh per energy source
    pub consumption_by_source: Vec<NamedValue>,
    /// Machine count per energy source
    pub machines_by_source: Vec<NamedValue>,
    /// Daily CO₂ per calendar day
    pub emission_trend: Vec<TrendPoint>,
    /// kWh per machine
    pub energy_by_machine: Vec<NamedValue>,
    /// Current against post-maintenance emission
    pub before_after: Vec<BeforeAfter>,
}

impl DashboardView {
    /// Aggregate a fleet
    pub fn from_fleet(fleet: &Fleet) -> Self {
        Self {
            stats: DashboardStats::from_fleet(fleet),
            consumption_by_source: consumption_by_source(fleet),
            machines_by_source: machines_by_source(fleet),
            emission_trend: emission_trend(fleet),
            energy_by_machine: energy_by_machine(fleet),
            before_after: before_after(fleet),
        }
    }
}

/// Print the fleet dashboard
pub fn cmd_dashboard(fleet: Option<&Path>, json_output: bool) -> Result<()> {
    let workspace = Workspace::current(fleet)?;
    let fleet = workspace.load_fleet()?;
    let view = DashboardView::from_fleet(&fleet);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let title = fleet
        .company
        .as_ref()
        .map_or("Dashboard", |c| c.company_name.as_str());
    println!("{} {}", CHART, style(title).bold());
    println!();
    present_stats(&view.stats);

    if fleet.is_empty() {
        println!(
            "   Add machines with {} to see charts.",
            style("carbontrack register").cyan()
        );
        return Ok(());
    }

    present_series("Energy Consumption by Source (kWh)", &view.consumption_by_source, 1);
    present_series("Machines by Energy Source", &view.machines_by_source, 0);
    present_series("Energy Use by Machine (kWh)", &view.energy_by_machine, 1);

    println!("{} Emission Trend", CLOUD);
    for point in &view.emission_trend {
        println!("   {:<8} {}", point.label, format_kg(point.co2_kg, 1));
    }
    println!();

    println!("{} Before vs After Maintenance", CLOUD);
    for row in &view.before_after {
        println!(
            "   {:<10} {} → {}",
            row.name,
            format_kg(row.before_kg, 1),
            style(format_kg(row.after_kg, 1)).green()
        );
    }
    Ok(())
}

fn present_stats(stats: &DashboardStats) {
    println!("   Total Machines:     {}", style(stats.total_machines).bold());
    println!(
        "   Daily Energy:       {} kWh",
        to_fixed(stats.total_daily_energy_kwh, 1)
    );
    println!(
        "   Daily CO₂:          {}",
        style(format_kg(stats.total_daily_co2_kg, 1)).green().bold()
    );
    println!(
        "   Monthly Estimate:   {}",
        format_kg(stats.monthly_estimate_kg, 0)
    );
    let alerts = if stats.maintenance_alerts > 0 {
        style(format!("{} {}", WARNING, stats.maintenance_alerts)).yellow()
    } else {
        style(stats.maintenance_alerts.to_string()).dim()
    };
    println!("   Maintenance Alerts: {}", alerts);
    println!();
}

fn present_series(title: &str, values: &[NamedValue], digits: usize) {
    println!("{} {}", FACTORY, title);
    for v in values {
        println!("   {:<14} {}", v.name, to_fixed(v.value, digits));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{emission, machine};

    #[test]
    fn test_view_of_empty_fleet_is_empty() {
        let view = DashboardView::from_fleet(&Fleet::default());

        assert_eq!(view.stats.total_machines, 0);
        assert!(view.consumption_by_source.is_empty());
        assert!(view.emission_trend.is_empty());
        assert!(view.before_after.is_empty());
    }

    #[test]
    fn test_view_collects_every_series() {
        let fleet = Fleet {
            machines: vec![
                machine("m1", "Press", "Coal", 100.0),
                machine("m2", "Oven", "Electricity", 40.0),
            ],
            emissions: vec![emission("m1", 220.0, 1), emission("m2", 34.0, 2)],
            ..Default::default()
        };

        let view = DashboardView::from_fleet(&fleet);
        assert_eq!(view.stats.total_daily_co2_kg, 254.0);
        assert_eq!(view.machines_by_source.len(), 2);
        assert_eq!(view.emission_trend.len(), 2);
        assert_eq!(view.energy_by_machine.len(), 2);
        assert_eq!(view.before_after.len(), 2);
    }
}
