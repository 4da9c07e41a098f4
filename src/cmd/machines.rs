//! Machines command implementation
//!
//! Handles `carbontrack machines`: lists machines with their latest daily
//! emission, filters by name or type, and removes a machine by id.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::path::Path;

use super::Workspace;
use crate::error::CarbonTrackError;
use crate::fmt::{format_kg, CHECKMARK, FACTORY, WARNING};
use crate::machine::{Fleet, MachineRecord};

/// A machine with its latest stored emission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineListing<'a> {
    /// Stored machine row
    #[serde(flatten)]
    pub machine: &'a MachineRecord,
    /// Latest daily emission, if any
    pub daily_emission: Option<f64>,
    /// Sound level above the maintenance limit
    pub needs_maintenance: bool,
}

/// Machines matching `query`, newest first
pub fn listings<'a>(fleet: &'a Fleet, query: &str) -> Vec<MachineListing<'a>> {
    let mut machines = fleet.search(query);
    machines.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    machines
        .into_iter()
        .map(|machine| MachineListing {
            machine,
            daily_emission: fleet.emission_for(&machine.id).map(|e| e.daily_emission),
            needs_maintenance: machine.needs_maintenance(),
        })
        .collect()
}

/// List machines, or remove one when `remove` holds an id
pub fn cmd_machines(
    search: Option<&str>,
    remove: Option<&str>,
    fleet: Option<&Path>,
    json_output: bool,
) -> Result<()> {
    let workspace = Workspace::current(fleet)?;
    let mut fleet = workspace.load_fleet()?;

    if let Some(id) = remove {
        let removed = fleet
            .remove_machine(id)
            .ok_or_else(|| CarbonTrackError::MachineNotFound { id: id.to_string() })?;
        workspace
            .save_fleet(&fleet)
            .context("Failed to save fleet after removing machine")?;
        log::info!("Removed machine {}", removed.id);
        println!(
            "{} Removed {} and its emission records",
            CHECKMARK,
            style(&removed.machine_name).bold()
        );
        return Ok(());
    }

    let query = search.unwrap_or("");
    let rows = listings(&fleet, query);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} {} ({} of {})",
        FACTORY,
        style("Machines").bold(),
        rows.len(),
        fleet.machines.len()
    );
    if rows.is_empty() {
        if fleet.is_empty() {
            println!(
                "   No machines registered yet. Add one with {}",
                style("carbontrack register").cyan()
            );
        } else {
            println!("   No machines match '{}'", query);
        }
        return Ok(());
    }

    for row in &rows {
        let m = row.machine;
        let alert = if row.needs_maintenance {
            format!(" {}", style(format!("{} maintenance", WARNING)).yellow())
        } else {
            String::new()
        };
        println!();
        println!("   {}{}", style(&m.machine_name).bold(), alert);
        println!(
            "     {} · {} · {} unit(s) · {}h/day",
            m.machine_type, m.energy_source, m.active_units, m.runtime_hours
        );
        println!(
            "     {} kWh/day · {} CO₂/day",
            m.daily_consumption,
            row.daily_emission
                .map_or_else(|| "N/A".to_string(), |kg| format_kg(kg, 1))
        );
        println!("     {}", style(&m.id).dim());
    }
    Ok(())
}
