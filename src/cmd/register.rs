//! Register command implementation
//!
//! Handles `carbontrack register`: validates a machine's readings, stores
//! the machine with its emission row, and shows the advisor's suggestions
//! once.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::Path;

use super::estimate::present_suggestions;
use super::Workspace;
use crate::error::CarbonTrackError;
use crate::fmt::{format_kg, CHECKMARK, CLOUD, ROCKET};
use crate::machine::{MachineForm, Registration};

/// Machine details given on the command line
#[derive(Args, Debug, Clone, PartialEq)]
pub struct RegisterArgs {
    /// Machine name
    #[arg(long)]
    pub name: String,

    /// Machine category, e.g. "Furnace"
    #[arg(long = "type", value_name = "TYPE")]
    pub machine_type: String,

    /// Energy source: Electricity, Coal, Natural Gas, Fuel or Other
    #[arg(long)]
    pub source: String,

    /// Daily consumption per unit in kWh
    #[arg(long, value_name = "KWH")]
    pub consumption: f64,

    /// Hours of operation per day
    #[arg(long, value_name = "HOURS")]
    pub runtime: f64,

    /// Identical units running in parallel
    #[arg(long)]
    pub units: Option<u32>,

    /// Operating temperature in °C
    #[arg(long, value_name = "CELSIUS")]
    pub temperature: Option<f64>,

    /// Sound level in dB
    #[arg(long, value_name = "DB")]
    pub sound: Option<f64>,

    /// Hours a maintenance stop takes
    #[arg(long, value_name = "HOURS")]
    pub maintenance_duration: Option<u32>,

    /// Monthly, Quarterly or Yearly
    #[arg(long, value_name = "FREQUENCY")]
    pub maintenance_frequency: Option<String>,
}

impl From<RegisterArgs> for MachineForm {
    fn from(args: RegisterArgs) -> Self {
        MachineForm {
            machine_name: args.name,
            machine_type: args.machine_type,
            energy_source: args.source,
            active_units: args.units,
            runtime_hours: Some(args.runtime),
            daily_consumption: Some(args.consumption),
            temperature: args.temperature,
            sound_level: args.sound,
            maintenance_duration: args.maintenance_duration,
            maintenance_frequency: args.maintenance_frequency,
        }
    }
}

/// Register a machine in the fleet document
pub fn cmd_register(form: &MachineForm, fleet: Option<&Path>, json_output: bool) -> Result<()> {
    let workspace = Workspace::current(fleet)?;
    let mut fleet = workspace.load_fleet()?;

    let registration = fleet.register(form).map_err(CarbonTrackError::from)?;
    workspace
        .save_fleet(&fleet)
        .context("Failed to save registered machine")?;
    log::info!(
        "Registered machine {} ({})",
        registration.machine.id,
        registration.machine.machine_name
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&registration)?);
    } else {
        present_registration(&registration);
    }
    Ok(())
}

fn present_registration(registration: &Registration) {
    let machine = &registration.machine;
    println!(
        "{} {} {}",
        ROCKET,
        style("carbontrack register").bold(),
        style(&machine.machine_name).cyan()
    );
    println!();
    println!("{} Machine registered successfully!", CHECKMARK);
    println!("   Id: {}", style(&machine.id).dim());
    println!(
        "   {} × {} kWh/day on {}",
        machine.active_units, machine.daily_consumption, machine.energy_source
    );
    println!();

    let e = &registration.emissions;
    println!("{} Emissions:", CLOUD);
    println!("   Daily:   {}", style(format_kg(e.daily_kg, 2)).green().bold());
    println!("   Monthly: {}", format_kg(e.monthly_kg, 2));
    println!("   Yearly:  {}", format_kg(e.yearly_kg, 2));
    println!();
    present_suggestions(&registration.suggestions);
}
