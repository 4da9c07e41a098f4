//! Test fixture helpers for creating workspaces and fleets
//!
//! Fleets are built through the library's own registration flow so stored
//! emission rows match what the CLI would write.

#![allow(dead_code)]

use carbontrack::config::{ConfigFile, ConfigLoader, EmissionBudget, DEFAULT_FLEET_FILE};
use carbontrack::machine::{CompanyProfile, Fleet, MachineForm};
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Company used by every fixture fleet
pub fn acme_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Acme Forging".to_string(),
        email: "ops@acme.test".to_string(),
        industry_type: Some("Metalworking".to_string()),
        employees: Some(120),
        ..Default::default()
    }
}

/// Coal press running long shifts and loud enough to need maintenance
pub fn press_form() -> MachineForm {
    MachineForm {
        machine_name: "Hydraulic Press".to_string(),
        machine_type: "Heavy".to_string(),
        energy_source: "Coal".to_string(),
        runtime_hours: Some(18.0),
        daily_consumption: Some(100.0),
        sound_level: Some(90.0),
        maintenance_frequency: Some("Monthly".to_string()),
        ..Default::default()
    }
}

/// Two electric ovens with nothing to flag
pub fn oven_form() -> MachineForm {
    MachineForm {
        machine_name: "Oven".to_string(),
        machine_type: "Heating".to_string(),
        energy_source: "Electricity".to_string(),
        active_units: Some(2),
        runtime_hours: Some(8.0),
        daily_consumption: Some(40.0),
        temperature: Some(60.0),
        ..Default::default()
    }
}

/// Hot fuel generator with heavy consumption
pub fn generator_form() -> MachineForm {
    MachineForm {
        machine_name: "Generator".to_string(),
        machine_type: "Motors".to_string(),
        energy_source: "Fuel".to_string(),
        runtime_hours: Some(10.0),
        daily_consumption: Some(600.0),
        temperature: Some(95.0),
        ..Default::default()
    }
}

/// Fleet with the Acme company and the press, oven and generator
pub fn sample_fleet() -> anyhow::Result<Fleet> {
    let mut fleet = Fleet::default();
    fleet.set_company(acme_profile(), "user-1");
    for form in [press_form(), oven_form(), generator_form()] {
        fleet.register(&form)?;
    }
    Ok(fleet)
}

/// Σ daily kg of [`sample_fleet`]: 100 × 2.2 + 80 × 0.85 + 600 × 2.31
pub const SAMPLE_DAILY_KG: f64 = 220.0 + 68.0 + 1386.0;

/// Empty working directory with no configuration
pub fn empty_workspace() -> anyhow::Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Working directory with a config file and the sample fleet saved
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the fleet document); the TempDir must be kept alive
pub fn sample_workspace(config: &ConfigFile) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    ConfigLoader::save(config, temp_dir.path())?;

    let fleet_path = temp_dir.path().join(&config.fleet_file);
    sample_fleet()?.save(&fleet_path)?;
    Ok((temp_dir, fleet_path))
}

/// Default configuration with only a hard yearly maximum
pub fn config_with_max(max_yearly_kg: f64) -> ConfigFile {
    ConfigFile {
        emission_budget: Some(EmissionBudget {
            target_yearly_kg: None,
            warn_yearly_kg: None,
            max_yearly_kg: Some(max_yearly_kg),
        }),
        ..ConfigFile::default()
    }
}

/// Fleet document path used when no config file exists
pub fn default_fleet_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join(DEFAULT_FLEET_FILE)
}
