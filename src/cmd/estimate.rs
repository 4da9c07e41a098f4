//! Estimate command implementation
//!
//! Handles `carbontrack estimate`, a one-off calculation that stores nothing.

use anyhow::Result;
use clap::Args;
use console::style;

use crate::advisor::{Severity, Suggestion};
use crate::emission::{EnergySource, DEFAULT_EMISSION_FACTOR};
use crate::error::CarbonTrackError;
use crate::fmt::{format_kg, BULB, CLOUD, ROCKET};
use crate::machine::{Assessment, MachineSnapshot, RegistrationError};

/// Readings for a one-off estimate
#[derive(Args, Debug, Clone, PartialEq)]
pub struct EstimateArgs {
    /// Energy source: Electricity, Coal, Natural Gas, Fuel or Other
    #[arg(short, long)]
    pub source: String,

    /// Daily consumption per unit in kWh
    #[arg(short, long, value_name = "KWH")]
    pub consumption: f64,

    /// Identical units running in parallel
    #[arg(short, long, default_value_t = 1)]
    pub units: u32,

    /// Hours of operation per day
    #[arg(short, long, default_value_t = 0.0, value_name = "HOURS")]
    pub runtime: f64,

    /// Operating temperature in °C
    #[arg(long, value_name = "CELSIUS")]
    pub temperature: Option<f64>,

    /// Sound level in dB
    #[arg(long, value_name = "DB")]
    pub sound: Option<f64>,
}

impl EstimateArgs {
    /// Snapshot described by these readings
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            energy_source: self.source.clone(),
            daily_consumption_kwh: self.consumption,
            active_units: self.units,
            runtime_hours_per_day: self.runtime,
            temperature_c: self.temperature,
            sound_level_db: self.sound,
        }
    }
}

/// Estimate emissions and suggestions without touching the fleet
///
/// # Examples
///
/// ```no_run
/// use carbontrack::cmd::estimate::{cmd_estimate, EstimateArgs};
///
/// let args = EstimateArgs {
///     source: "Coal".to_string(),
///     consumption: 100.0,
///     units: 2,
///     runtime: 8.0,
///     temperature: None,
///     sound: None,
/// };
/// cmd_estimate(&args, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_estimate(args: &EstimateArgs, json_output: bool) -> Result<()> {
    if EnergySource::parse(&args.source).is_none() {
        log::warn!(
            "Unknown energy source '{}', using factor {}",
            args.source,
            DEFAULT_EMISSION_FACTOR
        );
    }

    let assessment = args
        .snapshot()
        .assess()
        .map_err(|e| CarbonTrackError::from(RegistrationError::from(e)))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        ROCKET,
        style("carbontrack estimate").bold(),
        style(&args.source).cyan()
    );
    println!();
    present_assessment(&assessment);
    Ok(())
}

/// Print emission figures followed by suggestions
pub(crate) fn present_assessment(assessment: &Assessment) {
    let e = &assessment.emissions;
    println!("{} Estimated emissions:", CLOUD);
    println!("   Daily:   {}", style(format_kg(e.daily_kg, 2)).green().bold());
    println!("   Monthly: {}", format_kg(e.monthly_kg, 2));
    println!("   Yearly:  {}", format_kg(e.yearly_kg, 2));
    println!(
        "   After maintenance: {}",
        style(format!(
            "{}/day",
            format_kg(e.predicted_daily_after_maintenance_kg, 2)
        ))
        .dim()
    );
    println!();
    present_suggestions(&assessment.suggestions);
}

/// Print suggestions colored by severity
pub(crate) fn present_suggestions(suggestions: &[Suggestion]) {
    println!("{} Recommendations:", BULB);
    for s in suggestions {
        let title = match s.severity {
            Severity::Warning => style(&s.title).yellow().bold(),
            Severity::Info => style(&s.title).cyan().bold(),
            Severity::Success => style(&s.title).green().bold(),
        };
        println!("   {} {}", style("•").dim(), title);
        println!("     {}", s.description);
        println!("     {}", style(s.impact.to_string()).dim());
    }
}
