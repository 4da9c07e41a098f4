//! Machine operating snapshot and boundary validation

use crate::advisor::{generate_suggestions, OperatingSnapshot, Suggestion};
use crate::emission::{estimate, EmissionResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A numeric field rejected at the boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Field is below zero
    #[error("{field} cannot be negative, got {value}")]
    Negative {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Unit count is zero
    #[error("active_units must be at least 1")]
    NoActiveUnits,
}

/// Operating parameters for one machine at one point of evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// Source name ("Electricity", "Coal", "Natural Gas", "Fuel", "Other")
    pub energy_source: String,
    /// Energy consumed per unit per day
    pub daily_consumption_kwh: f64,
    /// Identical parallel units
    pub active_units: u32,
    /// Hours of operation per day
    pub runtime_hours_per_day: f64,
    /// Operating temperature, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    /// Sound level, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_level_db: Option<f64>,
}

/// Emission figures and suggestions for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Estimated emissions
    pub emissions: EmissionResult,
    /// Ordered advisory findings
    pub suggestions: Vec<Suggestion>,
}

impl MachineSnapshot {
    /// Reject negative or non-finite readings and a zero unit count
    ///
    /// Optional readings are only checked for finiteness: sub-zero
    /// temperatures are legitimate.
    ///
    /// # Examples
    ///
    /// ```
    /// use carbontrack::machine::{MachineSnapshot, ValidationError};
    ///
    /// let mut snapshot = MachineSnapshot {
    ///     energy_source: "Coal".to_string(),
    ///     daily_consumption_kwh: 100.0,
    ///     active_units: 1,
    ///     runtime_hours_per_day: 8.0,
    ///     temperature_c: None,
    ///     sound_level_db: None,
    /// };
    /// assert!(snapshot.validate().is_ok());
    ///
    /// snapshot.active_units = 0;
    /// assert_eq!(snapshot.validate(), Err(ValidationError::NoActiveUnits));
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_non_negative("daily_consumption_kwh", self.daily_consumption_kwh)?;
        check_non_negative("runtime_hours_per_day", self.runtime_hours_per_day)?;

        if let Some(t) = self.temperature_c {
            check_finite("temperature_c", t)?;
        }
        if let Some(db) = self.sound_level_db {
            check_non_negative("sound_level_db", db)?;
        }

        if self.active_units == 0 {
            return Err(ValidationError::NoActiveUnits);
        }

        Ok(())
    }

    /// Estimate emissions for this snapshot
    pub fn estimate(&self) -> EmissionResult {
        estimate(
            &self.energy_source,
            self.daily_consumption_kwh,
            self.active_units,
        )
    }

    /// Combine this snapshot with a known daily emission for the advisor
    pub fn with_emission(&self, daily_emission_kg: f64) -> OperatingSnapshot {
        OperatingSnapshot {
            temperature_c: self.temperature_c,
            sound_level_db: self.sound_level_db,
            runtime_hours_per_day: self.runtime_hours_per_day,
            daily_consumption_kwh: self.daily_consumption_kwh,
            energy_source: self.energy_source.clone(),
            daily_emission_kg,
        }
    }

    /// Validate, estimate, then generate suggestions from the fresh estimate
    pub fn assess(&self) -> Result<Assessment, ValidationError> {
        self.validate()?;
        let emissions = self.estimate();
        let suggestions = generate_suggestions(&self.with_emission(emissions.daily_kg));
        Ok(Assessment {
            emissions,
            suggestions,
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}
