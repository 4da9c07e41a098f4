//! Machine registration flow
//!
//! A [`MachineForm`] carries what an operator typed in. Registering it
//! validates the readings, estimates emissions once, and produces the two
//! rows the store keeps plus the advisor's suggestions for immediate display.

use super::record::{EmissionRecord, MachineRecord};
use super::snapshot::{MachineSnapshot, ValidationError};
use crate::advisor::Suggestion;
use crate::emission::EmissionResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Registration failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    /// A required form field was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric reading was rejected
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The fleet has no company to attach the machine to
    #[error("Company not found. Please complete registration.")]
    NoCompany,
}

/// Operator input for a new machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineForm {
    /// Display name (required)
    pub machine_name: String,
    /// Category (required)
    pub machine_type: String,
    /// Source name (required)
    pub energy_source: String,
    /// Parallel units, 1 when not given
    pub active_units: Option<u32>,
    /// Hours per day (required)
    pub runtime_hours: Option<f64>,
    /// kWh per unit per day (required)
    pub daily_consumption: Option<f64>,
    /// Operating temperature in °C
    pub temperature: Option<f64>,
    /// Sound level in dB
    pub sound_level: Option<f64>,
    /// Hours a maintenance stop takes
    pub maintenance_duration: Option<u32>,
    /// "Monthly", "Quarterly" or "Yearly"
    pub maintenance_frequency: Option<String>,
}

/// Rows and display data produced by a successful registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    /// New machine row
    pub machine: MachineRecord,
    /// Emission row derived from the machine's readings
    pub emission: EmissionRecord,
    /// Full estimate, including the maintenance projection
    pub emissions: EmissionResult,
    /// Advisor output; shown once and not stored
    pub suggestions: Vec<Suggestion>,
}

impl MachineForm {
    /// Operating snapshot described by this form
    pub fn snapshot(&self) -> Result<MachineSnapshot, RegistrationError> {
        let runtime = self
            .runtime_hours
            .ok_or(RegistrationError::MissingField("runtime_hours"))?;
        let consumption = self
            .daily_consumption
            .ok_or(RegistrationError::MissingField("daily_consumption"))?;

        Ok(MachineSnapshot {
            energy_source: self.energy_source.trim().to_string(),
            daily_consumption_kwh: consumption,
            active_units: self.active_units.unwrap_or(1),
            runtime_hours_per_day: runtime,
            temperature_c: self.temperature,
            sound_level_db: self.sound_level,
        })
    }

    /// Validate the form and build the machine and emission rows
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::MissingField`] for the first empty
    /// required field and [`RegistrationError::Invalid`] when a reading is
    /// negative, non-finite, or the unit count is zero.
    pub fn register(
        &self,
        company_id: &str,
        user_id: &str,
    ) -> Result<Registration, RegistrationError> {
        for (field, value) in [
            ("machine_name", &self.machine_name),
            ("machine_type", &self.machine_type),
            ("energy_source", &self.energy_source),
        ] {
            if value.trim().is_empty() {
                return Err(RegistrationError::MissingField(field));
            }
        }

        let snapshot = self.snapshot()?;
        let assessment = snapshot.assess()?;
        let emissions = assessment.emissions;
        let created_at = Utc::now();

        let machine = MachineRecord {
            id: Uuid::new_v4().to_string(),
            company_id: company_id.to_string(),
            user_id: user_id.to_string(),
            machine_name: self.machine_name.trim().to_string(),
            machine_type: self.machine_type.trim().to_string(),
            energy_source: snapshot.energy_source.clone(),
            active_units: snapshot.active_units,
            runtime_hours: snapshot.runtime_hours_per_day,
            daily_consumption: snapshot.daily_consumption_kwh,
            temperature: snapshot.temperature_c,
            sound_level: snapshot.sound_level_db,
            maintenance_duration: self.maintenance_duration,
            maintenance_frequency: self
                .maintenance_frequency
                .as_ref()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
            created_at,
        };

        let emission = EmissionRecord {
            id: Uuid::new_v4().to_string(),
            machine_id: machine.id.clone(),
            user_id: user_id.to_string(),
            daily_emission: emissions.daily_kg,
            monthly_emission: emissions.monthly_kg,
            yearly_emission: emissions.yearly_kg,
            predicted_emission_after_maintenance: Some(
                emissions.predicted_daily_after_maintenance_kg,
            ),
            created_at,
        };

        log::debug!(
            "Registered machine '{}' ({} kg CO2/day)",
            machine.machine_name,
            emissions.daily_kg
        );

        Ok(Registration {
            machine,
            emission,
            emissions,
            suggestions: assessment.suggestions,
        })
    }
}
