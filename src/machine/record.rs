//! Row shapes shared with the hosted data store
//!
//! Field names follow the store's column names so fleet documents can be
//! exported from it and imported back without a mapping layer.

use super::snapshot::MachineSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owning company of a fleet (one per tenant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Row id
    pub id: String,
    /// Owning tenant
    pub user_id: String,
    /// Display name
    pub company_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Industry classification
    #[serde(default)]
    pub industry_type: Option<String>,
    /// Head count
    #[serde(default)]
    pub employees: Option<u32>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Yearly energy budget in the company's currency
    #[serde(default)]
    pub annual_energy_budget: Option<f64>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
}

/// A registered machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRecord {
    /// Row id
    pub id: String,
    /// Owning company row
    pub company_id: String,
    /// Owning tenant
    pub user_id: String,
    /// Display name
    pub machine_name: String,
    /// Category ("Heavy", "Light", "Motors", "Heating" or free text)
    pub machine_type: String,
    /// Source name
    pub energy_source: String,
    /// Identical parallel units
    #[serde(default = "default_active_units")]
    pub active_units: u32,
    /// Hours of operation per day
    pub runtime_hours: f64,
    /// kWh per unit per day
    pub daily_consumption: f64,
    /// Operating temperature in °C
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Sound level in dB
    #[serde(default)]
    pub sound_level: Option<f64>,
    /// Hours a maintenance stop takes
    #[serde(default)]
    pub maintenance_duration: Option<u32>,
    /// "Monthly", "Quarterly" or "Yearly"
    #[serde(default)]
    pub maintenance_frequency: Option<String>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
}

fn default_active_units() -> u32 {
    1
}

impl MachineRecord {
    /// Rebuild the operating snapshot stored in this row
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            energy_source: self.energy_source.clone(),
            daily_consumption_kwh: self.daily_consumption,
            active_units: self.active_units,
            runtime_hours_per_day: self.runtime_hours,
            temperature_c: self.temperature,
            sound_level_db: self.sound_level,
        }
    }

    /// Whether the machine's sound level calls for maintenance
    pub fn needs_maintenance(&self) -> bool {
        self.sound_level
            .is_some_and(|db| db > crate::advisor::rules::SOUND_LIMIT_DB)
    }
}

/// Emission figures stored for one machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    /// Row id
    pub id: String,
    /// Machine the figures belong to
    pub machine_id: String,
    /// Owning tenant
    pub user_id: String,
    /// kg CO₂ per day
    pub daily_emission: f64,
    /// kg CO₂ per month
    pub monthly_emission: f64,
    /// kg CO₂ per year
    pub yearly_emission: f64,
    /// Projected kg CO₂ per day after maintenance
    #[serde(default)]
    pub predicted_emission_after_maintenance: Option<f64>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
}

/// A generated report file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Row id
    pub id: String,
    /// Company the report covers
    pub company_id: String,
    /// Owning tenant
    pub user_id: String,
    /// File name shown in the report list
    pub report_name: String,
    /// Where the file was written
    pub report_file_url: String,
    /// Row creation time
    pub created_at: DateTime<Utc>,
}

/// Company details entered at sign-up or edited later
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Display name
    pub company_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: Option<String>,
    /// Industry classification
    pub industry_type: Option<String>,
    /// Head count
    pub employees: Option<u32>,
    /// Postal address
    pub address: Option<String>,
    /// Yearly energy budget in the company's currency
    pub annual_energy_budget: Option<f64>,
}

impl CompanyProfile {
    /// Overwrite the editable fields of an existing company row
    pub fn apply_to(self, company: &mut CompanyRecord) {
        company.company_name = self.company_name;
        company.email = self.email;
        company.phone = self.phone;
        company.industry_type = self.industry_type;
        company.employees = self.employees;
        company.address = self.address;
        company.annual_energy_budget = self.annual_energy_budget;
    }

    /// Build a new company row for `user_id`
    pub fn into_record(self, user_id: &str) -> CompanyRecord {
        CompanyRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            company_name: self.company_name,
            email: self.email,
            phone: self.phone,
            industry_type: self.industry_type,
            employees: self.employees,
            address: self.address,
            annual_energy_budget: self.annual_energy_budget,
            created_at: Utc::now(),
        }
    }
}
