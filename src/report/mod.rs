//! Fleet reports
//!
//! A [`Report`] is a set of plain sections built by [`ReportBuilder`] and
//! rendered as text or JSON. The machine table is also exported as CSV by
//! [`csv_export`].

pub mod builder;
pub mod csv_export;
pub mod render;

pub use builder::ReportBuilder;
pub use render::default_file_name;

use crate::advisor::Suggestion;
use crate::analytics::NamedValue;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Report failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// No company, or a company without machines
    #[error("No data: add machines first to generate a report")]
    NoData,
}

/// One labelled company detail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyField {
    /// Field label
    pub label: &'static str,
    /// Value, `N/A` when not recorded
    pub value: String,
}

impl CompanyField {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// A row of the machine table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineRow {
    /// Machine name
    pub machine_name: String,
    /// Category
    pub machine_type: String,
    /// Source name
    pub energy_source: String,
    /// Parallel units
    pub active_units: u32,
    /// Hours per day
    pub runtime_hours: f64,
    /// kWh per unit per day
    pub daily_consumption_kwh: f64,
    /// Stored daily emission, if any
    pub daily_kg: Option<f64>,
    /// Stored monthly emission, if any
    pub monthly_kg: Option<f64>,
}

/// Fleet totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Σ stored daily emissions
    pub total_daily_kg: f64,
    /// Daily total × 30
    pub total_monthly_kg: f64,
    /// Daily total × 365
    pub total_yearly_kg: f64,
    /// Machines in the fleet
    pub machine_count: usize,
}

/// Advisor output for one machine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineRecommendations {
    /// Machine name
    pub machine_name: String,
    /// Suggestions in rule order
    pub suggestions: Vec<Suggestion>,
}

/// Current against post-maintenance daily emission for one machine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeforeAfterRow {
    /// Machine name
    pub machine_name: String,
    /// Stored daily emission, 0 when none
    pub current_daily_kg: f64,
    /// Projection after maintenance
    pub predicted_daily_kg: f64,
    /// current - predicted
    pub reduction_kg: f64,
    /// Reduction as a share of current, 0 when current is 0
    pub reduction_percent: f64,
}

/// Series behind the report charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Daily consumption per machine
    pub energy_by_machine: Vec<NamedValue>,
    /// Machine count per energy source
    pub machines_by_source: Vec<NamedValue>,
}

/// An assembled fleet report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Heading
    pub title: String,
    /// Assembly time
    pub generated_at: DateTime<Utc>,
    /// Company details
    pub company: Vec<CompanyField>,
    /// Machine table
    pub machines: Vec<MachineRow>,
    /// Totals
    pub summary: Summary,
    /// Advisor output per machine, in machine order
    pub recommendations: Vec<MachineRecommendations>,
    /// Maintenance projection per machine
    pub before_after: Vec<BeforeAfterRow>,
    /// Chart series
    pub charts: ChartData,
}
