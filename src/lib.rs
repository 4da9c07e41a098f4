#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! carbontrack library
//!
//! Emission estimation, reduction advice and fleet reporting for industrial
//! machines. Everything the CLI does is available programmatically.
//!
//! # Basic Example
//!
//! Estimating a machine and asking for suggestions:
//!
//! ```
//! use carbontrack::advisor::SuggestionKind;
//! use carbontrack::machine::MachineSnapshot;
//!
//! let snapshot = MachineSnapshot {
//!     energy_source: "Electricity".to_string(),
//!     daily_consumption_kwh: 250.0,
//!     active_units: 2,
//!     runtime_hours_per_day: 20.0,
//!     temperature_c: None,
//!     sound_level_db: None,
//! };
//!
//! let assessment = snapshot.assess().unwrap();
//! assert_eq!(assessment.emissions.daily_kg, 425.0);
//! assert_eq!(assessment.emissions.monthly_kg, 12750.0);
//! assert_eq!(assessment.suggestions[0].kind, SuggestionKind::ReduceRuntime);
//! ```
//!
//! # Advanced Example: Fleet Report with a Budget
//!
//! ```
//! use carbontrack::budget::{BudgetChecker, BudgetStatus};
//! use carbontrack::config::EmissionBudget;
//! use carbontrack::machine::{CompanyProfile, Fleet, MachineForm};
//! use carbontrack::report::ReportBuilder;
//!
//! let mut fleet = Fleet::default();
//! fleet.set_company(
//!     CompanyProfile {
//!         company_name: "Acme Forging".to_string(),
//!         email: "ops@acme.test".to_string(),
//!         ..Default::default()
//!     },
//!     "user-1",
//! );
//! fleet
//!     .register(&MachineForm {
//!         machine_name: "Press".to_string(),
//!         machine_type: "Heavy".to_string(),
//!         energy_source: "Electricity".to_string(),
//!         runtime_hours: Some(8.0),
//!         daily_consumption: Some(300.0),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! let report = ReportBuilder::new(&fleet).build().unwrap();
//! assert_eq!(report.summary.machine_count, 1);
//!
//! let budget = EmissionBudget {
//!     target_yearly_kg: Some(50_000.0),
//!     warn_yearly_kg: Some(80_000.0),
//!     max_yearly_kg: Some(100_000.0),
//! };
//! let result = BudgetChecker::new(budget).check(report.summary.total_yearly_kg);
//! assert_eq!(result.status, BudgetStatus::Warning);
//! ```

/// Rule-based reduction suggestions
pub mod advisor;
/// Dashboard aggregates and chart series
pub mod analytics;
/// Emission budget enforcement and assessment history
pub mod budget;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Emission factors and estimation
pub mod emission;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Machine records, registration and the fleet document
pub mod machine;
/// Report assembly, rendering and CSV export
pub mod report;
