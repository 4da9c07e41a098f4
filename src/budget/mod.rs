//! Emission budget and assessment history
//!
//! Provides:
//! - Yearly CO₂ budget enforcement with configurable thresholds
//! - Assessment history tracking for regression detection
//! - JSON output and exit codes for automated checks

pub mod checker;
pub mod display;
pub mod history;
pub mod output;

pub use checker::{BudgetChecker, BudgetResult, BudgetStatus};
pub use history::{AssessmentHistory, AssessmentRecord, RegressionResult};
pub use output::{EmissionTotals, JsonOutput};
