//! JSON output for automated budget checks

use super::checker::{BudgetResult, BudgetStatus};
use super::history::RegressionResult;
use serde::Serialize;

/// JSON output structure for `report --check --json`
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// False only when the budget was exceeded
    pub success: bool,
    /// Fleet totals
    pub emissions: EmissionTotals,
    /// Budget check result (if a budget is configured)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetInfo>,
    /// Regression check result (if history has an earlier assessment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regression: Option<RegressionInfo>,
}

/// Fleet totals in kg CO₂
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionTotals {
    /// Σ daily emission
    pub daily_kg: f64,
    /// Daily × 30
    pub monthly_kg: f64,
    /// Daily × 365
    pub yearly_kg: f64,
    /// Machines counted
    pub machine_count: usize,
}

/// Budget check results for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct BudgetInfo {
    /// "under_target", "above_target", "warning" or "over_budget"
    pub status: &'static str,
    /// Whether budget check passed (true if not over_budget)
    pub passed: bool,
    /// Target in kg/year (if set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_yearly_kg: Option<f64>,
    /// Warning threshold in kg/year (if set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_yearly_kg: Option<f64>,
    /// Max in kg/year (if set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_yearly_kg: Option<f64>,
    /// Distance to the tightest configured limit, positive when over
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_kg: Option<f64>,
    /// Human-readable message
    pub message: String,
}

impl BudgetInfo {
    /// Convert from BudgetResult
    pub fn from_result(result: &BudgetResult) -> Self {
        let budget = result.budget;
        let delta_kg = budget
            .max_yearly_kg
            .or(budget.warn_yearly_kg)
            .or(budget.target_yearly_kg)
            .map(|limit| result.yearly_kg - limit);

        Self {
            status: result.status.as_str(),
            passed: result.status != BudgetStatus::OverBudget,
            target_yearly_kg: budget.target_yearly_kg,
            warn_yearly_kg: budget.warn_yearly_kg,
            max_yearly_kg: budget.max_yearly_kg,
            delta_kg,
            message: result.message.clone(),
        }
    }
}

/// Regression detection results for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct RegressionInfo {
    /// Whether a regression was detected
    pub is_regression: bool,
    /// Previous daily total in kg
    pub previous_daily_kg: f64,
    /// Difference in kg (negative = reduction)
    pub diff_kg: f64,
    /// Percent change (negative = reduction)
    pub percent_change: f64,
}

impl RegressionInfo {
    /// Convert from RegressionResult
    pub fn from_result(result: &RegressionResult) -> Self {
        Self {
            is_regression: result.is_regression,
            previous_daily_kg: result.previous_daily_kg,
            diff_kg: result.diff_kg,
            percent_change: result.percent_change,
        }
    }
}

impl JsonOutput {
    /// Create a new JSON output
    pub fn new(emissions: EmissionTotals) -> Self {
        Self {
            success: true,
            emissions,
            budget: None,
            regression: None,
        }
    }

    /// Add budget check result
    pub fn with_budget(mut self, result: &BudgetResult) -> Self {
        self.success = result.passed();
        self.budget = Some(BudgetInfo::from_result(result));
        self
    }

    /// Add regression check result
    pub fn with_regression(mut self, result: &RegressionResult) -> Self {
        self.regression = Some(RegressionInfo::from_result(result));
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))
    }

    /// Print JSON to stdout
    pub fn print(&self) {
        match self.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error formatting JSON: {}", e),
        }
    }
}
