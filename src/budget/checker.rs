//! Yearly emission budget enforcement
//!
//! Implements three-tier budget system:
//! - Target: Reduction goal (informational)
//! - Warning: Threshold for warnings (exit 0 with warning)
//! - Max: Hard limit (exit 1 if exceeded)

use crate::config::EmissionBudget;
use crate::fmt::to_fixed;
use serde::Serialize;

/// Status of emission budget check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// At or under target (green)
    UnderTarget,
    /// Between target and warning threshold (green)
    AboveTarget,
    /// Between warning and max (yellow)
    Warning,
    /// Over max (red)
    OverBudget,
}

impl BudgetStatus {
    /// snake_case name used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::UnderTarget => "under_target",
            BudgetStatus::AboveTarget => "above_target",
            BudgetStatus::Warning => "warning",
            BudgetStatus::OverBudget => "over_budget",
        }
    }
}

/// Result of budget check with detailed information
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetResult {
    /// Budget status
    pub status: BudgetStatus,
    /// Fleet's yearly emission in kg CO₂
    pub yearly_kg: f64,
    /// Thresholds the check ran against
    pub budget: EmissionBudget,
    /// Human-readable message
    pub message: String,
}

impl BudgetResult {
    /// Get exit code for automation (0 = pass, 1 = fail)
    pub fn exit_code(&self) -> i32 {
        match self.status {
            BudgetStatus::UnderTarget | BudgetStatus::AboveTarget => 0,
            BudgetStatus::Warning => 0,
            BudgetStatus::OverBudget => 1,
        }
    }

    /// Whether the check passed (anything but over budget)
    pub fn passed(&self) -> bool {
        self.status != BudgetStatus::OverBudget
    }

    /// Print colored status message
    ///
    /// Delegates to display module for console formatting.
    pub fn print(&self) {
        super::display::print_budget(self);
    }
}

/// Emission budget checker
#[derive(Debug, Clone, Copy)]
pub struct BudgetChecker {
    budget: EmissionBudget,
}

impl BudgetChecker {
    /// Create a new budget checker
    pub fn new(budget: EmissionBudget) -> Self {
        Self { budget }
    }

    /// Determine budget status based on yearly emission and thresholds
    ///
    /// Priority order: max > warn > target
    fn determine_status(&self, yearly_kg: f64) -> BudgetStatus {
        if let Some(max) = self.budget.max_yearly_kg {
            if yearly_kg > max {
                return BudgetStatus::OverBudget;
            }
        }

        if let Some(warn) = self.budget.warn_yearly_kg {
            if yearly_kg > warn {
                return BudgetStatus::Warning;
            }
        }

        if let Some(target) = self.budget.target_yearly_kg {
            if yearly_kg <= target {
                return BudgetStatus::UnderTarget;
            } else {
                return BudgetStatus::AboveTarget;
            }
        }

        // Only upper limits configured: within them counts as above target
        if self.budget.max_yearly_kg.is_some() || self.budget.warn_yearly_kg.is_some() {
            BudgetStatus::AboveTarget
        } else {
            BudgetStatus::UnderTarget
        }
    }

    /// Check a fleet's yearly emission against the budget
    ///
    /// # Examples
    ///
    /// ```
    /// use carbontrack::budget::{BudgetChecker, BudgetStatus};
    /// use carbontrack::config::EmissionBudget;
    ///
    /// let budget = EmissionBudget {
    ///     target_yearly_kg: Some(50_000.0),
    ///     warn_yearly_kg: Some(75_000.0),
    ///     max_yearly_kg: Some(100_000.0),
    /// };
    /// let result = BudgetChecker::new(budget).check(60_000.0);
    /// assert_eq!(result.status, BudgetStatus::AboveTarget);
    /// ```
    pub fn check(&self, yearly_kg: f64) -> BudgetResult {
        let status = self.determine_status(yearly_kg);

        let message = match status {
            BudgetStatus::UnderTarget => match self.budget.target_yearly_kg {
                Some(target) => format!("Under target by {} kg", to_fixed(target - yearly_kg, 0)),
                None => "Emissions OK".to_string(),
            },
            BudgetStatus::AboveTarget => match self.budget.target_yearly_kg {
                Some(target) => format!(
                    "Above target by {} kg (still within limits)",
                    to_fixed(yearly_kg - target, 0)
                ),
                None => "Emissions OK".to_string(),
            },
            BudgetStatus::Warning => match self.budget.warn_yearly_kg {
                Some(warn) => format!(
                    "Warning: {} kg over threshold (consider reduction measures)",
                    to_fixed(yearly_kg - warn, 0)
                ),
                None => "Warning threshold exceeded".to_string(),
            },
            BudgetStatus::OverBudget => match self.budget.max_yearly_kg {
                Some(max) => format!(
                    "FAILED: {} kg over budget (reduction required)",
                    to_fixed(yearly_kg - max, 0)
                ),
                None => "Budget exceeded".to_string(),
            },
        };

        log::info!("Emission budget check: {} ({} kg/year)", status.as_str(), yearly_kg);

        BudgetResult {
            status,
            yearly_kg,
            budget: self.budget,
            message,
        }
    }
}
