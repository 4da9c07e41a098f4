//! Console formatting for budget and regression results

use super::checker::{BudgetResult, BudgetStatus};
use super::history::RegressionResult;
use crate::fmt::to_fixed;
use console::style;

/// Print budget check result with thresholds
pub fn print_budget(result: &BudgetResult) {
    let status_icon = match result.status {
        BudgetStatus::UnderTarget => style("✅").green(),
        BudgetStatus::AboveTarget => style("✓").green(),
        BudgetStatus::Warning => style("⚠️").yellow(),
        BudgetStatus::OverBudget => style("❌").red(),
    };

    let yearly = format!("{} kg CO₂/year", to_fixed(result.yearly_kg, 0));
    let yearly_str = match result.status {
        BudgetStatus::UnderTarget | BudgetStatus::AboveTarget => style(yearly).green(),
        BudgetStatus::Warning => style(yearly).yellow(),
        BudgetStatus::OverBudget => style(yearly).red(),
    };

    println!("\n{} Emission Budget Check: {}", status_icon, yearly_str);
    println!("   {}", result.message);

    if let Some(target) = result.budget.target_yearly_kg {
        let line = format!("Target: {} kg", to_fixed(target, 0));
        if result.yearly_kg <= target {
            println!("   {}", style(line).green());
        } else {
            println!("   {}", style(line).dim());
        }
    }

    if let Some(warn) = result.budget.warn_yearly_kg {
        let line = format!("Warning: {} kg", to_fixed(warn, 0));
        if result.status == BudgetStatus::Warning {
            println!("   {}", style(line).yellow());
        } else {
            println!("   {}", style(line).dim());
        }
    }

    if let Some(max) = result.budget.max_yearly_kg {
        if result.status == BudgetStatus::OverBudget {
            println!(
                "   {}",
                style(format!("Max: {} kg (EXCEEDED)", to_fixed(max, 0))).red()
            );
        } else {
            println!("   {}", style(format!("Max: {} kg", to_fixed(max, 0))).dim());
        }
    }
}

/// Print regression result to console with formatted output
pub fn print_regression(result: &RegressionResult) {
    if result.is_regression {
        println!("\n{} Emission Regression Detected!", style("⚠️").red());
        println!(
            "   Previous: {} kg CO₂/day",
            to_fixed(result.previous_daily_kg, 1)
        );
        println!(
            "   Current:  {} kg CO₂/day ({})",
            to_fixed(result.current_daily_kg, 1),
            style(format!("+{}%", to_fixed(result.percent_change, 1))).red()
        );
    } else if result.percent_change < -1.0 {
        println!("\n{} Emissions Reduced!", style("✨").green());
        println!(
            "   Previous: {} kg CO₂/day",
            to_fixed(result.previous_daily_kg, 1)
        );
        println!(
            "   Current:  {} kg CO₂/day ({})",
            to_fixed(result.current_daily_kg, 1),
            style(format!("{}%", to_fixed(result.percent_change, 1))).green()
        );
        println!("   Reduction: {} kg CO₂/day", to_fixed(-result.diff_kg, 1));
    } else {
        println!(
            "\n{} Emissions stable ({})",
            style("✓").dim(),
            style(format!("{:+.1}%", result.percent_change)).dim()
        );
    }
}
