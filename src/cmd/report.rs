//! Report command implementation
//!
//! Handles `carbontrack report`. [`ReportWorkflow`] runs the phases (build,
//! write, record, history, budget) and returns a [`ReportOutcome`];
//! [`cmd_report`] only presents it.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use super::Workspace;
use crate::budget::{
    AssessmentHistory, AssessmentRecord, BudgetChecker, BudgetResult, BudgetStatus,
    EmissionTotals, JsonOutput, RegressionResult,
};
use crate::error::CarbonTrackError;
use crate::fmt::{format_kg, CHECKMARK, CLOUD, ROCKET, WARNING};
use crate::report::{default_file_name, Report, ReportBuilder};

/// Fleets at least this large get a progress bar while recommendations run
pub const PROGRESS_MIN_MACHINES: usize = 25;

/// Flags for one report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Where to write the report, default name in the working directory otherwise
    pub output: Option<PathBuf>,
    /// Write the report as JSON and print machine-readable check output
    pub json: bool,
    /// Enforce the configured emission budget
    pub check: bool,
}

/// Everything a report run produced
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// The assembled report
    pub report: Report,
    /// File the report was written to
    pub path: PathBuf,
    /// Fleet totals
    pub totals: EmissionTotals,
    /// Budget result, when `check` was set and a budget is configured
    pub budget: Option<BudgetResult>,
    /// Comparison with the previous assessment, when history is enabled
    pub regression: Option<RegressionResult>,
}

impl ReportOutcome {
    /// Error to return when the budget check failed
    pub fn budget_error(&self) -> Option<CarbonTrackError> {
        let budget = self.budget.as_ref()?;
        if budget.status != BudgetStatus::OverBudget {
            return None;
        }
        let max_kg = budget.budget.max_yearly_kg.unwrap_or_default();
        let percentage_over = if max_kg > 0.0 {
            (budget.yearly_kg - max_kg) / max_kg * 100.0
        } else {
            100.0
        };
        Some(CarbonTrackError::BudgetExceeded {
            actual_kg: budget.yearly_kg,
            max_kg,
            percentage_over,
        })
    }

    /// Machine-readable summary
    pub fn json_output(&self) -> JsonOutput {
        let mut output = JsonOutput::new(self.totals);
        if let Some(budget) = &self.budget {
            output = output.with_budget(budget);
        }
        if let Some(regression) = &self.regression {
            output = output.with_regression(regression);
        }
        output
    }
}

/// Report generation phases for one workspace
pub struct ReportWorkflow<'a> {
    workspace: &'a Workspace,
}

impl<'a> ReportWorkflow<'a> {
    /// Create a workflow over a resolved workspace
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Run every phase
    ///
    /// A failed budget is reported in the outcome, not as an error, so the
    /// caller can print results before exiting.
    pub fn execute(&self, options: &ReportOptions, progress: &ProgressBar) -> Result<ReportOutcome> {
        let mut fleet = self.workspace.load_fleet()?;

        // Phase 1: assemble
        if fleet.machines.len() < PROGRESS_MIN_MACHINES {
            progress.set_draw_target(ProgressDrawTarget::hidden());
        }
        progress.set_length(fleet.machines.len() as u64);
        let report = ReportBuilder::new(&fleet)
            .title(self.workspace.config.report_title.clone())
            .build_with_progress(|| progress.inc(1))
            .map_err(CarbonTrackError::from)
            .context("Failed to generate report")?;
        progress.finish_and_clear();

        // Phase 2: write
        let path = self.output_path(&report, options);
        let body = if options.json {
            report.to_json()?
        } else {
            report.render_text()
        };
        fs::write(&path, body)
            .map_err(|e| CarbonTrackError::io("writing the report", path.clone(), e))?;
        log::info!("Wrote report to {}", path.display());

        // Phase 3: remember the file
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        fleet.record_report(&name, &path.display().to_string());
        self.workspace
            .save_fleet(&fleet)
            .context("Failed to record generated report")?;

        let totals = EmissionTotals {
            daily_kg: report.summary.total_daily_kg,
            monthly_kg: report.summary.total_monthly_kg,
            yearly_kg: report.summary.total_yearly_kg,
            machine_count: report.summary.machine_count,
        };

        // Phase 4: history
        let regression = self.track_history(&totals)?;

        // Phase 5: budget
        let budget = if options.check {
            self.check_budget(totals.yearly_kg)
        } else {
            None
        };

        Ok(ReportOutcome {
            report,
            path,
            totals,
            budget,
            regression,
        })
    }

    fn output_path(&self, report: &Report, options: &ReportOptions) -> PathBuf {
        match &options.output {
            Some(path) => path.clone(),
            None => {
                let path = self
                    .workspace
                    .root
                    .join(default_file_name(report.generated_at));
                if options.json {
                    path.with_extension("json")
                } else {
                    path
                }
            }
        }
    }

    fn track_history(&self, totals: &EmissionTotals) -> Result<Option<RegressionResult>> {
        let settings = self.workspace.config.history;
        if !settings.enabled {
            return Ok(None);
        }

        let root = &self.workspace.root;
        let mut history = AssessmentHistory::load(root)?;
        let regression =
            history.check_regression(totals.daily_kg, settings.regression_threshold_percent);
        history.add_record(AssessmentRecord::new(
            totals.daily_kg,
            totals.yearly_kg,
            totals.machine_count,
        ));
        history.save(root)?;

        if let Some(r) = &regression {
            if r.is_regression {
                log::warn!("Daily emissions up {:.1}% since last report", r.percent_change);
            }
        }
        Ok(regression)
    }

    fn check_budget(&self, yearly_kg: f64) -> Option<BudgetResult> {
        match self.workspace.config.emission_budget {
            Some(budget) if budget.is_set() => Some(BudgetChecker::new(budget).check(yearly_kg)),
            _ => {
                log::warn!("Budget check requested but no emission budget is configured");
                None
            }
        }
    }
}

/// Generate a report for the fleet
///
/// # Examples
///
/// ```no_run
/// use carbontrack::cmd::report::{cmd_report, ReportOptions};
///
/// // Text report with the budget enforced
/// cmd_report(&ReportOptions { check: true, ..Default::default() }, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_report(options: &ReportOptions, fleet: Option<&Path>) -> Result<()> {
    let workspace = Workspace::current(fleet)?;

    if !options.json {
        println!("{} {} Fleet Report", ROCKET, style("carbontrack").bold());
        println!();
    }

    let progress = progress_bar(options);
    let outcome = ReportWorkflow::new(&workspace).execute(options, &progress)?;

    if options.json {
        outcome.json_output().print();
    } else {
        present_outcome(&outcome, options.check);
    }

    match outcome.budget_error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn progress_bar(options: &ReportOptions) -> ProgressBar {
    if options.json {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(0);
    let style = ProgressStyle::with_template("   {bar:30.green/dim} {pos}/{len} machines {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message("analyzing");
    bar
}

fn present_outcome(outcome: &ReportOutcome, check: bool) {
    let summary = &outcome.report.summary;
    println!("{} Report generated successfully!", CHECKMARK);
    println!("   File: {}", style(outcome.path.display()).cyan());
    println!();

    println!("{} Emission Summary:", CLOUD);
    println!(
        "   Daily:   {}",
        style(format_kg(summary.total_daily_kg, 1)).green().bold()
    );
    println!("   Monthly: {}", format_kg(summary.total_monthly_kg, 0));
    println!("   Yearly:  {}", format_kg(summary.total_yearly_kg, 0));
    println!("   Machines: {}", summary.machine_count);

    if let Some(regression) = &outcome.regression {
        regression.print();
    }

    match &outcome.budget {
        Some(budget) => budget.print(),
        None if check => {
            println!();
            println!(
                "{} No emission budget configured. Run {} to create one.",
                style(WARNING).yellow(),
                style("carbontrack init").cyan()
            );
        }
        None => {}
    }
}
