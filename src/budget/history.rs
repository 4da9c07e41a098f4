//! Assessment history tracking for regression detection
//!
//! Stores fleet totals in .carbontrack/history.json to:
//! - Detect emission regressions (daily CO₂ up more than the threshold)
//! - Track reduction progress over time

use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default regression threshold in percent
pub const DEFAULT_REGRESSION_THRESHOLD_PERCENT: f64 = 5.0;

/// Fleet totals at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// When the assessment ran
    pub timestamp: DateTime<Utc>,
    /// Σ daily emission in kg CO₂
    pub total_daily_kg: f64,
    /// Σ yearly emission in kg CO₂
    pub total_yearly_kg: f64,
    /// Machines assessed
    pub machine_count: usize,
}

impl AssessmentRecord {
    /// Create a new record stamped with the current time
    pub fn new(total_daily_kg: f64, total_yearly_kg: f64, machine_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            total_daily_kg,
            total_yearly_kg,
            machine_count,
        }
    }
}

/// Assessment history manager
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentHistory {
    /// Assessment records (newest first)
    pub records: Vec<AssessmentRecord>,
}

impl AssessmentHistory {
    const HISTORY_DIR: &'static str = ".carbontrack";
    const HISTORY_FILE: &'static str = "history.json";
    /// Records kept before the oldest are dropped
    pub const MAX_RECORDS: usize = 100;

    /// Create a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Load history from project root
    pub fn load(project_root: &Path) -> Result<Self> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load history with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<Self> {
        let history_path = Self::history_path(project_root);

        if !fs.exists(&history_path) {
            return Ok(Self::new());
        }

        let contents = fs
            .read_to_string(&history_path)
            .context("Failed to read assessment history")?;

        let history: AssessmentHistory =
            serde_json::from_str(&contents).context("Failed to parse assessment history")?;

        Ok(history)
    }

    /// Save history to project root
    pub fn save(&self, project_root: &Path) -> Result<()> {
        self.save_with_fs(project_root, &RealFileSystem)
    }

    /// Save history with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(&self, project_root: &Path, fs: &FS) -> Result<()> {
        let history_dir = project_root.join(Self::HISTORY_DIR);
        let history_path = Self::history_path(project_root);

        fs.create_dir_all(&history_dir)
            .context("Failed to create .carbontrack directory")?;

        let contents = serde_json::to_string_pretty(self)
            .context("Failed to serialize assessment history")?;

        fs.write(&history_path, contents)
            .context("Failed to write assessment history")?;

        Ok(())
    }

    /// Add a new assessment record
    pub fn add_record(&mut self, record: AssessmentRecord) {
        self.records.insert(0, record);

        if self.records.len() > Self::MAX_RECORDS {
            self.records.truncate(Self::MAX_RECORDS);
        }
    }

    /// Get the most recent assessment
    pub fn latest(&self) -> Option<&AssessmentRecord> {
        self.records.first()
    }

    /// Compare a fleet's current daily total against the latest assessment
    ///
    /// Returns `None` when there is no earlier assessment. Growth from a
    /// zero baseline counts as a 100% increase.
    pub fn check_regression(
        &self,
        current_daily_kg: f64,
        threshold_percent: f64,
    ) -> Option<RegressionResult> {
        let previous = self.latest()?;

        let diff_kg = current_daily_kg - previous.total_daily_kg;
        let percent_change = if previous.total_daily_kg > 0.0 {
            diff_kg / previous.total_daily_kg * 100.0
        } else if current_daily_kg > 0.0 {
            100.0
        } else {
            0.0
        };

        Some(RegressionResult {
            is_regression: percent_change > threshold_percent,
            previous_daily_kg: previous.total_daily_kg,
            current_daily_kg,
            diff_kg,
            percent_change,
        })
    }

    fn history_path(project_root: &Path) -> PathBuf {
        project_root
            .join(Self::HISTORY_DIR)
            .join(Self::HISTORY_FILE)
    }
}

/// Result of regression check
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult {
    /// Whether a regression was detected
    pub is_regression: bool,
    /// Previous daily total in kg
    pub previous_daily_kg: f64,
    /// Current daily total in kg
    pub current_daily_kg: f64,
    /// Difference in kg (negative = reduction)
    pub diff_kg: f64,
    /// Percent change (positive = increase)
    pub percent_change: f64,
}

impl RegressionResult {
    /// Print regression status
    ///
    /// Delegates to display module for console formatting.
    pub fn print(&self) {
        super::display::print_regression(self);
    }
}
