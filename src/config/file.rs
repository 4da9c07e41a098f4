//! Configuration file data structures

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".carbontrack.toml";

/// Fleet document used when `--fleet` is not given
pub const DEFAULT_FLEET_FILE: &str = "carbontrack-fleet.json";

/// carbontrack configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Heading printed at the top of generated reports
    #[serde(rename = "report-title", default = "default_report_title")]
    pub report_title: String,

    /// Fleet document path, relative to the working directory
    #[serde(rename = "fleet-file", default = "default_fleet_file")]
    pub fleet_file: String,

    /// Yearly CO₂ budget
    #[serde(
        rename = "emission-budget",
        skip_serializing_if = "Option::is_none"
    )]
    pub emission_budget: Option<EmissionBudget>,

    /// Assessment history settings
    #[serde(default)]
    pub history: HistorySettings,
}

fn default_report_title() -> String {
    "CarbonTrack Report".to_string()
}

fn default_fleet_file() -> String {
    DEFAULT_FLEET_FILE.to_string()
}

/// Yearly CO₂ budget thresholds in kg
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionBudget {
    /// Hard limit (report --check fails)
    #[serde(rename = "max-yearly-kg", skip_serializing_if = "Option::is_none")]
    pub max_yearly_kg: Option<f64>,

    /// Warning threshold (report --check passes with warning)
    #[serde(rename = "warn-yearly-kg", skip_serializing_if = "Option::is_none")]
    pub warn_yearly_kg: Option<f64>,

    /// Reduction goal
    #[serde(rename = "target-yearly-kg", skip_serializing_if = "Option::is_none")]
    pub target_yearly_kg: Option<f64>,
}

impl EmissionBudget {
    /// Validate that budget thresholds are properly ordered
    ///
    /// Ensures: target <= warn <= max, all non-negative
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("Target", self.target_yearly_kg),
            ("Warning threshold", self.warn_yearly_kg),
            ("Max", self.max_yearly_kg),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    anyhow::bail!("{} ({} kg) must be a non-negative number", name, v);
                }
            }
        }

        if let (Some(target), Some(warn)) = (self.target_yearly_kg, self.warn_yearly_kg) {
            if target > warn {
                anyhow::bail!(
                    "Target ({} kg) cannot exceed warning threshold ({} kg)",
                    target,
                    warn
                );
            }
        }

        if let (Some(warn), Some(max)) = (self.warn_yearly_kg, self.max_yearly_kg) {
            if warn > max {
                anyhow::bail!(
                    "Warning threshold ({} kg) cannot exceed max ({} kg)",
                    warn,
                    max
                );
            }
        }

        if let (Some(target), Some(max)) = (self.target_yearly_kg, self.max_yearly_kg) {
            if target > max {
                anyhow::bail!("Target ({} kg) cannot exceed max ({} kg)", target, max);
            }
        }

        Ok(())
    }

    /// Whether any threshold is set
    pub fn is_set(&self) -> bool {
        self.target_yearly_kg.is_some()
            || self.warn_yearly_kg.is_some()
            || self.max_yearly_kg.is_some()
    }
}

/// Assessment history settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Record an assessment on every report
    #[serde(default = "default_history_enabled")]
    pub enabled: bool,

    /// Increase in total daily CO₂ treated as a regression
    #[serde(
        rename = "regression-threshold-percent",
        default = "default_regression_threshold"
    )]
    pub regression_threshold_percent: f64,
}

fn default_history_enabled() -> bool {
    true
}

fn default_regression_threshold() -> f64 {
    5.0
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            enabled: default_history_enabled(),
            regression_threshold_percent: default_regression_threshold(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            report_title: default_report_title(),
            fleet_file: default_fleet_file(),
            emission_budget: None,
            history: HistorySettings::default(),
        }
    }
}

impl ConfigFile {
    /// Starter configuration written by `carbontrack init`
    pub fn starter() -> Self {
        Self {
            emission_budget: Some(EmissionBudget {
                target_yearly_kg: Some(50_000.0),
                warn_yearly_kg: Some(80_000.0),
                max_yearly_kg: Some(100_000.0),
            }),
            ..Self::default()
        }
    }

    /// Parse `.carbontrack.toml` contents and validate them
    ///
    /// # Examples
    ///
    /// ```
    /// use carbontrack::config::ConfigFile;
    ///
    /// let config = ConfigFile::from_toml("[emission-budget]\nmax-yearly-kg = 5000.0\n")?;
    /// assert_eq!(config.fleet_file, "carbontrack-fleet.json");
    ///
    /// assert!(ConfigFile::from_toml("fleet-file = \"\"\n").is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml_edit::de::from_str(contents).context("Failed to parse .carbontrack.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize with kebab-case keys, refusing settings that would not load back
    pub fn to_toml(&self) -> Result<String> {
        self.validate()?;
        toml_edit::ser::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Check the budget ordering, the regression threshold and the fleet file
    pub fn validate(&self) -> Result<()> {
        if self.fleet_file.trim().is_empty() {
            anyhow::bail!("fleet-file cannot be empty");
        }

        let threshold = self.history.regression_threshold_percent;
        if !threshold.is_finite() || threshold < 0.0 {
            anyhow::bail!(
                "regression-threshold-percent ({}) must be a non-negative number",
                threshold
            );
        }

        if let Some(budget) = &self.emission_budget {
            budget
                .validate()
                .context("Invalid emission budget configuration")?;
        }

        Ok(())
    }

    /// Fleet document for a workspace rooted at `root`
    ///
    /// An explicit `--fleet` path wins over the configured `fleet-file`.
    pub fn fleet_path(&self, root: &Path, fleet_override: Option<&Path>) -> PathBuf {
        match fleet_override {
            Some(path) => path.to_path_buf(),
            None => root.join(&self.fleet_file),
        }
    }
}
