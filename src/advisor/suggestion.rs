//! Suggestion types produced by the advisor

use crate::fmt::to_fixed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a suggestion should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Something is out of range and costs emissions
    Warning,
    /// Worth scheduling, not urgent
    Info,
    /// Positive opportunity or all-clear
    Success,
}

impl Severity {
    /// Lowercase name used in JSON and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }
}

/// Which rule produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Runtime above 16 h/day
    ReduceRuntime,
    /// Operating temperature above 80 °C
    ImproveInsulation,
    /// Sound level above 85 dB
    ScheduleMaintenance,
    /// Consumption above 500 kWh/day
    ReplaceMotors,
    /// Coal or fuel powered
    SwitchToRenewables,
    /// Nothing else fired
    OperationsOptimal,
}

/// Estimated effect of acting on a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Impact {
    /// kg CO₂ per day no longer emitted
    EmissionSaving {
        /// Saved kg per day
        kg_per_day: f64,
    },
    /// Expected drop in operating temperature
    TemperatureReduction {
        /// Whole degrees Celsius
        degrees_c: f64,
    },
    /// Daily emission projected after maintenance
    PredictedAfterMaintenance {
        /// Projected kg per day
        kg_per_day: f64,
    },
    /// kWh per day no longer consumed
    EnergySaving {
        /// Saved kWh per day
        kwh_per_day: f64,
    },
    /// Upper bound of the reduction a source switch could bring
    PotentialReduction {
        /// Reduced kg per day
        kg_per_day: f64,
    },
    /// No numeric effect
    ContinueMonitoring,
}

impl Impact {
    /// Numeric amount carried by this impact, if any
    pub fn amount(&self) -> Option<f64> {
        match *self {
            Impact::EmissionSaving { kg_per_day }
            | Impact::PredictedAfterMaintenance { kg_per_day }
            | Impact::PotentialReduction { kg_per_day } => Some(kg_per_day),
            Impact::TemperatureReduction { degrees_c } => Some(degrees_c),
            Impact::EnergySaving { kwh_per_day } => Some(kwh_per_day),
            Impact::ContinueMonitoring => None,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Impact::EmissionSaving { kg_per_day } => {
                write!(f, "Save ~{} kg CO₂/day", to_fixed(kg_per_day, 1))
            }
            Impact::TemperatureReduction { degrees_c } => {
                write!(f, "Reduce temperature by ~{}°C", to_fixed(degrees_c, 0))
            }
            Impact::PredictedAfterMaintenance { kg_per_day } => write!(
                f,
                "Predicted emission after maintenance: {} kg CO₂/day",
                to_fixed(kg_per_day, 1)
            ),
            Impact::EnergySaving { kwh_per_day } => {
                write!(f, "Save ~{} kWh/day", to_fixed(kwh_per_day, 0))
            }
            Impact::PotentialReduction { kg_per_day } => {
                write!(f, "Potential CO₂ reduction: {} kg/day", to_fixed(kg_per_day, 1))
            }
            Impact::ContinueMonitoring => f.write_str("Continue monitoring for changes"),
        }
    }
}

/// One advisory finding for a machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Rule that produced this suggestion
    pub kind: SuggestionKind,
    /// Short headline
    pub title: String,
    /// One or two sentences of context
    pub description: String,
    /// Estimated effect
    pub impact: Impact,
    /// Presentation severity
    pub severity: Severity,
}
