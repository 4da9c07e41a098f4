//! Threshold rules, evaluated in a fixed order
//!
//! Every rule looks at the current snapshot only and appends at most one
//! suggestion. The fallback fires only when no rule did.

use super::suggestion::{Impact, Severity, Suggestion, SuggestionKind};
use crate::emission::{EnergySource, MAINTENANCE_RETENTION};
use crate::fmt::to_fixed;
use serde::{Deserialize, Serialize};

/// Runtime above which a reduction is suggested (strictly greater)
pub const RUNTIME_LIMIT_HOURS: f64 = 16.0;
/// Runtime the reduction suggestion aims for
pub const TARGET_RUNTIME_HOURS: f64 = 12.0;
/// Operating temperature above which insulation is suggested
pub const TEMPERATURE_LIMIT_C: f64 = 80.0;
/// Share of the operating temperature better insulation can remove
pub const INSULATION_TEMPERATURE_SHARE: f64 = 0.2;
/// Sound level above which maintenance is suggested
pub const SOUND_LIMIT_DB: f64 = 85.0;
/// Daily consumption above which motor replacement is suggested
pub const CONSUMPTION_LIMIT_KWH: f64 = 500.0;
/// Share of consumption premium-efficiency motors save
pub const MOTOR_SAVING_SHARE: f64 = 0.08;
/// Share of emissions a switch to renewables can remove
pub const RENEWABLE_REDUCTION_SHARE: f64 = 0.7;

/// Operating parameters of one machine plus its current daily emission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingSnapshot {
    /// Operating temperature, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    /// Sound level, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_level_db: Option<f64>,
    /// Hours of operation per day
    pub runtime_hours_per_day: f64,
    /// Energy consumed per day
    pub daily_consumption_kwh: f64,
    /// Source name as stored ("Coal", "Natural Gas", ...)
    pub energy_source: String,
    /// Current daily emission in kg CO₂
    pub daily_emission_kg: f64,
}

struct Rule {
    kind: SuggestionKind,
    applies: fn(&OperatingSnapshot) -> bool,
    build: fn(&OperatingSnapshot) -> Suggestion,
}

/// Output order is the order of this table
const RULES: &[Rule] = &[
    Rule {
        kind: SuggestionKind::ReduceRuntime,
        applies: |s| s.runtime_hours_per_day > RUNTIME_LIMIT_HOURS,
        build: reduce_runtime,
    },
    Rule {
        kind: SuggestionKind::ImproveInsulation,
        applies: |s| s.temperature_c.is_some_and(|t| t > TEMPERATURE_LIMIT_C),
        build: improve_insulation,
    },
    Rule {
        kind: SuggestionKind::ScheduleMaintenance,
        applies: |s| s.sound_level_db.is_some_and(|db| db > SOUND_LIMIT_DB),
        build: schedule_maintenance,
    },
    Rule {
        kind: SuggestionKind::ReplaceMotors,
        applies: |s| s.daily_consumption_kwh > CONSUMPTION_LIMIT_KWH,
        build: replace_motors,
    },
    Rule {
        kind: SuggestionKind::SwitchToRenewables,
        applies: |s| {
            EnergySource::parse(&s.energy_source).is_some_and(|src| src.is_carbon_intensive())
        },
        build: switch_to_renewables,
    },
];

/// Evaluate every rule against `snapshot`, in order
///
/// # Examples
///
/// ```
/// use carbontrack::advisor::{generate_suggestions, OperatingSnapshot, SuggestionKind};
///
/// let snapshot = OperatingSnapshot {
///     temperature_c: None,
///     sound_level_db: None,
///     runtime_hours_per_day: 8.0,
///     daily_consumption_kwh: 100.0,
///     energy_source: "Coal".to_string(),
///     daily_emission_kg: 220.0,
/// };
///
/// let suggestions = generate_suggestions(&snapshot);
/// assert_eq!(suggestions.len(), 1);
/// assert_eq!(suggestions[0].kind, SuggestionKind::SwitchToRenewables);
/// ```
pub fn generate_suggestions(snapshot: &OperatingSnapshot) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = RULES
        .iter()
        .filter(|rule| (rule.applies)(snapshot))
        .map(|rule| (rule.build)(snapshot))
        .collect();

    if suggestions.is_empty() {
        suggestions.push(operations_optimal());
    }

    suggestions
}

/// Rule kinds in evaluation order, excluding the fallback
pub fn rule_order() -> Vec<SuggestionKind> {
    RULES.iter().map(|rule| rule.kind).collect()
}

/// Whole-percent runtime reduction reaching the target runtime
///
/// The percentage is rounded before it is reused for the saving estimate,
/// so the kg figure matches the percentage shown next to it.
pub fn runtime_reduction_percent(runtime_hours_per_day: f64) -> f64 {
    ((runtime_hours_per_day - TARGET_RUNTIME_HOURS) / runtime_hours_per_day * 100.0).round()
}

fn reduce_runtime(s: &OperatingSnapshot) -> Suggestion {
    let percent = runtime_reduction_percent(s.runtime_hours_per_day);
    Suggestion {
        kind: SuggestionKind::ReduceRuntime,
        title: "Reduce Runtime".to_string(),
        description: format!(
            "Machine runs {}h/day. Reducing to 12h could cut emissions by ~{}%.",
            s.runtime_hours_per_day,
            to_fixed(percent, 0)
        ),
        impact: Impact::EmissionSaving {
            kg_per_day: s.daily_emission_kg * percent / 100.0,
        },
        severity: Severity::Warning,
    }
}

fn improve_insulation(s: &OperatingSnapshot) -> Suggestion {
    let temperature = s.temperature_c.unwrap_or_default();
    Suggestion {
        kind: SuggestionKind::ImproveInsulation,
        title: "Improve Insulation".to_string(),
        description: format!(
            "High operating temperature ({}°C). Better insulation can reduce heat loss by 15-25%.",
            temperature
        ),
        impact: Impact::TemperatureReduction {
            degrees_c: (temperature * INSULATION_TEMPERATURE_SHARE).round(),
        },
        severity: Severity::Warning,
    }
}

fn schedule_maintenance(s: &OperatingSnapshot) -> Suggestion {
    Suggestion {
        kind: SuggestionKind::ScheduleMaintenance,
        title: "Schedule Preventive Maintenance".to_string(),
        description: format!(
            "Sound level at {} dB indicates wear. Preventive maintenance recommended.",
            s.sound_level_db.unwrap_or_default()
        ),
        impact: Impact::PredictedAfterMaintenance {
            kg_per_day: s.daily_emission_kg * MAINTENANCE_RETENTION,
        },
        severity: Severity::Info,
    }
}

fn replace_motors(s: &OperatingSnapshot) -> Suggestion {
    Suggestion {
        kind: SuggestionKind::ReplaceMotors,
        title: "Replace Inefficient Motors".to_string(),
        description: format!(
            "High energy consumption ({} kWh/day). IE4 super-premium motors can save 5-10%.",
            s.daily_consumption_kwh
        ),
        impact: Impact::EnergySaving {
            kwh_per_day: s.daily_consumption_kwh * MOTOR_SAVING_SHARE,
        },
        severity: Severity::Info,
    }
}

fn switch_to_renewables(s: &OperatingSnapshot) -> Suggestion {
    Suggestion {
        kind: SuggestionKind::SwitchToRenewables,
        title: "Switch to Renewable Energy".to_string(),
        description: format!(
            "Currently using {}. Switching to electricity from renewables can cut emissions by 60-80%.",
            s.energy_source
        ),
        impact: Impact::PotentialReduction {
            kg_per_day: s.daily_emission_kg * RENEWABLE_REDUCTION_SHARE,
        },
        severity: Severity::Success,
    }
}

fn operations_optimal() -> Suggestion {
    Suggestion {
        kind: SuggestionKind::OperationsOptimal,
        title: "Operations Optimal".to_string(),
        description: "Current machine parameters are within acceptable ranges.".to_string(),
        impact: Impact::ContinueMonitoring,
        severity: Severity::Success,
    }
}
