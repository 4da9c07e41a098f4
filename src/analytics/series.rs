//! Chart series derived from stored records
//!
//! These never call the estimator: they read what was stored at
//! registration time.

use crate::emission::predict_after_maintenance;
use crate::fmt::truncate_label;
use crate::machine::Fleet;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Longest machine label on per-machine charts before it is cut
pub const MACHINE_LABEL_CHARS: usize = 12;

/// Longest machine label on the before/after chart (cut without ellipsis)
pub const BEFORE_AFTER_LABEL_CHARS: usize = 10;

/// A named value on a bar or pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValue {
    /// Category label
    pub name: String,
    /// Value for that label
    pub value: f64,
}

/// Daily CO₂ recorded on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// UTC calendar date of the emission rows
    pub date: NaiveDate,
    /// Short label, e.g. `Mar 1`
    pub label: String,
    /// Σ daily emission of rows created that day
    pub co2_kg: f64,
}

/// Current versus projected post-maintenance emission for one row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeforeAfter {
    /// Machine label
    pub name: String,
    /// Stored daily emission
    pub before_kg: f64,
    /// Stored projection, or the 0.82 projection when none was stored
    pub after_kg: f64,
}

/// Group values by key, preserving first-seen order of keys
fn group_in_order<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> Vec<NamedValue> {
    let mut groups: Vec<NamedValue> = Vec::new();
    for (name, value) in pairs {
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.value += value,
            None => groups.push(NamedValue {
                name: name.to_string(),
                value,
            }),
        }
    }
    groups
}

/// Σ daily consumption per energy source
pub fn consumption_by_source(fleet: &Fleet) -> Vec<NamedValue> {
    group_in_order(
        fleet
            .machines
            .iter()
            .map(|m| (m.energy_source.as_str(), m.daily_consumption)),
    )
}

/// Machine count per energy source
pub fn machines_by_source(fleet: &Fleet) -> Vec<NamedValue> {
    group_in_order(
        fleet
            .machines
            .iter()
            .map(|m| (m.energy_source.as_str(), 1.0)),
    )
}

/// Σ daily emission grouped by creation date, oldest first
pub fn emission_trend(fleet: &Fleet) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for emission in &fleet.emissions {
        *by_date.entry(emission.created_at.date_naive()).or_default() += emission.daily_emission;
    }

    by_date
        .into_iter()
        .map(|(date, co2_kg)| TrendPoint {
            date,
            label: date.format("%b %-d").to_string(),
            co2_kg,
        })
        .collect()
}

/// Daily consumption per machine, labels truncated
pub fn energy_by_machine(fleet: &Fleet) -> Vec<NamedValue> {
    fleet
        .machines
        .iter()
        .map(|m| NamedValue {
            name: truncate_label(&m.machine_name, MACHINE_LABEL_CHARS),
            value: m.daily_consumption,
        })
        .collect()
}

/// One before/after pair per emission row
///
/// Rows whose machine is no longer in the fleet are labelled `Machine`.
pub fn before_after(fleet: &Fleet) -> Vec<BeforeAfter> {
    fleet
        .emissions
        .iter()
        .map(|e| {
            let name = fleet
                .machines
                .iter()
                .find(|m| m.id == e.machine_id)
                .map(|m| m.machine_name.chars().take(BEFORE_AFTER_LABEL_CHARS).collect())
                .unwrap_or_else(|| "Machine".to_string());
            let after_kg = e
                .predicted_emission_after_maintenance
                .filter(|p| *p != 0.0)
                .unwrap_or_else(|| predict_after_maintenance(e.daily_emission));

            BeforeAfter {
                name,
                before_kg: e.daily_emission,
                after_kg,
            }
        })
        .collect()
}
