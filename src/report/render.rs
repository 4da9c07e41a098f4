//! Plain-text and JSON rendering of reports

use super::Report;
use crate::fmt::{format_kg, to_fixed};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Report file name for a generation time, e.g. `CarbonTrack_Report_1767225600000.txt`
pub fn default_file_name(generated_at: DateTime<Utc>) -> String {
    format!(
        "CarbonTrack_Report_{}.txt",
        generated_at.timestamp_millis()
    )
}

/// Column-aligned plain-text table
struct Table {
    head: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(head: &[&str]) -> Self {
        Self {
            head: head.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn lines(&self) -> Vec<String> {
        let mut widths: Vec<usize> = self.head.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let pad = width.saturating_sub(cell.chars().count());
                    format!("{}{}", cell, " ".repeat(pad))
                })
                .collect();
            padded.join(" | ").trim_end().to_string()
        };

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let mut lines = vec![line(&self.head), rule.join("-+-")];
        for row in &self.rows {
            lines.push(line(row));
        }
        lines
    }
}

/// Blank line, underlined title, then the table
fn section(title: &str, table: &Table) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        title.to_string(),
        "=".repeat(title.chars().count()),
    ];
    lines.extend(table.lines());
    lines
}

impl Report {
    /// Render all sections as plain text
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            self.title.clone(),
            self.generated_at.format("%B %-d, %Y").to_string(),
        ];

        let mut company = Table::new(&["Field", "Value"]);
        for field in &self.company {
            company.row(vec![field.label.to_string(), field.value.clone()]);
        }
        lines.extend(section("Company Details", &company));

        let mut machines = Table::new(&[
            "Machine",
            "Type",
            "Source",
            "Units",
            "Runtime",
            "Consumption",
            "Daily CO₂",
            "Monthly CO₂",
        ]);
        for m in &self.machines {
            machines.row(vec![
                m.machine_name.clone(),
                m.machine_type.clone(),
                m.energy_source.clone(),
                m.active_units.to_string(),
                format!("{}h", m.runtime_hours),
                format!("{} kWh", m.daily_consumption_kwh),
                m.daily_kg.map_or_else(|| "N/A".to_string(), |kg| format_kg(kg, 1)),
                m.monthly_kg.map_or_else(|| "N/A".to_string(), |kg| format_kg(kg, 0)),
            ]);
        }
        lines.extend(section("Machine Details & Emissions", &machines));

        let mut summary = Table::new(&["Metric", "Value"]);
        summary.row(vec![
            "Total Daily CO₂".to_string(),
            format_kg(self.summary.total_daily_kg, 1),
        ]);
        summary.row(vec![
            "Total Monthly CO₂".to_string(),
            format_kg(self.summary.total_monthly_kg, 0),
        ]);
        summary.row(vec![
            "Total Yearly CO₂".to_string(),
            format_kg(self.summary.total_yearly_kg, 0),
        ]);
        summary.row(vec![
            "Total Machines".to_string(),
            self.summary.machine_count.to_string(),
        ]);
        lines.extend(section("Emission Summary", &summary));

        let mut recommendations = Table::new(&["Machine", "Recommendation", "Details", "Impact"]);
        for group in &self.recommendations {
            for s in &group.suggestions {
                recommendations.row(vec![
                    group.machine_name.clone(),
                    s.title.clone(),
                    s.description.clone(),
                    s.impact.to_string(),
                ]);
            }
        }
        lines.extend(section("AI Recommendations", &recommendations));

        let mut before_after =
            Table::new(&["Machine", "Current Daily", "After Maintenance", "Reduction"]);
        for row in &self.before_after {
            before_after.row(vec![
                row.machine_name.clone(),
                format_kg(row.current_daily_kg, 1),
                format_kg(row.predicted_daily_kg, 1),
                format!(
                    "{} ({}%)",
                    format_kg(row.reduction_kg, 1),
                    to_fixed(row.reduction_percent, 0)
                ),
            ]);
        }
        lines.extend(section("Before vs After Maintenance Predictions", &before_after));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }
}
