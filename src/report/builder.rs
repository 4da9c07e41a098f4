//! Report assembly
//!
//! The builder reads stored records, re-derives each machine's operating
//! snapshot, and re-runs the advisor and the maintenance projection for
//! every machine. Stored emission rows are never rewritten.

use super::{
    BeforeAfterRow, ChartData, CompanyField, MachineRecommendations, MachineRow, Report,
    ReportError, Summary,
};
use crate::advisor::generate_suggestions;
use crate::analytics::{machines_by_source, NamedValue};
use crate::emission::{predict_after_maintenance, DAYS_PER_MONTH, DAYS_PER_YEAR};
use crate::fmt::truncate_label;
use crate::machine::{CompanyRecord, Fleet, MachineRecord};
use chrono::Utc;
use rayon::prelude::*;

/// Longest machine label on report charts before it is cut
pub const REPORT_LABEL_CHARS: usize = 10;

const NOT_AVAILABLE: &str = "N/A";

/// Builds a [`Report`] from a fleet document
#[derive(Debug, Clone)]
pub struct ReportBuilder<'a> {
    fleet: &'a Fleet,
    title: String,
}

impl<'a> ReportBuilder<'a> {
    /// Create a builder over a fleet with the default title
    pub fn new(fleet: &'a Fleet) -> Self {
        Self {
            fleet,
            title: "CarbonTrack Report".to_string(),
        }
    }

    /// Set the report heading
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Assemble the report
    ///
    /// # Errors
    ///
    /// [`ReportError::NoData`] when the fleet has no company or no machines.
    ///
    /// # Examples
    ///
    /// ```
    /// use carbontrack::machine::Fleet;
    /// use carbontrack::report::{ReportBuilder, ReportError};
    ///
    /// let empty = Fleet::default();
    /// assert_eq!(ReportBuilder::new(&empty).build().unwrap_err(), ReportError::NoData);
    /// ```
    pub fn build(&self) -> Result<Report, ReportError> {
        self.build_with_progress(|| {})
    }

    /// Assemble the report, calling `tick` once per evaluated machine
    ///
    /// `tick` runs on rayon worker threads.
    pub fn build_with_progress<F>(&self, tick: F) -> Result<Report, ReportError>
    where
        F: Fn() + Sync,
    {
        let company = match &self.fleet.company {
            Some(company) if !self.fleet.is_empty() => company,
            _ => return Err(ReportError::NoData),
        };

        log::info!(
            "Building report for {} ({} machines)",
            company.company_name,
            self.fleet.machines.len()
        );

        // par_iter + collect keeps machine order
        let evaluations: Vec<(MachineRecommendations, BeforeAfterRow)> = self
            .fleet
            .machines
            .par_iter()
            .map(|machine| {
                let evaluation = self.evaluate(machine);
                tick();
                evaluation
            })
            .collect();
        let (recommendations, before_after): (Vec<_>, Vec<_>) = evaluations.into_iter().unzip();

        Ok(Report {
            title: self.title.clone(),
            generated_at: Utc::now(),
            company: company_fields(company),
            machines: self.machine_rows(),
            summary: self.summary(),
            recommendations,
            before_after,
            charts: self.charts(),
        })
    }

    fn stored_daily(&self, machine: &MachineRecord) -> Option<f64> {
        self.fleet
            .emission_for(&machine.id)
            .map(|e| e.daily_emission)
    }

    fn evaluate(&self, machine: &MachineRecord) -> (MachineRecommendations, BeforeAfterRow) {
        let daily = self.stored_daily(machine).unwrap_or(0.0);
        let snapshot = machine.snapshot().with_emission(daily);

        let suggestions = generate_suggestions(&snapshot);
        let predicted = predict_after_maintenance(daily);
        let reduction_kg = daily - predicted;
        let reduction_percent = if daily == 0.0 {
            0.0
        } else {
            (1.0 - predicted / daily) * 100.0
        };

        (
            MachineRecommendations {
                machine_name: machine.machine_name.clone(),
                suggestions,
            },
            BeforeAfterRow {
                machine_name: machine.machine_name.clone(),
                current_daily_kg: daily,
                predicted_daily_kg: predicted,
                reduction_kg,
                reduction_percent,
            },
        )
    }

    fn machine_rows(&self) -> Vec<MachineRow> {
        self.fleet
            .machines
            .iter()
            .map(|m| {
                let emission = self.fleet.emission_for(&m.id);
                MachineRow {
                    machine_name: m.machine_name.clone(),
                    machine_type: m.machine_type.clone(),
                    energy_source: m.energy_source.clone(),
                    active_units: m.active_units,
                    runtime_hours: m.runtime_hours,
                    daily_consumption_kwh: m.daily_consumption,
                    daily_kg: emission.map(|e| e.daily_emission),
                    monthly_kg: emission.map(|e| e.monthly_emission),
                }
            })
            .collect()
    }

    fn summary(&self) -> Summary {
        let total_daily_kg: f64 = self.fleet.emissions.iter().map(|e| e.daily_emission).sum();
        Summary {
            total_daily_kg,
            total_monthly_kg: total_daily_kg * DAYS_PER_MONTH,
            total_yearly_kg: total_daily_kg * DAYS_PER_YEAR,
            machine_count: self.fleet.machines.len(),
        }
    }

    fn charts(&self) -> ChartData {
        ChartData {
            energy_by_machine: self
                .fleet
                .machines
                .iter()
                .map(|m| NamedValue {
                    name: truncate_label(&m.machine_name, REPORT_LABEL_CHARS),
                    value: m.daily_consumption,
                })
                .collect(),
            machines_by_source: machines_by_source(self.fleet),
        }
    }
}

fn company_fields(company: &CompanyRecord) -> Vec<CompanyField> {
    let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());

    vec![
        CompanyField::new("Company Name", company.company_name.clone()),
        CompanyField::new("Email", company.email.clone()),
        CompanyField::new("Phone", or_na(company.phone.clone())),
        CompanyField::new("Industry", or_na(company.industry_type.clone())),
        CompanyField::new("Employees", or_na(company.employees.map(|n| n.to_string()))),
        CompanyField::new("Address", or_na(company.address.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::SuggestionKind;
    use crate::analytics::test_support::{emission, machine};
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn company() -> CompanyRecord {
        CompanyRecord {
            id: "company-1".to_string(),
            user_id: "user-1".to_string(),
            company_name: "Acme Forging".to_string(),
            email: "ops@acme.test".to_string(),
            phone: None,
            industry_type: Some("Metalworking".to_string()),
            employees: Some(120),
            address: None,
            annual_energy_budget: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
        }
    }

    fn fleet() -> Fleet {
        let mut press = machine("m1", "Hydraulic Press", "Coal", 100.0);
        press.runtime_hours = 20.0;
        let oven = machine("m2", "Oven", "Electricity", 40.0);
        Fleet {
            company: Some(company()),
            machines: vec![press, oven],
            emissions: vec![emission("m1", 220.0, 1)],
            ..Default::default()
        }
    }

    #[test]
    fn test_build_without_company_returns_no_data() {
        let mut fleet = fleet();
        fleet.company = None;
        assert_eq!(ReportBuilder::new(&fleet).build(), Err(ReportError::NoData));
    }

    #[test]
    fn test_build_without_machines_returns_no_data() {
        let fleet = Fleet {
            company: Some(company()),
            ..Default::default()
        };
        assert_eq!(ReportBuilder::new(&fleet).build(), Err(ReportError::NoData));
    }

    #[test]
    fn test_company_fields_show_na_for_missing_values() {
        let report = ReportBuilder::new(&fleet()).build().unwrap();

        let value = |label: &str| {
            report
                .company
                .iter()
                .find(|f| f.label == label)
                .map(|f| f.value.clone())
                .unwrap()
        };
        assert_eq!(value("Phone"), "N/A");
        assert_eq!(value("Industry"), "Metalworking");
        assert_eq!(value("Employees"), "120");
        assert_eq!(value("Address"), "N/A");
    }

    #[test]
    fn test_machine_rows_match_emissions_by_machine_id() {
        let report = ReportBuilder::new(&fleet()).build().unwrap();

        assert_eq!(report.machines[0].daily_kg, Some(220.0));
        assert_eq!(report.machines[0].monthly_kg, Some(6600.0));
        assert_eq!(report.machines[1].daily_kg, None);
    }

    #[test]
    fn test_summary_totals_use_stored_rows() {
        let report = ReportBuilder::new(&fleet()).build().unwrap();

        assert_eq!(report.summary.total_daily_kg, 220.0);
        assert_eq!(report.summary.total_monthly_kg, 6600.0);
        assert_eq!(report.summary.total_yearly_kg, 80300.0);
        assert_eq!(report.summary.machine_count, 2);
    }

    #[test]
    fn test_recommendations_follow_machine_order() {
        let report = ReportBuilder::new(&fleet()).build().unwrap();

        assert_eq!(report.recommendations[0].machine_name, "Hydraulic Press");
        let kinds: Vec<_> = report.recommendations[0]
            .suggestions
            .iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![SuggestionKind::ReduceRuntime, SuggestionKind::SwitchToRenewables]
        );
        assert_eq!(
            report.recommendations[1].suggestions[0].kind,
            SuggestionKind::OperationsOptimal
        );
    }

    #[test]
    fn test_before_after_uses_zero_percent_without_emission() {
        let report = ReportBuilder::new(&fleet()).build().unwrap();

        let press = &report.before_after[0];
        assert_eq!(press.current_daily_kg, 220.0);
        assert_eq!(press.predicted_daily_kg, 220.0 * 0.82);
        assert!((press.reduction_percent - 18.0).abs() < 1e-9);

        let oven = &report.before_after[1];
        assert_eq!(oven.current_daily_kg, 0.0);
        assert_eq!(oven.reduction_kg, 0.0);
        assert_eq!(oven.reduction_percent, 0.0);
    }

    #[test]
    fn test_charts_use_short_labels() {
        let report = ReportBuilder::new(&fleet()).build().unwrap();

        assert_eq!(report.charts.energy_by_machine[0].name, "Hydraulic …");
        assert_eq!(report.charts.machines_by_source.len(), 2);
    }

    #[test]
    fn test_build_with_progress_ticks_once_per_machine() {
        let ticks = AtomicUsize::new(0);

        let report = ReportBuilder::new(&fleet())
            .title("Plant 7")
            .build_with_progress(|| {
                ticks.fetch_add(1, Ordering::Relaxed);
            })
            .unwrap();

        assert_eq!(ticks.load(Ordering::Relaxed), 2);
        assert_eq!(report.title, "Plant 7");
    }
}
