//! End-to-end tests for the fleet commands
//!
//! Each test runs the binary in a fresh temporary working directory:
//! company → register → machines → dashboard → report → export.

use predicates::prelude::*;
use std::fs;

mod common;
use carbontrack::config::ConfigFile;
use carbontrack::machine::Fleet;
use common::assertions::{assert_csv_shape, assert_kg_approx};
use common::fixtures;
use common::get_bin;

fn create_company(dir: &std::path::Path) {
    get_bin()
        .args(["company", "--name", "Acme Forging", "--email", "ops@acme.test"])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered"));
}

fn register_press(dir: &std::path::Path) {
    get_bin()
        .args([
            "register",
            "--name",
            "Hydraulic Press",
            "--type",
            "Heavy",
            "--source",
            "Coal",
            "--consumption",
            "100",
            "--runtime",
            "18",
            "--sound",
            "90",
        ])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Machine registered successfully"))
        .stdout(predicate::str::contains("Reduce Runtime"))
        .stdout(predicate::str::contains("Schedule Preventive Maintenance"));
}

#[test]
fn test_register_without_company_exits_no_input() {
    let temp_dir = fixtures::empty_workspace().unwrap();

    get_bin()
        .args([
            "register", "--name", "Press", "--type", "Heavy", "--source", "Coal",
            "--consumption", "100", "--runtime", "8",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .code(66)
        .stderr(predicate::str::contains("Company not found"))
        .stderr(predicate::str::contains("carbontrack company"));
}

#[test]
fn test_company_then_register_stores_both_rows() {
    let temp_dir = fixtures::empty_workspace().unwrap();
    create_company(temp_dir.path());
    register_press(temp_dir.path());

    let fleet = Fleet::load(&fixtures::default_fleet_path(&temp_dir)).unwrap();
    assert_eq!(fleet.company.as_ref().unwrap().company_name, "Acme Forging");
    assert_eq!(fleet.machines.len(), 1);
    assert_eq!(fleet.emissions.len(), 1);

    let emission = fleet.emission_for(&fleet.machines[0].id).unwrap();
    assert_kg_approx(emission.daily_emission, 220.0);
    assert_kg_approx(emission.monthly_emission, 6600.0);
    assert_kg_approx(
        emission.predicted_emission_after_maintenance.unwrap(),
        220.0 * 0.82,
    );
}

#[test]
fn test_company_update_keeps_existing_fields() {
    let temp_dir = fixtures::empty_workspace().unwrap();
    create_company(temp_dir.path());

    get_bin()
        .args(["company", "--employees", "45"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let fleet = Fleet::load(&fixtures::default_fleet_path(&temp_dir)).unwrap();
    let company = fleet.company.unwrap();
    assert_eq!(company.email, "ops@acme.test");
    assert_eq!(company.employees, Some(45));
}

#[test]
fn test_register_json_returns_rows_and_suggestions() {
    let temp_dir = fixtures::empty_workspace().unwrap();
    create_company(temp_dir.path());

    let output = get_bin()
        .args([
            "register", "--name", "Oven", "--type", "Heating", "--source", "Electricity",
            "--consumption", "40", "--units", "2", "--runtime", "8", "--json",
        ])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["machine"]["machine_name"], "Oven");
    assert_eq!(value["emission"]["daily_emission"], 68.0);
    assert_eq!(value["suggestions"][0]["kind"], "operations_optimal");
}

#[test]
fn test_machines_lists_search_and_remove() {
    let (temp_dir, fleet_path) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();

    get_bin()
        .arg("machines")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 of 3)"))
        .stdout(predicate::str::contains("Hydraulic Press"))
        .stdout(predicate::str::contains("maintenance"));

    get_bin()
        .args(["machines", "--search", "GEN"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 of 3)"))
        .stdout(predicate::str::contains("Generator"));

    let fleet = Fleet::load(&fleet_path).unwrap();
    let oven_id = fleet
        .machines
        .iter()
        .find(|m| m.machine_name == "Oven")
        .map(|m| m.id.clone())
        .unwrap();

    get_bin()
        .args(["machines", "--remove", &oven_id])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    let fleet = Fleet::load(&fleet_path).unwrap();
    assert_eq!(fleet.machines.len(), 2);
    assert_eq!(fleet.emissions.len(), 2);
    assert!(fleet.emission_for(&oven_id).is_none());
}

#[test]
fn test_machines_remove_unknown_id_is_data_error() {
    let (temp_dir, _) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();

    get_bin()
        .args(["machines", "--remove", "no-such-id"])
        .current_dir(temp_dir.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Machine not found: no-such-id"));
}

#[test]
fn test_dashboard_json_totals_match_stored_rows() {
    let (temp_dir, _) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();

    let output = get_bin()
        .args(["dashboard", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["total_machines"], 3);
    assert_eq!(value["stats"]["maintenance_alerts"], 1);
    assert_kg_approx(
        value["stats"]["total_daily_co2_kg"].as_f64().unwrap(),
        fixtures::SAMPLE_DAILY_KG,
    );
    assert_eq!(value["consumption_by_source"][0]["name"], "Coal");
    assert_eq!(value["emission_trend"].as_array().unwrap().len(), 1);
}

#[test]
fn test_dashboard_on_empty_fleet_suggests_register() {
    let temp_dir = fixtures::empty_workspace().unwrap();

    get_bin()
        .arg("dashboard")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("carbontrack register"));
}

#[test]
fn test_report_writes_file_and_records_it() {
    let (temp_dir, fleet_path) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();
    let report_path = temp_dir.path().join("acme.txt");

    get_bin()
        .args(["report", "--output"])
        .arg(&report_path)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated successfully"));

    let text = fs::read_to_string(&report_path).unwrap();
    assert!(text.contains("Company Details"));
    assert!(text.contains("Acme Forging"));
    assert!(text.contains("Before vs After Maintenance Predictions"));

    let fleet = Fleet::load(&fleet_path).unwrap();
    assert_eq!(fleet.reports.len(), 1);
    assert_eq!(fleet.reports[0].report_name, "acme.txt");
    assert!(temp_dir.path().join(".carbontrack/history.json").exists());
}

#[test]
fn test_report_default_name_uses_timestamp() {
    let (temp_dir, _) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();

    get_bin()
        .arg("report")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let names: Vec<String> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("CarbonTrack_Report_"))
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].ends_with(".txt"));
}

#[test]
fn test_report_on_empty_fleet_exits_no_input() {
    let temp_dir = fixtures::empty_workspace().unwrap();

    get_bin()
        .arg("report")
        .current_dir(temp_dir.path())
        .assert()
        .code(66)
        .stderr(predicate::str::contains("No data"));
}

#[test]
fn test_report_check_over_budget_exits_one() {
    let (temp_dir, _) = fixtures::sample_workspace(&fixtures::config_with_max(100_000.0)).unwrap();

    get_bin()
        .args(["report", "--check"])
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("EXCEEDED"))
        .stderr(predicate::str::contains("exceed maximum"));
}

#[test]
fn test_report_check_json_reports_budget_status() {
    let (temp_dir, _) = fixtures::sample_workspace(&fixtures::config_with_max(1_000_000.0)).unwrap();

    let output = get_bin()
        .args(["report", "--check", "--json"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], true);
    // Only a maximum is configured, so staying under it counts as above target
    assert_eq!(value["budget"]["status"], "above_target");
    assert_eq!(value["emissions"]["machine_count"], 3);
}

#[test]
fn test_second_report_compares_with_history() {
    let (temp_dir, _) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();

    for _ in 0..2 {
        get_bin()
            .args(["report", "--json", "--output", "report.json"])
            .current_dir(temp_dir.path())
            .assert()
            .success();
    }

    let output = get_bin()
        .args(["report", "--json", "--output", "report.json"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Command execution failed");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["regression"]["is_regression"], false);
}

#[test]
fn test_export_writes_csv_newest_first() {
    let (temp_dir, _) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();

    get_bin()
        .arg("export")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 machine(s)"));

    let csv = fs::read_to_string(temp_dir.path().join("machines.csv")).unwrap();
    let rows = assert_csv_shape(&csv, 8);
    assert_eq!(rows[0][0], "Machine Name");
    assert_eq!(rows.len(), 4);
}

#[test]
fn test_export_with_search_filters_rows() {
    let (temp_dir, _) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();
    let out = temp_dir.path().join("heating.csv");

    get_bin()
        .args(["export", "--search", "heating", "--output"])
        .arg(&out)
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let rows = assert_csv_shape(&fs::read_to_string(&out).unwrap(), 8);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "Oven");
    assert_eq!(rows[1][6], "68.0");
    assert_eq!(rows[1][7], "2040");
}

#[test]
fn test_fleet_flag_overrides_configured_file() {
    let (temp_dir, fleet_path) = fixtures::sample_workspace(&ConfigFile::default()).unwrap();
    let moved = temp_dir.path().join("plant-7.json");
    fs::rename(&fleet_path, &moved).unwrap();

    get_bin()
        .args(["machines", "--fleet"])
        .arg(&moved)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 of 3)"));
}

#[test]
fn test_init_creates_config_once() {
    let temp_dir = fixtures::empty_workspace().unwrap();

    get_bin()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .carbontrack.toml"));

    let content = fs::read_to_string(temp_dir.path().join(".carbontrack.toml")).unwrap();
    assert!(content.contains("max-yearly-kg"));

    get_bin()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
