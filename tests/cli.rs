//! End-to-end tests of the command-line binary.

mod common;

use std::fs;

use approx::assert_relative_eq;

#[test]
fn default_run_prints_german_report() {
    let stdout = common::run_cli_ok(&[]);
    assert!(stdout.contains("=== Heizungsvergleich: PRJ-2025-001 ==="));
    assert!(stdout.contains("38.599 kWh"));
    assert!(stdout.contains("Wärmepumpe + PV + Speicher"));
}

#[test]
fn english_report_key_figures() {
    let stdout = common::run_cli_ok(&["--locale", "en"]);
    assert_relative_eq!(
        common::parse_metric(&stdout, "Annual heat demand:", "kWh"),
        38_599.0
    );
    assert_relative_eq!(
        common::parse_metric(&stdout, "HP full-load hours:", "h"),
        2_969.0
    );
    assert_relative_eq!(
        common::parse_metric(&stdout, "PV generation (estimate):", "kWh"),
        23_275.0
    );
}

#[test]
fn override_changes_result() {
    let base = common::run_cli_ok(&["--locale", "en"]);
    let bigger = common::run_cli_ok(&[
        "--locale",
        "en",
        "--set",
        "building.living_area_m2=701.8",
    ]);
    assert_relative_eq!(
        common::parse_metric(&base, "Annual heat demand:", "kWh") * 2.0,
        common::parse_metric(&bigger, "Annual heat demand:", "kWh")
    );
}

#[test]
fn invalid_value_is_rejected_with_field_path() {
    let output = common::run_cli(&["--set", "oil.efficiency=0", "--set", "solar.coverage_fraction=1.5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no partial report on invalid input");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 invalid input value(s)"), "stderr: {stderr}");
    assert!(stderr.contains("oil.efficiency: must be in (0.0, 1.0]"));
    assert!(stderr.contains("solar.coverage_fraction: must be in [0.0, 1.0]"));
}

#[test]
fn unknown_override_field_is_rejected() {
    let output = common::run_cli(&["--set", "oil.bogus=1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid override \"oil.bogus=1\""), "stderr: {stderr}");
}

#[test]
fn unknown_preset_is_rejected() {
    let output = common::run_cli(&["--preset", "passivhaus"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset \"passivhaus\""));
}

#[test]
fn missing_scenario_file_is_reported() {
    let output = common::run_cli(&["--scenario", "scenarios/does_not_exist.toml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read scenario"));
}

#[test]
fn list_presets() {
    let stdout = common::run_cli_ok(&["--list-presets"]);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, ["baseline", "renovated", "unrenovated"]);
}

#[test]
fn json_output_parses() {
    let stdout = common::run_cli_ok(&["--format", "json", "--sens-jaz", "4.0"]);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be a JSON document");
    assert_eq!(value["cheapest"], "heat_pump");
    let heat_demand = value["result"]["heat_demand_kwh"].as_f64().unwrap();
    assert_relative_eq!(heat_demand, 38_599.0, epsilon = 1e-6);
    assert_eq!(value["sensitivity"]["seasonal_performance_factor"], 4.0);
    let base_hp = value["result"]["heat_pump"]["cost"].as_f64().unwrap();
    let sens_hp = value["sensitivity"]["result"]["heat_pump"]["cost"]
        .as_f64()
        .unwrap();
    assert!(sens_hp < base_hp);
}

#[test]
fn export_writes_single_row_csv() {
    let path = common::temp_path("export.csv");
    let path_str = path.to_string_lossy().to_string();
    let output = common::run_cli(&["--export", &path_str]);
    assert!(output.status.success());

    let content = fs::read_to_string(&path).expect("export file should exist");
    fs::remove_file(&path).ok();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("project,address,year_built"));
    assert!(lines[1].starts_with("PRJ-2025-001,\"Musterstraße 1, 79098 Freiburg im Breisgau\",1994"));
}

#[test]
fn sensitivity_flags_add_report_section() {
    let stdout = common::run_cli_ok(&["--locale", "en", "--sens-demand", "80", "--sens-jaz", "3.8"]);
    assert!(stdout.contains("--- Sensitivity (80 kWh/m²a, JAZ 3.8) ---"));
}
