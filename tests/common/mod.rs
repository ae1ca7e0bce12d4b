//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use heating_economics::config::ScenarioConfig;
use heating_economics::model::InputParameters;
use heating_economics::scenario::Scenario;

/// Baseline scenario (350.9 m², 110 kWh/m²a, JAZ 3.2, 20 % PV coverage).
pub fn baseline_scenario() -> Scenario {
    match ScenarioConfig::baseline().validated() {
        Ok(s) => s,
        Err(e) => panic!("baseline must validate: {e}"),
    }
}

/// Model inputs of the baseline scenario.
pub fn baseline_params() -> InputParameters {
    baseline_scenario().params
}

/// Runs the binary with `args` from the package root.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heating-economics"))
        .args(args)
        .output()
        .expect("heating-economics process should run")
}

/// Stdout of a successful run; panics with stderr otherwise.
pub fn run_cli_ok(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

/// Unique path in the system temp directory.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("heating-economics-{}-{name}", std::process::id()))
}

/// Extracts the number after `label` on a report line, e.g. `38,599 kWh`.
///
/// Expects the English locale (`,` grouping, `.` decimals).
pub fn parse_metric(stdout: &str, label: &str, unit: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing line `{label}` in output: {stdout}"));

    let raw = line
        .split_once(':')
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("invalid format for line `{line}`"));

    let numeric = raw.strip_suffix(unit).unwrap_or(raw).trim().replace(',', "");
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from line `{line}`"))
}
