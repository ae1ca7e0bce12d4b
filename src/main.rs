//! Heating comparison entry point: CLI wiring, config loading and output.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use heating_economics::cli::{Cli, OutputFormat};
use heating_economics::config::{ConfigError, ScenarioConfig, ValidationErrors};
use heating_economics::io::export::export_csv;
use heating_economics::logging;
use heating_economics::report::ComparisonReport;
use heating_economics::runner::run_scenario;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level()) {
        eprintln!("warning: logging unavailable: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list_presets {
        for name in ScenarioConfig::PRESETS {
            println!("{name}");
        }
        return Ok(());
    }

    let source = cli.source();
    let mut config = ScenarioConfig::load(&source)?;
    info!(?source, "scenario loaded");

    for assignment in cli.all_overrides() {
        config.apply_override(&assignment)?;
    }

    let scenario = config.validated()?;
    let evaluation = run_scenario(&scenario);

    match cli.format {
        OutputFormat::Text => {
            let report = ComparisonReport {
                scenario: &scenario,
                result: &evaluation.result,
                sensitivity: evaluation.sensitivity.as_ref(),
                locale: cli.locale,
            };
            println!("{report}");
        }
        OutputFormat::Json => {
            let json = evaluation
                .to_json(&scenario)
                .context("failed to serialise results")?;
            println!("{json}");
        }
    }

    if let Some(path) = cli.export_path(&scenario.project) {
        export_csv(&scenario, &evaluation.result, &path)
            .with_context(|| format!("failed to write CSV \"{}\"", path.display()))?;
        eprintln!("Results written to {}", path.display());
    }

    Ok(())
}

/// Prints every field error on its own line; other errors with their cause chain.
fn print_error(err: &anyhow::Error) {
    let validation = err.downcast_ref::<ValidationErrors>().or_else(|| {
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Invalid(v)) => Some(v),
            _ => None,
        }
    });

    match validation {
        Some(v) => {
            eprintln!("error: {v}");
            for e in v.errors() {
                eprintln!("  {e}");
            }
        }
        None => eprintln!("error: {err:#}"),
    }
}
