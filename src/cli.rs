//! Command-line options.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use crate::config::ConfigSource;
use crate::format::Locale;
use crate::logging;
use crate::scenario::ProjectInfo;

/// Preset used when neither `--scenario` nor `--preset` is given.
pub const DEFAULT_PRESET: &str = "baseline";

/// Output format for the comparison on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// JSON document with inputs and results.
    Json,
}

/// Compare annual cost and CO₂ of oil, gas and heat pump + PV + storage heating.
#[derive(Debug, Parser)]
#[command(name = "heating-economics", version, about)]
pub struct Cli {
    /// Load scenario from a TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,
    /// Use a built-in preset (baseline, renovated, unrenovated)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,
    /// Override a single value, e.g. `--set oil.price_per_l=1.10` (repeatable)
    #[arg(long = "set", value_name = "SECTION.FIELD=VALUE")]
    pub overrides: Vec<String>,
    /// Sensitivity: alternative specific heat demand (kWh/m²a)
    #[arg(long, value_name = "KWH_M2A")]
    pub sens_demand: Option<f64>,
    /// Sensitivity: alternative heat pump JAZ
    #[arg(long, value_name = "JAZ")]
    pub sens_jaz: Option<f64>,
    /// Write the comparison to a CSV file
    #[arg(long, value_name = "PATH", conflicts_with = "export_default")]
    pub export: Option<PathBuf>,
    /// Write the comparison to `heating_comparison_<project>.csv`
    #[arg(long)]
    pub export_default: bool,
    /// Output format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Number and label language of the text report (de, en)
    #[arg(long, value_enum, ignore_case = true, default_value_t = Locale::De)]
    pub locale: Locale,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// List built-in presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

impl Cli {
    /// Parses an explicit argument list (first item is the program name).
    ///
    /// # Errors
    ///
    /// Returns a `clap::Error` for unknown or conflicting arguments.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Scenario source selected on the command line.
    pub fn source(&self) -> ConfigSource {
        match (&self.scenario, &self.preset) {
            (Some(path), _) => ConfigSource::File(path.clone()),
            (None, Some(name)) => ConfigSource::Preset(name.clone()),
            (None, None) => ConfigSource::Preset(DEFAULT_PRESET.to_string()),
        }
    }

    /// All `section.field=value` overrides in application order.
    ///
    /// Sensitivity flags are expressed as overrides of the `sensitivity`
    /// section and come after explicit `--set` values.
    pub fn all_overrides(&self) -> Vec<String> {
        let mut overrides = self.overrides.clone();
        if let Some(demand) = self.sens_demand {
            overrides.push(format!("sensitivity.specific_heat_demand_kwh_m2a={demand:?}"));
        }
        if let Some(jaz) = self.sens_jaz {
            overrides.push(format!("sensitivity.seasonal_performance_factor={jaz:?}"));
        }
        overrides
    }

    /// Target path of the CSV export, if any.
    pub fn export_path(&self, project: &ProjectInfo) -> Option<PathBuf> {
        if let Some(path) = &self.export {
            Some(path.clone())
        } else if self.export_default {
            Some(PathBuf::from(project.export_file_name()))
        } else {
            None
        }
    }

    /// Maximum log level from `-q` / `-v`.
    pub fn log_level(&self) -> Level {
        logging::level_from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::parse_from_args(std::iter::once("heating-economics").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_baseline_preset() {
        let cli = parse(&[]).expect("parse should succeed");
        assert_eq!(cli.source(), ConfigSource::Preset("baseline".to_string()));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.locale, Locale::De);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn supports_scenario_cli() {
        let cli = parse(&["--scenario", "scenario.toml"]).expect("parse should succeed");
        assert_eq!(
            cli.source(),
            ConfigSource::File(PathBuf::from("scenario.toml"))
        );
    }

    #[test]
    fn scenario_and_preset_are_mutually_exclusive() {
        assert!(parse(&["--scenario", "a.toml", "--preset", "baseline"]).is_err());
    }

    #[test]
    fn export_flags_are_mutually_exclusive() {
        assert!(parse(&["--export", "out.csv", "--export-default"]).is_err());
    }

    #[test]
    fn collects_overrides_in_order() {
        let cli = parse(&[
            "--set",
            "oil.price_per_l=1.1",
            "--sens-jaz",
            "4",
            "--set",
            "gas.price_per_m3=1.3",
            "--sens-demand",
            "90",
        ])
        .expect("parse should succeed");
        assert_eq!(
            cli.all_overrides(),
            [
                "oil.price_per_l=1.1",
                "gas.price_per_m3=1.3",
                "sensitivity.specific_heat_demand_kwh_m2a=90.0",
                "sensitivity.seasonal_performance_factor=4.0",
            ]
        );
    }

    #[test]
    fn parses_format_locale_and_verbosity() {
        let cli = parse(&["--format", "json", "--locale", "en", "-vv"]).expect("parse should succeed");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.locale, Locale::En);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn locale_is_case_insensitive() {
        let cli = parse(&["--locale", "EN"]).expect("parse should succeed");
        assert_eq!(cli.locale, Locale::En);
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(parse(&["--locale", "fr"]).is_err());
    }
}
