//! TOML-based scenario configuration, preset definitions and input validation.
//!
//! This is the only boundary into the model: [`ScenarioConfig::validated`]
//! rejects every out-of-domain value before an [`InputParameters`] is built.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{Building, FuelSystem, HeatPump, InputParameters, SolarStorage};
use crate::scenario::{ProjectInfo, Scenario};
use crate::sensitivity::SensitivityCase;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Building envelope.
    #[serde(default)]
    pub building: BuildingConfig,
    /// Oil boiler variant.
    #[serde(default)]
    pub oil: OilConfig,
    /// Gas condensing boiler variant.
    #[serde(default)]
    pub gas: GasConfig,
    /// Heat pump variant.
    #[serde(default)]
    pub heat_pump: HeatPumpConfig,
    /// PV and battery storage.
    #[serde(default)]
    pub solar: SolarConfig,
    /// Optional sensitivity case.
    #[serde(default)]
    pub sensitivity: SensitivityConfig,
}

/// Project metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project number.
    pub id: String,
    /// Street and house number.
    pub street: String,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
    /// Year of construction (1850-2100).
    pub year_built: u16,
    /// Construction or renovation standard.
    pub construction: String,
    /// Number of dwelling units (>= 1).
    pub dwelling_units: u32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            id: "PRJ-2025-001".to_string(),
            street: "Musterstraße 1".to_string(),
            postal_code: "79098".to_string(),
            city: "Freiburg im Breisgau".to_string(),
            year_built: 1994,
            construction: "teilsaniert".to_string(),
            dwelling_units: 5,
        }
    }
}

/// Building envelope parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingConfig {
    /// Total heated living area (m², > 0).
    pub living_area_m2: f64,
    /// Specific annual heat demand (kWh/m²a, > 0).
    pub specific_heat_demand_kwh_m2a: f64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            living_area_m2: 350.9,
            specific_heat_demand_kwh_m2a: 110.0,
        }
    }
}

/// Oil boiler parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OilConfig {
    /// Heating value of light heating oil (kWh/L).
    pub heating_value_kwh_per_l: f64,
    /// Overall efficiency including distribution (0.0-1.0].
    pub efficiency: f64,
    /// Oil price (€/L).
    pub price_per_l: f64,
    /// CO₂ factor (kg/L).
    pub co2_kg_per_l: f64,
}

impl Default for OilConfig {
    fn default() -> Self {
        Self {
            heating_value_kwh_per_l: 10.0,
            efficiency: 0.85,
            price_per_l: 1.05,
            co2_kg_per_l: 2.65,
        }
    }
}

/// Gas condensing boiler parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GasConfig {
    /// Heating value of natural gas (kWh/m³).
    pub heating_value_kwh_per_m3: f64,
    /// Overall efficiency including distribution (0.0-1.0].
    pub efficiency: f64,
    /// Gas price (€/m³).
    pub price_per_m3: f64,
    /// CO₂ factor (kg/m³).
    pub co2_kg_per_m3: f64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            heating_value_kwh_per_m3: 10.0,
            efficiency: 0.95,
            price_per_m3: 1.20,
            co2_kg_per_m3: 2.00,
        }
    }
}

/// Heat pump parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatPumpConfig {
    /// Rated thermal power (kW, > 0).
    pub rated_power_kw: f64,
    /// Seasonal performance factor, JAZ (> 0).
    pub seasonal_performance_factor: f64,
    /// Heat pump grid tariff (€/kWh).
    pub grid_price_per_kwh: f64,
}

impl Default for HeatPumpConfig {
    fn default() -> Self {
        Self {
            rated_power_kw: 13.0,
            seasonal_performance_factor: 3.2,
            grid_price_per_kwh: 0.26,
        }
    }
}

/// PV and battery parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarConfig {
    /// Installed PV peak power (kWp).
    pub peak_power_kwp: f64,
    /// Battery capacity (kWh). Reported only.
    pub storage_capacity_kwh: f64,
    /// Specific PV yield (kWh/kWp·a).
    pub specific_yield_kwh_per_kwp: f64,
    /// Annual-average share of heat pump electricity from PV + battery (0.0-1.0).
    pub coverage_fraction: f64,
    /// Levelized cost of PV electricity (€/kWh).
    pub levelized_cost_per_kwh: f64,
    /// Grid electricity CO₂ factor (kg/kWh).
    pub grid_co2_kg_per_kwh: f64,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            peak_power_kwp: 24.5,
            storage_capacity_kwh: 40.0,
            specific_yield_kwh_per_kwp: 950.0,
            coverage_fraction: 0.20,
            levelized_cost_per_kwh: 0.12,
            grid_co2_kg_per_kwh: 0.35,
        }
    }
}

/// Sensitivity case. Unset fields keep the base value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensitivityConfig {
    /// Alternative specific heat demand (kWh/m²a).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_heat_demand_kwh_m2a: Option<f64>,
    /// Alternative JAZ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_performance_factor: Option<f64>,
}

/// A single rejected input value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Dotted field path (e.g., `"oil.efficiency"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

/// Every validation failure of one configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} invalid input value(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// The individual field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

/// Errors raised while loading or checking a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scenario file could not be read.
    #[error("cannot read scenario \"{}\": {source}", path.display())]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The TOML was malformed or contained unknown fields.
    #[error("invalid scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// No preset with that name.
    #[error("unknown preset \"{name}\", available: {}", ScenarioConfig::PRESETS.join(", "))]
    UnknownPreset {
        /// Requested preset name.
        name: String,
    },
    /// A `section.field=value` override could not be applied.
    #[error("invalid override \"{assignment}\": {message}")]
    Override {
        /// Override as given on the command line.
        assignment: String,
        /// What went wrong.
        message: String,
    },
    /// One or more values are outside their domain.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Where a scenario comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A TOML scenario file.
    File(PathBuf),
    /// A built-in preset by name.
    Preset(String),
}

impl ScenarioConfig {
    /// Loads a scenario from a file or preset.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::from_toml_file`] and [`Self::from_preset`].
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        match source {
            ConfigSource::File(path) => Self::from_toml_file(path),
            ConfigSource::Preset(name) => {
                debug!(preset = %name, "using built-in preset");
                Self::from_preset(name)
            }
        }
    }
}

impl ScenarioConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "renovated", "unrenovated"];

    /// Returns the baseline scenario: a partly renovated 1994 multi-family house.
    pub fn baseline() -> Self {
        Self {
            project: ProjectConfig::default(),
            building: BuildingConfig::default(),
            oil: OilConfig::default(),
            gas: GasConfig::default(),
            heat_pump: HeatPumpConfig::default(),
            solar: SolarConfig::default(),
            sensitivity: SensitivityConfig::default(),
        }
    }

    /// Returns the renovated preset: low heat demand, efficient heat pump.
    pub fn renovated() -> Self {
        Self {
            project: ProjectConfig {
                construction: "saniert".to_string(),
                ..ProjectConfig::default()
            },
            building: BuildingConfig {
                specific_heat_demand_kwh_m2a: 60.0,
                ..BuildingConfig::default()
            },
            heat_pump: HeatPumpConfig {
                rated_power_kw: 8.0,
                seasonal_performance_factor: 4.0,
                ..HeatPumpConfig::default()
            },
            solar: SolarConfig {
                coverage_fraction: 0.35,
                ..SolarConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the unrenovated preset: high heat demand, older boilers.
    pub fn unrenovated() -> Self {
        Self {
            project: ProjectConfig {
                construction: "unsaniert".to_string(),
                ..ProjectConfig::default()
            },
            building: BuildingConfig {
                specific_heat_demand_kwh_m2a: 180.0,
                ..BuildingConfig::default()
            },
            oil: OilConfig {
                efficiency: 0.78,
                ..OilConfig::default()
            },
            gas: GasConfig {
                efficiency: 0.88,
                ..GasConfig::default()
            },
            heat_pump: HeatPumpConfig {
                rated_power_kw: 20.0,
                seasonal_performance_factor: 2.6,
                ..HeatPumpConfig::default()
            },
            solar: SolarConfig {
                coverage_fraction: 0.15,
                ..SolarConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if the name is not in [`Self::PRESETS`].
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "renovated" => Ok(Self::renovated()),
            "unrenovated" => Ok(Self::unrenovated()),
            _ => Err(ConfigError::UnknownPreset {
                name: name.to_string(),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "reading scenario file");
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Applies a `section.field=value` override.
    ///
    /// The value is parsed as a TOML literal (`0.9`, `1994`, `"text"`); fields
    /// that hold text also accept it unquoted. The result is type-checked by
    /// deserialising the whole scenario again, so unknown fields and wrong
    /// types are rejected exactly as in a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Override`] if the assignment is malformed, names
    /// an unknown section or field, or has the wrong type.
    pub fn apply_override(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let fail = |message: String| ConfigError::Override {
            assignment: assignment.to_string(),
            message,
        };

        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| fail("expected `section.field=value`".to_string()))?;
        let (section, field) = key
            .trim()
            .split_once('.')
            .ok_or_else(|| fail("key must be `section.field`".to_string()))?;
        let raw = raw.trim();

        let mut doc = toml::Value::try_from(&*self).map_err(|e| fail(e.to_string()))?;
        let table = doc
            .get_mut(section)
            .and_then(toml::Value::as_table_mut)
            .ok_or_else(|| fail(format!("unknown section `{section}`")))?;

        let value = match (table.get(field), parse_literal(raw)) {
            (Some(toml::Value::String(_)), text @ toml::Value::String(_)) => text,
            (Some(toml::Value::String(_)), _) => toml::Value::String(raw.to_string()),
            (_, literal) => literal,
        };
        table.insert(field.to_string(), value);

        *self = doc
            .try_into()
            .map_err(|e: toml::de::Error| fail(e.to_string().trim_end().to_string()))?;
        debug!(section, field, value = raw, "applied override");
        Ok(())
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut c = Checks::default();

        let p = &self.project;
        if p.dwelling_units == 0 {
            c.push("project.dwelling_units", "must be >= 1");
        }
        if !(1850..=2100).contains(&p.year_built) {
            c.push("project.year_built", "must be in [1850, 2100]");
        }

        let b = &self.building;
        c.positive("building.living_area_m2", b.living_area_m2);
        c.positive(
            "building.specific_heat_demand_kwh_m2a",
            b.specific_heat_demand_kwh_m2a,
        );

        let oil = &self.oil;
        c.positive("oil.heating_value_kwh_per_l", oil.heating_value_kwh_per_l);
        c.efficiency("oil.efficiency", oil.efficiency);
        c.non_negative("oil.price_per_l", oil.price_per_l);
        c.non_negative("oil.co2_kg_per_l", oil.co2_kg_per_l);

        let gas = &self.gas;
        c.positive("gas.heating_value_kwh_per_m3", gas.heating_value_kwh_per_m3);
        c.efficiency("gas.efficiency", gas.efficiency);
        c.non_negative("gas.price_per_m3", gas.price_per_m3);
        c.non_negative("gas.co2_kg_per_m3", gas.co2_kg_per_m3);

        let hp = &self.heat_pump;
        c.positive("heat_pump.rated_power_kw", hp.rated_power_kw);
        c.positive(
            "heat_pump.seasonal_performance_factor",
            hp.seasonal_performance_factor,
        );
        c.non_negative("heat_pump.grid_price_per_kwh", hp.grid_price_per_kwh);

        let sol = &self.solar;
        c.non_negative("solar.peak_power_kwp", sol.peak_power_kwp);
        c.non_negative("solar.storage_capacity_kwh", sol.storage_capacity_kwh);
        c.non_negative(
            "solar.specific_yield_kwh_per_kwp",
            sol.specific_yield_kwh_per_kwp,
        );
        c.fraction("solar.coverage_fraction", sol.coverage_fraction);
        c.non_negative("solar.levelized_cost_per_kwh", sol.levelized_cost_per_kwh);
        c.non_negative("solar.grid_co2_kg_per_kwh", sol.grid_co2_kg_per_kwh);

        let sens = &self.sensitivity;
        if let Some(v) = sens.specific_heat_demand_kwh_m2a {
            c.positive("sensitivity.specific_heat_demand_kwh_m2a", v);
        }
        if let Some(v) = sens.seasonal_performance_factor {
            c.positive("sensitivity.seasonal_performance_factor", v);
        }

        c.errors
    }

    /// Valid but unusual inputs worth pointing out to the user.
    pub fn plausibility_hints(&self) -> Vec<String> {
        let mut hints = Vec::new();

        let demand = self.building.specific_heat_demand_kwh_m2a;
        if !(60.0..=220.0).contains(&demand) {
            hints.push(format!(
                "building.specific_heat_demand_kwh_m2a = {demand} is outside the usual 60-220 kWh/m²a"
            ));
        }
        let jaz = self.heat_pump.seasonal_performance_factor;
        if !(2.0..=5.0).contains(&jaz) {
            hints.push(format!(
                "heat_pump.seasonal_performance_factor = {jaz} is outside the usual 2.0-5.0"
            ));
        }
        let coverage = self.solar.coverage_fraction;
        if coverage > 0.6 {
            hints.push(format!(
                "solar.coverage_fraction = {coverage} exceeds 0.6; winter PV coverage is limited even with storage"
            ));
        }
        let yield_kwp = self.solar.specific_yield_kwh_per_kwp;
        if self.solar.peak_power_kwp > 0.0 && !(500.0..=1300.0).contains(&yield_kwp) {
            hints.push(format!(
                "solar.specific_yield_kwh_per_kwp = {yield_kwp} is outside the usual 500-1300 kWh/kWp"
            ));
        }
        if self.solar.levelized_cost_per_kwh > self.heat_pump.grid_price_per_kwh {
            hints.push(
                "solar.levelized_cost_per_kwh exceeds heat_pump.grid_price_per_kwh; \
                 heat pump cost then rises with solar coverage"
                    .to_string(),
            );
        }

        hints
    }

    /// Validates the configuration and builds the model inputs.
    ///
    /// Plausibility hints are logged as warnings and do not fail validation.
    ///
    /// # Errors
    ///
    /// Returns every [`FieldError`] found by [`Self::validate`].
    pub fn validated(&self) -> Result<Scenario, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }
        for hint in self.plausibility_hints() {
            warn!("{hint}");
        }

        let params = InputParameters {
            building: Building {
                living_area_m2: self.building.living_area_m2,
                specific_heat_demand_kwh_m2a: self.building.specific_heat_demand_kwh_m2a,
            },
            oil: FuelSystem {
                heating_value_kwh: self.oil.heating_value_kwh_per_l,
                efficiency: self.oil.efficiency,
                price: self.oil.price_per_l,
                co2_kg: self.oil.co2_kg_per_l,
            },
            gas: FuelSystem {
                heating_value_kwh: self.gas.heating_value_kwh_per_m3,
                efficiency: self.gas.efficiency,
                price: self.gas.price_per_m3,
                co2_kg: self.gas.co2_kg_per_m3,
            },
            heat_pump: HeatPump {
                rated_power_kw: self.heat_pump.rated_power_kw,
                seasonal_performance_factor: self.heat_pump.seasonal_performance_factor,
                grid_price_per_kwh: self.heat_pump.grid_price_per_kwh,
            },
            solar: SolarStorage {
                peak_power_kwp: self.solar.peak_power_kwp,
                specific_yield_kwh_per_kwp: self.solar.specific_yield_kwh_per_kwp,
                coverage_fraction: self.solar.coverage_fraction,
                levelized_cost_per_kwh: self.solar.levelized_cost_per_kwh,
                grid_co2_kg_per_kwh: self.solar.grid_co2_kg_per_kwh,
            },
        };

        let p = &self.project;
        let project = ProjectInfo {
            id: p.id.clone(),
            street: p.street.clone(),
            postal_code: p.postal_code.clone(),
            city: p.city.clone(),
            year_built: p.year_built,
            construction: p.construction.clone(),
            dwelling_units: p.dwelling_units,
            storage_capacity_kwh: self.solar.storage_capacity_kwh,
        };

        let case = SensitivityCase {
            specific_heat_demand_kwh_m2a: self.sensitivity.specific_heat_demand_kwh_m2a,
            seasonal_performance_factor: self.sensitivity.seasonal_performance_factor,
        };

        Ok(Scenario {
            project,
            params,
            sensitivity: (!case.is_empty()).then_some(case),
        })
    }
}

fn parse_literal(raw: &str) -> toml::Value {
    format!("value = {raw}")
        .parse::<toml::Table>()
        .ok()
        .and_then(|mut t| t.remove("value"))
        .unwrap_or_else(|| toml::Value::String(raw.to_string()))
}

#[derive(Default)]
struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    fn push(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn finite(&mut self, field: &str, value: f64) -> bool {
        if value.is_finite() {
            true
        } else {
            self.push(field, "must be a finite number");
            false
        }
    }

    fn positive(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && value <= 0.0 {
            self.push(field, "must be > 0");
        }
    }

    fn non_negative(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && value < 0.0 {
            self.push(field, "must be >= 0");
        }
    }

    fn fraction(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && !(0.0..=1.0).contains(&value) {
            self.push(field, "must be in [0.0, 1.0]");
        }
    }

    fn efficiency(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && !(value > 0.0 && value <= 1.0) {
            self.push(field, "must be in (0.0, 1.0]");
        }
    }
}
