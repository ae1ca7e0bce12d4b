//! Validated model inputs.
//!
//! Values of these types are only built by the configuration boundary
//! (see [`crate::config::ScenarioConfig::validated`]) or by tests. The model
//! trusts them to satisfy the documented ranges.

use serde::Serialize;

/// Complete, immutable parameter set for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputParameters {
    /// Building envelope data.
    pub building: Building,
    /// Oil boiler variant.
    pub oil: FuelSystem,
    /// Gas condensing boiler variant.
    pub gas: FuelSystem,
    /// Heat pump variant.
    pub heat_pump: HeatPump,
    /// PV and battery supporting the heat pump.
    pub solar: SolarStorage,
}

/// Building envelope data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Building {
    /// Heated living area (m², > 0).
    pub living_area_m2: f64,
    /// Specific annual heat demand (kWh/m²a, > 0).
    pub specific_heat_demand_kwh_m2a: f64,
}

/// A combustion heating system burning oil or gas.
///
/// Units depend on the carrier: litres for oil, cubic metres for gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelSystem {
    /// Energy content per unit of fuel (kWh/unit, > 0).
    pub heating_value_kwh: f64,
    /// Overall efficiency of generation and distribution (0, 1].
    pub efficiency: f64,
    /// Fuel price per unit (currency/unit, >= 0).
    pub price: f64,
    /// CO₂ emitted per unit burned (kg/unit, >= 0).
    pub co2_kg: f64,
}

/// Heat pump sizing and tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPump {
    /// Rated thermal power (kW). Only used for utilization hours.
    pub rated_power_kw: f64,
    /// Seasonal performance factor (JAZ, > 0).
    pub seasonal_performance_factor: f64,
    /// Grid electricity tariff (currency/kWh, >= 0).
    pub grid_price_per_kwh: f64,
}

/// On-site PV generation and battery storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarStorage {
    /// Installed peak power (kWp, >= 0).
    pub peak_power_kwp: f64,
    /// Specific annual yield (kWh/kWp·a, >= 0).
    pub specific_yield_kwh_per_kwp: f64,
    /// Share of heat pump electricity covered by PV and battery, annual mean [0, 1].
    pub coverage_fraction: f64,
    /// Levelized cost of PV electricity (currency/kWh, >= 0).
    pub levelized_cost_per_kwh: f64,
    /// CO₂ intensity of grid electricity (kg/kWh, >= 0).
    pub grid_co2_kg_per_kwh: f64,
}
