//! Closed-form conversions from annual heat demand to carrier consumption,
//! cost and emissions.
//!
//! Every function is pure and total over the validated input domain. Callers
//! must reject non-positive efficiencies, heating values and performance
//! factors before reaching this module; nothing here checks them.

/// Floor applied to the heat pump rated power before dividing by it (kW).
pub const RATED_POWER_EPSILON_KW: f64 = 1e-3;

/// Annual space heating demand of the building (kWh/a).
///
/// # Examples
///
/// ```
/// use heating_economics::model::formulas::annual_heat_demand;
///
/// assert_eq!(annual_heat_demand(110.0, 350.9), 110.0 * 350.9);
/// ```
pub fn annual_heat_demand(specific_demand_kwh_m2a: f64, living_area_m2: f64) -> f64 {
    specific_demand_kwh_m2a * living_area_m2
}

/// Heating oil needed to cover `heat_demand_kwh` (litres).
///
/// # Arguments
///
/// * `heat_demand_kwh` - Annual heat demand (kWh)
/// * `heating_value_kwh_per_l` - Energy content of the oil (kWh/L, > 0)
/// * `efficiency` - Overall boiler and distribution efficiency (0, 1]
pub fn oil_consumption(heat_demand_kwh: f64, heating_value_kwh_per_l: f64, efficiency: f64) -> f64 {
    fuel_consumption(heat_demand_kwh, heating_value_kwh_per_l, efficiency)
}

/// Natural gas needed to cover `heat_demand_kwh` (m³).
///
/// Same shape as [`oil_consumption`] with the gas heating value in kWh/m³.
pub fn gas_consumption(
    heat_demand_kwh: f64,
    heating_value_kwh_per_m3: f64,
    efficiency: f64,
) -> f64 {
    fuel_consumption(heat_demand_kwh, heating_value_kwh_per_m3, efficiency)
}

fn fuel_consumption(heat_demand_kwh: f64, heating_value: f64, efficiency: f64) -> f64 {
    heat_demand_kwh / (efficiency * heating_value)
}

/// Electricity drawn by the heat pump over the year (kWh).
pub fn heat_pump_electricity_demand(heat_demand_kwh: f64, seasonal_performance_factor: f64) -> f64 {
    heat_demand_kwh / seasonal_performance_factor
}

/// Estimated annual PV generation (kWh).
///
/// Informational only: the heat pump terms use the separately supplied
/// coverage fraction, not this figure.
pub fn solar_annual_yield(peak_power_kwp: f64, specific_yield_kwh_per_kwp: f64) -> f64 {
    peak_power_kwp * specific_yield_kwh_per_kwp
}

/// Splits the heat pump electricity into its solar and grid portions (kWh).
///
/// The grid portion is clamped at zero so a coverage fraction marginally
/// above one never produces a negative grid draw.
pub fn split_electricity(electricity_kwh: f64, coverage_fraction: f64) -> (f64, f64) {
    let solar_kwh = electricity_kwh * coverage_fraction;
    let grid_kwh = (electricity_kwh * (1.0 - coverage_fraction)).max(0.0);
    (solar_kwh, grid_kwh)
}

/// Annual electricity cost of the heat pump variant.
///
/// Solar-covered electricity is priced at the levelized cost, the remainder
/// at the grid tariff.
pub fn heat_pump_cost(
    electricity_kwh: f64,
    coverage_fraction: f64,
    grid_price_per_kwh: f64,
    levelized_cost_per_kwh: f64,
) -> f64 {
    let (solar_kwh, grid_kwh) = split_electricity(electricity_kwh, coverage_fraction);
    solar_kwh * levelized_cost_per_kwh + grid_kwh * grid_price_per_kwh
}

/// Annual CO₂ emissions of the heat pump variant (kg).
///
/// Only grid electricity is counted; solar electricity carries no emissions.
pub fn heat_pump_emissions(
    electricity_kwh: f64,
    coverage_fraction: f64,
    grid_co2_kg_per_kwh: f64,
) -> f64 {
    let (_, grid_kwh) = split_electricity(electricity_kwh, coverage_fraction);
    grid_kwh * grid_co2_kg_per_kwh
}

/// Annual fuel cost: consumption times unit price.
pub fn fuel_cost(consumption: f64, price_per_unit: f64) -> f64 {
    consumption * price_per_unit
}

/// Annual fuel emissions: consumption times CO₂ factor (kg).
pub fn fuel_emissions(consumption: f64, co2_kg_per_unit: f64) -> f64 {
    consumption * co2_kg_per_unit
}

/// Full-load hours the heat pump needs to deliver the annual demand (h).
pub fn heat_pump_utilization_hours(heat_demand_kwh: f64, rated_power_kw: f64) -> f64 {
    heat_demand_kwh / rated_power_kw.max(RATED_POWER_EPSILON_KW)
}
