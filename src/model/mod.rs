//! Heating demand to cost and emissions conversion model.

/// Closed-form conversion formulas.
pub mod formulas;
pub mod params;
pub mod result;

pub use params::{Building, FuelSystem, HeatPump, InputParameters, SolarStorage};
pub use result::{HeatingResult, Variant, VariantResult};

use tracing::debug;

/// Computes the annual comparison for one parameter set.
///
/// Straight-line evaluation of the formulas in [`formulas`]. Identical inputs
/// always give bit-identical results.
pub fn compute(params: &InputParameters) -> HeatingResult {
    let InputParameters {
        building,
        oil,
        gas,
        heat_pump,
        solar,
    } = params;

    let heat_demand_kwh = formulas::annual_heat_demand(
        building.specific_heat_demand_kwh_m2a,
        building.living_area_m2,
    );
    let solar_yield_kwh =
        formulas::solar_annual_yield(solar.peak_power_kwp, solar.specific_yield_kwh_per_kwp);

    let oil_litres =
        formulas::oil_consumption(heat_demand_kwh, oil.heating_value_kwh, oil.efficiency);
    let gas_m3 = formulas::gas_consumption(heat_demand_kwh, gas.heating_value_kwh, gas.efficiency);
    let hp_kwh = formulas::heat_pump_electricity_demand(
        heat_demand_kwh,
        heat_pump.seasonal_performance_factor,
    );

    debug!(
        heat_demand_kwh,
        solar_yield_kwh, oil_litres, gas_m3, hp_kwh, "computed annual demand"
    );

    HeatingResult {
        heat_demand_kwh,
        solar_yield_kwh,
        oil: fuel_variant(oil_litres, oil),
        gas: fuel_variant(gas_m3, gas),
        heat_pump: VariantResult {
            consumption: hp_kwh,
            cost: formulas::heat_pump_cost(
                hp_kwh,
                solar.coverage_fraction,
                heat_pump.grid_price_per_kwh,
                solar.levelized_cost_per_kwh,
            ),
            co2_kg: formulas::heat_pump_emissions(
                hp_kwh,
                solar.coverage_fraction,
                solar.grid_co2_kg_per_kwh,
            ),
        },
        heat_pump_utilization_hours: formulas::heat_pump_utilization_hours(
            heat_demand_kwh,
            heat_pump.rated_power_kw,
        ),
        solar_coverage_fraction: solar.coverage_fraction,
    }
}

fn fuel_variant(consumption: f64, system: &FuelSystem) -> VariantResult {
    VariantResult {
        consumption,
        cost: formulas::fuel_cost(consumption, system.price),
        co2_kg: formulas::fuel_emissions(consumption, system.co2_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_parameters() -> InputParameters {
        InputParameters {
            building: Building {
                living_area_m2: 350.9,
                specific_heat_demand_kwh_m2a: 110.0,
            },
            oil: FuelSystem {
                heating_value_kwh: 10.0,
                efficiency: 0.85,
                price: 1.05,
                co2_kg: 2.65,
            },
            gas: FuelSystem {
                heating_value_kwh: 10.0,
                efficiency: 0.95,
                price: 1.20,
                co2_kg: 2.00,
            },
            heat_pump: HeatPump {
                rated_power_kw: 13.0,
                seasonal_performance_factor: 3.2,
                grid_price_per_kwh: 0.26,
            },
            solar: SolarStorage {
                peak_power_kwp: 24.5,
                specific_yield_kwh_per_kwp: 950.0,
                coverage_fraction: 0.20,
                levelized_cost_per_kwh: 0.12,
                grid_co2_kg_per_kwh: 0.35,
            },
        }
    }

    #[test]
    fn reference_building_figures() {
        let r = compute(&reference_parameters());
        assert_relative_eq!(r.heat_demand_kwh, 38_599.0, epsilon = 1e-6);
        assert_relative_eq!(r.solar_yield_kwh, 23_275.0, epsilon = 1e-6);
        assert_relative_eq!(r.oil.consumption, 4_541.06, epsilon = 1e-2);
        assert_relative_eq!(r.oil.cost, 4_768.11, epsilon = 1e-2);
        assert_relative_eq!(r.oil.co2_kg, 12_033.8, epsilon = 1e-1);
        assert_relative_eq!(r.gas.consumption, 38_599.0 / 9.5, epsilon = 1e-6);
        assert_relative_eq!(r.gas.cost, 38_599.0 / 9.5 * 1.2, epsilon = 1e-6);
        assert_relative_eq!(r.heat_pump.consumption, 12_062.1875, epsilon = 1e-6);
        assert_relative_eq!(r.heat_pump.cost, 2_798.43, epsilon = 1e-2);
        assert_relative_eq!(r.heat_pump.co2_kg, 9_649.75 * 0.35, epsilon = 1e-6);
        assert_relative_eq!(r.heat_pump_utilization_hours, 2_969.15, epsilon = 1e-2);
        assert_eq!(r.solar_coverage_fraction, 0.20);
    }

    #[test]
    fn compute_is_idempotent() {
        let params = reference_parameters();
        let first = compute(&params);
        let second = compute(&params);
        assert_eq!(first, second);
        assert_eq!(first.heat_pump.cost.to_bits(), second.heat_pump.cost.to_bits());
    }

    #[test]
    fn solar_yield_does_not_feed_heat_pump_terms() {
        let base = reference_parameters();
        let mut bigger_array = base;
        bigger_array.solar.peak_power_kwp = 80.0;

        let a = compute(&base);
        let b = compute(&bigger_array);
        assert!(b.solar_yield_kwh > a.solar_yield_kwh);
        assert_eq!(a.heat_pump, b.heat_pump);
    }

    #[test]
    fn reference_building_ranks_heat_pump_first_on_both_counts() {
        let r = compute(&reference_parameters());
        assert_eq!(r.cheapest(), Variant::HeatPump);
        assert_eq!(r.lowest_emissions(), Variant::HeatPump);
    }
}
