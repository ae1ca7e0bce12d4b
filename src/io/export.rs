//! CSV export of one comparison: a header row and a single data row.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::HeatingResult;
use crate::scenario::Scenario;

/// Column header for the comparison export: project data, inputs, results.
const HEADER: &str = "project,address,year_built,construction,dwelling_units,\
                      living_area_m2,specific_heat_demand_kwh_m2a,\
                      oil_heating_value_kwh_per_l,oil_efficiency,oil_price_eur_per_l,oil_co2_kg_per_l,\
                      gas_heating_value_kwh_per_m3,gas_efficiency,gas_price_eur_per_m3,gas_co2_kg_per_m3,\
                      heat_pump_kw,hp_jaz,hp_grid_price_eur_per_kwh,\
                      pv_kwp,storage_kwh,pv_specific_yield_kwh_per_kwp,pv_coverage_hp,\
                      pv_lcoe_eur_per_kwh,grid_co2_kg_per_kwh,\
                      heat_demand_kwh_a,pv_yield_kwh_a,\
                      oil_liters_a,oil_cost_eur_a,gas_m3_a,gas_cost_eur_a,\
                      hp_electricity_kwh_a,hp_cost_eur_a,co2_oil_kg_a,co2_gas_kg_a,\
                      co2_hp_kg_a,hp_full_load_hours";

/// Exports a scenario and its result to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(scenario: &Scenario, result: &HeatingResult, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(scenario, result, buf)
}

/// Writes a scenario and its result as CSV to any writer.
///
/// Inputs are written at full precision so they read back unchanged; derived
/// figures use two decimals. Numbers always use `.` as decimal separator,
/// whatever the report locale.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(scenario: &Scenario, result: &HeatingResult, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    let project = &scenario.project;
    let p = &scenario.params;

    let inputs = [
        p.building.living_area_m2,
        p.building.specific_heat_demand_kwh_m2a,
        p.oil.heating_value_kwh,
        p.oil.efficiency,
        p.oil.price,
        p.oil.co2_kg,
        p.gas.heating_value_kwh,
        p.gas.efficiency,
        p.gas.price,
        p.gas.co2_kg,
        p.heat_pump.rated_power_kw,
        p.heat_pump.seasonal_performance_factor,
        p.heat_pump.grid_price_per_kwh,
        p.solar.peak_power_kwp,
        project.storage_capacity_kwh,
        p.solar.specific_yield_kwh_per_kwp,
        p.solar.coverage_fraction,
        p.solar.levelized_cost_per_kwh,
        p.solar.grid_co2_kg_per_kwh,
    ];
    let derived = [
        result.heat_demand_kwh,
        result.solar_yield_kwh,
        result.oil.consumption,
        result.oil.cost,
        result.gas.consumption,
        result.gas.cost,
        result.heat_pump.consumption,
        result.heat_pump.cost,
        result.oil.co2_kg,
        result.gas.co2_kg,
        result.heat_pump.co2_kg,
        result.heat_pump_utilization_hours,
    ];

    let mut row = vec![
        project.id.clone(),
        project.address(),
        project.year_built.to_string(),
        project.construction.clone(),
        project.dwelling_units.to_string(),
    ];
    // f64 Display is the shortest round-trip form and never uses an exponent
    row.extend(inputs.iter().map(f64::to_string));
    row.extend(derived.iter().map(|v| format!("{v:.2}")));

    wtr.write_record(HEADER.split(',').map(str::trim))?;
    wtr.write_record(&row)?;

    wtr.flush()?;
    Ok(())
}
