//! Plain-text comparison report.

use std::fmt;

use crate::format::Locale;
use crate::model::{HeatingResult, Variant};
use crate::scenario::Scenario;
use crate::sensitivity::SensitivityResult;

struct Labels {
    title: &'static str,
    address: &'static str,
    year_built: &'static str,
    dwelling_units: &'static str,
    systems: &'static str,
    key_figures: &'static str,
    heat_demand: &'static str,
    solar_yield: &'static str,
    utilization: &'static str,
    coverage: &'static str,
    comparison: &'static str,
    variant: &'static str,
    carrier: &'static str,
    cost: &'static str,
    co2: &'static str,
    cheapest: &'static str,
    cleanest: &'static str,
    sensitivity: &'static str,
    note: &'static str,
}

const DE: Labels = Labels {
    title: "Heizungsvergleich",
    address: "Adresse",
    year_built: "Baujahr",
    dwelling_units: "Wohneinheiten",
    systems: "PV / Speicher / WP",
    key_figures: "Kennzahlen",
    heat_demand: "Jahres-Heizwärmebedarf",
    solar_yield: "PV-Erzeugung (Schätzung)",
    utilization: "WP-Vollbenutzungsstunden",
    coverage: "PV-Deckung WP (Jahr)",
    comparison: "Variantenvergleich",
    variant: "Variante",
    carrier: "Energieträger/Jahr",
    cost: "Kosten/Jahr",
    co2: "CO₂/Jahr",
    cheapest: "Günstigste Variante",
    cleanest: "Geringste Emissionen",
    sensitivity: "Sensitivität",
    note: "Hinweis: Die PV-Deckung wirkt überwiegend in Übergangszeit und Sommer; \
           trotz Speicher ist die Winterdeckung begrenzt. Eine Optimierung der \
           Vorlauftemperatur, Hydraulikabgleich und intelligente WP-Fahrpläne \
           können die JAZ deutlich verbessern.",
};

const EN: Labels = Labels {
    title: "Heating comparison",
    address: "Address",
    year_built: "Year built",
    dwelling_units: "Dwelling units",
    systems: "PV / storage / HP",
    key_figures: "Key figures",
    heat_demand: "Annual heat demand",
    solar_yield: "PV generation (estimate)",
    utilization: "HP full-load hours",
    coverage: "PV coverage of HP (year)",
    comparison: "Variant comparison",
    variant: "Variant",
    carrier: "Carrier/yr",
    cost: "Cost/yr",
    co2: "CO₂/yr",
    cheapest: "Cheapest variant",
    cleanest: "Lowest emissions",
    sensitivity: "Sensitivity",
    note: "Note: PV coverage occurs mostly in spring, summer and autumn; \
           even with storage, winter coverage is limited. Optimising the flow \
           temperature, hydraulic balancing and smart heat pump schedules can \
           raise the JAZ noticeably.",
};

fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::De => &DE,
        Locale::En => &EN,
    }
}

/// Display label of a variant in the report language.
pub fn variant_label(variant: Variant, locale: Locale) -> &'static str {
    match (locale, variant) {
        (Locale::De, Variant::Oil) => "Öl (Bestand)",
        (Locale::De, Variant::Gas) => "Gas (Brennwert)",
        (Locale::De, Variant::HeatPump) => "Wärmepumpe + PV + Speicher",
        (Locale::En, Variant::Oil) => "Oil (existing)",
        (Locale::En, Variant::Gas) => "Gas (condensing)",
        (Locale::En, Variant::HeatPump) => "Heat pump + PV + storage",
    }
}

fn carrier_amount(result: &HeatingResult, variant: Variant, locale: Locale) -> String {
    let consumption = result.variant(variant).consumption;
    match variant {
        Variant::Oil => locale.liters(consumption, 0),
        Variant::Gas => locale.cubic_meters(consumption, 0),
        Variant::HeatPump => locale.kwh(consumption, 0),
    }
}

/// Renders a scenario and its computed figures as a text report.
pub struct ComparisonReport<'a> {
    /// Scenario the figures belong to.
    pub scenario: &'a Scenario,
    /// Base case result.
    pub result: &'a HeatingResult,
    /// Sensitivity case, if one was requested.
    pub sensitivity: Option<&'a SensitivityResult>,
    /// Number and label language.
    pub locale: Locale,
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = labels(self.locale);
        let loc = self.locale;
        let project = &self.scenario.project;
        let params = &self.scenario.params;
        let r = self.result;

        writeln!(f, "=== {}: {} ===", l.title, project.id)?;
        writeln!(f, "{:<26} {}", format!("{}:", l.address), project.address())?;
        writeln!(
            f,
            "{:<26} {} ({})",
            format!("{}:", l.year_built),
            project.year_built,
            project.construction
        )?;
        writeln!(
            f,
            "{:<26} {}",
            format!("{}:", l.dwelling_units),
            project.dwelling_units
        )?;
        writeln!(
            f,
            "{:<26} {} kWp / {} kWh / {} kW",
            format!("{}:", l.systems),
            loc.number(params.solar.peak_power_kwp, 1),
            loc.number(project.storage_capacity_kwh, 0),
            loc.number(params.heat_pump.rated_power_kw, 1)
        )?;

        writeln!(f, "\n--- {} ---", l.key_figures)?;
        writeln!(
            f,
            "{:<26} {}",
            format!("{}:", l.heat_demand),
            loc.kwh(r.heat_demand_kwh, 0)
        )?;
        writeln!(
            f,
            "{:<26} {}",
            format!("{}:", l.solar_yield),
            loc.kwh(r.solar_yield_kwh, 0)
        )?;
        writeln!(
            f,
            "{:<26} {}",
            format!("{}:", l.utilization),
            loc.hours(r.heat_pump_utilization_hours, 0)
        )?;
        writeln!(
            f,
            "{:<26} {}",
            format!("{}:", l.coverage),
            loc.percent(r.solar_coverage_fraction)
        )?;

        writeln!(f, "\n--- {} ---", l.comparison)?;
        writeln!(
            f,
            "{:<28} {:>18} {:>14} {:>10}",
            l.variant, l.carrier, l.cost, l.co2
        )?;
        for variant in Variant::ALL {
            let v = r.variant(variant);
            writeln!(
                f,
                "{:<28} {:>18} {:>14} {:>10}",
                variant_label(variant, loc),
                carrier_amount(r, variant, loc),
                loc.euro(v.cost, 0),
                loc.tonnes(v.co2_kg, 2)
            )?;
        }
        writeln!(
            f,
            "{:<26} {}",
            format!("{}:", l.cheapest),
            variant_label(r.cheapest(), loc)
        )?;
        writeln!(
            f,
            "{:<26} {}",
            format!("{}:", l.cleanest),
            variant_label(r.lowest_emissions(), loc)
        )?;

        if let Some(sens) = self.sensitivity {
            writeln!(
                f,
                "\n--- {} ({} kWh/m²a, JAZ {}) ---",
                l.sensitivity,
                loc.number(sens.specific_heat_demand_kwh_m2a, 0),
                loc.number(sens.seasonal_performance_factor, 1)
            )?;
            for variant in Variant::ALL {
                writeln!(
                    f,
                    "{:<28} {:>14}",
                    variant_label(variant, loc),
                    loc.euro(sens.cost(variant), 0)
                )?;
            }
        }

        write!(f, "\n{}", l.note)
    }
}
