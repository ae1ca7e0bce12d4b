//! Derived comparison figures.

use std::fmt;

use serde::Serialize;

/// One of the three compared heating variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Existing oil boiler.
    Oil,
    /// Gas condensing boiler.
    Gas,
    /// Heat pump with PV and battery.
    HeatPump,
}

impl Variant {
    /// All variants in report order.
    pub const ALL: [Variant; 3] = [Variant::Oil, Variant::Gas, Variant::HeatPump];

    /// Stable machine-readable key.
    pub fn key(self) -> &'static str {
        match self {
            Variant::Oil => "oil",
            Variant::Gas => "gas",
            Variant::HeatPump => "heat_pump",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Annual consumption, cost and emissions of a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariantResult {
    /// Energy carrier consumed per year (L oil, m³ gas or kWh electricity).
    pub consumption: f64,
    /// Energy cost per year (currency).
    pub cost: f64,
    /// CO₂ emissions per year (kg).
    pub co2_kg: f64,
}

/// Output of [`super::compute`] for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatingResult {
    /// Annual heat demand shared by all variants (kWh/a).
    pub heat_demand_kwh: f64,
    /// Estimated PV generation (kWh/a). Informational.
    pub solar_yield_kwh: f64,
    /// Oil boiler variant.
    pub oil: VariantResult,
    /// Gas boiler variant.
    pub gas: VariantResult,
    /// Heat pump + PV + storage variant.
    pub heat_pump: VariantResult,
    /// Heat pump full-load hours (h/a).
    pub heat_pump_utilization_hours: f64,
    /// Coverage fraction the heat pump figures were computed with.
    pub solar_coverage_fraction: f64,
}

impl HeatingResult {
    /// Figures for the given variant.
    pub fn variant(&self, variant: Variant) -> &VariantResult {
        match variant {
            Variant::Oil => &self.oil,
            Variant::Gas => &self.gas,
            Variant::HeatPump => &self.heat_pump,
        }
    }

    /// Variant with the lowest annual cost. Ties resolve to report order.
    pub fn cheapest(&self) -> Variant {
        self.min_by_key(|v| v.cost)
    }

    /// Variant with the lowest annual emissions. Ties resolve to report order.
    pub fn lowest_emissions(&self) -> Variant {
        self.min_by_key(|v| v.co2_kg)
    }

    fn min_by_key(&self, key: impl Fn(&VariantResult) -> f64) -> Variant {
        let mut best = Variant::Oil;
        for variant in Variant::ALL {
            if key(self.variant(variant)) < key(self.variant(best)) {
                best = variant;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figures(cost: f64, co2_kg: f64) -> VariantResult {
        VariantResult {
            consumption: 1.0,
            cost,
            co2_kg,
        }
    }

    fn result(oil: VariantResult, gas: VariantResult, heat_pump: VariantResult) -> HeatingResult {
        HeatingResult {
            heat_demand_kwh: 1.0,
            solar_yield_kwh: 0.0,
            oil,
            gas,
            heat_pump,
            heat_pump_utilization_hours: 0.0,
            solar_coverage_fraction: 0.0,
        }
    }

    #[test]
    fn picks_cheapest_and_cleanest_independently() {
        let r = result(figures(900.0, 100.0), figures(800.0, 300.0), figures(850.0, 50.0));
        assert_eq!(r.cheapest(), Variant::Gas);
        assert_eq!(r.lowest_emissions(), Variant::HeatPump);
    }

    #[test]
    fn ties_keep_report_order() {
        let same = figures(500.0, 500.0);
        let r = result(same, same, same);
        assert_eq!(r.cheapest(), Variant::Oil);
        assert_eq!(r.lowest_emissions(), Variant::Oil);
    }

    #[test]
    fn variant_keys_are_stable() {
        let keys: Vec<&str> = Variant::ALL.iter().map(|v| v.key()).collect();
        assert_eq!(keys, ["oil", "gas", "heat_pump"]);
    }
}
