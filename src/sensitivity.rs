//! Single-case sensitivity of annual costs to heat demand and JAZ.

use serde::Serialize;

use crate::model::{self, HeatingResult, InputParameters, Variant};

/// Alternative values for the two parameters the comparison is most
/// sensitive to. `None` keeps the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SensitivityCase {
    /// Alternative specific heat demand (kWh/m²a, > 0).
    pub specific_heat_demand_kwh_m2a: Option<f64>,
    /// Alternative heat pump seasonal performance factor (> 0).
    pub seasonal_performance_factor: Option<f64>,
}

impl SensitivityCase {
    /// Returns `true` when the case changes nothing.
    pub fn is_empty(&self) -> bool {
        self.specific_heat_demand_kwh_m2a.is_none() && self.seasonal_performance_factor.is_none()
    }

    /// Applies the case on top of `base`.
    pub fn apply(&self, base: &InputParameters) -> InputParameters {
        let mut params = *base;
        if let Some(demand) = self.specific_heat_demand_kwh_m2a {
            params.building.specific_heat_demand_kwh_m2a = demand;
        }
        if let Some(jaz) = self.seasonal_performance_factor {
            params.heat_pump.seasonal_performance_factor = jaz;
        }
        params
    }
}

/// Annual costs under a sensitivity case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityResult {
    /// Specific heat demand actually used (kWh/m²a).
    pub specific_heat_demand_kwh_m2a: f64,
    /// JAZ actually used.
    pub seasonal_performance_factor: f64,
    /// Full recomputed comparison.
    pub result: HeatingResult,
}

impl SensitivityResult {
    /// Annual cost of `variant` under this case.
    pub fn cost(&self, variant: Variant) -> f64 {
        self.result.variant(variant).cost
    }
}

/// Recomputes the comparison with the case applied to `base`.
pub fn evaluate(base: &InputParameters, case: &SensitivityCase) -> SensitivityResult {
    let params = case.apply(base);
    SensitivityResult {
        specific_heat_demand_kwh_m2a: params.building.specific_heat_demand_kwh_m2a,
        seasonal_performance_factor: params.heat_pump.seasonal_performance_factor,
        result: model::compute(&params),
    }
}
