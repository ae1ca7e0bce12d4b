//! Runs a validated scenario through the model.

use serde::Serialize;
use tracing::{info, info_span};

use crate::model::{self, HeatingResult, InputParameters, Variant};
use crate::scenario::{ProjectInfo, Scenario};
use crate::sensitivity::{self, SensitivityResult};

/// Base case and optional sensitivity case of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Base case.
    pub result: HeatingResult,
    /// Sensitivity case, when the scenario defines one.
    pub sensitivity: Option<SensitivityResult>,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    project: &'a ProjectInfo,
    parameters: &'a InputParameters,
    result: &'a HeatingResult,
    cheapest: Variant,
    lowest_emissions: Variant,
    sensitivity: Option<&'a SensitivityResult>,
}

impl Evaluation {
    /// Serialises inputs and results as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialisation fails.
    pub fn to_json(&self, scenario: &Scenario) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonDocument {
            project: &scenario.project,
            parameters: &scenario.params,
            result: &self.result,
            cheapest: self.result.cheapest(),
            lowest_emissions: self.result.lowest_emissions(),
            sensitivity: self.sensitivity.as_ref(),
        })
    }
}

/// Computes the base case and, if requested, the sensitivity case.
pub fn run_scenario(scenario: &Scenario) -> Evaluation {
    let _span = info_span!("run_scenario", project = %scenario.project.id).entered();

    let result = model::compute(&scenario.params);
    info!(
        heat_demand_kwh = result.heat_demand_kwh,
        cheapest = %result.cheapest(),
        lowest_emissions = %result.lowest_emissions(),
        "comparison computed"
    );

    let sensitivity = scenario.sensitivity.map(|case| {
        let sens = sensitivity::evaluate(&scenario.params, &case);
        info!(
            specific_heat_demand_kwh_m2a = sens.specific_heat_demand_kwh_m2a,
            seasonal_performance_factor = sens.seasonal_performance_factor,
            "sensitivity case computed"
        );
        sens
    });

    Evaluation {
        result,
        sensitivity,
    }
}
