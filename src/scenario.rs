//! A validated scenario: project metadata plus model inputs.

use serde::Serialize;

use crate::model::InputParameters;
use crate::sensitivity::SensitivityCase;

/// Descriptive project data carried into reports and exports.
///
/// None of these fields enter the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInfo {
    /// Project number.
    pub id: String,
    /// Street and house number.
    pub street: String,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
    /// Year of construction.
    pub year_built: u16,
    /// Construction or renovation standard.
    pub construction: String,
    /// Number of dwelling units.
    pub dwelling_units: u32,
    /// Installed battery capacity (kWh).
    pub storage_capacity_kwh: f64,
}

impl ProjectInfo {
    /// Single-line postal address, `"street, postal_code city"`.
    pub fn address(&self) -> String {
        format!("{}, {} {}", self.street, self.postal_code, self.city)
    }

    /// Default export file name for this project.
    pub fn export_file_name(&self) -> String {
        let id: String = self
            .id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("heating_comparison_{id}.csv")
    }
}

/// Everything needed for one run, already checked against the input domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Project metadata.
    pub project: ProjectInfo,
    /// Model inputs.
    pub params: InputParameters,
    /// Optional sensitivity case.
    pub sensitivity: Option<SensitivityCase>,
}
