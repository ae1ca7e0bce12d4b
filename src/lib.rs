//! Annual cost and CO₂ comparison of oil, gas and heat pump + PV + storage heating.

pub mod cli;
/// TOML scenarios, presets and input validation.
pub mod config;
pub mod format;
pub mod io;
pub mod logging;
/// Heating demand to cost and emissions model.
pub mod model;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod sensitivity;
