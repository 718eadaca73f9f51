//! Scenario configuration: the built-in table and TOML scenario files.
//!
//! Every scenario's parameters are explicit, externally supplied data that
//! pass through [`MarketScenario::new`] validation before reaching the sweep.

use std::path::Path;

use greekstep_models::MarketScenario;
use serde::Deserialize;

use crate::{CliError, Result};

/// A named, documented set of market parameters shipped with the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinScenario {
    /// Primary name used on the command line.
    pub name: &'static str,
    /// Short numeric alias.
    pub alias: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend: f64,
    volatility: f64,
    expiry: f64,
}

impl BuiltinScenario {
    /// Validated scenario for this entry.
    pub fn scenario(&self) -> Result<MarketScenario> {
        Ok(MarketScenario::new(
            self.spot,
            self.strike,
            self.rate,
            self.dividend,
            self.volatility,
            self.expiry,
        )?)
    }
}

/// Built-in scenario table.
pub const BUILTINS: [BuiltinScenario; 2] = [
    BuiltinScenario {
        name: "atm-1y",
        alias: "1",
        description: "At the money, one year, 20% volatility",
        spot: 100.0,
        strike: 100.0,
        rate: 0.0,
        dividend: 0.0,
        volatility: 0.20,
        expiry: 1.0,
    },
    BuiltinScenario {
        name: "overnight",
        alias: "2",
        description: "At the money, one day, 1% volatility",
        spot: 100.0,
        strike: 100.0,
        rate: 0.0,
        dividend: 0.0,
        volatility: 0.01,
        expiry: 1.0 / 365.0,
    },
];

/// Looks up a built-in scenario by name or numeric alias.
pub fn builtin(name: &str) -> Option<&'static BuiltinScenario> {
    BUILTINS
        .iter()
        .find(|entry| entry.name == name || entry.alias == name)
}

/// Scenario parameters as they appear in a TOML file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    spot: f64,
    strike: f64,
    #[serde(default)]
    rate: f64,
    #[serde(default)]
    dividend: f64,
    volatility: f64,
    expiry: f64,
}

/// Loads and validates a scenario from a TOML file.
pub fn load_scenario_file(path: &str) -> Result<MarketScenario> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let raw = std::fs::read_to_string(path)?;
    let file: ScenarioFile = toml::from_str(&raw)?;
    Ok(MarketScenario::new(
        file.spot,
        file.strike,
        file.rate,
        file.dividend,
        file.volatility,
        file.expiry,
    )?)
}

/// Resolves the scenario for a command: file first, then built-in table.
pub fn resolve_scenario(name: &str, file: Option<&str>) -> Result<MarketScenario> {
    match file {
        Some(path) => load_scenario_file(path),
        None => builtin(name)
            .ok_or_else(|| CliError::UnknownScenario(name.to_string()))?
            .scenario(),
    }
}
