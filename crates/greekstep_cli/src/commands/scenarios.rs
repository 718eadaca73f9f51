//! Scenarios command implementation.

use crate::{config, Result};

/// Run the scenarios command: list the built-in table.
pub fn run() -> Result<()> {
    println!("Built-in scenarios:");
    for entry in &config::BUILTINS {
        let scenario = entry.scenario()?;
        println!(
            "  {:<10} (alias {}) - {}",
            entry.name, entry.alias, entry.description
        );
        println!(
            "      S = {}, K = {}, r = {}, q = {}, sigma = {}, T = {:.6}",
            scenario.spot,
            scenario.strike,
            scenario.rate,
            scenario.dividend,
            scenario.volatility,
            scenario.expiry
        );
    }
    Ok(())
}
