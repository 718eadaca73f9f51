//! Price command implementation.
//!
//! Prices one scenario and prints the analytic baseline a sweep would be
//! compared against.

use greekstep_models::black_scholes;
use greekstep_risk::greeks;
use tracing::info;

use crate::{config, Result};

/// Run the price command.
pub fn run(scenario_name: &str, scenario_file: Option<&str>) -> Result<()> {
    let scenario = config::resolve_scenario(scenario_name, scenario_file)?;

    info!("Pricing scenario...");

    let price = black_scholes::call_price(scenario.spot, &scenario);
    let delta = greeks::delta_analytic(&scenario);
    let gamma = greeks::gamma_analytic(&scenario);

    println!("Scenario:");
    println!("  S = {}, K = {}", scenario.spot, scenario.strike);
    println!(
        "  r = {}, q = {}, sigma = {}, T = {}",
        scenario.rate, scenario.dividend, scenario.volatility, scenario.expiry
    );
    println!("Call price      : {:.12}", price);
    println!("Delta (analytic): {:.12}", delta);
    println!("Gamma (analytic): {:.12}", gamma);

    Ok(())
}
