//! Greekstep CLI - Command Line Operations for the Sensitivity Laboratory
//!
//! This is the operational entry point for the greekstep workspace.
//!
//! # Commands
//!
//! - `greekstep sweep` - Run the estimator accuracy sweep and write a CSV
//! - `greekstep price` - Price one scenario and print its analytic Greeks
//! - `greekstep scenarios` - List the built-in market scenarios
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! pricer layers (greekstep_models, greekstep_risk) behind a unified
//! command-line interface. Scenario parameters come from the built-in table
//! or from a user-supplied TOML file; every scenario is validated here at
//! the boundary before it reaches the numerical core.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Greekstep sensitivity laboratory CLI
#[derive(Parser)]
#[command(name = "greekstep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the accuracy sweep over a grid of perturbation sizes
    Sweep {
        /// Built-in scenario name (see `greekstep scenarios`)
        #[arg(short, long, default_value = "atm-1y")]
        scenario: String,

        /// TOML file with scenario parameters (overrides --scenario)
        #[arg(short = 'f', long)]
        scenario_file: Option<String>,

        /// Output CSV path
        #[arg(short, long, default_value = "bs_fd_vs_complex.csv")]
        output: String,

        /// Decimal exponent of the smallest relative step size
        #[arg(long, default_value_t = -16.0, allow_hyphen_values = true)]
        start_exponent: f64,

        /// Decimal exponent of the largest relative step size
        #[arg(long, default_value_t = -4.0, allow_hyphen_values = true)]
        end_exponent: f64,

        /// Number of grid points
        #[arg(short, long, default_value_t = 24)]
        points: usize,
    },

    /// Price a scenario and print its analytic Delta and Gamma
    Price {
        /// Built-in scenario name (see `greekstep scenarios`)
        #[arg(short, long, default_value = "atm-1y")]
        scenario: String,

        /// TOML file with scenario parameters (overrides --scenario)
        #[arg(short = 'f', long)]
        scenario_file: Option<String>,
    },

    /// List the built-in market scenarios
    Scenarios,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sweep {
            scenario,
            scenario_file,
            output,
            start_exponent,
            end_exponent,
            points,
        } => commands::sweep::run(
            &scenario,
            scenario_file.as_deref(),
            &output,
            start_exponent,
            end_exponent,
            points,
        ),
        Commands::Price {
            scenario,
            scenario_file,
        } => commands::price::run(&scenario, scenario_file.as_deref()),
        Commands::Scenarios => commands::scenarios::run(),
    }
}
