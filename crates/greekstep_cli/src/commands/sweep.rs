//! Sweep command implementation.
//!
//! Runs every estimator over the step-size grid and streams one CSV row per
//! grid entry through a [`RecordSink`] backed by the csv crate.

use std::fs::File;

use greekstep_risk::grid::log_grid;
use greekstep_risk::sweep::{run_sweep, ComparisonRecord, RecordSink};
use tracing::info;

use crate::{config, CliError, Result};

/// CSV-backed record sink with fixed 12-digit scientific formatting.
struct CsvSink {
    writer: csv::Writer<File>,
}

impl CsvSink {
    fn create(path: &str) -> Result<Self> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(ComparisonRecord::FIELD_NAMES)?;
        Ok(Self { writer })
    }

    fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl RecordSink for CsvSink {
    type Error = csv::Error;

    fn write(&mut self, record: &ComparisonRecord) -> std::result::Result<(), csv::Error> {
        self.writer
            .write_record(record.values().map(|value| format!("{:.12e}", value)))
    }
}

/// Run the sweep command.
pub fn run(
    scenario_name: &str,
    scenario_file: Option<&str>,
    output: &str,
    start_exponent: f64,
    end_exponent: f64,
    points: usize,
) -> Result<()> {
    if points == 0 {
        return Err(CliError::InvalidArgument(
            "grid needs at least one point".to_string(),
        ));
    }

    let scenario = config::resolve_scenario(scenario_name, scenario_file)?;
    let grid = log_grid(start_exponent, end_exponent, points);

    info!("Running accuracy sweep...");
    info!("  Scenario: {:?}", scenario);
    info!(
        "  Grid: {} relative step sizes, 1e{} to 1e{}",
        points, start_exponent, end_exponent
    );
    info!("  Output: {}", output);

    let mut sink = CsvSink::create(output)?;
    run_sweep(&scenario, &grid, &mut sink)?;
    sink.finish()?;

    info!("Sweep complete: {} records written", points);
    Ok(())
}
