//! Perturbation-size sweep over the Greek estimators.
//!
//! For each relative step size the sweep evaluates every estimator at the
//! fixed market scenario and emits one [`ComparisonRecord`] to a
//! caller-supplied [`RecordSink`]. Records are externalised immediately; no
//! state is retained between steps, and each record is independent of the
//! others (the loop is sequential by design, not by necessity).

use std::convert::Infallible;

use greekstep_models::MarketScenario;

use crate::greeks;

/// One row of the accuracy comparison, produced per perturbation size.
///
/// Errors are absolute differences against the analytic baseline. The field
/// order matches [`ComparisonRecord::FIELD_NAMES`], which sinks use as the
/// CSV header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRecord {
    /// Relative perturbation size supplied by the grid.
    pub h_rel: f64,
    /// Absolute perturbation h = h_rel · S.
    pub h: f64,
    /// Closed-form Delta.
    pub delta_analytic: f64,
    /// Forward-difference Delta.
    pub delta_fd: f64,
    /// Complex-step Delta.
    pub delta_cs: f64,
    /// |Delta_fd − Delta_analytic|.
    pub err_delta_fd: f64,
    /// |Delta_cs − Delta_analytic|.
    pub err_delta_cs: f64,
    /// Closed-form Gamma.
    pub gamma_analytic: f64,
    /// Three-point forward-difference Gamma.
    pub gamma_fd: f64,
    /// Complex-step Gamma, real-part trick.
    pub gamma_cs_real: f64,
    /// Complex-step Gamma, 45°-rotated perturbation.
    pub gamma_cs_rotated: f64,
    /// |Gamma_fd − Gamma_analytic|.
    pub err_gamma_fd: f64,
    /// |Gamma_cs_real − Gamma_analytic|.
    pub err_gamma_cs_real: f64,
    /// |Gamma_cs_45 − Gamma_analytic|.
    pub err_gamma_cs_rotated: f64,
}

impl ComparisonRecord {
    /// Column names, in emission order.
    pub const FIELD_NAMES: [&'static str; 14] = [
        "h_rel",
        "h",
        "Delta_analytic",
        "Delta_fd",
        "Delta_cs",
        "err_D_fd",
        "err_D_cs",
        "Gamma_analytic",
        "Gamma_fd",
        "Gamma_cs_real",
        "Gamma_cs_45",
        "err_G_fd",
        "err_G_cs_real",
        "err_G_cs_45",
    ];

    /// Evaluates every estimator at `h = h_rel · S` on the given scenario.
    pub fn evaluate(scenario: &MarketScenario, h_rel: f64) -> Self {
        let h = h_rel * scenario.spot;

        let delta_analytic = greeks::delta_analytic(scenario);
        let delta_fd = greeks::delta_forward(scenario, h);
        let delta_cs = greeks::delta_complex_step(scenario, h);

        let gamma_analytic = greeks::gamma_analytic(scenario);
        let gamma_fd = greeks::gamma_forward(scenario, h);
        let gamma_cs_real = greeks::gamma_complex_step_real(scenario, h);
        let gamma_cs_rotated = greeks::gamma_complex_step_rotated(scenario, h);

        Self {
            h_rel,
            h,
            delta_analytic,
            delta_fd,
            delta_cs,
            err_delta_fd: (delta_fd - delta_analytic).abs(),
            err_delta_cs: (delta_cs - delta_analytic).abs(),
            gamma_analytic,
            gamma_fd,
            gamma_cs_real,
            gamma_cs_rotated,
            err_gamma_fd: (gamma_fd - gamma_analytic).abs(),
            err_gamma_cs_real: (gamma_cs_real - gamma_analytic).abs(),
            err_gamma_cs_rotated: (gamma_cs_rotated - gamma_analytic).abs(),
        }
    }

    /// Field values in [`Self::FIELD_NAMES`] order.
    pub fn values(&self) -> [f64; 14] {
        [
            self.h_rel,
            self.h,
            self.delta_analytic,
            self.delta_fd,
            self.delta_cs,
            self.err_delta_fd,
            self.err_delta_cs,
            self.gamma_analytic,
            self.gamma_fd,
            self.gamma_cs_real,
            self.gamma_cs_rotated,
            self.err_gamma_fd,
            self.err_gamma_cs_real,
            self.err_gamma_cs_rotated,
        ]
    }
}

/// Destination for comparison records.
///
/// Implementations own formatting and persistence; the sweep itself never
/// buffers. Sink failures are the only error path the sweep has.
pub trait RecordSink {
    /// Error raised when a record cannot be externalised.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Externalises one record.
    fn write(&mut self, record: &ComparisonRecord) -> Result<(), Self::Error>;
}

/// In-memory sink, mainly for tests and library callers.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Records in arrival order.
    pub records: Vec<ComparisonRecord>,
}

impl RecordSink for MemorySink {
    type Error = Infallible;

    fn write(&mut self, record: &ComparisonRecord) -> Result<(), Infallible> {
        self.records.push(*record);
        Ok(())
    }
}

/// Runs every estimator once per grid entry, emitting records in grid order.
pub fn run_sweep<S: RecordSink>(
    scenario: &MarketScenario,
    h_rels: &[f64],
    sink: &mut S,
) -> Result<(), S::Error> {
    for &h_rel in h_rels {
        sink.write(&ComparisonRecord::evaluate(scenario, h_rel))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_one_year() -> MarketScenario {
        MarketScenario::new(100.0, 100.0, 0.0, 0.0, 0.20, 1.0).unwrap()
    }

    #[test]
    fn test_record_scales_perturbation_by_spot() {
        let record = ComparisonRecord::evaluate(&atm_one_year(), 1e-6);
        assert_relative_eq!(record.h, 1e-4, epsilon = 1e-12);
    }

    #[test]
    fn test_record_errors_are_absolute_differences() {
        let record = ComparisonRecord::evaluate(&atm_one_year(), 1e-6);
        assert_eq!(
            record.err_delta_fd,
            (record.delta_fd - record.delta_analytic).abs()
        );
        assert_eq!(
            record.err_gamma_cs_rotated,
            (record.gamma_cs_rotated - record.gamma_analytic).abs()
        );
    }

    #[test]
    fn test_values_match_field_names_arity() {
        let record = ComparisonRecord::evaluate(&atm_one_year(), 1e-8);
        assert_eq!(record.values().len(), ComparisonRecord::FIELD_NAMES.len());
        assert_eq!(record.values()[0], record.h_rel);
        assert_eq!(record.values()[13], record.err_gamma_cs_rotated);
    }

    #[test]
    fn test_sweep_emits_one_record_per_step_in_order() {
        let grid = [1e-10, 1e-8, 1e-6];
        let mut sink = MemorySink::default();
        run_sweep(&atm_one_year(), &grid, &mut sink).unwrap();

        assert_eq!(sink.records.len(), 3);
        for (record, h_rel) in sink.records.iter().zip(grid) {
            assert_eq!(record.h_rel, h_rel);
        }
    }

    #[test]
    fn test_sweep_over_empty_grid_is_a_no_op() {
        let mut sink = MemorySink::default();
        run_sweep(&atm_one_year(), &[], &mut sink).unwrap();
        assert!(sink.records.is_empty());
    }
}
