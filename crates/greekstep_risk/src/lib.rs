//! # greekstep_risk: Greek Estimators and Accuracy Sweep
//!
//! ## Layer 3 Role
//!
//! greekstep_risk hosts the derivative-estimation engine that the whole
//! workspace exists for:
//!
//! - `greeks`: analytic Delta/Gamma plus forward-difference and complex-step
//!   estimators built on the Layer 2 pricers
//! - `grid`: the logarithmically spaced step-size grid
//! - `sweep`: the [`sweep::ComparisonRecord`] row type, the
//!   [`sweep::RecordSink`] abstraction, and the [`sweep::run_sweep`] driver
//!
//! ## Error Policy
//!
//! The estimators are total functions: a zero or negative perturbation yields
//! inf/NaN/sign-flipped values rather than an error, because the sweep exists
//! to observe exactly that kind of degradation. Sinks are the boundary and do
//! return typed errors.
//!
//! ## Usage Example
//!
//! ```rust
//! use greekstep_models::MarketScenario;
//! use greekstep_risk::{grid::log_grid, sweep::{run_sweep, MemorySink}};
//!
//! let scenario = MarketScenario::new(100.0, 100.0, 0.0, 0.0, 0.20, 1.0).unwrap();
//! let mut sink = MemorySink::default();
//! run_sweep(&scenario, &log_grid(-16.0, -4.0, 24), &mut sink).unwrap();
//! assert_eq!(sink.records.len(), 24);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod greeks;
pub mod grid;
pub mod sweep;
