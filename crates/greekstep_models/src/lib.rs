//! # greekstep_models: Scenario and Pricing Layer
//!
//! ## Layer 2 Role
//!
//! greekstep_models sits between the mathematical foundation
//! (greekstep_core) and the risk engine (greekstep_risk), providing:
//!
//! - [`MarketScenario`]: the immutable (S, K, r, q, σ, T) value type with a
//!   validating constructor
//! - `moneyness`: the cancellation-safe log-moneyness term as two free
//!   functions, [`moneyness::d1_real`] and [`moneyness::d1_complex`]
//! - `black_scholes`: the European call pricer, instantiated once for real
//!   spots and once for complex-perturbed spots
//!
//! ## Error Policy
//!
//! Validation happens once, at [`MarketScenario::new`]. The pricing functions
//! themselves are total: malformed inputs reaching them produce IEEE-754
//! special values, never panics, so that sensitivity sweeps can observe the
//! degradation directly.
//!
//! ## Usage Example
//!
//! ```rust
//! use greekstep_models::{black_scholes, MarketScenario};
//!
//! let scenario = MarketScenario::new(100.0, 100.0, 0.0, 0.0, 0.20, 1.0)?;
//! let price = black_scholes::call_price(scenario.spot, &scenario);
//! assert!((price - 7.9656).abs() < 1e-4);
//! # Ok::<(), greekstep_models::ModelError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod black_scholes;
pub mod error;
pub mod moneyness;
pub mod scenario;

pub use error::ModelError;
pub use scenario::MarketScenario;
