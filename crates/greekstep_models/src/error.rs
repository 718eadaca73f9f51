//! Error types for scenario construction.
//!
//! This module provides:
//! - `ModelError`: errors raised when a market scenario is malformed

use thiserror::Error;

/// Scenario validation errors.
///
/// Raised only at the boundary, when a [`crate::MarketScenario`] is
/// constructed. The pricing functions themselves never return errors: they
/// propagate IEEE-754 special values so that accuracy sweeps can observe
/// numerical degradation instead of having it intercepted.
///
/// # Examples
/// ```
/// use greekstep_models::ModelError;
///
/// let err = ModelError::InvalidSpot { spot: -100.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Invalid spot price (must be positive and finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (must be non-negative and finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (must be non-negative and finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid time to maturity (must be non-negative and finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Non-finite rate or dividend yield.
    #[error("Non-finite {name}: {value}")]
    NonFiniteRate {
        /// Which parameter was non-finite ("rate" or "dividend yield")
        name: &'static str,
        /// The offending value
        value: f64,
    },
}
