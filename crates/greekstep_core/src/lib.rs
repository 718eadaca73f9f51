//! # greekstep_core: Mathematical Foundation for the Greekstep Laboratory
//!
//! ## Layer 1 (Foundation) Role
//!
//! greekstep_core is the bottom layer of the workspace, providing the scalar
//! normal distribution functions used by the Black-Scholes pricers and the
//! Greek estimators built on top of them:
//!
//! - `norm_pdf`: standard normal density, generic over `num_traits::Float`
//! - `norm_cdf`: standard normal CDF via `erfc` (stable for all finite inputs)
//! - `norm_cdf_complex`: first-order complex-step extension of the CDF
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other greekstep_* crates, with minimal
//! external dependencies:
//! - num-traits: traits for generic numerical computation
//! - num-complex: the `Complex64` scalar used by complex-step estimators
//! - libm: machine-precision `erfc`
//!
//! ## Error Policy
//!
//! Every function in this crate is total over finite inputs and propagates
//! IEEE-754 special values instead of returning `Result`. Sensitivity sweeps
//! exist to observe numerical degradation, so nothing here intercepts it.
//!
//! ## Usage Example
//!
//! ```rust
//! use greekstep_core::math::distributions::{norm_cdf, norm_pdf};
//!
//! let density = norm_pdf(0.0_f64);
//! assert!((density - 0.3989422804014327).abs() < 1e-15);
//!
//! let cumulative = norm_cdf(0.0);
//! assert_eq!(cumulative, 0.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;

pub use num_complex::Complex64;
