//! Numerical building blocks.
//!
//! This module provides:
//! - `distributions`: standard normal PDF/CDF and the complex-step CDF extension

pub mod distributions;
