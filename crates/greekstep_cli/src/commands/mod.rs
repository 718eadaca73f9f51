//! CLI command implementations.

pub mod price;
pub mod scenarios;
pub mod sweep;
