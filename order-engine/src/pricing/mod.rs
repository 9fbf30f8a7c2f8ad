//! Pricing Calculator Module
//!
//! Pure price computation for order construction. All arithmetic goes
//! through `rust_decimal`; values are stored as f64.

mod calculator;

pub use calculator::*;
