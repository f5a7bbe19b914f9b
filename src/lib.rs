//! Distribution-feeder reliability index (SAIFI/SAIDI) calculator.

/// Truncation, duration normalization, aggregation, and compliance modules.
pub mod calc;
pub mod config;
pub mod io;
