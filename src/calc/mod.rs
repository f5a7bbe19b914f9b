//! Reliability index computation core: truncation formatting, duration
//! normalization, aggregation policies, and threshold classification.

pub mod aggregate;
pub mod compliance;
pub mod duration;
pub mod report;
pub mod truncate;
pub mod types;
