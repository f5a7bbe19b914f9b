//! CSV import of feeder records and export of computed reports.

pub mod export;
pub mod import;
