//! Shared fixtures for integration tests.

use relidx::calc::types::FeederRecord;

/// The seven-feeder reference dataset (107 028 customers total), with
/// durations in the transcribed decimal form of the source tables.
pub fn reference_records() -> Vec<FeederRecord> {
    vec![
        FeederRecord::new("GDN 01", 20561, 19, 15.46),
        FeederRecord::new("GDN 02", 16329, 6, 5.43),
        FeederRecord::new("GDN 03", 14795, 15, 13.35),
        FeederRecord::new("GDN 04", 17352, 22, 38.15),
        FeederRecord::new("GDN 05", 10204, 17, 5.12),
        FeederRecord::new("WBN 06", 13424, 9, 0.07),
        FeederRecord::new("BNL 08", 14363, 8, 6.29),
    ]
}
