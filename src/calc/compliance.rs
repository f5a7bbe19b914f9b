//! Threshold classification against SPLN and IEEE 1366 limits.
//!
//! Classification compares the *display-truncated* total, parsed back to
//! a number, against each threshold with `<=`. Truncating down before
//! comparing is strictly more permissive than comparing the raw float;
//! that permissiveness is part of the published methodology and is
//! reproduced deliberately.

use serde::Serialize;

use super::truncate::parse_truncated;
use super::types::{SAIDI_THRESHOLD, SAIFI_THRESHOLD, Threshold};

/// Pass/fail for each index against each standard, with the thresholds
/// the classification used.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceTable {
    /// SAIFI limits used.
    pub saifi_threshold: Threshold,
    /// SAIDI limits used.
    pub saidi_threshold: Threshold,
    /// SAIFI meets the national (SPLN) standard.
    pub saifi_national: bool,
    /// SAIFI meets the international (IEEE 1366) standard.
    pub saifi_international: bool,
    /// SAIDI meets the national (SPLN) standard.
    pub saidi_national: bool,
    /// SAIDI meets the international (IEEE 1366) standard.
    pub saidi_international: bool,
}

/// Classifies truncated display totals against the fixed thresholds.
pub fn classify(saifi_display: &str, saidi_display: &str) -> ComplianceTable {
    let saifi = parse_truncated(saifi_display);
    let saidi = parse_truncated(saidi_display);
    ComplianceTable {
        saifi_threshold: SAIFI_THRESHOLD,
        saidi_threshold: SAIDI_THRESHOLD,
        saifi_national: saifi <= SAIFI_THRESHOLD.national,
        saifi_international: saifi <= SAIFI_THRESHOLD.international,
        saidi_national: saidi <= SAIDI_THRESHOLD.national,
        saidi_international: saidi <= SAIDI_THRESHOLD.international,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        let table = classify("3.20", "21.09");
        assert!(table.saifi_national, "3.20 <= 3.20 must meet the standard");
        assert!(table.saidi_national, "21.09 <= 21.09 must meet the standard");
    }

    #[test]
    fn one_hundredth_over_fails() {
        let table = classify("3.21", "21.10");
        assert!(!table.saifi_national);
        assert!(!table.saidi_national);
    }

    #[test]
    fn international_is_stricter() {
        let table = classify("2.00", "5.00");
        assert!(table.saifi_national);
        assert!(!table.saifi_international);
        assert!(table.saidi_national);
        assert!(!table.saidi_international);
    }

    #[test]
    fn truncation_before_comparison_is_permissive() {
        // A raw total of 3.209 truncates to "3.20" and therefore passes,
        // even though the raw float exceeds the limit.
        let display = crate::calc::truncate::truncate2(3.209);
        let table = classify(&display, "0.00");
        assert!(table.saifi_national);
    }
}
