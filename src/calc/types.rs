//! Core calculation types: feeder records, policies, thresholds, and errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::duration::OutageDuration;

/// One feeder row of the input dataset.
#[derive(Debug, Clone)]
pub struct FeederRecord {
    /// Feeder identifier (e.g. `"GDN 01"`). Not required to be unique,
    /// but duplicates make the per-row display misleading.
    pub name: String,
    /// Number of customers served by this feeder (Ni).
    pub customers: u64,
    /// Number of interruption events in the period (λi).
    pub interruptions: u64,
    /// Total outage duration in the period (Ui).
    pub duration: OutageDuration,
}

impl FeederRecord {
    /// Convenience constructor for a record with a decimal-hours duration.
    pub fn new(name: &str, customers: u64, interruptions: u64, duration_hours: f64) -> Self {
        Self {
            name: name.to_string(),
            customers,
            interruptions,
            duration: OutageDuration::DecimalHours(duration_hours),
        }
    }
}

/// How the system-wide SAIFI/SAIDI totals are combined from per-row values.
///
/// The three policies produce materially different displayed totals for
/// the same dataset, so the caller must pick one explicitly; there is no
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TotalPolicy {
    /// Sum the raw per-row contributions, truncate only the final total.
    RawSum,
    /// Truncate each row to two digits first, then sum the truncated
    /// values. Matches "the sum of what the table shows" and generally
    /// understates the raw-sum total.
    TruncatedRowSum,
    /// Sum the raw numerators first and divide once at the end.
    /// Algebraically equal to `RawSum`; kept as an independent
    /// cross-check path that may differ in the last representable digit.
    NumeratorSum,
}

impl TotalPolicy {
    pub const ALL: &[TotalPolicy] = &[
        TotalPolicy::RawSum,
        TotalPolicy::TruncatedRowSum,
        TotalPolicy::NumeratorSum,
    ];

    /// CLI/config spelling of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            TotalPolicy::RawSum => "raw-sum",
            TotalPolicy::TruncatedRowSum => "truncated-row-sum",
            TotalPolicy::NumeratorSum => "numerator-sum",
        }
    }

    /// Parses the CLI/config spelling.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "raw-sum" => Some(TotalPolicy::RawSum),
            "truncated-row-sum" => Some(TotalPolicy::TruncatedRowSum),
            "numerator-sum" => Some(TotalPolicy::NumeratorSum),
            _ => None,
        }
    }
}

impl fmt::Display for TotalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regulatory threshold pair for one index.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Threshold {
    /// National standard limit (SPLN 68-2:1986).
    pub national: f64,
    /// International standard limit (IEEE 1366).
    pub international: f64,
}

/// SAIFI limits: 3.20 interruptions/customer/year (SPLN), 1.45 (IEEE).
pub const SAIFI_THRESHOLD: Threshold = Threshold {
    national: 3.20,
    international: 1.45,
};

/// SAIDI limits: 21.09 hours/customer/year (SPLN), 2.30 (IEEE).
pub const SAIDI_THRESHOLD: Threshold = Threshold {
    national: 21.09,
    international: 2.30,
};

/// Invalid-input conditions. The aggregator returns these instead of
/// ever producing `NaN` or `Infinity`.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// No records were supplied.
    EmptyDataset,
    /// Every customer count is zero, so the per-customer division is
    /// undefined.
    ZeroTotalCustomers,
    /// A record carries a negative or non-finite duration.
    InvalidDuration { feeder: String, value: f64 },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::EmptyDataset => write!(f, "invalid input: dataset contains no records"),
            CalcError::ZeroTotalCustomers => write!(
                f,
                "invalid input: total customer count is zero, indices are undefined"
            ),
            CalcError::InvalidDuration { feeder, value } => write!(
                f,
                "invalid input: feeder \"{feeder}\" has invalid duration {value} (must be finite and >= 0)"
            ),
        }
    }
}

impl std::error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_policy_spelling_round_trips() {
        for &p in TotalPolicy::ALL {
            assert_eq!(TotalPolicy::from_str_opt(p.as_str()), Some(p));
        }
        assert_eq!(TotalPolicy::from_str_opt("bogus"), None);
    }

    #[test]
    fn error_messages_name_the_condition() {
        let e = CalcError::InvalidDuration {
            feeder: "GDN 01".to_string(),
            value: -1.0,
        };
        let msg = format!("{e}");
        assert!(msg.contains("GDN 01"));
        assert!(msg.contains("invalid input"));
    }

    #[test]
    fn thresholds_match_published_limits() {
        assert_eq!(SAIFI_THRESHOLD.national, 3.20);
        assert_eq!(SAIFI_THRESHOLD.international, 1.45);
        assert_eq!(SAIDI_THRESHOLD.national, 21.09);
        assert_eq!(SAIDI_THRESHOLD.international, 2.30);
    }
}
