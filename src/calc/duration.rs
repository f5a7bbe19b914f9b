//! Outage-duration normalization.
//!
//! The source data for this domain records durations two ways: as a
//! decimal where the fractional part is a transcription of minutes
//! (15.46 meaning 15 h 46 min), or as an explicit hours/minutes pair.
//! Which reading is intended is genuinely ambiguous in the published
//! tables, so both normalizations are supported and the caller selects
//! one; neither is silently preferred.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw duration as supplied by the caller, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutageDuration {
    /// Already a decimal value. Under the direct-decimal policy it is
    /// used verbatim; under the mathematical policy its fractional part
    /// is decoded as minutes by the hundredths convention.
    DecimalHours(f64),
    /// Explicit hours and minutes. Minutes >= 60 are accepted and
    /// simply converted.
    HoursMinutes { hours: u32, minutes: u32 },
}

/// How an [`OutageDuration`] becomes decimal hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationPolicy {
    /// Transcription convention: the fraction is minutes out of 100.
    /// `15 h 46 min` becomes `15.46`. Replicates the source tables, not
    /// real time arithmetic.
    #[serde(rename = "direct")]
    DirectDecimal,
    /// Dimensionally correct conversion: `hours + minutes / 60`.
    Mathematical,
}

impl DurationPolicy {
    pub const ALL: &[DurationPolicy] = &[DurationPolicy::DirectDecimal, DurationPolicy::Mathematical];

    /// CLI/config spelling of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationPolicy::DirectDecimal => "direct",
            DurationPolicy::Mathematical => "mathematical",
        }
    }

    /// Parses the CLI/config spelling.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "direct" => Some(DurationPolicy::DirectDecimal),
            "mathematical" => Some(DurationPolicy::Mathematical),
            _ => None,
        }
    }

    /// The other policy, used when reporting precision-ambiguity notes.
    pub fn alternative(&self) -> Self {
        match self {
            DurationPolicy::DirectDecimal => DurationPolicy::Mathematical,
            DurationPolicy::Mathematical => DurationPolicy::DirectDecimal,
        }
    }
}

impl fmt::Display for DurationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OutageDuration {
    /// Normalizes to decimal hours under the given policy.
    pub fn to_hours(&self, policy: DurationPolicy) -> f64 {
        match (policy, *self) {
            (DurationPolicy::DirectDecimal, OutageDuration::DecimalHours(v)) => v,
            (DurationPolicy::DirectDecimal, OutageDuration::HoursMinutes { hours, minutes }) => {
                f64::from(hours) + f64::from(minutes) / 100.0
            }
            (DurationPolicy::Mathematical, OutageDuration::DecimalHours(v)) => {
                let (hours, minutes) = split_transcribed(v);
                hours + minutes / 60.0
            }
            (DurationPolicy::Mathematical, OutageDuration::HoursMinutes { hours, minutes }) => {
                f64::from(hours) + f64::from(minutes) / 60.0
            }
        }
    }

    /// The raw decimal value as supplied, for display in the input column.
    pub fn as_supplied(&self) -> f64 {
        match *self {
            OutageDuration::DecimalHours(v) => v,
            OutageDuration::HoursMinutes { hours, minutes } => {
                f64::from(hours) + f64::from(minutes) / 100.0
            }
        }
    }
}

/// Decodes a transcribed decimal into (hours, minutes): `15.46` is
/// 15 h 46 min. Rounding to the nearest hundredth absorbs binary
/// representation error in the fraction.
fn split_transcribed(v: f64) -> (f64, f64) {
    let hours = v.trunc();
    let minutes = ((v - hours) * 100.0).round();
    (hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_decimal_is_identity_for_decimals() {
        let d = OutageDuration::DecimalHours(15.46);
        assert_eq!(d.to_hours(DurationPolicy::DirectDecimal), 15.46);
    }

    #[test]
    fn direct_decimal_transcribes_pairs() {
        let d = OutageDuration::HoursMinutes { hours: 15, minutes: 46 };
        assert_eq!(d.to_hours(DurationPolicy::DirectDecimal), 15.46);
    }

    #[test]
    fn mathematical_converts_pairs() {
        let d = OutageDuration::HoursMinutes { hours: 15, minutes: 46 };
        assert_eq!(d.to_hours(DurationPolicy::Mathematical), 15.0 + 46.0 / 60.0);
    }

    #[test]
    fn mathematical_decodes_transcribed_decimals() {
        let d = OutageDuration::DecimalHours(15.46);
        assert_eq!(d.to_hours(DurationPolicy::Mathematical), 15.0 + 46.0 / 60.0);
        let d = OutageDuration::DecimalHours(0.07);
        assert_eq!(d.to_hours(DurationPolicy::Mathematical), 7.0 / 60.0);
    }

    #[test]
    fn policies_agree_only_at_zero_minutes() {
        for minutes in 0..60 {
            let d = OutageDuration::HoursMinutes { hours: 2, minutes };
            let direct = d.to_hours(DurationPolicy::DirectDecimal);
            let math = d.to_hours(DurationPolicy::Mathematical);
            if minutes == 0 {
                assert_eq!(direct, math);
            } else {
                assert_ne!(direct, math, "policies must differ at {minutes} min");
            }
        }
    }

    #[test]
    fn overlong_minutes_convert_rather_than_error() {
        let d = OutageDuration::HoursMinutes { hours: 0, minutes: 75 };
        assert_eq!(d.to_hours(DurationPolicy::Mathematical), 1.25);
    }

    #[test]
    fn policy_spelling_round_trips() {
        for &p in DurationPolicy::ALL {
            assert_eq!(DurationPolicy::from_str_opt(p.as_str()), Some(p));
        }
        assert_eq!(DurationPolicy::from_str_opt("bogus"), None);
    }
}
