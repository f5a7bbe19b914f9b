//! Two-digit truncation formatter.
//!
//! Reliability figures in this domain are published truncated, not
//! rounded: `3.659` is reported as `3.65`. Truncation is defined over
//! the *textual* decimal expansion of the value (the shortest
//! round-trippable form produced by `Display`), not over
//! `floor(v * 100) / 100`, because the two can disagree near a `.xx5`
//! boundary once binary representation error is involved. Reference
//! outputs were produced with the textual definition.

/// Formats `value` with exactly two fractional digits, dropping (never
/// rounding) everything beyond the second place.
///
/// # Examples
///
/// ```
/// use relidx::calc::truncate::truncate2;
///
/// assert_eq!(truncate2(3.659), "3.65");
/// assert_eq!(truncate2(3.6), "3.60");
/// assert_eq!(truncate2(7.0), "7.00");
/// ```
pub fn truncate2(value: f64) -> String {
    debug_assert!(value.is_finite(), "truncate2 requires finite input");
    let s = format!("{value}");
    match s.split_once('.') {
        Some((head, tail)) => {
            let mut frac: String = tail.chars().take(2).collect();
            while frac.len() < 2 {
                frac.push('0');
            }
            format!("{head}.{frac}")
        }
        None => format!("{s}.00"),
    }
}

/// Parses a string produced by [`truncate2`] back to a float.
///
/// Truncated display strings are always valid decimal literals, so this
/// cannot fail for strings this module produced.
pub fn parse_truncated(s: &str) -> f64 {
    s.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_without_rounding() {
        assert_eq!(truncate2(3.659), "3.65");
        assert_eq!(truncate2(3.65999), "3.65");
        assert_eq!(truncate2(0.004), "0.00");
    }

    #[test]
    fn pads_short_fractions() {
        assert_eq!(truncate2(3.6), "3.60");
        assert_eq!(truncate2(7.0), "7.00");
        assert_eq!(truncate2(0.0), "0.00");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(truncate2(-0.5), "-0.50");
        assert_eq!(truncate2(-3.659), "-3.65");
    }

    #[test]
    fn textual_not_floor_scaled() {
        // 2.675 has no exact binary form; its shortest repr is "2.675",
        // so textual truncation gives "2.67" from the digits themselves,
        // not from floor(267.49999...).
        assert_eq!(truncate2(2.675), "2.67");
        assert_eq!(truncate2(1.005), "1.00");
    }

    #[test]
    fn idempotent_through_parse() {
        for &x in &[3.659, 3.6, 7.0, 0.004, 14.028945696453265, 13.17] {
            let once = truncate2(x);
            let twice = truncate2(parse_truncated(&once));
            assert_eq!(once, twice, "truncation should be stable for {x}");
        }
    }

    #[test]
    fn parse_round_trips_display() {
        assert_eq!(parse_truncated("14.02"), 14.02);
        assert_eq!(parse_truncated("0.00"), 0.0);
    }
}
