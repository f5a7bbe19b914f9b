//! Human-readable report rendering.
//!
//! Mirrors what the interactive front ends in this domain show: the
//! per-feeder breakdown with the formula that produced each figure, the
//! system totals with units, the discrepancy between the authoritative
//! total and the naive table sum, and per-standard evaluation lines.

use std::fmt;

use super::aggregate::AggregationResult;

impl fmt::Display for AggregationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Reliability Index Report ---")?;
        writeln!(f, "Total customers (sum N): {}", self.total_customers)?;
        writeln!(
            f,
            "Duration policy: {}   Total policy: {}",
            self.duration_policy, self.total_policy
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<10} {:>9} {:>6} {:>9}  {:<28} {:>7}  {:>7}",
            "feeder", "Ni", "freq", "hours", "formula (SAIFI)", "SAIFI", "SAIDI"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<10} {:>9} {:>6} {:>9.2}  {:<28} {:>7}  {:>7}",
                row.name,
                row.customers,
                row.interruptions,
                row.duration_hours,
                format!(
                    "({} x {}) / {}",
                    row.customers, row.interruptions, self.total_customers
                ),
                row.saifi_display,
                row.saidi_display,
            )?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Total SAIFI: {} times/customer/yr",
            self.saifi.display
        )?;
        writeln!(
            f,
            "Total SAIDI: {} hours/customer/yr",
            self.saidi.display
        )?;

        // Table-sum discrepancy: per-row truncation drops up to 0.01 per
        // feeder before summation, so the naive sum of the displayed rows
        // can trail the authoritative total.
        if self.saifi.display != self.saifi.row_sum_display {
            writeln!(
                f,
                "  table rows sum to {} for SAIFI; per-row truncation discards the difference",
                self.saifi.row_sum_display
            )?;
        }
        if self.saidi.display != self.saidi.row_sum_display {
            writeln!(
                f,
                "  table rows sum to {} for SAIDI; per-row truncation discards the difference",
                self.saidi.row_sum_display
            )?;
        }
        writeln!(f)?;

        let c = &self.compliance;
        writeln!(
            f,
            "SAIFI vs SPLN {}: {}",
            c.saifi_threshold.national,
            verdict(c.saifi_national, &self.saifi.display, c.saifi_threshold.national)
        )?;
        writeln!(
            f,
            "SAIFI vs IEEE {}: {}",
            c.saifi_threshold.international,
            verdict(
                c.saifi_international,
                &self.saifi.display,
                c.saifi_threshold.international
            )
        )?;
        writeln!(
            f,
            "SAIDI vs SPLN {}: {}",
            c.saidi_threshold.national,
            verdict(c.saidi_national, &self.saidi.display, c.saidi_threshold.national)
        )?;
        write!(
            f,
            "SAIDI vs IEEE {}: {}",
            c.saidi_threshold.international,
            verdict(
                c.saidi_international,
                &self.saidi.display,
                c.saidi_threshold.international
            )
        )?;

        if !self.notes.is_empty() {
            writeln!(f)?;
            for note in &self.notes {
                write!(f, "\nnote: {}", note.message)?;
            }
        }

        Ok(())
    }
}

fn verdict(meets: bool, display: &str, limit: f64) -> String {
    if meets {
        format!("meets ({display} <= {limit})")
    } else {
        format!("does not meet ({display} > {limit})")
    }
}
