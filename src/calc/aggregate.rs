//! Reliability index aggregation.
//!
//! Computes per-feeder SAIFI/SAIDI contributions and combines them into
//! system totals under a caller-selected [`TotalPolicy`]. The naive
//! truncated-row sum is computed unconditionally so a front end can
//! always show the discrepancy between "the sum of what the table
//! displays" and the authoritative total.

use serde::Serialize;

use super::compliance::{self, ComplianceTable};
use super::duration::DurationPolicy;
use super::truncate::{parse_truncated, truncate2};
use super::types::{CalcError, FeederRecord, TotalPolicy};

/// Policy disagreement below this margin (half of the last displayed
/// digit) is not worth a note.
const AMBIGUITY_EPSILON: f64 = 0.005;

/// One feeder's share of the system indices.
#[derive(Debug, Clone, Serialize)]
pub struct RowContribution {
    /// Feeder identifier.
    pub name: String,
    /// Customers served (Ni).
    pub customers: u64,
    /// Interruption events (λi).
    pub interruptions: u64,
    /// Outage duration in decimal hours after normalization.
    pub duration_hours: f64,
    /// Raw SAIFI contribution: `Ni * λi / ΣN`.
    pub saifi_raw: f64,
    /// Raw SAIDI contribution: `Ni * Ui / ΣN`.
    pub saidi_raw: f64,
    /// SAIFI contribution truncated to two digits for display.
    pub saifi_display: String,
    /// SAIDI contribution truncated to two digits for display.
    pub saidi_display: String,
}

/// A system total for one index, with the naive table sum alongside.
#[derive(Debug, Clone, Serialize)]
pub struct IndexTotal {
    /// Total under the authoritative policy.
    pub value: f64,
    /// Truncated display form of `value`.
    pub display: String,
    /// Sum of the truncated per-row displays, regardless of which
    /// policy is authoritative.
    pub row_sum: f64,
    /// Truncated display form of `row_sum`.
    pub row_sum_display: String,
}

/// Warning-class notice that a different policy choice would change a
/// reported figure. Never blocks computation.
#[derive(Debug, Clone, Serialize)]
pub struct PrecisionNote {
    /// Which figure the note concerns (`"SAIFI"` or `"SAIDI"`).
    pub quantity: String,
    /// Human-readable explanation of the discrepancy.
    pub message: String,
}

/// Complete output of one computation pass.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationResult {
    /// Sum of all customer counts (ΣN).
    pub total_customers: u64,
    /// Duration normalization that produced the per-row hours.
    pub duration_policy: DurationPolicy,
    /// Aggregation policy that produced the authoritative totals.
    pub total_policy: TotalPolicy,
    /// Per-feeder contributions, in input order.
    pub rows: Vec<RowContribution>,
    /// System SAIFI (interruptions per customer per year).
    pub saifi: IndexTotal,
    /// System SAIDI (hours per customer per year).
    pub saidi: IndexTotal,
    /// Compliance of the displayed totals against both standards.
    pub compliance: ComplianceTable,
    /// Precision-ambiguity notices.
    pub notes: Vec<PrecisionNote>,
}

/// Computes the full aggregation result for a dataset.
///
/// # Errors
///
/// Returns [`CalcError`] when the dataset is empty, every customer count
/// is zero, or a duration is negative or non-finite. Nothing partial is
/// produced on error.
pub fn compute(
    records: &[FeederRecord],
    duration_policy: DurationPolicy,
    total_policy: TotalPolicy,
) -> Result<AggregationResult, CalcError> {
    let total_customers = validate(records, duration_policy)?;
    let n = total_customers as f64;

    let rows = contributions(records, duration_policy, n);

    let saifi = index_total(total_policy, &rows, Component::Saifi, records, n);
    let saidi = index_total(total_policy, &rows, Component::Saidi, records, n);

    let compliance = compliance::classify(&saifi.display, &saidi.display);
    let notes = precision_notes(
        records,
        duration_policy,
        total_policy,
        &rows,
        &saifi,
        &saidi,
        n,
    );

    Ok(AggregationResult {
        total_customers,
        duration_policy,
        total_policy,
        rows,
        saifi,
        saidi,
        compliance,
        notes,
    })
}

/// Checks the InvalidInput conditions and returns ΣN.
fn validate(records: &[FeederRecord], duration_policy: DurationPolicy) -> Result<u64, CalcError> {
    if records.is_empty() {
        return Err(CalcError::EmptyDataset);
    }
    for r in records {
        let hours = r.duration.to_hours(duration_policy);
        if !hours.is_finite() || hours < 0.0 {
            return Err(CalcError::InvalidDuration {
                feeder: r.name.clone(),
                value: hours,
            });
        }
    }
    let total: u64 = records.iter().map(|r| r.customers).sum();
    if total == 0 {
        return Err(CalcError::ZeroTotalCustomers);
    }
    Ok(total)
}

/// Per-row raw contributions and their truncated displays.
fn contributions(
    records: &[FeederRecord],
    duration_policy: DurationPolicy,
    total_customers: f64,
) -> Vec<RowContribution> {
    records
        .iter()
        .map(|r| {
            let hours = r.duration.to_hours(duration_policy);
            let saifi_raw = (r.customers * r.interruptions) as f64 / total_customers;
            let saidi_raw = r.customers as f64 * hours / total_customers;
            RowContribution {
                name: r.name.clone(),
                customers: r.customers,
                interruptions: r.interruptions,
                duration_hours: hours,
                saifi_display: truncate2(saifi_raw),
                saidi_display: truncate2(saidi_raw),
                saifi_raw,
                saidi_raw,
            }
        })
        .collect()
}

/// Which of the two indices a total is being built for.
#[derive(Clone, Copy)]
enum Component {
    Saifi,
    Saidi,
}

impl Component {
    fn raw(self, row: &RowContribution) -> f64 {
        match self {
            Component::Saifi => row.saifi_raw,
            Component::Saidi => row.saidi_raw,
        }
    }

    fn display(self, row: &RowContribution) -> &str {
        match self {
            Component::Saifi => &row.saifi_display,
            Component::Saidi => &row.saidi_display,
        }
    }

    fn numerator(self, record: &FeederRecord, hours: f64) -> f64 {
        match self {
            Component::Saifi => (record.customers * record.interruptions) as f64,
            Component::Saidi => record.customers as f64 * hours,
        }
    }
}

/// Builds one [`IndexTotal`] under the selected policy. Summation is
/// always in input order so results are reproducible digit-for-digit.
fn index_total(
    policy: TotalPolicy,
    rows: &[RowContribution],
    component: Component,
    records: &[FeederRecord],
    total_customers: f64,
) -> IndexTotal {
    let mut row_sum = 0.0_f64;
    for row in rows {
        row_sum += parse_truncated(component.display(row));
    }

    let value = total_under(policy, rows, component, records, total_customers, row_sum);

    IndexTotal {
        value,
        display: truncate2(value),
        row_sum,
        row_sum_display: truncate2(row_sum),
    }
}

fn total_under(
    policy: TotalPolicy,
    rows: &[RowContribution],
    component: Component,
    records: &[FeederRecord],
    total_customers: f64,
    row_sum: f64,
) -> f64 {
    match policy {
        TotalPolicy::RawSum => {
            let mut acc = 0.0_f64;
            for row in rows {
                acc += component.raw(row);
            }
            acc
        }
        TotalPolicy::TruncatedRowSum => row_sum,
        TotalPolicy::NumeratorSum => {
            let mut acc = 0.0_f64;
            for (record, row) in records.iter().zip(rows) {
                acc += component.numerator(record, row.duration_hours);
            }
            acc / total_customers
        }
    }
}

/// Builds the PrecisionAmbiguity notices: alternative total policies and
/// the alternative duration policy, compared against the authoritative
/// figures.
fn precision_notes(
    records: &[FeederRecord],
    duration_policy: DurationPolicy,
    total_policy: TotalPolicy,
    rows: &[RowContribution],
    saifi: &IndexTotal,
    saidi: &IndexTotal,
    total_customers: f64,
) -> Vec<PrecisionNote> {
    let mut notes = Vec::new();

    for &alt in TotalPolicy::ALL {
        if alt == total_policy {
            continue;
        }
        for (quantity, component, authoritative) in [
            ("SAIFI", Component::Saifi, saifi),
            ("SAIDI", Component::Saidi, saidi),
        ] {
            let alt_value = total_under(
                alt,
                rows,
                component,
                records,
                total_customers,
                authoritative.row_sum,
            );
            if (alt_value - authoritative.value).abs() > AMBIGUITY_EPSILON {
                notes.push(PrecisionNote {
                    quantity: quantity.to_string(),
                    message: format!(
                        "{quantity} is {} under the {total_policy} policy but would be {} under {alt}; \
                         the aggregation order materially changes the reported figure",
                        authoritative.display,
                        truncate2(alt_value),
                    ),
                });
            }
        }
    }

    // SAIFI is duration-free; only SAIDI can move with the duration policy.
    let alt_duration = duration_policy.alternative();
    let alt_rows = contributions(records, alt_duration, total_customers);
    let mut alt_row_sum = 0.0_f64;
    for row in &alt_rows {
        alt_row_sum += parse_truncated(&row.saidi_display);
    }
    let alt_saidi = total_under(
        total_policy,
        &alt_rows,
        Component::Saidi,
        records,
        total_customers,
        alt_row_sum,
    );
    if (alt_saidi - saidi.value).abs() > AMBIGUITY_EPSILON {
        notes.push(PrecisionNote {
            quantity: "SAIDI".to_string(),
            message: format!(
                "SAIDI is {} reading durations with the {duration_policy} policy but would be {} \
                 with {alt_duration}; the hour/minute convention materially changes the reported figure",
                saidi.display,
                truncate2(alt_saidi),
            ),
        });
    }

    notes
}
