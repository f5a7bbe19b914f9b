//! CSV export for computed reliability reports.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::calc::aggregate::AggregationResult;

/// Column header for the per-feeder contribution table. The final
/// `TOTAL` row carries the authoritative system totals.
const HEADER: &str = "feeder,customers,interruptions,duration_hours,\
                      saifi_raw,saifi,saidi_raw,saidi";

/// Exports a computed report to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(result: &AggregationResult, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(result, buf)
}

/// Writes a computed report as CSV to any writer.
///
/// One row per feeder, then a `TOTAL` row with the system-wide figures.
/// Raw columns use the full shortest-round-trip decimal form; the
/// `saifi`/`saidi` columns carry the truncated display strings.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(result: &AggregationResult, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for row in &result.rows {
        wtr.write_record(&[
            row.name.clone(),
            row.customers.to_string(),
            row.interruptions.to_string(),
            format!("{}", row.duration_hours),
            format!("{}", row.saifi_raw),
            row.saifi_display.clone(),
            format!("{}", row.saidi_raw),
            row.saidi_display.clone(),
        ])?;
    }

    wtr.write_record(&[
        "TOTAL".to_string(),
        result.total_customers.to_string(),
        String::new(),
        String::new(),
        format!("{}", result.saifi.value),
        result.saifi.display.clone(),
        format!("{}", result.saidi.value),
        result.saidi.display.clone(),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::aggregate::compute;
    use crate::calc::duration::DurationPolicy;
    use crate::calc::types::{FeederRecord, TotalPolicy};

    fn sample_result() -> AggregationResult {
        let records = vec![
            FeederRecord::new("GDN 01", 100, 3, 1.5),
            FeederRecord::new("GDN 02", 300, 1, 0.25),
        ];
        compute(&records, DurationPolicy::DirectDecimal, TotalPolicy::RawSum)
            .expect("valid dataset")
    }

    #[test]
    fn header_matches_schema() {
        let mut buf = Vec::new();
        write_csv(&sample_result(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "feeder,customers,interruptions,duration_hours,\
             saifi_raw,saifi,saidi_raw,saidi"
        );
    }

    #[test]
    fn row_count_is_feeders_plus_header_and_total() {
        let mut buf = Vec::new();
        write_csv(&sample_result(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 2 feeders + 1 TOTAL
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("TOTAL,400"));
    }

    #[test]
    fn deterministic_output() {
        let result = sample_result();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&result, &mut buf1).ok();
        write_csv(&result, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn truncated_columns_round_trip_the_display_strings() {
        let result = sample_result();
        let mut buf = Vec::new();
        write_csv(&result, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let rows: Vec<csv::StringRecord> = rdr.records().filter_map(Result::ok).collect();
        for (row, contribution) in rows.iter().zip(&result.rows) {
            assert_eq!(&row[5], contribution.saifi_display);
            assert_eq!(&row[7], contribution.saidi_display);
        }
    }
}
