//! CSV import/export round trip against the reference dataset.

mod common;

use relidx::calc::aggregate::compute;
use relidx::calc::duration::DurationPolicy;
use relidx::calc::types::TotalPolicy;
use relidx::io::export::write_csv;
use relidx::io::import::parse_records;

const REFERENCE_CSV: &str = "\
name,customers,interruptions,duration_hours
GDN 01,20561,19,15.46
GDN 02,16329,6,5.43
GDN 03,14795,15,13.35
GDN 04,17352,22,38.15
GDN 05,10204,17,5.12
WBN 06,13424,9,0.07
BNL 08,14363,8,6.29
";

#[test]
fn imported_records_match_the_fixture() {
    let imported = parse_records(REFERENCE_CSV.as_bytes()).expect("reference CSV parses");
    let fixture = common::reference_records();
    assert_eq!(imported.len(), fixture.len());
    for (a, b) in imported.iter().zip(&fixture) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.customers, b.customers);
        assert_eq!(a.interruptions, b.interruptions);
        assert_eq!(a.duration, b.duration);
    }
}

#[test]
fn csv_sourced_computation_reproduces_pinned_totals() {
    let records = parse_records(REFERENCE_CSV.as_bytes()).expect("reference CSV parses");
    let result = compute(&records, DurationPolicy::DirectDecimal, TotalPolicy::RawSum)
        .expect("valid dataset");
    assert_eq!(result.saifi.value, 14.028945696453265);
    assert_eq!(result.saidi.value, 13.170002335837353);
}

#[test]
fn exported_csv_carries_rows_and_total() {
    let records = parse_records(REFERENCE_CSV.as_bytes()).expect("reference CSV parses");
    let result = compute(&records, DurationPolicy::DirectDecimal, TotalPolicy::RawSum)
        .expect("valid dataset");

    let mut buf = Vec::new();
    write_csv(&result, &mut buf).expect("export succeeds");
    let output = String::from_utf8(buf).expect("valid UTF-8");
    let lines: Vec<&str> = output.lines().collect();

    // 1 header + 7 feeders + 1 TOTAL
    assert_eq!(lines.len(), 9);
    assert!(lines[1].starts_with("GDN 01,20561,19,"));
    let total = lines[8];
    assert!(total.starts_with("TOTAL,107028,"));
    assert!(total.contains(",14.02,"));
    assert!(total.ends_with(",13.17"));
}

#[test]
fn malformed_csv_is_a_clean_error() {
    let input = "name,customers,interruptions,duration_hours\nGDN 01,x,19,15.46\n";
    let err = parse_records(input.as_bytes()).expect_err("bad row must fail");
    let msg = format!("{err}");
    assert!(msg.contains("line 2"), "error should name the line: {msg}");
}
