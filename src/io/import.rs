//! CSV import of feeder records.
//!
//! Expected layout, header required:
//!
//! ```csv
//! name,customers,interruptions,duration_hours
//! GDN 01,20561,19,15.46
//! ```

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::calc::duration::OutageDuration;
use crate::calc::types::FeederRecord;

/// Import failure with the source line where it occurred, when known.
#[derive(Debug)]
pub struct ImportError {
    /// 1-based line in the CSV input, if the failure is row-specific.
    pub line: Option<u64>,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "csv import error at line {line}: {}", self.message),
            None => write!(f, "csv import error: {}", self.message),
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(csv::Position::line);
        ImportError {
            line,
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    customers: u64,
    interruptions: u64,
    duration_hours: f64,
}

/// Reads feeder records from a CSV file at the given path.
///
/// # Errors
///
/// Returns an [`ImportError`] if the file cannot be opened or a row
/// fails to parse.
pub fn read_records(path: &Path) -> Result<Vec<FeederRecord>, ImportError> {
    let file = File::open(path).map_err(|e| ImportError {
        line: None,
        message: format!("cannot open \"{}\": {e}", path.display()),
    })?;
    parse_records(file)
}

/// Parses feeder records from any reader.
///
/// # Errors
///
/// Returns an [`ImportError`] naming the offending line if a row fails
/// to parse.
pub fn parse_records(reader: impl Read) -> Result<Vec<FeederRecord>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        let row = row?;
        records.push(FeederRecord {
            name: row.name,
            customers: row.customers,
            interruptions: row.interruptions,
            duration: OutageDuration::DecimalHours(row.duration_hours),
        });
    }
    Ok(records)
}
