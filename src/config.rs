//! TOML-based dataset and policy configuration, with built-in presets.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::calc::duration::{DurationPolicy, OutageDuration};
use crate::calc::types::{FeederRecord, TotalPolicy};

/// Top-level dataset configuration parsed from TOML.
///
/// Load from TOML with [`DatasetConfig::from_toml_file`] or use
/// [`DatasetConfig::baseline`] for the built-in reference dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Policy selections for this dataset.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Feeder rows, one `[[feeder]]` table each.
    #[serde(default)]
    pub feeder: Vec<FeederEntry>,
}

/// Duration-normalization and total-aggregation policy selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Duration reading: `"direct"` or `"mathematical"`.
    pub duration: DurationPolicy,
    /// Total aggregation: `"raw-sum"`, `"truncated-row-sum"`, or
    /// `"numerator-sum"`.
    pub total: TotalPolicy,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            duration: DurationPolicy::DirectDecimal,
            total: TotalPolicy::RawSum,
        }
    }
}

/// One feeder row. The duration is given either as `duration_hours` or
/// as an `hours`/`minutes` pair, never both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeederEntry {
    /// Feeder identifier.
    pub name: String,
    /// Customers served (Ni).
    pub customers: u64,
    /// Interruption events in the period (λi).
    pub interruptions: u64,
    /// Outage duration as a decimal value.
    pub duration_hours: Option<f64>,
    /// Outage hours, paired with `minutes`.
    pub hours: Option<u32>,
    /// Outage minutes, paired with `hours`.
    pub minutes: Option<u32>,
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"feeder[2].duration_hours"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl DatasetConfig {
    /// Returns the baseline preset: the seven-feeder reference dataset
    /// (107 028 customers) with journal-style durations, read directly
    /// and totalled by raw sum.
    pub fn baseline() -> Self {
        let rows: [(&str, u64, u64, f64); 7] = [
            ("GDN 01", 20561, 19, 15.46),
            ("GDN 02", 16329, 6, 5.43),
            ("GDN 03", 14795, 15, 13.35),
            ("GDN 04", 17352, 22, 38.15),
            ("GDN 05", 10204, 17, 5.12),
            ("WBN 06", 13424, 9, 0.07),
            ("BNL 08", 14363, 8, 6.29),
        ];
        Self {
            policy: PolicyConfig::default(),
            feeder: rows
                .iter()
                .map(|&(name, customers, interruptions, duration)| FeederEntry {
                    name: name.to_string(),
                    customers,
                    interruptions,
                    duration_hours: Some(duration),
                    hours: None,
                    minutes: None,
                })
                .collect(),
        }
    }

    /// Returns the table-sum preset: same dataset as `baseline`, but the
    /// total is the sum of the truncated table rows, matching readings
    /// that add up the displayed figures.
    pub fn table_sum() -> Self {
        Self {
            policy: PolicyConfig {
                total: TotalPolicy::TruncatedRowSum,
                ..PolicyConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "table_sum"];

    /// Loads a dataset from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "table_sum" => Ok(Self::table_sum()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a dataset from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "dataset".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a dataset from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains
    /// unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.feeder.is_empty() {
            errors.push(ConfigError {
                field: "feeder".into(),
                message: "at least one [[feeder]] entry is required".into(),
            });
        }

        let mut total_customers: u64 = 0;
        for (i, entry) in self.feeder.iter().enumerate() {
            total_customers = total_customers.saturating_add(entry.customers);
            if entry.name.is_empty() {
                errors.push(ConfigError {
                    field: format!("feeder[{i}].name"),
                    message: "must not be empty".into(),
                });
            }
            match (entry.duration_hours, entry.hours, entry.minutes) {
                (Some(v), None, None) => {
                    if !v.is_finite() || v < 0.0 {
                        errors.push(ConfigError {
                            field: format!("feeder[{i}].duration_hours"),
                            message: "must be finite and >= 0".into(),
                        });
                    }
                }
                (None, Some(_), Some(_)) => {}
                (None, None, None) => errors.push(ConfigError {
                    field: format!("feeder[{i}]"),
                    message: "needs either duration_hours or an hours/minutes pair".into(),
                }),
                _ => errors.push(ConfigError {
                    field: format!("feeder[{i}]"),
                    message: "duration_hours and hours/minutes are mutually exclusive, \
                              and hours/minutes must be given together"
                        .into(),
                }),
            }
        }

        if !self.feeder.is_empty() && total_customers == 0 {
            errors.push(ConfigError {
                field: "feeder".into(),
                message: "total customer count is zero, indices would be undefined".into(),
            });
        }

        errors
    }

    /// Converts the validated entries into calculation records.
    pub fn to_records(&self) -> Vec<FeederRecord> {
        self.feeder
            .iter()
            .map(|entry| FeederRecord {
                name: entry.name.clone(),
                customers: entry.customers,
                interruptions: entry.interruptions,
                duration: match (entry.duration_hours, entry.hours, entry.minutes) {
                    (Some(v), _, _) => OutageDuration::DecimalHours(v),
                    (None, Some(hours), Some(minutes)) => {
                        OutageDuration::HoursMinutes { hours, minutes }
                    }
                    // validate() rejects this shape; default keeps the
                    // conversion total.
                    _ => OutageDuration::DecimalHours(0.0),
                },
            })
            .collect()
    }
}
