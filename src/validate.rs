//! Post-run artifact validation: catalog completeness, table shape and value
//! bounds, boundary file parseability. Produces severity-tagged diagnostics
//! rather than failing on the first problem.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::catalog::load_catalog;
use crate::pipeline::PipelineConfig;
use crate::provinces::PROVINCES;
use crate::rng::round2;
use crate::tables::{table_file_name, VALUE_MAX, VALUE_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Validate everything a run leaves under `data_dir`. A missing boundary file
/// is only a warning since the fetch is allowed to fail.
pub fn validate_artifacts(data_dir: &Path) -> ValidationReport {
    let config = PipelineConfig::new(data_dir);
    let mut report = ValidationReport::default();

    let catalog_path = config.catalog_path();
    let datasets = match load_catalog(&catalog_path) {
        Some(datasets) => datasets,
        None => {
            report.push(
                ValidationSeverity::Error,
                "catalog",
                format!("missing or unparseable: {}", catalog_path.display()),
            );
            return report;
        }
    };
    if datasets.len() != 5 {
        report.push(
            ValidationSeverity::Error,
            "catalog",
            format!("expected 5 datasets, found {}", datasets.len()),
        );
    }
    for dataset in &datasets {
        if dataset.id.is_empty() || dataset.name.is_empty() || dataset.year.is_empty() {
            report.push(
                ValidationSeverity::Error,
                "catalog",
                format!("incomplete descriptor: id='{}'", dataset.id),
            );
        }
    }

    for dataset in &datasets {
        let file_name = match table_file_name(dataset) {
            Ok(name) => name,
            Err(err) => {
                report.push(ValidationSeverity::Error, "tables", err.to_string());
                continue;
            }
        };
        validate_table(&config.bps_dir().join(&file_name), &file_name, &mut report);
    }

    let boundary_path = config.boundary_path();
    if boundary_path.exists() {
        match fs::read_to_string(&boundary_path) {
            Ok(content) => {
                if serde_json::from_str::<serde_json::Value>(&content).is_err() {
                    report.push(
                        ValidationSeverity::Error,
                        "boundary",
                        "boundary file is not valid JSON",
                    );
                }
            }
            Err(err) => {
                report.push(
                    ValidationSeverity::Error,
                    "boundary",
                    format!("unreadable: {err}"),
                );
            }
        }
    } else {
        report.push(
            ValidationSeverity::Warning,
            "boundary",
            "boundary file missing (fetch skipped or failed)",
        );
    }

    report
}

fn validate_table(path: &Path, context: &str, report: &mut ValidationReport) {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(err) => {
            report.push(
                ValidationSeverity::Error,
                context,
                format!("missing or unreadable: {err}"),
            );
            return;
        }
    };

    let rows: Vec<csv::StringRecord> = match reader.records().collect() {
        Ok(rows) => rows,
        Err(err) => {
            report.push(ValidationSeverity::Error, context, format!("bad row: {err}"));
            return;
        }
    };
    if rows.len() != PROVINCES.len() {
        report.push(
            ValidationSeverity::Error,
            context,
            format!("expected {} rows, found {}", PROVINCES.len(), rows.len()),
        );
    }

    for (index, (row, expected_province)) in rows.iter().zip(PROVINCES.iter()).enumerate() {
        let line = index + 1;
        if &row[0] != *expected_province {
            report.push(
                ValidationSeverity::Error,
                context,
                format!(
                    "row {line}: expected province '{expected_province}', found '{}'",
                    &row[0]
                ),
            );
        }
        match row[1].parse::<f64>() {
            Ok(value) => {
                if !(VALUE_MIN..=VALUE_MAX).contains(&value) || round2(value) != value {
                    report.push(
                        ValidationSeverity::Error,
                        context,
                        format!("row {line}: value {value} out of bounds or precision"),
                    );
                }
            }
            Err(_) => {
                report.push(
                    ValidationSeverity::Error,
                    context,
                    format!("row {line}: non-numeric value '{}'", &row[1]),
                );
            }
        }
    }
}
