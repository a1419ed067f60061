//! The diagnostic record model shared by every report stage.

use std::path::Path;

use csv::WriterBuilder;
use serde::{Deserialize, Serialize};

use crate::error::FclogError;
use crate::severity::Severity;

/// Fixed CSV column order for all report artifacts.
pub const REPORT_COLUMNS: [&str; 6] = [
    "Code",
    "Severity",
    "Description",
    "User Severity",
    "rpt msg",
    "solution",
];

/// One parsed log entry.
///
/// Created by the extractor from exactly one log line. Description starts
/// empty and is filled by man-page enrichment; User Severity and solution
/// stay empty until the summary stage force-fills its placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Severity")]
    pub severity: Severity,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "User Severity")]
    pub user_severity: String,
    #[serde(rename = "rpt msg")]
    pub message: String,
    #[serde(rename = "solution")]
    pub solution: String,
}

impl DiagnosticRecord {
    /// Fresh record straight out of the extractor.
    pub fn new(code: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity,
            description: String::new(),
            user_severity: String::new(),
            message: message.into(),
            solution: String::new(),
        }
    }

    /// Cells in [`REPORT_COLUMNS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.severity.to_string(),
            self.description.clone(),
            self.user_severity.clone(),
            self.message.clone(),
            self.solution.clone(),
        ]
    }
}

/// Write extractor output: fixed header plus one row per record.
///
/// The header is written even when there are no records, so a log with no
/// diagnostics still produces a valid (empty) report.
pub fn write_records_csv(path: &Path, records: &[DiagnosticRecord]) -> Result<(), FclogError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_record_leaves_annotation_fields_empty() {
        let record = DiagnosticRecord::new("FC-100", Severity::Error, "something bad");
        assert_eq!(record.code, "FC-100");
        assert_eq!(record.severity, Severity::Error);
        assert!(record.description.is_empty());
        assert!(record.user_severity.is_empty());
        assert_eq!(record.message, "something bad");
        assert!(record.solution.is_empty());
    }

    #[test]
    fn test_to_row_matches_column_order() {
        let record = DiagnosticRecord::new("LINT-42", Severity::Warning, "unconnected pin");
        assert_eq!(
            record.to_row(),
            vec!["LINT-42", "Warning", "", "", "unconnected pin", ""]
        );
    }

    #[test]
    fn test_csv_round_trip_preserves_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        let records = vec![
            DiagnosticRecord::new("FC-100", Severity::Error, "something bad"),
            DiagnosticRecord::new("OPT-7", Severity::Info, "message, with comma"),
        ];
        write_records_csv(&path, &records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read_back: Vec<DiagnosticRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn test_empty_record_set_still_writes_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        write_records_csv(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.trim(),
            "Code,Severity,Description,User Severity,rpt msg,solution"
        );
    }
}
