//! Loose CSV table handling for the enrichment and summary stages.
//!
//! The extractor writes typed records; the later stages must preserve
//! whatever columns a report happens to carry, so they operate on an
//! untyped table addressed by header name.

use std::fs;
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::error::FclogError;

/// A CSV file in memory: header plus rows, all strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a CSV file. An empty file yields a table with no columns;
    /// short rows are padded so every row matches the header width.
    pub fn read(path: &Path) -> Result<Self, FclogError> {
        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_bytes());
        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(columns.len(), String::new());
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Write the table; `quote_all` selects full quoting of every field.
    pub fn write(&self, path: &Path, quote_all: bool) -> Result<(), FclogError> {
        let style = if quote_all {
            QuoteStyle::Always
        } else {
            QuoteStyle::Necessary
        };
        let mut writer = WriterBuilder::new().quote_style(style).from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Index of a column by header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of a column, appending it (and padding every row) if absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        match self.column(name) {
            Some(idx) => idx,
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.columns.len() - 1
            }
        }
    }

    /// True when the file had no header at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Table {
        Table {
            columns: vec!["Code".into(), "Severity".into(), "Description".into()],
            rows: vec![
                vec!["FC-100".into(), "Error".into(), "multi\nline".into()],
                vec!["OPT-9".into(), "Info".into(), "with, comma".into()],
            ],
        }
    }

    #[test]
    fn test_round_trip_preserves_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        let table = sample();

        table.write(&path, false).unwrap();
        assert_eq!(Table::read(&path).unwrap(), table);

        table.write(&path, true).unwrap();
        assert_eq!(Table::read(&path).unwrap(), table);
    }

    #[test]
    fn test_quote_all_quotes_every_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        sample().write(&path, true).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(header, "\"Code\",\"Severity\",\"Description\"");
    }

    #[test]
    fn test_empty_file_reads_as_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let table = Table::read(&path).unwrap();
        assert!(table.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_short_rows_are_padded_to_header_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "Code,Severity,Description\nFC-1,Error\n").unwrap();

        let table = Table::read(&path).unwrap();
        assert_eq!(table.rows[0], vec!["FC-1", "Error", ""]);
    }

    #[test]
    fn test_ensure_column_appends_once() {
        let mut table = sample();
        let idx = table.ensure_column("solution");
        assert_eq!(idx, 3);
        assert_eq!(table.rows[0].len(), 4);
        // Second call finds the existing column
        assert_eq!(table.ensure_column("solution"), 3);
        assert_eq!(table.columns.len(), 4);
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.column("Severity"), Some(1));
        assert_eq!(table.column("missing"), None);
    }
}
