//! Diagnostic severity levels.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic record (stable ordering: Info < Warning < Error)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Parse one of the exact log keywords `INFO`, `WARNING`, `ERROR`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }

    /// Parse a stored CSV cell, case-insensitively ("Warning", "WARNING", ...).
    pub fn from_cell(cell: &str) -> Option<Self> {
        match cell.trim().to_ascii_uppercase().as_str() {
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }

    /// Capitalized form written to CSV and report cells.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Uppercase form used as the HTML row class.
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Warning and Error rows are the ones summaries keep.
    pub fn is_reportable(&self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
