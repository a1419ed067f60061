//! Path configuration resolved once at startup.
//!
//! Stages receive an explicit config value instead of reading the working
//! directory ad hoc, so the whole run agrees on one input pattern and one
//! report directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory scanned for raw logs when no pattern is given.
pub const LOG_DIR: &str = "logs_fc";

/// Directory all report artifacts are written to.
pub const REPORT_DIR: &str = "logs_report";

/// Suffix marking derived summary artifacts.
pub const SUMMARY_SUFFIX: &str = "_summary";

/// Resolved input/output locations for one run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Glob pattern for raw input logs.
    pub log_pattern: String,
    /// Directory every CSV/HTML artifact lives in.
    pub report_dir: PathBuf,
}

impl ReportConfig {
    /// Resolve defaults against the invoking directory; an explicit
    /// pattern overrides only the input side.
    pub fn resolve(pattern: Option<String>) -> Result<Self> {
        let cwd = env::current_dir().context("cannot determine working directory")?;
        Ok(Self::rooted_at(&cwd, pattern))
    }

    /// Resolve against an explicit base directory (tests use this).
    pub fn rooted_at(base: &Path, pattern: Option<String>) -> Self {
        let log_pattern = pattern.unwrap_or_else(|| {
            base.join(LOG_DIR)
                .join("*.log")
                .to_string_lossy()
                .into_owned()
        });
        Self {
            log_pattern,
            report_dir: base.join(REPORT_DIR),
        }
    }

    /// Create the report directory if absent.
    pub fn ensure_report_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.report_dir)
            .with_context(|| format!("cannot create {}", self.report_dir.display()))?;
        Ok(())
    }

    /// Sorted list of report CSVs, optionally excluding derived summaries.
    pub fn report_csvs(&self, skip_summaries: bool) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let entries = fs::read_dir(&self.report_dir)
            .with_context(|| format!("cannot read {}", self.report_dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(".csv") {
                continue;
            }
            if skip_summaries && name.ends_with(&format!("{SUMMARY_SUFFIX}.csv")) {
                continue;
            }
            files.push(path);
        }
        files.sort();
        Ok(files)
    }
}
