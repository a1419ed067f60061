//! Stage 1: scan raw logs and write one CSV/HTML report per file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use glob::glob;
use owo_colors::OwoColorize;
use tracing::warn;

use fclog_shared::html::{self, RenderOptions};
use fclog_shared::parsers::parse_log_text;
use fclog_shared::record::{write_records_csv, DiagnosticRecord, REPORT_COLUMNS};

use crate::config::ReportConfig;

pub fn run(config: &ReportConfig) -> Result<()> {
    config.ensure_report_dir()?;

    let mut log_files: Vec<PathBuf> = glob(&config.log_pattern)
        .with_context(|| format!("invalid glob pattern {}", config.log_pattern))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable path while globbing: {}", e);
                None
            }
        })
        .collect();
    log_files.sort();

    if log_files.is_empty() {
        println!("ERROR: No .log files found");
        println!("Looked for pattern:");
        println!("  {}", config.log_pattern);
        bail!("no log files matched {}", config.log_pattern);
    }

    println!("Found {} log file(s)", log_files.len());
    println!("Input pattern : {}", config.log_pattern);
    println!("Output dir    : {}", config.report_dir.display());

    let columns: Vec<String> = REPORT_COLUMNS.iter().map(|c| c.to_string()).collect();

    for log_path in &log_files {
        println!("\nProcessing: {}", log_path.display());

        let records = parse_log_file(log_path);
        let file_name = log_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base = log_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let csv_path = config.report_dir.join(format!("{base}.csv"));
        let html_path = config.report_dir.join(format!("{base}.html"));

        write_records_csv(&csv_path, &records)?;
        let rows: Vec<Vec<String>> = records.iter().map(DiagnosticRecord::to_row).collect();
        html::write_report(
            &html_path,
            &format!("Log Report - {file_name}"),
            &columns,
            &rows,
            RenderOptions::default(),
        )?;

        println!("  → {base}.csv  ({} rows)", records.len());
        println!("  → {base}.html");
    }

    println!("\n{}", "✔ All log files processed".green());
    Ok(())
}

/// Read permissively: undecodable bytes are replaced, and an unreadable
/// file contributes zero records without aborting the batch.
fn parse_log_file(path: &Path) -> Vec<DiagnosticRecord> {
    match fs::read(path) {
        Ok(bytes) => parse_log_text(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
