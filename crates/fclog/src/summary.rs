//! Stage 3: WARNING/ERROR summary reports.
//!
//! Copies qualifying rows into a derived `_summary` CSV/HTML pair; source
//! reports are never modified here. Files that are already summaries are
//! excluded up front so re-running cannot summarize a summary.

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::warn;

use fclog_shared::html::{self, RenderOptions};
use fclog_shared::severity::Severity;
use fclog_shared::table::Table;

use crate::config::{ReportConfig, SUMMARY_SUFFIX};

/// Placeholder the operator replaces with their own severity call.
pub const USER_SEVERITY_PLACEHOLDER: &str = "[fill severity]";

/// Placeholder the operator replaces with the fix applied.
pub const SOLUTION_PLACEHOLDER: &str = "[fill solution]";

pub fn run(config: &ReportConfig) -> Result<()> {
    config.ensure_report_dir()?;
    println!("Reading CSVs from: {}", config.report_dir.display());

    let csv_files = config.report_csvs(true)?;
    if csv_files.is_empty() {
        println!("No CSV files found in {}", config.report_dir.display());
        return Ok(());
    }

    for csv_path in &csv_files {
        let name = csv_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("\nProcessing: {name}");

        let table = match Table::read(csv_path) {
            Ok(table) => table,
            Err(e) => {
                warn!("Failed to read {}: {}", csv_path.display(), e);
                println!("  → SKIPPED (unreadable)");
                continue;
            }
        };

        let Some(severity_idx) = table.column("Severity") else {
            println!("  → SKIPPED (no Severity column)");
            continue;
        };

        let mut summary = Table {
            columns: table.columns.clone(),
            rows: table
                .rows
                .iter()
                .filter(|row| {
                    Severity::from_cell(&row[severity_idx])
                        .is_some_and(|severity| severity.is_reportable())
                })
                .cloned()
                .collect(),
        };

        if summary.rows.is_empty() {
            println!("  → No WARNING / ERROR found");
            continue;
        }

        let user_idx = summary.ensure_column("User Severity");
        let solution_idx = summary.ensure_column("solution");
        for row in &mut summary.rows {
            row[user_idx] = USER_SEVERITY_PLACEHOLDER.to_string();
            row[solution_idx] = SOLUTION_PLACEHOLDER.to_string();
        }

        let stem = csv_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let summary_csv = csv_path.with_file_name(format!("{stem}{SUMMARY_SUFFIX}.csv"));
        let summary_html = csv_path.with_file_name(format!("{stem}{SUMMARY_SUFFIX}.html"));

        summary.write(&summary_csv, true)?;
        println!(
            "  → Summary CSV written: {}",
            summary_csv.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
        );

        html::write_report(
            &summary_html,
            &summary_html
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            &summary.columns,
            &summary.rows,
            RenderOptions {
                shade_severity: true,
            },
        )?;
        println!(
            "  → Summary HTML written: {}",
            summary_html.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
        );
    }

    println!("\n{}", "✔ Summary generation complete".green());
    Ok(())
}
