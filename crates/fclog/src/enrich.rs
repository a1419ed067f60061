//! Stage 2: fill Description cells from fc_shell man pages.
//!
//! One tool invocation per CSV, batching every distinct code in the file.
//! Codes the tool has nothing for keep whatever Description they had, so
//! re-running with an unavailable tool changes nothing.

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::warn;

use fclog_shared::html::{self, RenderOptions};
use fclog_shared::table::Table;

use crate::config::ReportConfig;
use crate::man_pages::ManPageSource;

pub fn run(config: &ReportConfig, source: &dyn ManPageSource) -> Result<()> {
    config.ensure_report_dir()?;
    println!("Reading CSVs from: {}", config.report_dir.display());

    let csv_files = config.report_csvs(false)?;
    if csv_files.is_empty() {
        println!("No CSV files found in {} — nothing to enrich.", config.report_dir.display());
        return Ok(());
    }

    for csv_path in &csv_files {
        let name = csv_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("\nProcessing: {name}");

        let mut table = match Table::read(csv_path) {
            Ok(table) => table,
            Err(e) => {
                warn!("Failed to read {}: {}", csv_path.display(), e);
                println!("  → SKIPPED (unreadable)");
                continue;
            }
        };

        if table.is_empty() {
            println!("  → SKIPPED (empty CSV)");
            continue;
        }
        let (Some(code_idx), Some(desc_idx)) = (table.column("Code"), table.column("Description"))
        else {
            println!("  → SKIPPED (missing Code / Description)");
            continue;
        };

        let codes: Vec<String> = table
            .rows
            .iter()
            .filter_map(|row| row.get(code_idx))
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if codes.is_empty() {
            println!("  → No codes found");
            continue;
        }

        println!("  → Running man lookup for {} codes", codes.len());
        let pages = match source.fetch(&codes) {
            Ok(pages) => pages,
            Err(e) => {
                warn!("Man lookup failed for {}: {}", name, e);
                HashMap::new()
            }
        };

        for row in &mut table.rows {
            let code = row[code_idx].trim().to_string();
            if let Some(text) = pages.get(&code) {
                row[desc_idx] = text.clone();
            }
        }

        table.write(csv_path, true)?;
        println!("  → CSV updated: {name}");

        let html_path = csv_path.with_extension("html");
        html::write_report(
            &html_path,
            &name,
            &table.columns,
            &table.rows,
            RenderOptions::default(),
        )?;
        println!("  → HTML written: {}", html_path.display());
    }

    println!("\n{}", "✔ Enrichment complete".green());
    Ok(())
}
