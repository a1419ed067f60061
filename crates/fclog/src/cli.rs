//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from the stage execution logic.

use clap::{Parser, Subcommand};

/// Fusion Compiler log triage
#[derive(Parser)]
#[command(name = "fclog")]
#[command(about = "Extract, enrich, and summarize Fusion Compiler log reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan raw logs and write one CSV/HTML report per file
    Extract {
        /// Glob pattern for input logs (default: logs_fc/*.log)
        pattern: Option<String>,
    },

    /// Fill the Description column from fc_shell man pages
    Enrich,

    /// Write WARNING/ERROR summary reports
    Summary,

    /// Run extract, enrich, and summary in order
    Run {
        /// Glob pattern for input logs (default: logs_fc/*.log)
        pattern: Option<String>,
    },
}
