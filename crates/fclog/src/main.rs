//! fclog - Fusion Compiler log triage CLI.
//!
//! Turns raw tool logs into CSV/HTML reports, enriches them with man-page
//! text from fc_shell, and derives WARNING/ERROR summaries.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fclog::cli::{Cli, Commands};
use fclog::config::ReportConfig;
use fclog::man_pages::FcShell;
use fclog::{enrich, extract, summary};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { pattern } => extract::run(&ReportConfig::resolve(pattern)?),
        Commands::Enrich => enrich::run(&ReportConfig::resolve(None)?, &FcShell::from_env()),
        Commands::Summary => summary::run(&ReportConfig::resolve(None)?),
        Commands::Run { pattern } => {
            let config = ReportConfig::resolve(pattern)?;
            extract::run(&config)?;
            enrich::run(&config, &FcShell::from_env())?;
            summary::run(&config)
        }
    }
}
