//! Spendguard - expense anomaly scoring CLI
//!
//! Reads a batch of expense records, scores each against the batch's own
//! statistical baseline plus a fixed rule set, and renders a triage report.

use anyhow::Result;
use clap::Parser;
use spendguard::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
