//! OptiSpend CLI
//!
//! Usage:
//!   optispend serve --port 8080            Start the JSON HTTP API
//!   optispend tax --income 1200000         Income tax with slab breakdown
//!   optispend optimize --spending plan.json

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use optispend::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    run(cli.command).await
}
