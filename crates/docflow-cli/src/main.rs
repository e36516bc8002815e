//! Docflow CLI — runs the sample documents through the processing pipeline.
//!
//! The transcript goes to stdout. Set RUST_LOG for diagnostics on stderr.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use docflow_cli::{init_tracing, run};
use docflow_core::{Config, ConsoleSink, LogFormat};

#[derive(Parser)]
#[command(name = "docflow", about = "Document processing pipeline demo")]
struct Cli {
    /// Format of diagnostic logs on stderr: text or json
    #[arg(long, env = "DOCFLOW_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

fn main() -> anyhow::Result<()> {
    // Before parsing, so clap's `env` fallbacks see values from `.env`.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(cli.log_format.unwrap_or(config.log_format));

    tracing::info!(
        environment = %config.environment,
        production = config.is_production(),
        "Starting document run"
    );
    let documents = run(Arc::new(ConsoleSink));
    tracing::info!(documents = documents.len(), "Document run finished");

    Ok(())
}
