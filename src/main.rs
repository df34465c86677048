//! Langscout - Dictionary-based language detection CLI
//!
//! Scores text against per-language word lists loaded from a
//! dictionary directory and reports the best-matching language.

mod cli;
mod config;
mod detector;
mod models;
mod profiles;
mod reporters;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse first so --log-level can seed the filter
    let cli = cli::Cli::parse();

    // Logging goes to stderr; RUST_LOG overrides --log-level
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .init();

    cli::run(cli)
}
