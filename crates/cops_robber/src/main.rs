//! Cops and Robber - match runner CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use cops_robber::{play, MatchConfig};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = resolve_config(cli)?;

    init_tracing(config.log_file().as_deref())?;

    let report = play(&config)?;

    if *config.json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Result: {}, status: {}", report.result, report.status);
    }
    Ok(())
}

/// Merges command-line overrides into the (optional) config file.
fn resolve_config(cli: Cli) -> Result<MatchConfig> {
    let mut config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    if let Some(cops) = cli.cops {
        config = config.with_cops(cops);
    }
    if let Some(robber) = cli.robber {
        config = config.with_robber(robber);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = cli.log_file {
        config = config.with_log_file(path);
    }
    if cli.json {
        config = config.with_json(true);
    }
    Ok(config)
}

/// Logs to `log_file` when given, otherwise to stderr. `RUST_LOG` wins over
/// the default `info` filter.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
