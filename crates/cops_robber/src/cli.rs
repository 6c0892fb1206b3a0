//! Command-line interface for cops_robber.

use clap::Parser;
use cops_robber::EngineKind;
use std::path::PathBuf;

/// Cops and Robber - referee a match on the tic-tac-toe graph
#[derive(Parser, Debug)]
#[command(name = "cops_robber")]
#[command(about = "Play cops and robber between two strategy engines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cops engine (first-free, random, line-hunter)
    #[arg(long)]
    pub cops: Option<EngineKind>,

    /// Robber engine (first-free, random, line-hunter)
    #[arg(long)]
    pub robber: Option<EngineKind>,

    /// Seed for random engines
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the match report as JSON
    #[arg(long)]
    pub json: bool,
}
