use clap::Parser;
use std::path::PathBuf;

/// Allocate USD across liquidity pools and save weighted-yield strategies.
///
/// Commands are read from stdin, one per line. Type `help` for the list.
#[derive(Parser, Debug, Clone)]
#[command(name = "strategy-builder")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (TOML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pool/asset catalog JSON file (overrides the configured path)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Pool to offer for allocation. Can be specified multiple times;
    /// when absent, every catalog pool is offered.
    #[arg(short, long = "select")]
    pub select: Vec<String>,
}
