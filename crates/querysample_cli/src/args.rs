//! Command-line arguments.

use clap::Parser;
use std::num::NonZeroU64;
use std::path::PathBuf;

/// Build a sample `SELECT` statement for a table described in TOML.
#[derive(Parser, Debug, Clone)]
#[command(name = "querysample")]
#[command(about = "Build a bounded sample query for a table")]
#[command(version)]
pub struct Cli {
    /// TOML file with a `[table]` section and optional `[options]` section
    pub table: PathBuf,

    /// Sampler configuration file (type aliases, default limit)
    #[arg(short, long, env = "QUERYSAMPLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum number of rows
    #[arg(short, long)]
    pub limit: Option<NonZeroU64>,

    /// Partition to sample instead of the latest one
    #[arg(short, long)]
    pub partition: Option<String>,

    /// Single filter as COLUMN OPERATOR VALUE, e.g. `--filter cnt = 5`
    #[arg(
        long,
        num_args = 3,
        value_names = ["COLUMN", "OPERATOR", "VALUE"],
        allow_hyphen_values = true
    )]
    pub filter: Option<Vec<String>>,

    /// Column to order by
    #[arg(long)]
    pub order_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "order_by")]
    pub desc: bool,
}
