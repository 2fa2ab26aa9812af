//! querysample - print a bounded sample query for a table.

use clap::Parser;
use querysample_cli::{Cli, render};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!(table = %cli.table.display(), "Building sample query");

    let sql = render(&cli)?;
    println!("{sql}");
    Ok(())
}
