//! sweep — file-retention housekeeping.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = cli::Cli::parse();
    if let Err(e) = commands::dispatch(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
