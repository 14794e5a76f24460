//! Command dispatch.

mod clean;
mod config_cmd;
mod folder;

use std::path::PathBuf;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to its command handler.
pub fn dispatch(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = resolve_config_path(cli);
    match &cli.command {
        Command::Clean(args) => clean::run(&config_path, args),
        Command::Folder { action } => folder::run(&config_path, action),
        Command::Config { action } => config_cmd::run(&config_path, action),
    }
}

fn resolve_config_path(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(sweep_core::config::default_config_path)
}
