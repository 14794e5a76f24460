//! Top-level CLI definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// sweep — relocates stale files into a recycle directory, or deletes
/// them, based on a declarative retention configuration.
#[derive(Parser)]
#[command(name = "sweep", version, about)]
pub struct Cli {
    /// Path to the config file (default: ./sweep.toml, then
    /// ~/.sweep/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a cleanup pass over all configured folders.
    Clean(CleanArgs),
    /// Manage the watched folder list.
    Folder {
        #[command(subcommand)]
        action: FolderAction,
    },
    /// Show or update configuration values.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub struct CleanArgs {
    /// Delete files outright instead of quarantining them. Requires
    /// --yes. Unrecoverable.
    #[arg(long)]
    pub delete: bool,

    /// Confirm the irreversible delete mode.
    #[arg(long)]
    pub yes: bool,

    /// Classify only; report what would happen without touching disk.
    #[arg(long, conflicts_with = "delete")]
    pub dry_run: bool,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Override the configured retention period for this run.
    #[arg(long)]
    pub retention_days: Option<u32>,

    /// Override the configured quarantine root for this run.
    #[arg(long)]
    pub quarantine_root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum FolderAction {
    /// Add a folder to the watched list.
    Add { path: PathBuf },
    /// Remove a folder from the watched list.
    Remove { path: PathBuf },
    /// List the watched folders.
    List,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the resolved configuration as TOML.
    Show,
    /// Set a config value. Keys: retention-days, quarantine-root,
    /// compress, archive-prefix, delete-after-compress.
    Set { key: String, value: String },
    /// Add an extension to the allow-list (use '*' for all).
    AllowExt { ext: String },
    /// Remove an extension from the allow-list.
    DenyExt { ext: String },
}
