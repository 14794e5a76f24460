//! `sweep clean` — run one cleanup pass and print the report.

use std::path::Path;

use tracing::info;

use sweep_core::{CliOverrides, Mode, Report, SweepConfig};

use crate::cli::CleanArgs;

pub fn run(config_path: &Path, args: &CleanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if args.dry_run {
        Mode::DryRun
    } else if args.delete {
        // Irreversible mode is double-gated: --delete alone refuses.
        if !args.yes {
            return Err("--delete permanently removes files; pass --yes to confirm".into());
        }
        Mode::Delete
    } else {
        Mode::Quarantine
    };

    let overrides = CliOverrides {
        retention_days: args.retention_days,
        quarantine_root: args.quarantine_root.clone(),
    };
    let config = SweepConfig::load(config_path, Some(&overrides))?;
    if config.folders.is_empty() {
        return Err("no folders configured; add one with `sweep folder add <path>`".into());
    }

    info!(config = %config_path.display(), ?mode, "starting cleanup");
    let report = sweep_engine::run(&config, mode)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, mode);
    }
    Ok(())
}

fn print_report(report: &Report, mode: Mode) {
    let verb = match mode {
        Mode::Quarantine => "quarantined",
        Mode::Delete => "deleted",
        Mode::DryRun => "would act on",
    };
    if mode == Mode::DryRun {
        println!("dry run: no files were touched");
    }
    println!(
        "inspected {} files: {verb} {}, skipped {}",
        report.total_files, report.transferred_files, report.skipped_files
    );
    for record in &report.records {
        match &record.target_path {
            Some(target) => println!(
                "  {} -> {} ({})",
                record.source_path.display(),
                target.display(),
                record.formatted_size
            ),
            None => println!(
                "  {} ({})",
                record.source_path.display(),
                record.formatted_size
            ),
        }
    }
    if let Some(archive) = &report.archive {
        println!(
            "archived {} files into {} ({} -> {})",
            archive.file_count,
            archive.output_path.display(),
            sweep_core::format_size(archive.original_size),
            sweep_core::format_size(archive.compressed_size)
        );
    }
}
