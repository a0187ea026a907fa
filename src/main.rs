//! Binary entry point for dealbook.
//!
//! A thin CLI over the CSV engine: validate a file, convert it through the
//! engine, or summarize its tags. The contact manager proper (store
//! mutation, persistence, UI) lives elsewhere; this surface only drives
//! import and export.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow prints in the main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use dealbook::{
    tag_stats, ExportOutcome, ExportProfile, ExportService, ImportOutcome, ImportService,
    InMemoryStore,
};

/// Dealbook - tolerant CSV import/export for a contact book.
#[derive(Parser)]
#[command(name = "dealbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV file and report what would be imported.
    Check {
        /// The CSV file to check.
        file: PathBuf,

        /// Emit the summary and diagnostics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Import a CSV file and re-export it through the engine.
    Convert {
        /// The CSV file to read.
        input: PathBuf,

        /// Export profile: standard or full.
        #[arg(short, long, default_value = "standard")]
        profile: String,

        /// Output filename (.csv appended if missing; never overwrites).
        #[arg(short, long)]
        output: Option<String>,

        /// Directory to write into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Show the number of contacts per tag in a CSV file.
    Stats {
        /// The CSV file to read.
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { file, json } => cmd_check(&file, json),
        Commands::Convert {
            input,
            profile,
            output,
            out_dir,
        } => cmd_convert(&input, &profile, output.as_deref(), out_dir),
        Commands::Stats { file } => cmd_stats(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn import_file(path: &std::path::Path) -> anyhow::Result<ImportOutcome> {
    ImportService::new()
        .import_path(path, &InMemoryStore::new())
        .with_context(|| format!("failed to import {}", path.display()))
}

fn print_outcome(outcome: &ImportOutcome) {
    println!(
        "imported: {}  duplicates: {}  malformed: {}",
        outcome.summary.imported, outcome.summary.duplicates, outcome.summary.malformed
    );
    for diag in &outcome.diagnostics {
        println!("  {diag}");
    }
}

fn cmd_check(file: &std::path::Path, json: bool) -> anyhow::Result<()> {
    let outcome = import_file(file)?;
    if json {
        let payload = serde_json::json!({
            "summary": outcome.summary,
            "diagnostics": outcome.diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn cmd_convert(
    input: &std::path::Path,
    profile: &str,
    output: Option<&str>,
    out_dir: PathBuf,
) -> anyhow::Result<()> {
    let Some(profile) = ExportProfile::parse(profile) else {
        bail!("unknown profile '{profile}' (expected: standard, full)");
    };

    let outcome = import_file(input)?;
    print_outcome(&outcome);

    let export = ExportService::new()
        .with_out_dir(out_dir)
        .export_records(&outcome.contacts, profile, output)?;
    match export {
        ExportOutcome::Written { path, count } => {
            println!("wrote {count} contacts to {}", path.display());
        }
        ExportOutcome::NothingToExport => println!("nothing to export"),
    }
    Ok(())
}

fn cmd_stats(file: &std::path::Path) -> anyhow::Result<()> {
    let outcome = import_file(file)?;
    let stats = tag_stats(&outcome.contacts);
    if stats.is_empty() {
        println!("no tags found on any contact");
        return Ok(());
    }
    println!("tag stats:");
    for entry in stats {
        println!("  {}: {}", entry.tag, entry.count);
    }
    Ok(())
}
