//! Normeval CLI - Evaluate text normalizers on reference corpora.
//!
//! This is the main entry point for the `normeval` command-line tool.

mod commands;
mod logging;

use clap::{Parser, Subcommand};
use commands::{DumpCommand, EvaluateCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "normeval")]
#[command(about = "Evaluates text normalization against reference-labelled corpora", long_about = None)]
#[command(version)]
struct Cli {
    /// Additionally store warnings (mismatches, skipped utterances) in this file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a normalizer against a corpus
    Evaluate(EvaluateCommand),
    /// Write reconstructed utterance pairs of a corpus
    Dump(DumpCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref())?;

    match cli.command {
        Commands::Evaluate(cmd) => commands::evaluate::run(cmd)?,
        Commands::Dump(cmd) => commands::dump::run(cmd)?,
    }

    Ok(())
}
