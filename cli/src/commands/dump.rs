//! Dump command implementation.

use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};
use normeval_corpus::Dataset;
use std::path::PathBuf;

/// Output format of reconstructed pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// `unnormalized<TAB>normalized` per line
    Tsv,
    /// One JSON object per line, with classes and token counts
    Jsonl,
}

/// Dump command arguments.
#[derive(Parser)]
pub struct DumpCommand {
    /// Dataset name, defines how to parse data from datadir
    #[arg(long, value_parser = PossibleValuesParser::new(Dataset::supported()))]
    pub dataset: String,

    /// Directory with the data
    #[arg(long)]
    pub datadir: PathBuf,

    /// Subset of the data: `test`, `all`, or a semiotic class such as `CARDINAL`
    #[arg(long, default_value = "test")]
    pub subset: String,

    /// Number of utterances to read from the subset (reads all by default)
    #[arg(long)]
    pub num: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = DumpFormat::Tsv)]
    pub format: DumpFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::Result as AnyhowResult;
use normeval_corpus::{resolve, UtteranceSource};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn run(cmd: DumpCommand) -> AnyhowResult<()> {
    let mut corpus = resolve(&cmd.dataset, &cmd.datadir, &cmd.subset, cmd.num)?;

    let sink: Box<dyn Write> = match &cmd.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(sink);

    while let Some(pair) = corpus.next_pair()? {
        match cmd.format {
            DumpFormat::Tsv => writeln!(out, "{}\t{}", pair.unnormalized, pair.normalized)?,
            DumpFormat::Jsonl => {
                serde_json::to_writer(&mut out, &pair)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;

    let progress = corpus.progress();
    if let Some(path) = &cmd.output {
        log::info!(
            "Dumped {} utterances ({} tokens) to {}",
            progress.utterances,
            progress.tokens,
            path.display()
        );
    }

    Ok(())
}
