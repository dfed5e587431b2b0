//! Evaluate command implementation.

use clap::builder::PossibleValuesParser;
use clap::Parser;
use normeval_corpus::Dataset;
use std::path::PathBuf;

/// Evaluate command arguments.
#[derive(Parser)]
pub struct EvaluateCommand {
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

    /// Compare ignoring case; upper case marks spelling and triggers many false alarms
    #[arg(long, default_value_t = false)]
    pub ignore_case: bool,

    /// Write the full report, mismatches included, as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Normalizer command and its arguments, reading one utterance per line
    #[arg(last = true, required = true)]
    pub normalizer: Vec<String>,
}

use anyhow::{Context, Result as AnyhowResult};
use normeval_corpus::resolve;
use normeval_evaluation::{CommandNormalizer, Evaluator};
use std::time::Instant;

pub fn run(cmd: EvaluateCommand) -> AnyhowResult<()> {
    let corpus = resolve(&cmd.dataset, &cmd.datadir, &cmd.subset, cmd.num)?;

    let (program, args) = cmd
        .normalizer
        .split_first()
        .context("No normalizer command given")?;
    let mut normalizer = CommandNormalizer::spawn(program, args)?;

    let evaluator = Evaluator::builder().case_insensitive(cmd.ignore_case).build();

    let start = Instant::now();
    let report = evaluator.run(corpus, &mut normalizer)?;
    let elapsed = start.elapsed();

    println!("Results:");
    println!("  Utterances: {}", report.total);
    println!("  Mismatches: {}", report.mismatches);
    println!("  Accuracy: {:.4}", report.accuracy);
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!();
    println!("{:<12} {:>10} {:>10} {:>10}", "Class", "Total", "Wrong", "Accuracy");
    for (class, tally) in report.classes() {
        println!(
            "{:<12} {:>10} {:>10} {:>10.4}",
            class,
            tally.total,
            tally.mismatches,
            tally.accuracy()
        );
    }

    if let Some(path) = &cmd.report {
        report.save(path)?;
        println!();
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
