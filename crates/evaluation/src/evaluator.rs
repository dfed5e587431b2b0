//! Evaluation driver.
//!
//! Runs the normalizer over every unnormalized utterance of a corpus and
//! compares the result with the reference. Mismatches are the measured
//! signal: they are logged and counted, never treated as errors.

use crate::normalizer::Normalizer;
use crate::report::{AccuracyReport, Mismatch, Tally};
use normeval_core::{Result, UtterancePair};

/// Configuration for an evaluation run.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Lower-case both sides before comparing
    pub case_insensitive: bool,
    /// Keep mismatches in the report, not only in the log
    pub keep_mismatches: bool,
    /// Log progress every this many utterances, 0 disables
    pub progress_every: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            keep_mismatches: true,
            progress_every: 1000,
        }
    }
}

/// Builder for creating an evaluator.
#[derive(Clone, Default)]
pub struct EvaluatorBuilder {
    config: EvaluatorConfig,
}

impl EvaluatorBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare ignoring case.
    ///
    /// Upper case marks spelled letters in normalizer output, which the
    /// reference does not always agree on.
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.config.case_insensitive = enabled;
        self
    }

    /// Keep mismatches in the report.
    pub fn keep_mismatches(mut self, enabled: bool) -> Self {
        self.config.keep_mismatches = enabled;
        self
    }

    /// Set the progress logging interval.
    pub fn progress_every(mut self, utterances: usize) -> Self {
        self.config.progress_every = utterances;
        self
    }

    /// Build the evaluator.
    pub fn build(self) -> Evaluator {
        Evaluator::new(self.config)
    }
}

/// Scores a normalizer against a stream of utterance pairs.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Create an evaluator with the given configuration.
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Create a builder.
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Evaluate `normalizer` on every pair of `pairs`.
    ///
    /// Corpus and normalizer errors abort the run. A run that saw no
    /// utterances fails with [`normeval_core::EvalError::EmptyEvaluation`].
    pub fn run<I, N>(&self, pairs: I, normalizer: &mut N) -> Result<AccuracyReport>
    where
        I: IntoIterator<Item = Result<UtterancePair>>,
        N: Normalizer + ?Sized,
    {
        let mut tally = Tally::default();

        for pair in pairs {
            let pair = pair?;
            let mismatch = self.check(&pair, normalizer)?;
            if let Some(mismatch) = &mismatch {
                log::warn!(
                    "\nExpected: {}\nObtained: {}\nOriginal: {}",
                    mismatch.expected,
                    mismatch.obtained,
                    mismatch.original
                );
            }
            tally.record(&pair, mismatch, self.config.keep_mismatches);

            let every = self.config.progress_every;
            if every > 0 && tally.total() % every == 0 {
                log::info!(
                    "Evaluated {} utterances, {} mismatches",
                    tally.total(),
                    tally.mismatches()
                );
            }
        }

        let report = tally.into_report()?;
        log::warn!("Accuracy: {}", report.accuracy);
        Ok(report)
    }

    /// Normalize one utterance and compare it with the reference.
    fn check<N>(&self, pair: &UtterancePair, normalizer: &mut N) -> Result<Option<Mismatch>>
    where
        N: Normalizer + ?Sized,
    {
        let mut obtained = normalizer.normalize(&pair.unnormalized)?;
        let mut expected = pair.normalized.clone();
        if self.config.case_insensitive {
            obtained = obtained.to_lowercase();
            expected = expected.to_lowercase();
        }

        if obtained == expected {
            return Ok(None);
        }
        Ok(Some(Mismatch {
            expected,
            obtained,
            original: pair.unnormalized.clone(),
        }))
    }
}

/// Evaluate `normalizer` on `pairs` with default settings.
pub fn evaluate<I, N>(pairs: I, normalizer: &mut N, case_insensitive: bool) -> Result<AccuracyReport>
where
    I: IntoIterator<Item = Result<UtterancePair>>,
    N: Normalizer + ?Sized,
{
    Evaluator::builder()
        .case_insensitive(case_insensitive)
        .build()
        .run(pairs, normalizer)
}
