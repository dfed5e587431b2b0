//! Accuracy reports.

use ahash::AHashMap;
use compact_str::CompactString;
use normeval_core::{EvalError, Result, UtterancePair};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// One utterance the normalizer got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Reference spoken form
    pub expected: String,
    /// What the normalizer produced
    pub obtained: String,
    /// Written form given to the normalizer
    pub original: String,
}

/// Counts for utterances containing one semiotic class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassTally {
    pub total: usize,
    pub mismatches: usize,
}

impl ClassTally {
    /// Share of correctly normalized utterances.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.total - self.mismatches) as f64 / self.total as f64
    }
}

/// Outcome of an evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct AccuracyReport {
    /// Utterances evaluated
    pub total: usize,
    /// Utterances where the normalizer disagreed with the reference
    pub mismatches: usize,
    /// `(total - mismatches) / total`
    pub accuracy: f64,
    /// Tallies per tag, counting every utterance the tag occurs in
    #[serde(serialize_with = "sorted_by_class")]
    pub per_class: AHashMap<CompactString, ClassTally>,
    /// Mismatches in corpus order
    pub mismatch_log: Vec<Mismatch>,
}

fn sorted_by_class<S: Serializer>(
    per_class: &AHashMap<CompactString, ClassTally>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let ordered: BTreeMap<&CompactString, &ClassTally> = per_class.iter().collect();
    ordered.serialize(serializer)
}

impl AccuracyReport {
    /// Per-class tallies ordered by class name.
    pub fn classes(&self) -> Vec<(&str, ClassTally)> {
        let mut classes: Vec<(&str, ClassTally)> = self
            .per_class
            .iter()
            .map(|(class, tally)| (class.as_str(), *tally))
            .collect();
        classes.sort_by(|a, b| a.0.cmp(b.0));
        classes
    }

    /// Write the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| EvalError::io(path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Running counts, turned into a report once the corpus is exhausted.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    total: usize,
    mismatches: usize,
    per_class: AHashMap<CompactString, ClassTally>,
    mismatch_log: Vec<Mismatch>,
}

impl Tally {
    pub(crate) fn record(&mut self, pair: &UtterancePair, mismatch: Option<Mismatch>, keep: bool) {
        self.total += 1;
        let wrong = mismatch.is_some();
        if let Some(mismatch) = mismatch {
            self.mismatches += 1;
            if keep {
                self.mismatch_log.push(mismatch);
            }
        }

        for class in &pair.classes {
            let tally = self.per_class.entry(class.clone()).or_default();
            tally.total += 1;
            if wrong {
                tally.mismatches += 1;
            }
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn mismatches(&self) -> usize {
        self.mismatches
    }

    pub(crate) fn into_report(self) -> Result<AccuracyReport> {
        if self.total == 0 {
            return Err(EvalError::EmptyEvaluation);
        }
        Ok(AccuracyReport {
            total: self.total,
            mismatches: self.mismatches,
            accuracy: (self.total - self.mismatches) as f64 / self.total as f64,
            per_class: self.per_class,
            mismatch_log: self.mismatch_log,
        })
    }
}
