//! Reconstruction of utterances from annotated token records.

pub mod accumulator;
pub mod reading;

pub use accumulator::UtteranceAccumulator;
pub use reading::{collapse_letter_suffixes, rewrite_reference, transliterate};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A reconstructed utterance ready for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtterancePair {
    /// Written form, as fed to the normalizer
    pub unnormalized: String,
    /// Reference spoken form
    pub normalized: String,
    /// Distinct tags of the utterance in order of first appearance
    pub classes: Vec<CompactString>,
    /// Number of records the utterance was built from
    pub tokens: usize,
}
