//! The iteration contract shared by all corpus formats.

use crate::google::GoogleCorpus;
use normeval_core::{Result, UtterancePair};

/// Counters of what a corpus has yielded since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Utterances handed to the consumer
    pub utterances: usize,
    /// Records those utterances were built from
    pub tokens: usize,
}

/// A lazy, finite, restartable source of utterance pairs.
pub trait UtteranceSource {
    /// Rewind to the first file and zero the counters.
    fn reset(&mut self);

    /// Pull the next pair, `Ok(None)` once exhausted.
    ///
    /// After a fatal error the source stays exhausted until [`reset`].
    ///
    /// [`reset`]: UtteranceSource::reset
    fn next_pair(&mut self) -> Result<Option<UtterancePair>>;

    /// What was yielded since the last reset.
    fn progress(&self) -> Progress;
}

/// A corpus reader, one variant per supported format.
#[derive(Debug)]
pub enum Corpus {
    /// Google text normalization challenge data
    Google(GoogleCorpus),
}

impl UtteranceSource for Corpus {
    fn reset(&mut self) {
        match self {
            Corpus::Google(corpus) => corpus.reset(),
        }
    }

    fn next_pair(&mut self) -> Result<Option<UtterancePair>> {
        match self {
            Corpus::Google(corpus) => corpus.next_pair(),
        }
    }

    fn progress(&self) -> Progress {
        match self {
            Corpus::Google(corpus) => corpus.progress(),
        }
    }
}

impl Iterator for Corpus {
    type Item = Result<UtterancePair>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair().transpose()
    }
}

impl From<GoogleCorpus> for Corpus {
    fn from(corpus: GoogleCorpus) -> Self {
        Corpus::Google(corpus)
    }
}
