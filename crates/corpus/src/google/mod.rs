//! Reader for the Google text normalization challenge data.
//!
//! The unpacked data is a directory of text files with one token per line:
//!
//! ```text
//! PLAIN	Brillantaisia	<self>
//! PLAIN	is	<self>
//! PLAIN	a	<self>
//! PLAIN	genus	<self>
//! PUNCT	.	sil
//! <eos>	<eos>
//! ```
//!
//! Tokens are glued back into utterances with [`UtteranceAccumulator`].
//! The conventional test window is the first 100002 tokens of
//! `output-00099-of-00100`.

pub mod file;

use crate::corpus::{Progress, UtteranceSource};
use crate::subset::SubsetPolicy;
use file::{list_data_files, DataFile};
use normeval_core::record::is_boundary;
use normeval_core::{EvalError, Result, TokenRecord, UtteranceAccumulator, UtterancePair};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Name the format reports in configuration errors.
pub const FORMAT_NAME: &str = "google";

/// File holding the conventional test window.
pub const TEST_FILE: &str = "output-00099-of-00100";

/// Size of the conventional test window, in tokens.
pub const TEST_TOKEN_CEILING: usize = 100_002;

/// Characters a usable reference may consist of.
fn reference_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z\-' ]+$").expect("Invalid regex pattern"))
}

/// Check that a reconstructed reference only holds letters, spaces,
/// hyphens and apostrophes.
///
/// References with digits or symbols left in them were not fully
/// verbalized by the annotation and cannot be used for evaluation.
pub fn is_usable_reference(normalized: &str) -> bool {
    reference_pattern().is_match(normalized)
}

/// Streaming iterator over Google text normalization data.
#[derive(Debug)]
pub struct GoogleCorpus {
    /// Data files to read, in order
    files: Vec<PathBuf>,
    policy: SubsetPolicy,
    /// Stop once this many tokens were yielded
    token_ceiling: Option<usize>,
    /// Stop once this many utterances were yielded
    utterance_cap: Option<usize>,
    /// Index of the file being read
    file_idx: usize,
    current: Option<DataFile>,
    progress: Progress,
    exhausted: bool,
}

impl GoogleCorpus {
    /// Create a reader over the data unpacked at `location`.
    ///
    /// # Arguments
    /// * `location` - Directory with the data files
    /// * `subset` - `test`, `all`, or a semiotic class name such as `CARDINAL`
    /// * `cap` - Maximum number of utterances for `all`; `None` or 0 reads everything
    pub fn new(location: impl AsRef<Path>, subset: &str, cap: Option<usize>) -> Result<Self> {
        let location = location.as_ref();
        let policy = SubsetPolicy::parse(subset).ok_or_else(|| EvalError::UnsupportedSubset {
            dataset: FORMAT_NAME,
            subset: subset.to_string(),
            supported: SubsetPolicy::selectors(),
        })?;
        let cap = cap.filter(|&n| n > 0);

        let (files, token_ceiling, utterance_cap) = match policy {
            SubsetPolicy::Canonical => {
                let test_file = location.join(TEST_FILE);
                if !test_file.is_file() {
                    return Err(EvalError::MissingTestFile {
                        file: test_file,
                        location: location.to_path_buf(),
                    });
                }
                log::info!(
                    "For `test` subset processing first {} tokens from {}",
                    TEST_TOKEN_CEILING,
                    test_file.display()
                );
                (vec![test_file], Some(TEST_TOKEN_CEILING), None)
            }
            SubsetPolicy::All => (list_data_files(location)?, None, cap),
            SubsetPolicy::Class(class) => {
                if let Some(n) = cap {
                    log::info!("Utterance cap of {} is not applied to {} subset", n, class);
                }
                (list_data_files(location)?, None, None)
            }
        };

        log::debug!("{} subset spans {} data files", policy, files.len());

        Ok(Self {
            files,
            policy,
            token_ceiling,
            utterance_cap,
            file_idx: 0,
            current: None,
            progress: Progress::default(),
            exhausted: false,
        })
    }

    /// Data files visited by this reader.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn limit_reached(&self) -> bool {
        let enough_tokens = self
            .token_ceiling
            .is_some_and(|ceiling| self.progress.tokens >= ceiling);
        let enough_utterances = self
            .utterance_cap
            .is_some_and(|cap| self.progress.utterances >= cap);
        enough_tokens || enough_utterances
    }

    fn finish(&mut self) {
        if !self.exhausted {
            log::info!(
                "Processed {} utterances with {} tokens",
                self.progress.utterances,
                self.progress.tokens
            );
        }
        self.current = None;
        self.exhausted = true;
    }

    /// Read the next non-empty, sentinel-terminated utterance.
    ///
    /// Returns the accumulator together with the index of the file it came
    /// from, or `None` once every file is consumed.
    fn read_utterance(&mut self) -> Result<Option<(UtteranceAccumulator, usize)>> {
        loop {
            let file_idx = self.file_idx;
            let Some(path) = self.files.get(file_idx) else {
                return Ok(None);
            };

            let file = match &mut self.current {
                Some(file) => file,
                empty => {
                    log::info!("Opening {} for parsing", path.display());
                    empty.insert(DataFile::open(path)?)
                }
            };

            let mut utterance = UtteranceAccumulator::new();
            let terminated = loop {
                let Some(line) = file.next_line(path)? else {
                    break false;
                };
                if is_boundary(line) {
                    break true;
                }
                let record = TokenRecord::parse(line).ok_or_else(|| EvalError::MalformedLine {
                    path: path.clone(),
                    line: line.to_string(),
                })?;
                utterance.push(&record);
            };

            if !terminated {
                if !utterance.is_empty() {
                    log::warn!(
                        "Dropping {} tokens without a closing {} at the end of {}",
                        utterance.token_count(),
                        normeval_core::record::BOUNDARY,
                        path.display()
                    );
                }
                self.current = None;
                self.file_idx += 1;
                continue;
            }

            if !utterance.is_empty() {
                return Ok(Some((utterance, file_idx)));
            }
        }
    }

    fn pull(&mut self) -> Result<Option<UtterancePair>> {
        loop {
            let Some((utterance, file_idx)) = self.read_utterance()? else {
                return Ok(None);
            };

            if let SubsetPolicy::Class(class) = self.policy {
                if !utterance.has_class(class.as_str()) {
                    continue;
                }
            }

            let pair = utterance.finish();
            if !is_usable_reference(&pair.normalized) {
                log::warn!(
                    "Failed to parse utterance from {}. Normalized utterance [{}] contains unusual characters. Original utterance: [{}]",
                    self.files[file_idx].display(),
                    pair.normalized,
                    pair.unnormalized
                );
                continue;
            }

            self.progress.tokens += pair.tokens;
            self.progress.utterances += 1;
            return Ok(Some(pair));
        }
    }
}

impl UtteranceSource for GoogleCorpus {
    fn reset(&mut self) {
        self.file_idx = 0;
        self.current = None;
        self.progress = Progress::default();
        self.exhausted = false;
    }

    fn next_pair(&mut self) -> Result<Option<UtterancePair>> {
        if self.exhausted {
            return Ok(None);
        }
        if self.limit_reached() {
            self.finish();
            return Ok(None);
        }

        match self.pull() {
            Ok(Some(pair)) => Ok(Some(pair)),
            Ok(None) => {
                self.finish();
                Ok(None)
            }
            Err(err) => {
                self.current = None;
                self.exhausted = true;
                Err(err)
            }
        }
    }

    fn progress(&self) -> Progress {
        self.progress
    }
}
