//! Normeval-corpus - Streaming readers for text normalization corpora
//!
//! This crate reads reference-labelled corpora from disk and yields
//! utterance pairs one at a time, holding at most one utterance and one open
//! file in memory.
//!
//! # Features
//!
//! - Subset selection: conventional test window, full traversal, or
//!   utterances of a given semiotic class
//! - Utterance caps and token ceilings
//! - Recoverable handling of unusable references, fatal handling of
//!   malformed lines
//! - Dataset registry for selecting a reader by name
//!
//! # Example
//!
//! ```rust,no_run
//! use normeval_corpus::resolve;
//!
//! let corpus = resolve("google_en", "data/en_with_types", "test", None)?;
//! for pair in corpus {
//!     let pair = pair?;
//!     println!("{} -> {}", pair.unnormalized, pair.normalized);
//! }
//! # Ok::<(), normeval_core::EvalError>(())
//! ```

pub use normeval_core::{EvalError, Result, UtterancePair};

// Iteration contract
pub mod corpus;
pub use corpus::{Corpus, Progress, UtteranceSource};

// Subset selection
pub mod subset;
pub use subset::SubsetPolicy;

// Formats
pub mod google;
pub use google::GoogleCorpus;

// Registry
pub mod factory;
pub use factory::{resolve, Dataset};
