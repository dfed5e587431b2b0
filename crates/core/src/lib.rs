//! Normeval-core - Utterance reconstruction for text normalization corpora
//!
//! This crate turns token-per-line annotated records back into utterance
//! pairs: the written text a normalizer receives, and the reference spoken
//! form it is expected to produce.
//!
//! # Features
//!
//! - Punctuation reattachment and quote pairing
//! - Letter-spelling collapse and ASCII transliteration of references
//! - Semiotic class bookkeeping for subset selection
//! - Error handling shared by the whole workspace
//!
//! # Example
//!
//! ```rust
//! use normeval_core::UtteranceAccumulator;
//!
//! let mut utterance = UtteranceAccumulator::new();
//! utterance.ingest("PLAIN", "Fujitsu", "<self>");
//! utterance.ingest("CARDINAL", "2540", "two thousand five hundred forty");
//! utterance.ingest("PUNCT", ".", "sil");
//!
//! let (unnormalized, normalized) = utterance.close();
//! assert_eq!(unnormalized, "Fujitsu 2540.");
//! assert_eq!(normalized, "fujitsu two thousand five hundred forty");
//! ```

pub mod error;
pub use error::{EvalError, Result};

pub mod class;
pub use class::SemioticClass;

pub mod record;
pub use record::TokenRecord;

pub mod utterance;
pub use utterance::{UtteranceAccumulator, UtterancePair};
