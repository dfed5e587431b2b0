//! Error types for corpus ingestion and evaluation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the normeval libraries.
///
/// Configuration and malformed-record errors are fatal and surface to the
/// caller unmodified. Recoverable anomalies (unusual characters in a
/// reference string) never become an `EvalError`; they are logged and the
/// utterance is skipped.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Dataset name not present in the registry
    #[error("Unknown dataset: {name}. Please pick one from the list {supported:?}")]
    UnsupportedDataset {
        name: String,
        supported: Vec<&'static str>,
    },

    /// Subset selector not understood by the corpus format
    #[error("{subset} subset is not supported by {dataset} data iterator. Use one of {supported:?}")]
    UnsupportedSubset {
        dataset: &'static str,
        subset: String,
        supported: Vec<&'static str>,
    },

    /// The canonical test file is absent from the data directory
    #[error("{} is not in {}", file.display(), location.display())]
    MissingTestFile { file: PathBuf, location: PathBuf },

    /// A corpus line without exactly three tab-separated fields
    #[error("Can't parse [{line}] from {}", path.display())]
    MalformedLine { path: PathBuf, line: String },

    /// I/O error with file context
    #[error("I/O error for {}: {err}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// The normalizer under test failed to produce an answer
    #[error("Normalizer error: {0}")]
    Normalizer(String),

    /// Nothing was evaluated, accuracy is undefined
    #[error("No utterances were evaluated, accuracy is undefined")]
    EmptyEvaluation,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EvalError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for normeval operations.
pub type Result<T> = std::result::Result<T, EvalError>;
