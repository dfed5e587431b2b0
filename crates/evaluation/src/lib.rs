//! Normeval-evaluation - Scoring text normalizers against reference corpora
//!
//! This crate feeds the unnormalized side of each utterance pair to a
//! normalizer and compares the answer with the reference reading.
//!
//! # Features
//!
//! - Sentence-level accuracy with a per-class breakdown
//! - Optional case-insensitive comparison
//! - Mismatch log in corpus order, also emitted as warnings
//! - Closure and external-process normalizers
//!
//! # Example
//!
//! ```rust,no_run
//! use normeval_corpus::resolve;
//! use normeval_evaluation::{Evaluator, FnNormalizer};
//!
//! let corpus = resolve("google_en", "data/en_with_types", "test", None)?;
//! let evaluator = Evaluator::builder().case_insensitive(true).build();
//! let report = evaluator.run(corpus, &mut FnNormalizer(|t: &str| t.to_lowercase()))?;
//! println!("accuracy {:.4}", report.accuracy);
//! # Ok::<(), normeval_core::EvalError>(())
//! ```

pub use normeval_core::{EvalError, Result};

// Normalizer capability
pub mod normalizer;
pub use normalizer::{CommandNormalizer, FnNormalizer, Normalizer};

// Reports
pub mod report;
pub use report::{AccuracyReport, ClassTally, Mismatch};

// Driver
pub mod evaluator;
pub use evaluator::{evaluate, Evaluator, EvaluatorBuilder, EvaluatorConfig};
