//! The normalizer under test.
//!
//! Evaluation only needs one capability from a normalizer: turn written text
//! into its spoken form. Anything else about it stays opaque.

pub mod command;

pub use command::CommandNormalizer;

use normeval_core::Result;

/// A text normalizer, mapping written text to its spoken-form reading.
pub trait Normalizer {
    /// Normalize one utterance.
    fn normalize(&mut self, text: &str) -> Result<String>;
}

/// Normalizer backed by a closure.
///
/// ```rust
/// use normeval_evaluation::{FnNormalizer, Normalizer};
///
/// let mut lower = FnNormalizer(|text: &str| text.to_lowercase());
/// assert_eq!(lower.normalize("Hello").unwrap(), "hello");
/// ```
pub struct FnNormalizer<F>(pub F);

impl<F> Normalizer for FnNormalizer<F>
where
    F: FnMut(&str) -> String,
{
    fn normalize(&mut self, text: &str) -> Result<String> {
        Ok((self.0)(text))
    }
}

impl<N: Normalizer + ?Sized> Normalizer for &mut N {
    fn normalize(&mut self, text: &str) -> Result<String> {
        (**self).normalize(text)
    }
}

impl<N: Normalizer + ?Sized> Normalizer for Box<N> {
    fn normalize(&mut self, text: &str) -> Result<String> {
        (**self).normalize(text)
    }
}
