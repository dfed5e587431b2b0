//! Registry of supported datasets.
//!
//! A new corpus format is added as a [`Dataset`] variant plus a [`Corpus`]
//! variant; callers keep going through [`resolve`].

use crate::corpus::Corpus;
use crate::google::GoogleCorpus;
use normeval_core::{EvalError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Datasets that can be evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// English part of the Google text normalization challenge data
    GoogleEn,
}

impl Dataset {
    /// Every registered dataset.
    pub const ALL: [Dataset; 1] = [Dataset::GoogleEn];

    /// Name used to select the dataset.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::GoogleEn => "google_en",
        }
    }

    /// Names of all registered datasets.
    pub fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.name()).collect()
    }

    /// Open a reader over this dataset.
    pub fn open(&self, location: &Path, subset: &str, cap: Option<usize>) -> Result<Corpus> {
        match self {
            Dataset::GoogleEn => Ok(GoogleCorpus::new(location, subset, cap)?.into()),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| EvalError::UnsupportedDataset {
                name: s.to_string(),
                supported: Self::supported(),
            })
    }
}

/// Create a corpus reader by dataset name.
///
/// # Arguments
/// * `name` - Dataset name, one of [`Dataset::supported`]
/// * `location` - Directory with the downloaded and unpacked data
/// * `subset` - Subset selector understood by the dataset reader
/// * `cap` - Maximum number of utterances, where the subset allows one
pub fn resolve(
    name: &str,
    location: impl AsRef<Path>,
    subset: &str,
    cap: Option<usize>,
) -> Result<Corpus> {
    name.parse::<Dataset>()?.open(location.as_ref(), subset, cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::UtteranceSource;
    use std::fs;

    #[test]
    fn test_unknown_dataset() {
        let err = resolve("kaggle_ru", "/nonexistent", "all", None).unwrap_err();
        assert!(matches!(err, EvalError::UnsupportedDataset { .. }));
        assert!(err.to_string().contains("google_en"));
    }

    #[test]
    fn test_dataset_names_roundtrip() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.name().parse::<Dataset>().unwrap(), dataset);
        }
        assert_eq!(Dataset::supported(), vec!["google_en"]);
    }

    #[test]
    fn test_resolve_google() {
        let dir = std::env::temp_dir().join(format!("normeval_factory_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("output-00000-of-00100"),
            "PLAIN\tHi\t<self>\n<eos>\t<eos>\n",
        )
        .unwrap();

        let mut corpus = resolve("google_en", &dir, "all", None).unwrap();
        let pair = corpus.next_pair().unwrap().unwrap();
        assert_eq!(pair.unnormalized, "Hi");
        assert_eq!(pair.normalized, "hi");
        assert!(corpus.next().is_none());

        fs::remove_dir_all(dir).ok();
    }
}
