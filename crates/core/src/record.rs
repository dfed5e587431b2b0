//! Annotated token records and the markers used by the corpus format.
//!
//! Every corpus line carries one token as `tag\traw\treference`. Utterances
//! are separated by a sentinel line (`<eos>\t<eos>`).

use compact_str::CompactString;

/// Tag of punctuation records.
pub const PUNCT_TAG: &str = "PUNCT";

/// Utterance boundary sentinel.
pub const BOUNDARY: &str = "<eos>";

/// Reference meaning "reads as the lower-cased raw surface form".
pub const SELF_MARKER: &str = "<self>";

/// Reference of tokens that produce no speech.
pub const SILENCE: &str = "sil";

/// Suffix marking a letter that is spelled out in isolation.
pub const LETTER_SUFFIX: &str = "_letter";

/// A single `(tag, raw, reference)` record read from one corpus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    /// Semiotic class, `PUNCT`, or the boundary sentinel
    pub tag: CompactString,
    /// Surface form as written in the source text
    pub raw: String,
    /// Spoken-form reading
    pub reference: String,
}

impl TokenRecord {
    /// Create a record from its three fields.
    pub fn new(tag: &str, raw: &str, reference: &str) -> Self {
        Self {
            tag: CompactString::new(tag),
            raw: raw.to_string(),
            reference: reference.to_string(),
        }
    }

    /// Parse a tab-separated line.
    ///
    /// Returns `None` unless the line has exactly three fields.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split('\t');
        let tag = fields.next()?;
        let raw = fields.next()?;
        let reference = fields.next()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(tag, raw, reference))
    }
}

/// Whether a (trimmed) corpus line closes the current utterance.
pub fn is_boundary(line: &str) -> bool {
    line.starts_with(BOUNDARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_fields() {
        let record = TokenRecord::parse("CARDINAL\t2540\ttwo thousand five hundred forty").unwrap();
        assert_eq!(record.tag, "CARDINAL");
        assert_eq!(record.raw, "2540");
        assert_eq!(record.reference, "two thousand five hundred forty");
    }

    #[test]
    fn test_parse_rejects_other_field_counts() {
        assert!(TokenRecord::parse("PLAIN\thello").is_none());
        assert!(TokenRecord::parse("PLAIN").is_none());
        assert!(TokenRecord::parse("PLAIN\ta\tb\tc").is_none());
    }

    #[test]
    fn test_parse_keeps_empty_fields() {
        let record = TokenRecord::parse("PUNCT\t.\t").unwrap();
        assert_eq!(record.tag, PUNCT_TAG);
        assert_eq!(record.reference, "");
    }

    #[test]
    fn test_boundary() {
        assert!(is_boundary("<eos>\t<eos>"));
        assert!(is_boundary("<eos>"));
        assert!(!is_boundary("PLAIN\t<eos>\t<self>"));
    }
}
