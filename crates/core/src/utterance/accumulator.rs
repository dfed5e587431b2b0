//! Token-by-token reconstruction of a single utterance.

use super::reading::rewrite_reference;
use super::UtterancePair;
use crate::record::{TokenRecord, PUNCT_TAG, SILENCE};
use compact_str::CompactString;

/// Brackets that always attach to the token that follows them.
const OPENING_BRACKETS: [&str; 3] = ["(", "{", "["];

const QUOTE: &str = "\"";

/// Which double quote the accumulator expects to see next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum QuoteParity {
    #[default]
    Opening,
    Closing,
}

impl QuoteParity {
    fn flip(self) -> Self {
        match self {
            QuoteParity::Opening => QuoteParity::Closing,
            QuoteParity::Closing => QuoteParity::Opening,
        }
    }
}

/// Accumulates the records of one utterance and glues them back into an
/// unnormalized and a normalized string.
///
/// Punctuation is attached to the neighbouring token without a space:
/// opening brackets and opening quotes to the next token, everything else to
/// the previous one.
///
/// ```rust
/// use normeval_core::UtteranceAccumulator;
///
/// let mut utterance = UtteranceAccumulator::new();
/// utterance.ingest("PLAIN", "Hello", "<self>");
/// utterance.ingest("PUNCT", "!", "sil");
/// assert_eq!(utterance.close(), ("Hello!".to_string(), "hello".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UtteranceAccumulator {
    /// Tags in ingestion order
    tags: Vec<CompactString>,
    /// Surface fragments, one per non-punctuation token
    raw: Vec<String>,
    /// Readings that produce speech
    normalized: Vec<String>,
    /// Punctuation waiting for the next token
    prefix: String,
    quote: QuoteParity,
}

impl UtteranceAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record to the utterance.
    pub fn ingest(&mut self, tag: &str, raw: &str, reference: &str) {
        self.tags.push(CompactString::new(tag));
        if tag == PUNCT_TAG {
            self.ingest_punct(raw);
        } else {
            self.ingest_token(tag, raw, reference);
        }
    }

    /// Add a parsed record to the utterance.
    pub fn push(&mut self, record: &TokenRecord) {
        self.ingest(&record.tag, &record.raw, &record.reference);
    }

    fn ingest_punct(&mut self, raw: &str) {
        match self.raw.last_mut() {
            Some(last) if !OPENING_BRACKETS.contains(&raw) => {
                if raw == QUOTE {
                    match self.quote {
                        QuoteParity::Opening => self.prefix.push_str(raw),
                        QuoteParity::Closing => last.push_str(raw),
                    }
                    self.quote = self.quote.flip();
                } else {
                    // a dangling prefix goes along with the mark
                    last.push_str(&self.prefix);
                    last.push_str(raw);
                    self.prefix.clear();
                }
            }
            _ => {
                self.prefix.push_str(raw);
                if raw == QUOTE {
                    self.quote = self.quote.flip();
                }
            }
        }
    }

    fn ingest_token(&mut self, tag: &str, raw: &str, reference: &str) {
        let reading = rewrite_reference(tag, raw, reference);
        if !reading.is_empty() && reading != SILENCE {
            self.normalized.push(reading);
        }

        let mut fragment = std::mem::take(&mut self.prefix);
        fragment.push_str(raw);
        self.raw.push(fragment);
    }

    /// Check if a record with the given tag was ingested.
    pub fn has_class(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check if no records were ingested.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of ingested records, punctuation included.
    pub fn token_count(&self) -> usize {
        self.tags.len()
    }

    /// Distinct tags in order of first appearance.
    pub fn classes(&self) -> Vec<CompactString> {
        let mut classes: Vec<CompactString> = Vec::new();
        for tag in &self.tags {
            if !classes.contains(tag) {
                classes.push(tag.clone());
            }
        }
        classes
    }

    /// Close the utterance, returning `(unnormalized, normalized)`.
    pub fn close(self) -> (String, String) {
        let unnormalized = self.raw.join(" ").replace("/ ", "/");
        let normalized = self.normalized.join(" ");
        (unnormalized, normalized)
    }

    /// Close the utterance, keeping its classes and token count.
    pub fn finish(self) -> UtterancePair {
        let classes = self.classes();
        let tokens = self.token_count();
        let (unnormalized, normalized) = self.close();
        UtterancePair {
            unnormalized,
            normalized,
            classes,
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(records: &[(&str, &str, &str)]) -> UtteranceAccumulator {
        let mut utterance = UtteranceAccumulator::new();
        for (tag, raw, reference) in records {
            utterance.ingest(tag, raw, reference);
        }
        utterance
    }

    #[test]
    fn test_punctuation_attach_and_silence_drop() {
        let utterance = feed(&[
            ("PLAIN", "Fujitsu", "<self>"),
            ("PLAIN", "Primergy", "<self>"),
            ("CARDINAL", "2540", "two thousand five hundred forty"),
            ("PUNCT", ".", "sil"),
        ]);
        let (unnormalized, normalized) = utterance.close();
        assert_eq!(unnormalized, "Fujitsu Primergy 2540.");
        assert_eq!(normalized, "fujitsu primergy two thousand five hundred forty");
    }

    #[test]
    fn test_letter_spelling_collapse() {
        let utterance = feed(&[("LETTERS", "RX", "r_letter x_letter")]);
        assert_eq!(utterance.close().1, "RX");
    }

    #[test]
    fn test_quote_pairing() {
        let utterance = feed(&[
            ("PUNCT", "\"", "<self>"),
            ("PLAIN", "hello", "<self>"),
            ("PUNCT", "\"", "<self>"),
        ]);
        assert_eq!(utterance.close(), ("\"hello\"".to_string(), "hello".to_string()));
    }

    #[test]
    fn test_quotes_inside_utterance() {
        let utterance = feed(&[
            ("PLAIN", "song", "<self>"),
            ("PUNCT", "\"", "sil"),
            ("PLAIN", "What", "<self>"),
            ("PLAIN", "Now", "<self>"),
            ("PUNCT", "?", "sil"),
            ("PUNCT", "\"", "sil"),
            ("PLAIN", "again", "<self>"),
        ]);
        assert_eq!(utterance.close().0, "song \"What Now?\" again");
    }

    #[test]
    fn test_brackets_attach_forward() {
        let utterance = feed(&[
            ("PLAIN", "genus", "<self>"),
            ("PUNCT", "(", "sil"),
            ("PLAIN", "plants", "<self>"),
            ("PUNCT", ")", "sil"),
            ("PUNCT", ",", "sil"),
        ]);
        assert_eq!(utterance.close().0, "genus (plants),");
    }

    #[test]
    fn test_leading_punctuation_is_prefix() {
        let utterance = feed(&[
            ("PUNCT", "-", "sil"),
            ("PLAIN", "Intro", "<self>"),
        ]);
        assert_eq!(utterance.close().0, "-Intro");
    }

    #[test]
    fn test_pending_prefix_goes_with_punct() {
        let utterance = feed(&[
            ("PLAIN", "a", "<self>"),
            ("PUNCT", "(", "sil"),
            ("PUNCT", ")", "sil"),
            ("PLAIN", "b", "<self>"),
        ]);
        assert_eq!(utterance.close().0, "a() b");
    }

    #[test]
    fn test_space_after_slash_removed() {
        let utterance = feed(&[
            ("PLAIN", "and/", "<self>"),
            ("PLAIN", "or", "<self>"),
        ]);
        assert_eq!(utterance.close().0, "and/or");
    }

    #[test]
    fn test_has_class_and_token_count() {
        let utterance = feed(&[
            ("PLAIN", "in", "<self>"),
            ("DATE", "1999", "nineteen ninety nine"),
            ("PUNCT", ".", "sil"),
        ]);
        assert!(utterance.has_class("DATE"));
        assert!(utterance.has_class("PUNCT"));
        assert!(!utterance.has_class("CARDINAL"));
        assert_eq!(utterance.token_count(), 3);
        assert!(!utterance.is_empty());
        assert!(UtteranceAccumulator::new().is_empty());
    }

    #[test]
    fn test_finish_keeps_classes() {
        let pair = feed(&[
            ("PLAIN", "a", "<self>"),
            ("PLAIN", "b", "<self>"),
            ("MONEY", "$5", "five dollars"),
        ])
        .finish();
        assert_eq!(pair.classes, vec!["PLAIN", "MONEY"]);
        assert_eq!(pair.tokens, 3);
        assert_eq!(pair.normalized, "a b five dollars");
    }

    #[test]
    fn test_deterministic() {
        let records = [
            ("PLAIN", "Der", "<self>"),
            ("ELECTRONIC", "www.x.de", "w_letter w_letter w_letter dot x_letter dot d_letter e_letter"),
            ("PUNCT", ".", "sil"),
        ];
        assert_eq!(feed(&records).close(), feed(&records).close());
    }
}
