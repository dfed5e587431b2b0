//! Rewriting of reference readings into the form the normalizer produces.
//!
//! The corpus spells letter sequences in several ways (`LETTERS` tokens,
//! `r_letter x_letter` runs inside `ELECTRONIC` tokens, space separated
//! abbreviations in `VERBATIM` tokens). The normalizer under test writes
//! spelled sequences as a single upper-case word, so references are brought
//! to that convention before comparison.

use crate::record::{LETTER_SUFFIX, SELF_MARKER};
use regex::Regex;
use std::sync::OnceLock;

/// Tag of tokens that are always spelled letter by letter.
pub const LETTERS_TAG: &str = "LETTERS";

/// Tag of tokens that are read verbatim.
pub const VERBATIM_TAG: &str = "VERBATIM";

/// Leading run of single lower-case letters separated by single spaces.
fn abbreviation_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]( [a-z])+").expect("Invalid regex pattern"))
}

/// Produce the reading of a non-punctuation token.
///
/// An empty result, or [`crate::record::SILENCE`], contributes nothing to the
/// normalized utterance.
pub fn rewrite_reference(tag: &str, raw: &str, reference: &str) -> String {
    let reading = if reference == SELF_MARKER {
        raw.to_lowercase()
    } else {
        reference.to_string()
    };

    // Checked on the original characters, before transliteration.
    let spelled = tag == LETTERS_TAG
        || (tag == VERBATIM_TAG && abbreviation_pattern().is_match(&reading));

    let reading = collapse_letter_suffixes(&transliterate(&reading));

    if spelled {
        reading.replace(' ', "").to_uppercase()
    } else {
        reading
    }
}

/// Closest plain-ASCII rendition of `text`; unmapped characters are dropped.
pub fn transliterate(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    deunicode::deunicode_with_tofu(text, "")
}

/// Collapse `x_letter` pieces into upper-case words.
///
/// Consecutive spelled pieces are glued together; a bare `_letter` piece
/// marks a word boundary inside the spelled run. References without the
/// marker are returned untouched.
pub fn collapse_letter_suffixes(reference: &str) -> String {
    if !reference.contains(LETTER_SUFFIX) {
        return reference.to_string();
    }

    let mut words: Vec<String> = Vec::new();
    let mut spelled = String::new();

    for piece in reference.split_whitespace() {
        match piece.strip_suffix(LETTER_SUFFIX) {
            Some("") => {
                if !spelled.is_empty() {
                    words.push(std::mem::take(&mut spelled));
                }
            }
            Some(stem) => spelled.push_str(&stem.to_uppercase()),
            None => {
                if !spelled.is_empty() {
                    words.push(std::mem::take(&mut spelled));
                }
                words.push(piece.to_string());
            }
        }
    }

    if !spelled.is_empty() {
        words.push(spelled);
    }

    words.join(" ")
}
