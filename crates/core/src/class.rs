//! Semiotic classes that can be used to select a corpus subset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semiotic class of a token.
///
/// `PLAIN` and `PUNCT` tokens also occur in the data, but they are present in
/// nearly every utterance and are not useful as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SemioticClass {
    Address,
    Cardinal,
    Date,
    Decimal,
    Digit,
    Electronic,
    Fraction,
    Letters,
    Measure,
    Money,
    Ordinal,
    Telephone,
    Time,
    Verbatim,
}

impl SemioticClass {
    /// Every selectable class, in alphabetical order.
    pub const ALL: [SemioticClass; 14] = [
        SemioticClass::Address,
        SemioticClass::Cardinal,
        SemioticClass::Date,
        SemioticClass::Decimal,
        SemioticClass::Digit,
        SemioticClass::Electronic,
        SemioticClass::Fraction,
        SemioticClass::Letters,
        SemioticClass::Measure,
        SemioticClass::Money,
        SemioticClass::Ordinal,
        SemioticClass::Telephone,
        SemioticClass::Time,
        SemioticClass::Verbatim,
    ];

    /// Tag as it appears in the corpus.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemioticClass::Address => "ADDRESS",
            SemioticClass::Cardinal => "CARDINAL",
            SemioticClass::Date => "DATE",
            SemioticClass::Decimal => "DECIMAL",
            SemioticClass::Digit => "DIGIT",
            SemioticClass::Electronic => "ELECTRONIC",
            SemioticClass::Fraction => "FRACTION",
            SemioticClass::Letters => "LETTERS",
            SemioticClass::Measure => "MEASURE",
            SemioticClass::Money => "MONEY",
            SemioticClass::Ordinal => "ORDINAL",
            SemioticClass::Telephone => "TELEPHONE",
            SemioticClass::Time => "TIME",
            SemioticClass::Verbatim => "VERBATIM",
        }
    }

    /// Names of all selectable classes.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for SemioticClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemioticClass {
    type Err = ();

    /// Matches the exact corpus tag; lookups are case-sensitive.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s).ok_or(())
    }
}
