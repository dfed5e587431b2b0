//! Subset selection policies.

use normeval_core::SemioticClass;
use std::fmt;

/// Selector of the conventional test window.
pub const TEST_SUBSET: &str = "test";

/// Selector of a full traversal.
pub const ALL_SUBSET: &str = "all";

/// Which files and utterances of a corpus are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetPolicy {
    /// The designated test file, up to a fixed token ceiling
    Canonical,
    /// Every file, optionally capped by utterance count
    All,
    /// Every file, only utterances containing the class
    Class(SemioticClass),
}

impl SubsetPolicy {
    /// Resolve a subset selector.
    pub fn parse(selector: &str) -> Option<Self> {
        match selector {
            TEST_SUBSET => Some(SubsetPolicy::Canonical),
            ALL_SUBSET => Some(SubsetPolicy::All),
            other => other.parse().ok().map(SubsetPolicy::Class),
        }
    }

    /// Every selector understood by [`SubsetPolicy::parse`].
    pub fn selectors() -> Vec<&'static str> {
        let mut selectors = vec![TEST_SUBSET, ALL_SUBSET];
        selectors.extend(SemioticClass::names());
        selectors
    }

    /// Whether an external utterance cap applies under this policy.
    ///
    /// Class-filtered runs read until the corpus is exhausted.
    pub fn honors_cap(&self) -> bool {
        matches!(self, SubsetPolicy::All)
    }
}

impl fmt::Display for SubsetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubsetPolicy::Canonical => f.write_str(TEST_SUBSET),
            SubsetPolicy::All => f.write_str(ALL_SUBSET),
            SubsetPolicy::Class(class) => write!(f, "{}", class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selectors() {
        assert_eq!(SubsetPolicy::parse("test"), Some(SubsetPolicy::Canonical));
        assert_eq!(SubsetPolicy::parse("all"), Some(SubsetPolicy::All));
        assert_eq!(
            SubsetPolicy::parse("CARDINAL"),
            Some(SubsetPolicy::Class(SemioticClass::Cardinal))
        );
        assert_eq!(SubsetPolicy::parse("toy"), None);
        assert_eq!(SubsetPolicy::parse("PLAIN"), None);
    }

    #[test]
    fn test_selectors_roundtrip() {
        for selector in SubsetPolicy::selectors() {
            let policy = SubsetPolicy::parse(selector).unwrap();
            assert_eq!(policy.to_string(), selector);
        }
    }

    #[test]
    fn test_cap_only_for_full_traversal() {
        assert!(SubsetPolicy::All.honors_cap());
        assert!(!SubsetPolicy::Canonical.honors_cap());
        assert!(!SubsetPolicy::Class(SemioticClass::Date).honors_cap());
    }
}
