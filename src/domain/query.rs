//! Validated search query.

use std::fmt;

/// A non-empty, trimmed search string.
///
/// The only way to obtain one is [`SearchQuery::parse`], so a request can never be
/// issued for blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims `input` and returns `None` when nothing is left.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected() {
        for input in ["", " ", "\t", "\n  \t", "\u{3000}"] {
            assert!(SearchQuery::parse(input).is_none(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn input_is_trimmed() {
        let query = SearchQuery::parse("  whatsapp \n").unwrap();
        assert_eq!(query.as_str(), "whatsapp");
    }
}
