//! Types for the filtering system.

use serde::{Deserialize, Serialize};

// ============================================================================
// Filter Spec
// ============================================================================

/// Structured filter criteria against analyzed properties.
///
/// Origin-agnostic: produced either from explicit request parameters or from
/// the natural-language compiler, and evaluated identically in both cases.
/// Present fields combine with logical AND; there is no disjunction. An
/// all-absent spec applies no filtering at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact match on the palindrome flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on length. Signed: producers do not normalize
    /// impossible ranges, they simply match nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Inclusive upper bound on length. May be negative ("shorter than 0").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    /// Exact match on the word count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    /// Character that must occur in the value, matched case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    pub fn with_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    pub fn with_min_length(mut self, min_length: i64) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_word_count(mut self, word_count: u64) -> Self {
        self.word_count = Some(word_count);
        self
    }

    pub fn with_contains_character(mut self, c: char) -> Self {
        self.contains_character = Some(c);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
