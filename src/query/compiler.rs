//! Natural Language Filter Compiler.
//!
//! Compiles a bounded-grammar sentence into a [`FilterSpec`]. This is a fixed
//! set of phrasings, not a general parser: an ordered list of independent
//! pattern rules, each contributing at most one field, all contributions
//! merged into one spec. Rules never short-circuit each other, so a single
//! sentence may set several fields at once.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::QueryError;

use super::types::FilterSpec;

// ============================================================================
// Filter Compiler
// ============================================================================

/// Compiles natural-language sentences into structured filter criteria.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterCompiler;

impl FilterCompiler {
    /// Create a new filter compiler.
    pub fn new() -> Self {
        Self
    }

    /// Compile a sentence into a [`FilterSpec`].
    ///
    /// The sentence is trimmed and lower-cased once; every rule is then
    /// evaluated against the normalized copy. An empty sentence, or one no
    /// rule recognizes, fails with [`QueryError::Unparseable`] carrying the
    /// original sentence for diagnostics. A returned spec always has at
    /// least one field set.
    pub fn compile(&self, sentence: &str) -> Result<FilterSpec, QueryError> {
        let trimmed = sentence.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Unparseable {
                sentence: sentence.to_string(),
            });
        }

        let normalized = trimmed.to_lowercase();

        let mut spec = FilterSpec::new();
        spec.word_count = rule_single_word(&normalized);
        spec.is_palindrome = rule_palindrome(&normalized);
        spec.min_length = rule_longer_than(&normalized);
        spec.max_length = rule_shorter_than(&normalized);
        // Both rules target the same field; the containment rule is earlier
        // in the table and wins.
        spec.contains_character =
            rule_contains_character(&normalized).or_else(|| rule_first_vowel(&normalized));

        if spec.is_empty() {
            return Err(QueryError::Unparseable {
                sentence: sentence.to_string(),
            });
        }

        Ok(spec)
    }
}

// ============================================================================
// Rules
// ============================================================================
//
// Each rule is an independent predicate + extractor over the normalized
// sentence, returning the field value it contributes or `None`.

/// "single word" / "single-word" / "one word" / "one-word" -> word_count = 1.
fn rule_single_word(sentence: &str) -> Option<u64> {
    SINGLE_WORD_PATTERN.is_match(sentence).then_some(1)
}

/// "palindrome" / "palindromic" (word-boundary) -> is_palindrome = true.
fn rule_palindrome(sentence: &str) -> Option<bool> {
    PALINDROME_PATTERN.is_match(sentence).then_some(true)
}

/// "longer than N" -> min_length = N + 1 (strict bound made inclusive).
fn rule_longer_than(sentence: &str) -> Option<i64> {
    let caps = LONGER_THAN_PATTERN.captures(sentence)?;
    let n: i64 = caps.get(1)?.as_str().parse().ok()?;
    Some(n.saturating_add(1))
}

/// "shorter than N" -> max_length = N - 1; may be -1, which matches nothing.
fn rule_shorter_than(sentence: &str) -> Option<i64> {
    let caps = SHORTER_THAN_PATTERN.captures(sentence)?;
    let n: i64 = caps.get(1)?.as_str().parse().ok()?;
    Some(n.saturating_sub(1))
}

/// "containing the letter X" / "containing X" / "contains X" where X is a
/// single alphanumeric token; the first satisfied alternative wins. The
/// capture is already lowercase because the sentence is.
fn rule_contains_character(sentence: &str) -> Option<char> {
    for pattern in [
        &*CONTAINING_LETTER_PATTERN,
        &*CONTAINING_PATTERN,
        &*CONTAINS_PATTERN,
    ] {
        if let Some(caps) = pattern.captures(sentence) {
            return caps.get(1)?.as_str().chars().next();
        }
    }
    None
}

/// "first vowel" -> contains 'a'. A fixed heuristic substitution, not a real
/// vowel search; loses to the containment rule when both match.
fn rule_first_vowel(sentence: &str) -> Option<char> {
    FIRST_VOWEL_PATTERN.is_match(sentence).then_some('a')
}

// ============================================================================
// Patterns (using LazyLock for static initialization)
// ============================================================================

static SINGLE_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:single|one)[\s-]word\b").expect("Invalid regex"));
static PALINDROME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpalindrom(?:e|ic)\b").expect("Invalid regex"));
static LONGER_THAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\blonger\s+than\s+(\d+)\b").expect("Invalid regex"));
static SHORTER_THAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bshorter\s+than\s+(\d+)\b").expect("Invalid regex"));
static CONTAINING_LETTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bcontaining\s+the\s+letter\s+([a-z0-9])\b").expect("Invalid regex")
});
static CONTAINING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcontaining\s+([a-z0-9])\b").expect("Invalid regex"));
static CONTAINS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcontains\s+([a-z0-9])\b").expect("Invalid regex"));
static FIRST_VOWEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfirst\s+vowel\b").expect("Invalid regex"));

// ============================================================================
// Tests
// ============================================================================
