//! Derived string properties.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::fingerprint;
use crate::error::{AnalysisError, Result};

/// Properties derived from a string value.
///
/// A pure function of the value: recomputed identically for identical input,
/// never stored from a different derivation path. Field names are a stable
/// wire contract consumed by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Character count (logical characters, not bytes).
    pub length: u64,
    /// Whether the whitespace-stripped, case-folded value reads the same
    /// reversed.
    pub is_palindrome: bool,
    /// Count of distinct characters, case-sensitive.
    pub unique_characters: u64,
    /// Whitespace-delimited token count.
    pub word_count: u64,
    /// Content fingerprint, duplicated here for serialization.
    pub sha256_hash: String,
    /// Occurrence count per character of the original value, case preserved,
    /// whitespace included. Ordered map so serialization is byte-stable.
    pub character_frequency_map: BTreeMap<char, u64>,
}

/// Analyze a string into its derived properties.
///
/// Pure and deterministic; safe to invoke concurrently. The palindrome check
/// and the frequency map intentionally use different normalizations (stripped
/// and case-folded vs. verbatim) and are computed independently.
pub fn analyze(value: &str) -> Properties {
    let mut character_frequency_map: BTreeMap<char, u64> = BTreeMap::new();
    let mut distinct: HashSet<char> = HashSet::new();
    let mut length: u64 = 0;

    for c in value.chars() {
        length += 1;
        distinct.insert(c);
        *character_frequency_map.entry(c).or_insert(0) += 1;
    }

    let properties = Properties {
        length,
        is_palindrome: is_palindrome(value),
        unique_characters: distinct.len() as u64,
        word_count: value.split_whitespace().count() as u64,
        sha256_hash: fingerprint::compute(value),
        character_frequency_map,
    };

    debug!(
        length = properties.length,
        word_count = properties.word_count,
        "Analyzed value"
    );

    properties
}

/// Analyze a JSON value, rejecting anything that is not a string.
///
/// Boundary-validation entry point for JSON-speaking callers; the mismatch
/// error names the JSON type actually received.
pub fn analyze_json(value: &serde_json::Value) -> Result<Properties> {
    match value {
        serde_json::Value::String(s) => Ok(analyze(s)),
        other => Err(AnalysisError::TypeMismatch {
            got: json_type_name(other),
        }
        .into()),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Palindrome check over the whitespace-stripped, case-folded value.
///
/// Only whitespace is ignored; punctuation stays, so "A man, a man" is not a
/// palindrome while "A man a man" is. The empty string is a palindrome.
fn is_palindrome(value: &str) -> bool {
    let folded: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    folded.chars().eq(folded.chars().rev())
}
