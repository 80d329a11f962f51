//! Filter Matcher.
//!
//! Evaluates a [`FilterSpec`] against stored properties. Both query origins
//! (explicit parameters and the natural-language compiler) flow through this
//! one evaluation path, so the two can never disagree on semantics. The
//! store-delegated form ([`StoreQuery`]) is evaluated by backends through the
//! same predicate.

use crate::analysis::Properties;
use crate::storage::StoreQuery;

use super::types::FilterSpec;

/// Stateless predicate evaluation for filter criteria.
pub struct FilterMatcher;

impl FilterMatcher {
    /// Evaluate a spec against a property set.
    ///
    /// All present fields are AND-combined; absent fields are vacuously
    /// satisfied, so an empty spec matches everything.
    pub fn matches(spec: &FilterSpec, properties: &Properties) -> bool {
        if let Some(want) = spec.is_palindrome {
            if properties.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = spec.min_length {
            if (properties.length as i64) < min {
                return false;
            }
        }
        if let Some(max) = spec.max_length {
            if (properties.length as i64) > max {
                return false;
            }
        }
        if let Some(count) = spec.word_count {
            if properties.word_count != count {
                return false;
            }
        }
        if let Some(c) = spec.contains_character {
            if !contains_character(properties, c) {
                return false;
            }
        }
        true
    }

    /// Convert a spec into the opaque descriptor a store evaluates.
    ///
    /// A record matches the descriptor iff [`FilterMatcher::matches`] accepts
    /// it; backends delegate to the same predicate to keep the two forms
    /// equivalent.
    pub fn to_store_query(spec: &FilterSpec) -> StoreQuery {
        StoreQuery::new(spec.clone())
    }
}

/// Case-insensitive containment against the case-sensitive frequency map.
///
/// The filter character arrives lowercase, but the map keys preserve the
/// original casing, so both case mappings of the character are probed. A
/// strictly positive count is required.
fn contains_character(properties: &Properties, c: char) -> bool {
    let present = |candidate: char| {
        properties
            .character_frequency_map
            .get(&candidate)
            .is_some_and(|count| *count > 0)
    };
    present(c) || c.to_lowercase().any(present) || c.to_uppercase().any(present)
}
