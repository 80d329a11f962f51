//! Storage trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Properties;
use crate::query::{FilterMatcher, FilterSpec};

/// A stored value together with its derived properties.
///
/// Immutable once created: any change to `value` implies a different
/// identifier and therefore a different record, so there is no update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    /// Content fingerprint of `value`; the primary key.
    pub identifier: String,
    /// The original string, verbatim (case and whitespace preserved).
    pub value: String,
    /// Derived properties of `value`.
    pub properties: Properties,
    /// Creation time, set exactly once. ISO-8601 on the wire.
    pub created_at: DateTime<Utc>,
}

/// Opaque query descriptor evaluated by a store.
///
/// Produced by [`FilterMatcher::to_store_query`]; a record is included in the
/// result set iff [`StoreQuery::evaluate`] accepts its properties, which is
/// by construction the same predicate the in-memory matcher applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreQuery {
    filter: FilterSpec,
}

impl StoreQuery {
    pub(crate) fn new(filter: FilterSpec) -> Self {
        Self { filter }
    }

    /// A descriptor that applies no filtering at all.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Decide whether a record with these properties belongs to the result
    /// set.
    pub fn evaluate(&self, properties: &Properties) -> bool {
        FilterMatcher::matches(&self.filter, properties)
    }
}

/// Store statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of stored records.
    pub record_count: usize,
}

/// Trait for record store backends.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a record, atomically failing with `StorageError::Conflict` if
    /// the identifier already exists.
    ///
    /// Uniqueness enforcement belongs to the store; callers must not
    /// substitute a check-then-insert sequence, which is not atomic under
    /// concurrent writers.
    async fn put(&self, record: AnalyzedRecord) -> crate::error::Result<()>;

    /// Get a record by identifier. Absence is `None`, not an error.
    async fn get(&self, identifier: &str) -> crate::error::Result<Option<AnalyzedRecord>>;

    /// Find records matching a query descriptor, newest `created_at` first.
    /// Ties are broken consistently (identifier order).
    async fn find(&self, query: StoreQuery) -> crate::error::Result<Vec<AnalyzedRecord>>;

    /// Delete a record by identifier. Returns true iff a record was removed.
    async fn delete(&self, identifier: &str) -> crate::error::Result<bool>;

    /// Get store statistics.
    async fn stats(&self) -> crate::error::Result<StoreStats>;
}
