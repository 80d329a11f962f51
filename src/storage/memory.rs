//! In-process record store backed by a hash map.
//!
//! The reference backend: identifier uniqueness is enforced under a single
//! write lock, which is what makes create-if-absent atomic for concurrent
//! writers racing to insert the same content.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::storage::{AnalyzedRecord, RecordStore, StoreQuery, StoreStats};

/// In-memory record store.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, AnalyzedRecord>>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, record: AnalyzedRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.identifier) {
            return Err(StorageError::Conflict(record.identifier).into());
        }
        debug!(identifier = %record.identifier, "Stored record");
        records.insert(record.identifier.clone(), record);
        Ok(())
    }

    async fn get(&self, identifier: &str) -> Result<Option<AnalyzedRecord>> {
        let records = self.records.read().await;
        Ok(records.get(identifier).cloned())
    }

    async fn find(&self, query: StoreQuery) -> Result<Vec<AnalyzedRecord>> {
        let records = self.records.read().await;
        let mut matched: Vec<AnalyzedRecord> = records
            .values()
            .filter(|record| query.evaluate(&record.properties))
            .cloned()
            .collect();
        // Newest first; identifier as the stable tiebreak for equal
        // timestamps.
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.identifier.cmp(&b.identifier))
        });
        Ok(matched)
    }

    async fn delete(&self, identifier: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        let removed = records.remove(identifier).is_some();
        if removed {
            debug!(identifier = %identifier, "Deleted record");
        }
        Ok(removed)
    }

    async fn stats(&self) -> Result<StoreStats> {
        let records = self.records.read().await;
        Ok(StoreStats {
            record_count: records.len(),
        })
    }
}
