//! Coordinator wiring the pure analysis core to a record store.
//!
//! The coordinator is the surface an external request layer consumes:
//! - Creation: analyze a value, fingerprint it, hand the record to the store
//! - Retrieval: by identifier, by raw value, or by filter (either origin)
//! - Deletion and stats
//!
//! It holds no analysis state of its own; everything it derives is a pure
//! function of the inputs, and uniqueness is the store's to enforce.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::analysis::{analyze, fingerprint};
use crate::config::Settings;
use crate::error::{AnalysisError, QueryError, Result, StorageError};
use crate::query::{FilterCompiler, FilterMatcher, FilterSpec};
use crate::storage::{create_store, AnalyzedRecord, RecordStore, StoreQuery, StoreStats};

/// Orchestrates analysis, storage, and retrieval of string records.
pub struct AnalysisCoordinator {
    settings: Settings,
    compiler: FilterCompiler,
    store: Arc<dyn RecordStore>,
}

impl AnalysisCoordinator {
    /// Create a coordinator over an existing store.
    pub fn new(settings: Settings, store: Arc<dyn RecordStore>) -> Self {
        Self {
            settings,
            compiler: FilterCompiler::new(),
            store,
        }
    }

    /// Create a coordinator with the store selected by configuration.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let store = create_store(&settings)?;
        Ok(Self::new(settings, store))
    }

    /// Analyze a value and persist it as a new record.
    ///
    /// The identifier is the content fingerprint, so re-submitting a
    /// byte-identical value surfaces the store's `Conflict` with the same
    /// identifier the first creation minted. The insert is a single atomic
    /// store operation; there is no check-then-insert window.
    pub async fn create(&self, value: &str) -> Result<AnalyzedRecord> {
        let max = self.settings.limits.max_value_bytes;
        if max > 0 && value.len() > max {
            return Err(AnalysisError::ValueTooLarge {
                size: value.len(),
                max,
            }
            .into());
        }

        let properties = analyze(value);
        let record = AnalyzedRecord {
            identifier: properties.sha256_hash.clone(),
            value: value.to_string(),
            properties,
            created_at: Utc::now(),
        };
        self.store.put(record.clone()).await?;
        info!(identifier = %record.identifier, "Created record");
        Ok(record)
    }

    /// Get a record by identifier, failing with `NotFound` when absent.
    pub async fn get(&self, identifier: &str) -> Result<AnalyzedRecord> {
        self.store
            .get(identifier)
            .await?
            .ok_or_else(|| StorageError::NotFound(identifier.to_string()).into())
    }

    /// Get a record by its raw value.
    ///
    /// The fingerprint doubles as a lookup key, so no secondary index is
    /// needed.
    pub async fn get_by_value(&self, value: &str) -> Result<AnalyzedRecord> {
        self.get(&fingerprint::compute(value)).await
    }

    /// List all records, newest first.
    pub async fn list(&self) -> Result<Vec<AnalyzedRecord>> {
        self.store.find(StoreQuery::match_all()).await
    }

    /// Find records matching explicit structured criteria.
    pub async fn find(&self, spec: &FilterSpec) -> Result<Vec<AnalyzedRecord>> {
        self.store.find(FilterMatcher::to_store_query(spec)).await
    }

    /// Find records matching a natural-language sentence.
    ///
    /// Compiles the sentence and then runs the exact same retrieval path as
    /// [`AnalysisCoordinator::find`]; the two origins cannot diverge.
    pub async fn query(&self, sentence: &str) -> Result<Vec<AnalyzedRecord>> {
        let max = self.settings.limits.max_sentence_bytes;
        if max > 0 && sentence.len() > max {
            return Err(QueryError::SentenceTooLarge {
                size: sentence.len(),
                max,
            }
            .into());
        }

        let spec = self.compiler.compile(sentence)?;
        debug!(?spec, "Compiled query sentence");
        self.find(&spec).await
    }

    /// Delete a record by identifier. Returns true iff it existed.
    pub async fn delete(&self, identifier: &str) -> Result<bool> {
        self.store.delete(identifier).await
    }

    /// Store statistics.
    pub async fn stats(&self) -> Result<StoreStats> {
        self.store.stats().await
    }
}
