//! Storage module for analyzed records.
//!
//! This module provides the `RecordStore` trait an external persistence
//! engine implements, plus `MemoryStore`, the in-process reference backend.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::*;

use std::sync::Arc;

use crate::config::{Settings, StoreBackendType};
use crate::error::Result;

/// Create a record store from configuration.
pub fn create_store(settings: &Settings) -> Result<Arc<dyn RecordStore>> {
    match settings.storage.backend {
        StoreBackendType::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
