use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uniquecode_core::{CodeRecord, Repository, StorageError, UniqueCode};

/// In-memory implementation of the Repository trait using DashMap.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<DashMap<String, CodeRecord>>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(DashMap::with_capacity(capacity)),
        }
    }

    /// Returns a copy of the record stored under `code`, if any.
    pub fn get(&self, code: &UniqueCode) -> Option<CodeRecord> {
        self.storage
            .get(code.as_str())
            .map(|entry| entry.value().clone())
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn put(&self, record: &CodeRecord) -> Result<(), StorageError> {
        self.storage
            .insert(record.code.as_str().to_owned(), record.clone());
        Ok(())
    }
}
