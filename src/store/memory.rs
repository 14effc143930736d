//! In-memory load store
//!
//! Mirrors the production store's filter and windowing semantics over a
//! plain vector. Used by tests and local development.

use super::{LoadStore, StoreError};
use crate::loads::{LoadFilter, LoadRecord};
use async_trait::async_trait;
use std::sync::RwLock;

/// In-process store holding records in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<LoadRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records
    pub fn with_records(records: Vec<LoadRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Add a record
    pub fn insert(&self, record: LoadRecord) {
        self.records.write().unwrap().push(record);
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LoadStore for MemoryStore {
    async fn find_loads(
        &self,
        filter: &LoadFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<LoadRecord>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records
            .iter()
            .filter(|record| filter.matches(record))
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
