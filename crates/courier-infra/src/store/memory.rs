//! In-memory record log.
//!
//! Same contract as the CSV store, without persistence. Used for ephemeral
//! deployments (`backend = "memory"`) and the HTTP tests.

use std::sync::RwLock;

use courier_core::repository::record::RecordStore;
use courier_types::error::StoreError;
use courier_types::record::Record;

/// Vector-backed implementation of `RecordStore`.
///
/// `None` until `initialize` runs, so use-before-initialize fails the same
/// way a missing log file does.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Option<Vec<Record>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_initialized() -> StoreError {
    StoreError::Io("store not initialized".to_string())
}

fn poisoned() -> StoreError {
    StoreError::Io("record store lock poisoned".to_string())
}

impl RecordStore for MemoryRecordStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        *guard = Some(Vec::new());
        Ok(())
    }

    async fn append(&self, record: &Record) -> Result<(), StoreError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        let records = guard.as_mut().ok_or_else(not_initialized)?;
        records.push(record.clone());
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Record>, StoreError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        guard.as_ref().cloned().ok_or_else(not_initialized)
    }
}
