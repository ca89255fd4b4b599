//! Record store implementations and the backend selected by configuration.

pub mod csv_log;
pub mod memory;
pub mod queue;

use std::path::Path;

use courier_core::repository::record::RecordStore;
use courier_types::config::{StoreBackend, StoreConfig};
use courier_types::error::StoreError;
use courier_types::record::Record;

use crate::filesystem::record_log_path;
use self::csv_log::CsvRecordStore;
use self::memory::MemoryRecordStore;
use self::queue::QueuedRecordStore;

/// The store backend chosen by `[store].backend`.
#[derive(Debug)]
pub enum BackendStore {
    Csv(CsvRecordStore),
    Memory(MemoryRecordStore),
}

impl BackendStore {
    /// Build the configured backend rooted at `data_dir`.
    pub fn from_config(config: &StoreConfig, data_dir: &Path) -> Result<Self, StoreError> {
        match config.backend {
            StoreBackend::Csv => {
                let path = record_log_path(data_dir, config);
                Ok(Self::Csv(CsvRecordStore::new(path, config.columns.clone())?))
            }
            StoreBackend::Memory => Ok(Self::Memory(MemoryRecordStore::new())),
        }
    }
}

impl RecordStore for BackendStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        match self {
            Self::Csv(store) => store.initialize().await,
            Self::Memory(store) => store.initialize().await,
        }
    }

    async fn append(&self, record: &Record) -> Result<(), StoreError> {
        match self {
            Self::Csv(store) => store.append(record).await,
            Self::Memory(store) => store.append(record).await,
        }
    }

    async fn scan(&self) -> Result<Vec<Record>, StoreError> {
        match self {
            Self::Csv(store) => store.scan().await,
            Self::Memory(store) => store.scan().await,
        }
    }
}

/// Open the configured backend behind the single-writer queue.
///
/// Must be called inside a tokio runtime. Does not initialize the log.
pub fn open_store(
    config: &StoreConfig,
    data_dir: &Path,
) -> Result<QueuedRecordStore<BackendStore>, StoreError> {
    let backend = BackendStore::from_config(config, data_dir)?;
    tracing::info!(
        backend = ?config.backend,
        data_dir = %data_dir.display(),
        "opening record store"
    );
    Ok(QueuedRecordStore::spawn(backend, config.queue_capacity))
}
