//! RecordStore trait definition.
//!
//! Defines the storage interface for the append-only record log. The
//! infrastructure layer (courier-infra) implements it with a CSV file, an
//! in-memory vector, and a single-writer queue wrapper.

use std::sync::Arc;

use courier_types::error::StoreError;
use courier_types::record::Record;

/// Append-only log of message and conversation records.
///
/// No record is ever updated or removed in place; readers recompute state
/// by scanning the whole sequence. Implementations open and release their
/// backing resource per call.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait RecordStore: Send + Sync {
    /// Create or truncate the backing log and write the column header.
    ///
    /// Must be called once per process before any `append` or `scan`.
    fn initialize(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Append one record, durably flushed before returning.
    fn append(
        &self,
        record: &Record,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Every record in insertion order, header excluded.
    ///
    /// Any malformed row aborts the scan with `StoreError::Decode`.
    fn scan(&self) -> impl std::future::Future<Output = Result<Vec<Record>, StoreError>> + Send;
}

impl<S: RecordStore> RecordStore for Arc<S> {
    fn initialize(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send {
        (**self).initialize()
    }

    fn append(
        &self,
        record: &Record,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send {
        (**self).append(record)
    }

    fn scan(&self) -> impl std::future::Future<Output = Result<Vec<Record>, StoreError>> + Send {
        (**self).scan()
    }
}
