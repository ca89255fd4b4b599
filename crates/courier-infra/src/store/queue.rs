//! Single-writer queue in front of a record store.
//!
//! All mutations (`initialize`, `append`) are funnelled through one bounded
//! `mpsc` channel to a dedicated writer task, so concurrent HTTP handlers
//! never interleave partial rows. Each caller waits on a `oneshot` for the
//! outcome of its own write. Scans bypass the queue and read directly.

use std::sync::Arc;

use courier_core::repository::record::RecordStore;
use courier_types::error::StoreError;
use courier_types::record::Record;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

enum WriteCommand {
    Initialize {
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
    Append {
        record: Record,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
}

/// `RecordStore` wrapper that serializes every write through one task.
pub struct QueuedRecordStore<S> {
    inner: Arc<S>,
    commands: mpsc::Sender<WriteCommand>,
}

impl<S> Clone for QueuedRecordStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            commands: self.commands.clone(),
        }
    }
}

impl<S: RecordStore + 'static> QueuedRecordStore<S> {
    /// Spawn the writer task on the current tokio runtime.
    ///
    /// The task exits once every handle to the returned store is dropped.
    pub fn spawn(inner: S, capacity: usize) -> Self {
        let inner = Arc::new(inner);
        let (tx, rx) = mpsc::channel(capacity.max(1));
        tokio::spawn(run_writer(Arc::clone(&inner), rx));
        Self {
            inner,
            commands: tx,
        }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn submit(
        &self,
        command: WriteCommand,
        reply: oneshot::Receiver<Result<(), StoreError>>,
    ) -> Result<(), StoreError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| StoreError::Io("record writer has stopped".to_string()))?;
        reply
            .await
            .map_err(|_| StoreError::Io("record writer dropped the request".to_string()))?
    }
}

async fn run_writer<S: RecordStore>(store: Arc<S>, mut rx: mpsc::Receiver<WriteCommand>) {
    debug!("record writer started");
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Initialize { reply } => {
                let result = store.initialize().await;
                let _ = reply.send(result);
            }
            WriteCommand::Append { record, reply } => {
                let result = store.append(&record).await;
                if let Err(err) = &result {
                    warn!(id = %record.id, error = %err, "record append failed");
                }
                // The caller may have gone away; the write still happened.
                let _ = reply.send(result);
            }
        }
    }
    debug!("record writer stopped");
}

impl<S: RecordStore + 'static> RecordStore for QueuedRecordStore<S> {
    async fn initialize(&self) -> Result<(), StoreError> {
        let (reply, rx) = oneshot::channel();
        self.submit(WriteCommand::Initialize { reply }, rx).await
    }

    async fn append(&self, record: &Record) -> Result<(), StoreError> {
        let (reply, rx) = oneshot::channel();
        let command = WriteCommand::Append {
            record: record.clone(),
            reply,
        };
        self.submit(command, rx).await
    }

    async fn scan(&self) -> Result<Vec<Record>, StoreError> {
        self.inner.scan().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::csv_log::CsvRecordStore;
    use crate::store::memory::MemoryRecordStore;
    use courier_types::record::DEFAULT_COLUMNS;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn message(i: usize) -> Record {
        Record {
            id: format!("m{i}"),
            from: "Alice".to_string(),
            to: "Bob".to_string(),
            subject: Some(format!("subject, {i}")),
            content: format!("line one\nline two of {i}"),
            timestamp: None,
        }
    }

    #[tokio::test]
    async fn test_append_through_queue() {
        let store = QueuedRecordStore::spawn(MemoryRecordStore::new(), 4);
        store.initialize().await.unwrap();
        store.append(&message(1)).await.unwrap();
        assert_eq!(store.scan().await.unwrap(), vec![message(1)]);
    }

    #[tokio::test]
    async fn test_errors_are_reported_to_caller() {
        let store = QueuedRecordStore::spawn(MemoryRecordStore::new(), 4);
        let err = store.append(&message(1)).await.unwrap_err();
        assert!(matches!(err, StoreError::Io(ref msg) if msg.contains("not initialized")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_land_whole() {
        let dir = TempDir::new().unwrap();
        let csv = CsvRecordStore::new(dir.path().join("messages.csv"), DEFAULT_COLUMNS.to_vec())
            .unwrap();
        let store = QueuedRecordStore::spawn(csv, 8);
        store.initialize().await.unwrap();

        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.append(&message(i)).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let records = store.scan().await.unwrap();
        assert_eq!(records.len(), 50);
        let ids: HashSet<String> = records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 50);
        for record in &records {
            let i: usize = record.id[1..].parse().unwrap();
            assert_eq!(record, &message(i));
        }
    }
}
