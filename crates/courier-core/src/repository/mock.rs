//! In-test stores used by the core unit tests.

use std::sync::Mutex;

use courier_types::error::{StoreError, UserError};
use courier_types::record::Record;
use courier_types::user::User;

use super::record::RecordStore;
use super::user::UserRepository;

/// Vec-backed store that can be told to fail scans or appends.
pub(crate) struct VecStore {
    records: Mutex<Vec<Record>>,
    scan_error: Option<StoreError>,
    append_error: Option<StoreError>,
}

impl VecStore {
    pub(crate) fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            scan_error: None,
            append_error: None,
        }
    }

    pub(crate) fn failing_scan(err: StoreError) -> Self {
        Self {
            scan_error: Some(err),
            ..Self::with_records(Vec::new())
        }
    }

    pub(crate) fn failing_append(err: StoreError) -> Self {
        Self {
            append_error: Some(err),
            ..Self::with_records(Vec::new())
        }
    }

    pub(crate) fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

impl RecordStore for VecStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        self.records.lock().unwrap().clear();
        Ok(())
    }

    async fn append(&self, record: &Record) -> Result<(), StoreError> {
        if let Some(err) = &self.append_error {
            return Err(err.clone());
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Record>, StoreError> {
        if let Some(err) = &self.scan_error {
            return Err(err.clone());
        }
        Ok(self.records())
    }
}

/// Vec-backed user registry.
#[derive(Default)]
pub(crate) struct VecUserRepository {
    users: Mutex<Vec<User>>,
}

impl UserRepository for VecUserRepository {
    async fn insert(&self, user: &User) -> Result<bool, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.name == user.name) {
            return Ok(false);
        }
        users.push(user.clone());
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.lock().unwrap().clone())
    }
}
