//! CSV-backed record log.
//!
//! Implements `RecordStore` from `courier-core` on a single flat file: one
//! header row naming the columns, then one row per record with standard CSV
//! quoting. The header found in the file is authoritative for column order
//! on both scan and append, so logs written with a different column set stay
//! readable.
//!
//! Every call opens and closes the file. File I/O is blocking and runs on
//! tokio's blocking pool.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use courier_core::repository::record::RecordStore;
use courier_types::error::StoreError;
use courier_types::record::{Column, REQUIRED_COLUMNS, Record};
use csv::StringRecord;
use tracing::{debug, warn};

/// File-backed implementation of `RecordStore`.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
    columns: Vec<Column>,
}

impl CsvRecordStore {
    /// Create a store writing `columns` as the header on initialize.
    ///
    /// Fails if `columns` lacks `from`, `to` or `content`, or names a
    /// column twice.
    pub fn new(path: impl Into<PathBuf>, columns: Vec<Column>) -> Result<Self, StoreError> {
        for required in REQUIRED_COLUMNS {
            if !columns.contains(&required) {
                return Err(StoreError::Io(format!(
                    "column set must include '{required}'"
                )));
            }
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(StoreError::Io(format!("column '{column}' listed twice")));
            }
        }
        Ok(Self {
            path: path.into(),
            columns,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

impl RecordStore for CsvRecordStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        let path = self.path.clone();
        let columns = self.columns.clone();
        run_blocking(move || initialize_log(&path, &columns)).await?;
        debug!(path = %self.path.display(), "record log truncated");
        Ok(())
    }

    async fn append(&self, record: &Record) -> Result<(), StoreError> {
        let path = self.path.clone();
        let record = record.clone();
        run_blocking(move || append_row(&path, &record)).await
    }

    async fn scan(&self) -> Result<Vec<Record>, StoreError> {
        let path = self.path.clone();
        let result = run_blocking(move || scan_log(&path)).await;
        if let Err(StoreError::Decode { row, reason }) = &result {
            warn!(path = %self.path.display(), row, %reason, "record log is malformed");
        }
        result
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::Io(format!("record log task failed: {e}")))?
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Column layout read from the first row of the file.
///
/// Unknown header cells map to `None`: ignored on scan, written empty on append.
struct Header {
    cells: Vec<Option<Column>>,
}

impl Header {
    fn parse(row: &StringRecord) -> Result<Self, StoreError> {
        let cells: Vec<Option<Column>> = row.iter().map(|cell| cell.parse().ok()).collect();
        for required in REQUIRED_COLUMNS {
            if !cells.contains(&Some(required)) {
                return Err(StoreError::Decode {
                    row: 0,
                    reason: format!("header lacks '{required}' column"),
                });
            }
        }
        Ok(Self { cells })
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn position(&self, column: Column) -> Option<usize> {
        self.cells.iter().position(|c| *c == Some(column))
    }
}

fn missing_header() -> StoreError {
    StoreError::Decode {
        row: 0,
        reason: "missing header row".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Blocking operations
// ---------------------------------------------------------------------------

fn initialize_log(path: &Path, columns: &[Column]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(&file);
    writer
        .write_record(columns.iter().map(Column::as_str))
        .map_err(write_error)?;
    writer.flush()?;
    drop(writer);
    file.sync_data()?;
    Ok(())
}

fn append_row(path: &Path, record: &Record) -> Result<(), StoreError> {
    // Read access for the header; append mode still puts every write at the end.
    let file = OpenOptions::new().read(true).append(true).open(path)?;

    let header = {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(&file);
        let mut row = StringRecord::new();
        if !reader.read_record(&mut row).map_err(read_error)? {
            return Err(missing_header());
        }
        Header::parse(&row)?
    };

    let fields: Vec<String> = header
        .cells
        .iter()
        .map(|cell| cell.map(|column| record.field(column)).unwrap_or_default())
        .collect();

    let mut writer = csv::Writer::from_writer(&file);
    writer.write_record(&fields).map_err(write_error)?;
    writer.flush()?;
    drop(writer);
    file.sync_data()?;
    Ok(())
}

fn scan_log(path: &Path) -> Result<Vec<Record>, StoreError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut rows = reader.records();

    let header = match rows.next() {
        Some(row) => Header::parse(&row.map_err(read_error)?)?,
        None => return Err(missing_header()),
    };

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        let row = row.map_err(read_error)?;
        records.push(decode_row(&header, &row, index as u64 + 1)?);
    }
    Ok(records)
}

fn decode_row(header: &Header, row: &StringRecord, row_no: u64) -> Result<Record, StoreError> {
    if row.len() != header.len() {
        return Err(StoreError::Decode {
            row: row_no,
            reason: format!("expected {} fields, found {}", header.len(), row.len()),
        });
    }

    let get = |column: Column| cell(header, row, column);

    let subject = Some(get(Column::Subject))
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let timestamp = match get(Column::Timestamp) {
        "" => None,
        raw => Some(
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| StoreError::Decode {
                    row: row_no,
                    reason: format!("invalid timestamp '{raw}': {e}"),
                })?,
        ),
    };

    Ok(Record {
        id: get(Column::Id).to_string(),
        from: get(Column::From).to_string(),
        to: get(Column::To).to_string(),
        subject,
        content: get(Column::Content).to_string(),
        timestamp,
    })
}

fn cell<'r>(header: &Header, row: &'r StringRecord, column: Column) -> &'r str {
    header
        .position(column)
        .and_then(|i| row.get(i))
        .unwrap_or("")
}

fn read_error(e: csv::Error) -> StoreError {
    if e.is_io_error() {
        return StoreError::Io(e.to_string());
    }
    let row = e.position().map(|p| p.record()).unwrap_or(0);
    StoreError::Decode {
        row,
        reason: e.to_string(),
    }
}

fn write_error(e: csv::Error) -> StoreError {
    StoreError::Io(e.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
