use thiserror::Error;

/// Errors from record store operations (used by the trait in courier-core).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store could not be opened, read, written, or flushed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A stored row could not be decoded. Row 0 is the header.
    #[error("decode error at row {row}: {reason}")]
    Decode { row: u64, reason: String },
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

/// Errors surfaced by the messaging use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagingError {
    #[error("i/o error: {0}")]
    Io(String),

    #[error("decode error at row {row}: {reason}")]
    Decode { row: u64, reason: String },

    /// Only produced by the directional pair query when nothing matches.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed create request, rejected before the store is touched.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<StoreError> for MessagingError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Io(msg) => MessagingError::Io(msg),
            StoreError::Decode { row, reason } => MessagingError::Decode { row, reason },
        }
    }
}

/// Errors from the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("i/o error: {0}")]
    Io(String),

    #[error("validation error: {0}")]
    Validation(String),

    /// The name is already registered.
    #[error("user '{0}' already exists")]
    Conflict(String),
}
