use thiserror::Error;

/// Errors reported by a [`KeyValueStore`](crate::KeyValueStore) backend.
///
/// [`RecordStore`](crate::RecordStore) never hands these to its callers: reads
/// degrade to empty collections and failed writes are logged.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error from [`FileStore`](crate::FileStore).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The substrate is missing or refused the operation (no `window`,
    /// storage disabled, quota exceeded).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A previous holder of the in-memory lock panicked.
    #[error("Storage lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;
