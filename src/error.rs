use thiserror::Error;

/// Failures of the key-value persistence layer
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage quota exceeded writing {key} ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Failures of a listing repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Listing {0} not found")]
    NotFound(i64),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode remote rows: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Remote store returned no rows")]
    EmptyResponse,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
