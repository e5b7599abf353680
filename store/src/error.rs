//! Store error handling

use thiserror::Error;
use wellness_planner_shared::DataError;

/// Errors raised by the file store and its services
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Backup error: {0}")]
    Backup(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
