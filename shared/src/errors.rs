//! Error types for the Wellness Planner data library

use thiserror::Error;

/// Record- and collection-level data errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
