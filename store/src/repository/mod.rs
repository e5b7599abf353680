//! JSON file repositories for the two collections
//!
//! Each repository owns one collection file. Semantics follow the
//! original data files: a missing file is an empty collection, writes
//! replace the whole file with pretty-printed JSON.

use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

pub mod nutrition;
pub mod routines;

pub use nutrition::NutritionPlanRepository;
pub use routines::ExerciseRoutineRepository;

/// Read a whole collection from a JSON file.
///
/// A missing file yields an empty collection; unreadable or
/// unparseable content is an error.
pub(crate) fn load_collection<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "collection file missing, treating as empty");
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| {
        error!(path = %path.display(), %source, "collection file is malformed");
        StoreError::Malformed {
            path: path.display().to_string(),
            source,
        }
    })
}

/// Write a whole collection to a JSON file, creating parent
/// directories as needed.
pub(crate) fn save_collection<T: Serialize>(path: &Path, records: &[T]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Malformed {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json)?;
    debug!(path = %path.display(), records = records.len(), "collection saved");
    Ok(())
}
