//! Exercise-routine repository

use super::{load_collection, save_collection};
use crate::config::StoreConfig;
use crate::error::StoreResult;
use std::path::PathBuf;
use wellness_planner_shared::errors::DataError;
use wellness_planner_shared::validation::{check_unique_ids, ensure_valid_routine};
use wellness_planner_shared::ExerciseRoutine;

/// File-backed store for the exercise-routine collection
pub struct ExerciseRoutineRepository {
    path: PathBuf,
}

impl ExerciseRoutineRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.routines_path())
    }

    /// Load every routine; a missing file is an empty collection
    pub fn load(&self) -> StoreResult<Vec<ExerciseRoutine>> {
        load_collection(&self.path)
    }

    /// Overwrite the collection file with the given routines
    pub fn save(&self, routines: &[ExerciseRoutine]) -> StoreResult<()> {
        save_collection(&self.path, routines)
    }

    /// Look up a routine by id
    pub fn find(&self, id: &str) -> StoreResult<Option<ExerciseRoutine>> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    /// Validate a routine and append it to the collection
    pub fn add(&self, routine: ExerciseRoutine) -> StoreResult<()> {
        ensure_valid_routine(&routine)?;
        let mut routines = self.load()?;
        routines.push(routine);
        validate_collection(&routines)?;
        self.save(&routines)
    }

    /// Remove the routine with the given id.
    ///
    /// Returns whether a routine was removed; removing an absent id is
    /// a no-op.
    pub fn remove(&self, id: &str) -> StoreResult<bool> {
        let mut routines = self.load()?;
        let before = routines.len();
        routines.retain(|r| r.id != id);
        if routines.len() == before {
            return Ok(false);
        }
        self.save(&routines)?;
        Ok(true)
    }

    /// Validate and swap in a whole collection
    pub fn replace_all(&self, routines: Vec<ExerciseRoutine>) -> StoreResult<()> {
        validate_collection(&routines)?;
        self.save(&routines)
    }
}

/// Collection-level checks: every record valid, routine ids distinct,
/// exercise ids distinct across all routines
pub fn validate_collection(routines: &[ExerciseRoutine]) -> Result<(), DataError> {
    for routine in routines {
        ensure_valid_routine(routine)?;
    }
    check_unique_ids(routines.iter().map(|r| r.id.as_str()), "routine")?;
    check_unique_ids(
        routines
            .iter()
            .flat_map(|r| r.exercises.iter())
            .map(|e| e.id.as_str()),
        "exercise",
    )?;
    Ok(())
}
