//! Import, export, and statistics over the stored collections

use crate::error::{StoreError, StoreResult};
use crate::repository::{nutrition, routines, ExerciseRoutineRepository, NutritionPlanRepository};
use tracing::info;
use wellness_planner_shared::{DatasetStats, ExerciseRoutine, NutritionPlan};

/// Data management service
pub struct DataService;

impl DataService {
    /// Export the stored nutrition plans as pretty-printed JSON
    pub fn export_nutrition_plans(repo: &NutritionPlanRepository) -> StoreResult<String> {
        let plans = repo.load()?;
        to_json("nutrition export", &plans)
    }

    /// Export the stored exercise routines as pretty-printed JSON
    pub fn export_exercise_routines(repo: &ExerciseRoutineRepository) -> StoreResult<String> {
        let routines = repo.load()?;
        to_json("routine export", &routines)
    }

    /// Replace the stored nutrition plans with the given JSON document.
    ///
    /// The document is parsed and validated in full before anything is
    /// written; a bad import leaves the stored file untouched.
    pub fn import_nutrition_plans(
        repo: &NutritionPlanRepository,
        json: &str,
    ) -> StoreResult<usize> {
        let plans: Vec<NutritionPlan> = from_json("nutrition import", json)?;
        nutrition::validate_collection(&plans)?;
        let count = plans.len();
        repo.replace_all(plans)?;
        info!(count, "nutrition plans imported");
        Ok(count)
    }

    /// Replace the stored exercise routines with the given JSON document
    pub fn import_exercise_routines(
        repo: &ExerciseRoutineRepository,
        json: &str,
    ) -> StoreResult<usize> {
        let imported: Vec<ExerciseRoutine> = from_json("routine import", json)?;
        routines::validate_collection(&imported)?;
        let count = imported.len();
        repo.replace_all(imported)?;
        info!(count, "exercise routines imported");
        Ok(count)
    }

    /// Record counts across both stored collections
    pub fn stats(
        nutrition_repo: &NutritionPlanRepository,
        routines_repo: &ExerciseRoutineRepository,
    ) -> StoreResult<DatasetStats> {
        let plans = nutrition_repo.load()?;
        let routines = routines_repo.load()?;
        Ok(DatasetStats {
            nutrition_plans: plans.len(),
            exercise_routines: routines.len(),
            meals: plans.iter().map(|p| p.meals.len()).sum(),
            exercises: routines.iter().map(|r| r.exercises.len()).sum(),
        })
    }
}

fn to_json<T: serde::Serialize>(what: &str, records: &[T]) -> StoreResult<String> {
    serde_json::to_string_pretty(records).map_err(|source| StoreError::Malformed {
        path: what.to_string(),
        source,
    })
}

fn from_json<T: serde::de::DeserializeOwned>(what: &str, json: &str) -> StoreResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| StoreError::Malformed {
        path: what.to_string(),
        source,
    })
}
