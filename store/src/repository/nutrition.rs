//! Nutrition-plan repository

use super::{load_collection, save_collection};
use crate::config::StoreConfig;
use crate::error::StoreResult;
use std::path::PathBuf;
use wellness_planner_shared::errors::DataError;
use wellness_planner_shared::validation::{check_unique_ids, ensure_valid_plan};
use wellness_planner_shared::NutritionPlan;

/// File-backed store for the nutrition-plan collection
pub struct NutritionPlanRepository {
    path: PathBuf,
}

impl NutritionPlanRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.nutrition_path())
    }

    /// Load every plan; a missing file is an empty collection
    pub fn load(&self) -> StoreResult<Vec<NutritionPlan>> {
        load_collection(&self.path)
    }

    /// Overwrite the collection file with the given plans
    pub fn save(&self, plans: &[NutritionPlan]) -> StoreResult<()> {
        save_collection(&self.path, plans)
    }

    /// Look up a plan by id
    pub fn find(&self, id: &str) -> StoreResult<Option<NutritionPlan>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    /// Validate a plan and append it to the collection
    pub fn add(&self, plan: NutritionPlan) -> StoreResult<()> {
        ensure_valid_plan(&plan)?;
        let mut plans = self.load()?;
        plans.push(plan);
        validate_collection(&plans)?;
        self.save(&plans)
    }

    /// Remove the plan with the given id.
    ///
    /// Returns whether a plan was removed; removing an absent id is a
    /// no-op.
    pub fn remove(&self, id: &str) -> StoreResult<bool> {
        let mut plans = self.load()?;
        let before = plans.len();
        plans.retain(|p| p.id != id);
        if plans.len() == before {
            return Ok(false);
        }
        self.save(&plans)?;
        Ok(true)
    }

    /// Validate and swap in a whole collection
    pub fn replace_all(&self, plans: Vec<NutritionPlan>) -> StoreResult<()> {
        validate_collection(&plans)?;
        self.save(&plans)
    }
}

/// Collection-level checks: every record valid, plan ids distinct,
/// meal ids distinct across all plans
pub fn validate_collection(plans: &[NutritionPlan]) -> Result<(), DataError> {
    for plan in plans {
        ensure_valid_plan(plan)?;
    }
    check_unique_ids(plans.iter().map(|p| p.id.as_str()), "plan")?;
    check_unique_ids(
        plans.iter().flat_map(|p| p.meals.iter()).map(|m| m.id.as_str()),
        "meal",
    )?;
    Ok(())
}
