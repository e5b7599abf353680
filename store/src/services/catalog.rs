//! Catalog queries over loaded collections
//!
//! The catalog is an in-memory view; it never writes. Filtering
//! reproduces the view-page bands: calorie and meal-count bands for
//! plans, difficulty, muscle group and duration bands for routines.

use crate::config::StoreConfig;
use crate::datasets;
use crate::error::StoreResult;
use crate::repository::{ExerciseRoutineRepository, NutritionPlanRepository};
use wellness_planner_shared::{
    DatasetStats, ExerciseRoutine, NutritionPlan, PlanFilter, RoutineFilter,
};

/// In-memory view over both collections
pub struct Catalog {
    plans: Vec<NutritionPlan>,
    routines: Vec<ExerciseRoutine>,
}

impl Catalog {
    pub fn new(plans: Vec<NutritionPlan>, routines: Vec<ExerciseRoutine>) -> Self {
        Self { plans, routines }
    }

    /// Catalog over the shipped datasets
    pub fn builtin() -> Self {
        Self::new(
            datasets::builtin_nutrition_plans().to_vec(),
            datasets::builtin_exercise_routines().to_vec(),
        )
    }

    /// Catalog over the collections on disk
    pub fn load(config: &StoreConfig) -> StoreResult<Self> {
        let plans = NutritionPlanRepository::from_config(config).load()?;
        let routines = ExerciseRoutineRepository::from_config(config).load()?;
        Ok(Self::new(plans, routines))
    }

    pub fn plans(&self) -> &[NutritionPlan] {
        &self.plans
    }

    pub fn routines(&self) -> &[ExerciseRoutine] {
        &self.routines
    }

    pub fn find_plan(&self, id: &str) -> Option<&NutritionPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn find_routine(&self, id: &str) -> Option<&ExerciseRoutine> {
        self.routines.iter().find(|r| r.id == id)
    }

    /// Plans matching the filter, in stored order
    pub fn filter_plans(&self, filter: &PlanFilter) -> Vec<&NutritionPlan> {
        self.plans.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Routines matching the filter, in stored order
    pub fn filter_routines(&self, filter: &RoutineFilter) -> Vec<&ExerciseRoutine> {
        self.routines.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Record counts, nested records included
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            nutrition_plans: self.plans.len(),
            exercise_routines: self.routines.len(),
            meals: self.plans.iter().map(|p| p.meals.len()).sum(),
            exercises: self.routines.iter().map(|r| r.exercises.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_planner_shared::{CalorieBand, Difficulty, DurationBand, MealCountBand};

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_plan("weekday001").is_some());
        assert!(catalog.find_routine("core001").is_some());
        assert!(catalog.find_plan("nope").is_none());
    }

    #[test]
    fn test_filter_plans_by_calorie_band() {
        let catalog = Catalog::builtin();
        let light = catalog.filter_plans(&PlanFilter {
            calories: Some(CalorieBand::AtMost1500),
            meal_count: None,
        });
        assert_eq!(light.len(), 1);
        assert_eq!(light[0].id, "weekday001");

        let heavy = catalog.filter_plans(&PlanFilter {
            calories: Some(CalorieBand::Over2500),
            meal_count: None,
        });
        assert_eq!(heavy.len(), 1);
        assert_eq!(heavy[0].id, "muscle001");
    }

    #[test]
    fn test_filter_plans_by_meal_count() {
        let catalog = Catalog::builtin();
        let many = catalog.filter_plans(&PlanFilter {
            calories: None,
            meal_count: Some(MealCountBand::From4To6),
        });
        let ids: Vec<_> = many.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["muscle001", "plant001"]);
    }

    #[test]
    fn test_filter_routines_by_difficulty_and_duration() {
        let catalog = Catalog::builtin();
        let beginner = catalog.filter_routines(&RoutineFilter {
            difficulty: Some(Difficulty::Beginner),
            ..Default::default()
        });
        let ids: Vec<_> = beginner.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["fullbody001", "core001"]);

        let short = catalog.filter_routines(&RoutineFilter {
            duration: Some(DurationBand::AtMost30),
            ..Default::default()
        });
        assert_eq!(short.len(), 2);

        let none = catalog.filter_routines(&RoutineFilter {
            difficulty: Some(Difficulty::Advanced),
            ..Default::default()
        });
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_routines_by_muscle_group() {
        let catalog = Catalog::builtin();
        let legs = catalog.filter_routines(&RoutineFilter {
            muscle_group: Some("Legs".to_string()),
            ..Default::default()
        });
        let ids: Vec<_> = legs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["fullbody001", "engine001"]);
    }

    #[test]
    fn test_stats_counts_nested_records() {
        let catalog = Catalog::builtin();
        let stats = catalog.stats();
        assert_eq!(stats.nutrition_plans, 4);
        assert_eq!(stats.exercise_routines, 4);
        assert_eq!(stats.meals, 15);
        assert_eq!(stats.exercises, 19);
        assert_eq!(stats.total_records(), 42);
    }
}
