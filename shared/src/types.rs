//! Query, filter, and authoring request types

use crate::models::{
    generate_id, Difficulty, Exercise, ExerciseRoutine, Meal, NutritionPlan,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Meal-sum drift from the daily calorie target that triggers an
/// authoring warning
pub const CALORIE_DRIFT_WARN_THRESHOLD: i64 = 50;

// ============================================================================
// Filter Bands
// ============================================================================

/// Daily-calorie band for plan filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieBand {
    AtMost1500,
    From1501To2000,
    From2001To2500,
    Over2500,
}

impl CalorieBand {
    /// Classify a daily calorie target into its band
    pub fn of(daily_calories: u32) -> Self {
        match daily_calories {
            0..=1500 => CalorieBand::AtMost1500,
            1501..=2000 => CalorieBand::From1501To2000,
            2001..=2500 => CalorieBand::From2001To2500,
            _ => CalorieBand::Over2500,
        }
    }

    pub fn contains(&self, daily_calories: u32) -> bool {
        Self::of(daily_calories) == *self
    }
}

/// Meal-count band for plan filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealCountBand {
    UpTo3,
    From4To6,
    SevenPlus,
}

impl MealCountBand {
    pub fn of(meal_count: usize) -> Self {
        match meal_count {
            0..=3 => MealCountBand::UpTo3,
            4..=6 => MealCountBand::From4To6,
            _ => MealCountBand::SevenPlus,
        }
    }

    pub fn contains(&self, meal_count: usize) -> bool {
        Self::of(meal_count) == *self
    }
}

/// Estimated-duration band for routine filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBand {
    AtMost30,
    From31To60,
    Over60,
}

impl DurationBand {
    pub fn of(minutes: u32) -> Self {
        match minutes {
            0..=30 => DurationBand::AtMost30,
            31..=60 => DurationBand::From31To60,
            _ => DurationBand::Over60,
        }
    }

    pub fn contains(&self, minutes: u32) -> bool {
        Self::of(minutes) == *self
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Filter criteria for nutrition plans; unset fields match everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<CalorieBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_count: Option<MealCountBand>,
}

impl PlanFilter {
    pub fn matches(&self, plan: &NutritionPlan) -> bool {
        if let Some(band) = self.calories {
            if !band.contains(plan.daily_calories) {
                return false;
            }
        }
        if let Some(band) = self.meal_count {
            if !band.contains(plan.meals.len()) {
                return false;
            }
        }
        true
    }
}

/// Filter criteria for exercise routines; unset fields match everything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationBand>,
}

impl RoutineFilter {
    pub fn matches(&self, routine: &ExerciseRoutine) -> bool {
        if let Some(difficulty) = self.difficulty {
            if routine.difficulty != difficulty {
                return false;
            }
        }
        if let Some(group) = &self.muscle_group {
            if !routine.targets_group(group) {
                return false;
            }
        }
        if let Some(band) = self.duration {
            if !band.contains(routine.estimated_duration) {
                return false;
            }
        }
        true
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Record counts across both collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub nutrition_plans: usize,
    pub exercise_routines: usize,
    /// Meals nested across all plans
    pub meals: usize,
    /// Exercises nested across all routines
    pub exercises: usize,
}

impl DatasetStats {
    /// Total record count, nested records included
    pub fn total_records(&self) -> usize {
        self.nutrition_plans + self.exercise_routines + self.meals + self.exercises
    }
}

// ============================================================================
// Authoring Requests
// ============================================================================

/// A meal as entered on the plan-authoring form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MealInput {
    #[validate(length(min = 1, max = 120, message = "Meal name is required"))]
    pub name: String,
    #[validate(range(max = 2000, message = "Meal calories cannot exceed 2000"))]
    pub calories: u32,
    #[validate(range(min = 0.0, max = 100.0, message = "Meal protein must be between 0 and 100 g"))]
    pub protein: f64,
    #[validate(range(min = 0.0, max = 150.0, message = "Meal carbs must be between 0 and 150 g"))]
    pub carbs: f64,
    #[validate(range(min = 0.0, max = 50.0, message = "Meal fat must be between 0 and 50 g"))]
    pub fat: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// Request to create a nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNutritionPlanRequest {
    #[validate(length(min = 1, max = 120, message = "Plan name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 2000, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 1000, max = 5000, message = "Daily calories must be between 1000 and 5000"))]
    pub daily_calories: u32,
    #[validate(range(min = 50.0, max = 300.0, message = "Daily protein must be between 50 and 300 g"))]
    pub daily_protein: f64,
    #[validate(range(min = 50.0, max = 500.0, message = "Daily carbs must be between 50 and 500 g"))]
    pub daily_carbs: f64,
    #[validate(range(min = 30.0, max = 200.0, message = "Daily fat must be between 30 and 200 g"))]
    pub daily_fat: f64,
    #[validate(length(min = 1, max = 10, message = "A plan needs between 1 and 10 meals"), nested)]
    pub meals: Vec<MealInput>,
}

impl CreateNutritionPlanRequest {
    /// Sum of the calorie counts of the entered meals
    pub fn meal_calorie_total(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }

    /// Drift between the entered meals and the daily target, when it
    /// exceeds the warning threshold. The caller surfaces this as a
    /// warning; it never blocks creation.
    pub fn drift_warning(&self) -> Option<i64> {
        let drift = i64::from(self.meal_calorie_total()) - i64::from(self.daily_calories);
        (drift.abs() > CALORIE_DRIFT_WARN_THRESHOLD).then_some(drift)
    }

    /// Materialize the request into a plan, generating record ids
    pub fn into_plan(self) -> NutritionPlan {
        let meals = self
            .meals
            .into_iter()
            .map(|m| Meal {
                id: generate_id(),
                name: m.name,
                calories: m.calories,
                protein: m.protein,
                carbs: m.carbs,
                fat: m.fat,
                ingredients: m.ingredients,
                notes: m.notes,
            })
            .collect();
        NutritionPlan {
            id: generate_id(),
            name: self.name,
            description: self.description,
            meals,
            daily_calories: self.daily_calories,
            daily_protein: self.daily_protein,
            daily_carbs: self.daily_carbs,
            daily_fat: self.daily_fat,
        }
    }
}

/// An exercise as entered on the routine-authoring form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExerciseInput {
    #[validate(length(min = 1, max = 120, message = "Exercise name is required"))]
    pub name: String,
    #[validate(range(min = 1, max = 10, message = "Sets must be between 1 and 10"))]
    pub sets: u32,
    #[validate(length(min = 1, max = 60, message = "Reps description is required"))]
    pub reps: String,
    /// Empty means bodyweight
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub notes: String,
}

/// Request to create an exercise routine
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExerciseRoutineRequest {
    #[validate(length(min = 1, max = 120, message = "Routine name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 2000, message = "Description is required"))]
    pub description: String,
    pub difficulty: Difficulty,
    #[validate(range(min = 15, max = 180, message = "Duration must be between 15 and 180 minutes"))]
    pub estimated_duration: u32,
    #[validate(length(min = 1, message = "At least one target muscle group is required"))]
    pub target_muscle_groups: Vec<String>,
    #[validate(length(min = 1, max = 15, message = "A routine needs between 1 and 15 exercises"), nested)]
    pub exercises: Vec<ExerciseInput>,
}

impl CreateExerciseRoutineRequest {
    /// Materialize the request into a routine, generating record ids
    pub fn into_routine(self) -> ExerciseRoutine {
        let exercises = self
            .exercises
            .into_iter()
            .map(|e| Exercise {
                id: generate_id(),
                name: e.name,
                sets: e.sets,
                reps: e.reps,
                weight: if e.weight.trim().is_empty() {
                    "bodyweight".to_string()
                } else {
                    e.weight
                },
                notes: e.notes,
            })
            .collect();
        ExerciseRoutine {
            id: generate_id(),
            name: self.name,
            description: self.description,
            exercises,
            target_muscle_groups: self.target_muscle_groups,
            difficulty: self.difficulty,
            estimated_duration: self.estimated_duration,
        }
    }
}
