//! Bundled datasets
//!
//! The shipped collections are embedded at compile time and parsed
//! once on first access. Their validity is pinned by tests, so the
//! parse uses the compile-time-constant idiom rather than a Result.

use once_cell::sync::Lazy;
use wellness_planner_shared::{ExerciseRoutine, NutritionPlan};

const NUTRITION_JSON: &str = include_str!("../data/nutrition_plans.json");
const ROUTINES_JSON: &str = include_str!("../data/exercise_routines.json");

static NUTRITION_PLANS: Lazy<Vec<NutritionPlan>> = Lazy::new(|| {
    serde_json::from_str(NUTRITION_JSON).expect("bundled nutrition dataset is valid JSON")
});

static EXERCISE_ROUTINES: Lazy<Vec<ExerciseRoutine>> = Lazy::new(|| {
    serde_json::from_str(ROUTINES_JSON).expect("bundled routine dataset is valid JSON")
});

/// The shipped nutrition-plan collection
pub fn builtin_nutrition_plans() -> &'static [NutritionPlan] {
    &NUTRITION_PLANS
}

/// The shipped exercise-routine collection
pub fn builtin_exercise_routines() -> &'static [ExerciseRoutine] {
    &EXERCISE_ROUTINES
}
