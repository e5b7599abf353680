//! Wellness Planner shared library
//!
//! Record types, filters, and validation shared by everything that
//! touches the nutrition-plan and exercise-routine collections.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

pub use models::{
    generate_id, Difficulty, Exercise, ExerciseRoutine, MacroSplit, Meal, NutritionPlan,
    MUSCLE_GROUPS,
};
