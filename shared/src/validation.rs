//! Record validation
//!
//! Field validators mirror the constraints the authoring forms enforce;
//! record validators collect every violation so callers can report them
//! all at once instead of stopping at the first.

use crate::errors::DataError;
use crate::models::{Exercise, ExerciseRoutine, Meal, NutritionPlan};

/// Longest accepted record id
pub const MAX_ID_LEN: usize = 32;

/// Validate a record id: lowercase slug or generated hex, 1-32 chars
pub fn validate_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("Id cannot be empty".to_string());
    }
    if id.len() > MAX_ID_LEN {
        return Err(format!("Id cannot exceed {} characters", MAX_ID_LEN));
    }
    let id_regex = regex_lite::Regex::new(r"^[a-z0-9_-]+$").unwrap();
    if !id_regex.is_match(id) {
        return Err("Id may only contain lowercase letters, digits, '_' and '-'".to_string());
    }
    Ok(())
}

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 120 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate a gram quantity (protein, carbs, fat)
pub fn validate_grams(grams: f64) -> Result<(), String> {
    if grams.is_nan() || grams.is_infinite() {
        return Err("Grams must be a valid number".to_string());
    }
    if grams < 0.0 {
        return Err("Grams cannot be negative".to_string());
    }
    Ok(())
}

/// Validate a duration in minutes
pub fn validate_duration_minutes(minutes: u32) -> Result<(), String> {
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Check that every id in the iterator is distinct.
///
/// Returns the first duplicate encountered.
pub fn check_unique_ids<'a, I>(ids: I, what: &str) -> Result<(), DataError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId(format!("{} id '{}'", what, id)));
        }
    }
    Ok(())
}

// ============================================================================
// Record Validators
// ============================================================================

/// Validation failure with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: field_display_label(field).to_string(),
        }
    }

    /// Format as a user-facing message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Map stored field names to display labels
pub fn field_display_label(field_name: &str) -> &str {
    match field_name {
        "id" => "Id",
        "name" => "Name",
        "description" => "Description",
        "calories" => "Calories",
        "protein" => "Protein",
        "carbs" => "Carbs",
        "fat" => "Fat",
        "ingredients" => "Ingredients",
        "notes" => "Notes",
        "meals" => "Meals",
        "daily_calories" => "Daily Calories",
        "daily_protein" => "Daily Protein",
        "daily_carbs" => "Daily Carbs",
        "daily_fat" => "Daily Fat",
        "sets" => "Sets",
        "reps" => "Reps",
        "weight" => "Weight",
        "exercises" => "Exercises",
        "target_muscle_groups" => "Target Muscle Groups",
        "difficulty" => "Difficulty",
        "estimated_duration" => "Estimated Duration",
        _ => field_name,
    }
}

fn collect(errors: &mut Vec<ValidationError>, field: &str, result: Result<(), String>) {
    if let Err(message) = result {
        errors.push(ValidationError::new(field, &message));
    }
}

/// Validate a single meal record
pub fn validate_meal(meal: &Meal) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    collect(&mut errors, "id", validate_id(&meal.id));
    collect(&mut errors, "name", validate_name(&meal.name));
    collect(&mut errors, "protein", validate_grams(meal.protein));
    collect(&mut errors, "carbs", validate_grams(meal.carbs));
    collect(&mut errors, "fat", validate_grams(meal.fat));
    errors
}

/// Validate a nutrition plan and all of its meals
pub fn validate_plan(plan: &NutritionPlan) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    collect(&mut errors, "id", validate_id(&plan.id));
    collect(&mut errors, "name", validate_name(&plan.name));
    collect(&mut errors, "daily_protein", validate_grams(plan.daily_protein));
    collect(&mut errors, "daily_carbs", validate_grams(plan.daily_carbs));
    collect(&mut errors, "daily_fat", validate_grams(plan.daily_fat));
    for meal in &plan.meals {
        errors.extend(validate_meal(meal));
    }
    errors
}

/// Validate a single exercise record
pub fn validate_exercise(exercise: &Exercise) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    collect(&mut errors, "id", validate_id(&exercise.id));
    collect(&mut errors, "name", validate_name(&exercise.name));
    if exercise.reps.trim().is_empty() {
        errors.push(ValidationError::new("reps", "Reps description cannot be empty"));
    }
    if exercise.weight.trim().is_empty() {
        errors.push(ValidationError::new("weight", "Weight descriptor cannot be empty"));
    }
    errors
}

/// Validate an exercise routine and all of its exercises
pub fn validate_routine(routine: &ExerciseRoutine) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    collect(&mut errors, "id", validate_id(&routine.id));
    collect(&mut errors, "name", validate_name(&routine.name));
    collect(
        &mut errors,
        "estimated_duration",
        validate_duration_minutes(routine.estimated_duration),
    );
    for exercise in &routine.exercises {
        errors.extend(validate_exercise(exercise));
    }
    errors
}

/// Reduce a plan's validation issues to a single result
pub fn ensure_valid_plan(plan: &NutritionPlan) -> Result<(), DataError> {
    into_result(validate_plan(plan))
}

/// Reduce a routine's validation issues to a single result
pub fn ensure_valid_routine(routine: &ExerciseRoutine) -> Result<(), DataError> {
    into_result(validate_routine(routine))
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), DataError> {
    if errors.is_empty() {
        return Ok(());
    }
    let joined = errors
        .iter()
        .map(ValidationError::user_message)
        .collect::<Vec<_>>()
        .join("; ");
    Err(DataError::Validation(joined))
}
