//! Data models for the Wellness Planner datasets

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Calories contributed by one gram of protein or carbohydrate
pub const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;
/// Calories contributed by one gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Canonical muscle-group names offered to authoring UIs.
///
/// Stored routines may carry any string; this list is a pick list,
/// not a constraint.
pub const MUSCLE_GROUPS: &[&str] = &[
    "Chest",
    "Back",
    "Shoulders",
    "Arms",
    "Legs",
    "Core",
    "Cardio",
    "Wrists",
];

/// Generate a unique 8-character record id.
///
/// Ids are the leading hex digits of a v4 UUID, so they stay short
/// enough to read in exported JSON while remaining effectively unique
/// within a collection.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

/// Routine difficulty label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: &'static [Difficulty] = &[
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// A single meal within a nutrition plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Calorie count for the whole meal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Ingredient names, order not significant
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// A named collection of meals with aggregate daily nutrition targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub meals: Vec<Meal>,
    pub daily_calories: u32,
    pub daily_protein: f64,
    pub daily_carbs: f64,
    pub daily_fat: f64,
}

impl NutritionPlan {
    /// Sum of the calorie counts of the plan's meals
    pub fn meal_calorie_total(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }

    /// Difference between the meal calorie sum and the stated daily
    /// target. Positive when the meals overshoot the target.
    ///
    /// A nonzero drift is expected in real data; the stated total is a
    /// target, not a checksum.
    pub fn calorie_drift(&self) -> i64 {
        i64::from(self.meal_calorie_total()) - i64::from(self.daily_calories)
    }

    /// Percentage breakdown of the daily targets by macronutrient.
    ///
    /// Returns `None` when the macro targets contribute zero calories,
    /// since no split can be computed.
    pub fn macro_split(&self) -> Option<MacroSplit> {
        let from_protein = self.daily_protein * KCAL_PER_GRAM_PROTEIN_CARBS;
        let from_carbs = self.daily_carbs * KCAL_PER_GRAM_PROTEIN_CARBS;
        let from_fat = self.daily_fat * KCAL_PER_GRAM_FAT;
        let total = from_protein + from_carbs + from_fat;
        if total <= 0.0 {
            return None;
        }
        Some(MacroSplit {
            protein_pct: from_protein / total * 100.0,
            carbs_pct: from_carbs / total * 100.0,
            fat_pct: from_fat / total * 100.0,
            calories_from_macros: total,
        })
    }
}

/// Percentage breakdown of a plan's daily macro targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
    /// Calories implied by the macro targets alone
    pub calories_from_macros: f64,
}

/// A single exercise within a routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    /// Free text: "12", "8-12", "30 seconds", "10 per side"
    pub reps: String,
    /// Free text: "bodyweight", "moderate dumbbells", "16 kg kettlebell"
    pub weight: String,
    #[serde(default)]
    pub notes: String,
}

/// A named collection of exercises with aggregate duration and
/// targeted muscle groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRoutine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exercises: Vec<Exercise>,
    pub target_muscle_groups: Vec<String>,
    pub difficulty: Difficulty,
    /// Estimated duration in whole minutes
    pub estimated_duration: u32,
}

impl ExerciseRoutine {
    /// Whether the routine targets the named muscle group
    pub fn targets_group(&self, group: &str) -> bool {
        self.target_muscle_groups.iter().any(|g| g == group)
    }
}
