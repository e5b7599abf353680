//! Dataset integrity verification
//!
//! Sweeps both collections and reports every violation: missing or
//! malformed fields surface earlier, at deserialization; this pass
//! covers value-level rules (non-negative quantities, well-formed ids)
//! and cross-record rules (id uniqueness). Calorie drift between a
//! plan's meals and its stated daily total is reported as a warning,
//! never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;
use wellness_planner_shared::validation::{validate_plan, validate_routine};
use wellness_planner_shared::{ExerciseRoutine, NutritionPlan};

/// One finding from an integrity sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityIssue {
    /// Id of the record the finding is anchored to
    pub record_id: String,
    pub detail: String,
}

impl IntegrityIssue {
    fn new(record_id: &str, detail: String) -> Self {
        Self {
            record_id: record_id.to_string(),
            detail,
        }
    }
}

/// Outcome of an integrity sweep
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub errors: Vec<IntegrityIssue>,
    pub warnings: Vec<IntegrityIssue>,
    pub plans_checked: usize,
    pub routines_checked: usize,
}

impl IntegrityReport {
    /// Whether the sweep found no errors (warnings do not count)
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Integrity verification service
pub struct IntegrityService;

impl IntegrityService {
    /// Verify both collections and report every finding
    pub fn verify(plans: &[NutritionPlan], routines: &[ExerciseRoutine]) -> IntegrityReport {
        let mut report = IntegrityReport {
            plans_checked: plans.len(),
            routines_checked: routines.len(),
            ..Default::default()
        };

        let mut plan_ids = HashSet::new();
        let mut meal_ids = HashSet::new();
        for plan in plans {
            for issue in validate_plan(plan) {
                report
                    .errors
                    .push(IntegrityIssue::new(&plan.id, issue.user_message()));
            }
            if !plan_ids.insert(plan.id.as_str()) {
                report.errors.push(IntegrityIssue::new(
                    &plan.id,
                    format!("duplicate plan id '{}'", plan.id),
                ));
            }
            for meal in &plan.meals {
                if !meal_ids.insert(meal.id.as_str()) {
                    report.errors.push(IntegrityIssue::new(
                        &plan.id,
                        format!("duplicate meal id '{}'", meal.id),
                    ));
                }
            }
            let drift = plan.calorie_drift();
            if drift != 0 {
                report.warnings.push(IntegrityIssue::new(
                    &plan.id,
                    format!(
                        "meal calories total {} against a daily target of {} (drift {:+})",
                        plan.meal_calorie_total(),
                        plan.daily_calories,
                        drift
                    ),
                ));
            }
        }

        let mut routine_ids = HashSet::new();
        let mut exercise_ids = HashSet::new();
        for routine in routines {
            for issue in validate_routine(routine) {
                report
                    .errors
                    .push(IntegrityIssue::new(&routine.id, issue.user_message()));
            }
            if !routine_ids.insert(routine.id.as_str()) {
                report.errors.push(IntegrityIssue::new(
                    &routine.id,
                    format!("duplicate routine id '{}'", routine.id),
                ));
            }
            for exercise in &routine.exercises {
                if !exercise_ids.insert(exercise.id.as_str()) {
                    report.errors.push(IntegrityIssue::new(
                        &routine.id,
                        format!("duplicate exercise id '{}'", exercise.id),
                    ));
                }
            }
        }

        if !report.is_clean() {
            warn!(
                errors = report.errors.len(),
                warnings = report.warnings.len(),
                "integrity sweep found violations"
            );
        }
        report
    }
}
