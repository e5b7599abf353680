//! Common test utilities for store integration tests
//!
//! Each test gets its own temporary data directory so tests never see
//! each other's files.

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;
use wellness_planner_store::config::StoreConfig;
use wellness_planner_store::datasets;
use wellness_planner_store::repository::{ExerciseRoutineRepository, NutritionPlanRepository};

/// A store rooted in a temporary directory
pub struct TestStore {
    pub config: StoreConfig,
    _tmp: TempDir,
}

impl TestStore {
    /// A store with no collection files on disk
    pub fn empty() -> Self {
        init_tracing();
        let tmp = TempDir::new().expect("create temp dir");
        let mut config = StoreConfig::default();
        config.data.directory = tmp.path().join("data").display().to_string();
        Self { config, _tmp: tmp }
    }

    /// A store seeded with the bundled datasets
    pub fn seeded() -> Self {
        let store = Self::empty();
        store
            .nutrition_repo()
            .save(datasets::builtin_nutrition_plans())
            .expect("seed nutrition plans");
        store
            .routines_repo()
            .save(datasets::builtin_exercise_routines())
            .expect("seed exercise routines");
        store
    }

    pub fn nutrition_repo(&self) -> NutritionPlanRepository {
        NutritionPlanRepository::from_config(&self.config)
    }

    pub fn routines_repo(&self) -> ExerciseRoutineRepository {
        ExerciseRoutineRepository::from_config(&self.config)
    }
}

/// Install a test subscriber once; respects RUST_LOG
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
