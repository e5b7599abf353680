//! Integration tests for catalog queries, import/export, and integrity

mod common;

use common::TestStore;
use wellness_planner_shared::{CalorieBand, PlanFilter};
use wellness_planner_store::services::{Catalog, DataService, IntegrityService};
use wellness_planner_store::StoreError;

#[test]
fn catalog_loads_from_disk() {
    let store = TestStore::seeded();
    let catalog = Catalog::load(&store.config).unwrap();
    assert_eq!(catalog.stats(), Catalog::builtin().stats());
    assert!(catalog.find_plan("weekday001").is_some());
}

#[test]
fn catalog_over_an_empty_store_is_empty() {
    let store = TestStore::empty();
    let catalog = Catalog::load(&store.config).unwrap();
    assert_eq!(catalog.stats().total_records(), 0);
    assert!(catalog.filter_plans(&PlanFilter::default()).is_empty());
}

#[test]
fn export_then_import_round_trips() {
    let store = TestStore::seeded();
    let repo = store.nutrition_repo();

    let exported = DataService::export_nutrition_plans(&repo).unwrap();
    repo.save(&[]).unwrap();
    assert!(repo.load().unwrap().is_empty());

    let count = DataService::import_nutrition_plans(&repo, &exported).unwrap();
    assert_eq!(count, 4);
    assert_eq!(repo.load().unwrap().len(), 4);

    let routines = store.routines_repo();
    let exported = DataService::export_exercise_routines(&routines).unwrap();
    let count = DataService::import_exercise_routines(&routines, &exported).unwrap();
    assert_eq!(count, 4);
}

#[test]
fn import_rejects_invalid_json_without_touching_the_store() {
    let store = TestStore::seeded();
    let repo = store.nutrition_repo();
    let err = DataService::import_nutrition_plans(&repo, "not json").unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
    assert_eq!(repo.load().unwrap().len(), 4);
}

#[test]
fn import_rejects_duplicate_ids_without_touching_the_store() {
    let store = TestStore::seeded();
    let repo = store.nutrition_repo();

    let mut plans = repo.load().unwrap();
    plans.push(plans[0].clone());
    let doctored = serde_json::to_string(&plans).unwrap();

    assert!(DataService::import_nutrition_plans(&repo, &doctored).is_err());
    assert_eq!(repo.load().unwrap().len(), 4);
}

#[test]
fn stats_reflect_the_stored_collections() {
    let store = TestStore::seeded();
    let stats = DataService::stats(&store.nutrition_repo(), &store.routines_repo()).unwrap();
    assert_eq!(stats.nutrition_plans, 4);
    assert_eq!(stats.exercise_routines, 4);
    assert_eq!(stats.meals, 15);
    assert_eq!(stats.exercises, 19);

    store.nutrition_repo().remove("cut001").unwrap();
    let stats = DataService::stats(&store.nutrition_repo(), &store.routines_repo()).unwrap();
    assert_eq!(stats.nutrition_plans, 3);
    assert_eq!(stats.meals, 12);
}

#[test]
fn stored_data_passes_an_integrity_sweep() {
    let store = TestStore::seeded();
    let plans = store.nutrition_repo().load().unwrap();
    let routines = store.routines_repo().load().unwrap();
    let report = IntegrityService::verify(&plans, &routines);
    assert!(report.is_clean(), "errors: {:?}", report.errors);
}

#[test]
fn filters_work_over_loaded_data() {
    let store = TestStore::seeded();
    let catalog = Catalog::load(&store.config).unwrap();
    let light = catalog.filter_plans(&PlanFilter {
        calories: Some(CalorieBand::AtMost1500),
        meal_count: None,
    });
    assert_eq!(light.len(), 1);
    assert_eq!(light[0].id, "weekday001");
}
