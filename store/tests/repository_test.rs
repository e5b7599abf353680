//! Integration tests for the JSON file repositories

mod common;

use common::TestStore;
use wellness_planner_shared::errors::DataError;
use wellness_planner_shared::{generate_id, Meal, NutritionPlan};
use wellness_planner_store::datasets;
use wellness_planner_store::StoreError;

fn new_plan(id: &str, meal_id: &str) -> NutritionPlan {
    NutritionPlan {
        id: id.to_string(),
        name: "Test Plan".to_string(),
        description: "Added by a test".to_string(),
        meals: vec![Meal {
            id: meal_id.to_string(),
            name: "Only Meal".to_string(),
            calories: 1500,
            protein: 100.0,
            carbs: 150.0,
            fat: 50.0,
            ingredients: vec!["food".to_string()],
            notes: String::new(),
        }],
        daily_calories: 1500,
        daily_protein: 100.0,
        daily_carbs: 150.0,
        daily_fat: 50.0,
    }
}

#[test]
fn missing_file_loads_as_empty_collection() {
    let store = TestStore::empty();
    assert!(store.nutrition_repo().load().unwrap().is_empty());
    assert!(store.routines_repo().load().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let store = TestStore::empty();
    let repo = store.nutrition_repo();
    repo.save(datasets::builtin_nutrition_plans()).unwrap();
    let loaded = repo.load().unwrap();
    assert_eq!(loaded, datasets::builtin_nutrition_plans());
}

#[test]
fn find_by_id() {
    let store = TestStore::seeded();
    let repo = store.nutrition_repo();
    assert_eq!(repo.find("weekday001").unwrap().unwrap().daily_calories, 1500);
    assert!(repo.find("missing").unwrap().is_none());

    let routines = store.routines_repo();
    assert_eq!(routines.find("upper001").unwrap().unwrap().exercises.len(), 6);
}

#[test]
fn add_appends_a_valid_plan() {
    let store = TestStore::seeded();
    let repo = store.nutrition_repo();
    repo.add(new_plan(&generate_id(), &generate_id())).unwrap();
    assert_eq!(repo.load().unwrap().len(), 5);
}

#[test]
fn add_rejects_a_duplicate_plan_id() {
    let store = TestStore::seeded();
    let repo = store.nutrition_repo();
    let err = repo.add(new_plan("weekday001", &generate_id())).unwrap_err();
    assert!(matches!(err, StoreError::Data(DataError::DuplicateId(_))));
    // Nothing was written
    assert_eq!(repo.load().unwrap().len(), 4);
}

#[test]
fn add_rejects_a_duplicate_meal_id() {
    let store = TestStore::seeded();
    let repo = store.nutrition_repo();
    let err = repo.add(new_plan(&generate_id(), "meal001")).unwrap_err();
    assert!(matches!(err, StoreError::Data(DataError::DuplicateId(_))));
}

#[test]
fn add_rejects_an_invalid_record() {
    let store = TestStore::empty();
    let repo = store.nutrition_repo();
    let mut plan = new_plan(&generate_id(), &generate_id());
    plan.daily_fat = -1.0;
    let err = repo.add(plan).unwrap_err();
    assert!(matches!(err, StoreError::Data(DataError::Validation(_))));
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn remove_reports_whether_anything_was_deleted() {
    let store = TestStore::seeded();
    let repo = store.routines_repo();
    assert!(repo.remove("core001").unwrap());
    assert_eq!(repo.load().unwrap().len(), 3);
    // Removing an absent id is a no-op
    assert!(!repo.remove("core001").unwrap());
    assert_eq!(repo.load().unwrap().len(), 3);
}

#[test]
fn corrupt_file_is_a_malformed_error() {
    let store = TestStore::empty();
    let path = store.config.nutrition_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not valid json").unwrap();

    let err = store.nutrition_repo().load().unwrap_err();
    match err {
        StoreError::Malformed { path: reported, .. } => {
            assert!(reported.ends_with("nutrition_plans.json"));
        }
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[test]
fn replace_all_validates_before_writing() {
    let store = TestStore::seeded();
    let repo = store.nutrition_repo();

    let mut plans = datasets::builtin_nutrition_plans().to_vec();
    plans.push(plans[0].clone());
    assert!(repo.replace_all(plans).is_err());

    // The stored file is untouched
    assert_eq!(repo.load().unwrap().len(), 4);
}
