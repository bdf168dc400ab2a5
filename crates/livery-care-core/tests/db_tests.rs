mod common;

use common::sample_payload;
use jiff::civil::date;
use livery_care_core::{CarePlanError, Database, FeedTime, PlanStatus, TaskType};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_reopen_existing_database() {
    let (temp_file, mut db) = create_test_db();
    let plan = db
        .create_care_plan(&sample_payload(1, "Reopen", date(2024, 1, 1), &[7]))
        .expect("Failed to create plan");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert!(db.get_care_plan(plan.id).unwrap().is_some());
}

#[test]
fn test_create_care_plan() {
    let (_temp_file, mut db) = create_test_db();

    let plan = db
        .create_care_plan(&sample_payload(4, "Tendon rehab", date(2024, 1, 1), &[14, 7]))
        .expect("Failed to create plan");

    assert!(plan.id > 0);
    assert_eq!(plan.horse_id, 4);
    assert_eq!(plan.name, "Tendon rehab");
    assert_eq!(plan.reason.as_deref(), Some("Tendon strain"));
    assert_eq!(plan.status, PlanStatus::Active);
    assert_eq!(plan.start_date, date(2024, 1, 1));
    assert_eq!(plan.phases.len(), 2);
    assert_eq!(plan.phases[1].phase_number, 2);
    assert_eq!(plan.phases[1].start_day, 15);
    assert_eq!(plan.phases[1].tasks.len(), 2);
}

#[test]
fn test_tasks_round_trip_through_storage() {
    let (_temp_file, mut db) = create_test_db();
    let created = db
        .create_care_plan(&sample_payload(4, "Round trip", date(2024, 1, 1), &[5]))
        .unwrap();

    let plan = db
        .get_care_plan(created.id)
        .expect("Failed to get plan")
        .expect("Plan should exist");
    let tasks = &plan.phases[0].tasks;

    assert_eq!(tasks[0].task_type, TaskType::Walking);
    assert_eq!(tasks[0].duration_minutes, Some(10));
    assert_eq!(tasks[0].feed_time, None);
    assert_eq!(tasks[1].sequence, 2);
    assert!(tasks[1].is_feed_based);
    assert_eq!(tasks[1].feed_time, Some(FeedTime::Both));
    assert_eq!(tasks[1].instructions.as_deref(), Some("Half sachet"));
}

#[test]
fn test_get_missing_plan() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_care_plan(999).unwrap().is_none());
}

#[test]
fn test_replace_care_plan() {
    let (_temp_file, mut db) = create_test_db();
    let created = db
        .create_care_plan(&sample_payload(4, "Before", date(2024, 1, 1), &[14, 7, 3]))
        .unwrap();

    let mut payload = sample_payload(4, "After", date(2024, 2, 1), &[10]);
    payload.staff_managed = true;
    payload.weekly_price = Some(42.5);

    let replaced = db
        .replace_care_plan(created.id, &payload)
        .expect("Failed to replace plan");

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "After");
    assert_eq!(replaced.start_date, date(2024, 2, 1));
    assert_eq!(replaced.phases.len(), 1);
    assert_eq!(replaced.phases[0].duration_days, 10);
    assert_eq!(replaced.weekly_price, Some(42.5));
    assert_eq!(replaced.created_at, created.created_at);
}

#[test]
fn test_replace_missing_plan() {
    let (_temp_file, mut db) = create_test_db();
    let err = db
        .replace_care_plan(77, &sample_payload(4, "Ghost", date(2024, 1, 1), &[7]))
        .unwrap_err();
    assert!(matches!(err, CarePlanError::PlanNotFound { id: 77 }));
}

#[test]
fn test_list_care_plans_by_horse() {
    let (_temp_file, mut db) = create_test_db();
    db.create_care_plan(&sample_payload(1, "Older", date(2024, 1, 1), &[7]))
        .unwrap();
    db.create_care_plan(&sample_payload(1, "Newer", date(2024, 5, 1), &[7]))
        .unwrap();
    db.create_care_plan(&sample_payload(2, "Other horse", date(2024, 3, 1), &[7]))
        .unwrap();

    let all = db.list_care_plans(None).unwrap();
    assert_eq!(all.len(), 3);

    let horse_one = db.list_care_plans(Some(1)).unwrap();
    let names: Vec<_> = horse_one.iter().map(|plan| plan.name.as_str()).collect();
    assert_eq!(names, ["Newer", "Older"]);
    assert!(horse_one.iter().all(|plan| plan.phases.len() == 1));
}

#[test]
fn test_set_status() {
    let (_temp_file, mut db) = create_test_db();
    let plan = db
        .create_care_plan(&sample_payload(1, "Status", date(2024, 1, 1), &[7]))
        .unwrap();

    db.set_status(plan.id, PlanStatus::Cancelled).unwrap();
    let stored = db.get_care_plan(plan.id).unwrap().unwrap();
    assert_eq!(stored.status, PlanStatus::Cancelled);

    let err = db.set_status(999, PlanStatus::Completed).unwrap_err();
    assert!(matches!(err, CarePlanError::PlanNotFound { id: 999 }));
}

#[test]
fn test_delete_care_plan() {
    let (_temp_file, mut db) = create_test_db();
    let keep = db
        .create_care_plan(&sample_payload(1, "Keep", date(2024, 1, 1), &[7, 7]))
        .unwrap();
    let remove = db
        .create_care_plan(&sample_payload(1, "Remove", date(2024, 1, 1), &[7, 7]))
        .unwrap();

    db.delete_care_plan(remove.id).expect("Failed to delete plan");

    assert!(db.get_care_plan(remove.id).unwrap().is_none());
    let kept = db.get_care_plan(keep.id).unwrap().unwrap();
    assert_eq!(kept.phases.len(), 2);

    let err = db.delete_care_plan(remove.id).unwrap_err();
    assert!(matches!(err, CarePlanError::PlanNotFound { .. }));
}
