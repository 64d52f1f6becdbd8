//! Tests for the file plan store.

use jiff::Timestamp;
use tempfile::TempDir;

use super::*;
use crate::models::TaskType;

/// Helper function to create a test store
fn create_test_store() -> (TempDir, FilePlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FilePlanStore::builder()
        .with_directory(Some(temp_dir.path().join("plans")))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

fn todo_item(day: u32, at: &str) -> TodoItem {
    TodoItem {
        kind: TaskType::Email,
        person_id: "lead-1".to_string(),
        day,
        scheduled_for: at.parse().unwrap(),
        notes: "Say hello".to_string(),
    }
}

fn start() -> Timestamp {
    "2024-03-05T00:00:00Z".parse().unwrap()
}

#[tokio::test]
async fn test_execute_writes_plan_file() {
    let (_temp_dir, store) = create_test_store();
    let todo = vec![todo_item(1, "2024-03-05T09:00:00Z")];

    let response = store
        .execute(&todo, start(), None)
        .await
        .expect("Failed to execute");
    let plan_id = response.plan_id.expect("Store should assign a plan id");

    assert!(store.directory().join(format!("{plan_id}.json")).exists());
    let plan = store
        .load_plan(&plan_id)
        .await
        .expect("Failed to load plan")
        .expect("Plan should exist");
    assert_eq!(plan.tasks, todo);
    assert_eq!(plan.start_date, start());
}

#[tokio::test]
async fn test_re_execution_reuses_plan_id() {
    let (_temp_dir, store) = create_test_store();

    let first = store
        .execute(&[todo_item(1, "2024-03-05T09:00:00Z")], start(), None)
        .await
        .unwrap();
    let plan_id = first.plan_id.unwrap();

    let replacement = vec![
        todo_item(1, "2024-03-05T10:00:00Z"),
        todo_item(2, "2024-03-06T10:00:00Z"),
    ];
    let second = store
        .execute(&replacement, start(), Some(&plan_id))
        .await
        .unwrap();
    assert_eq!(second.plan_id.as_deref(), Some(plan_id.as_str()));

    let plans = store.list_plans().await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].tasks.len(), 2);
}

#[tokio::test]
async fn test_sentinel_plan_id_mints_new_plan() {
    let (_temp_dir, store) = create_test_store();
    let response = store
        .execute(
            &[todo_item(1, "2024-03-05T09:00:00Z")],
            start(),
            Some(EXECUTED_SENTINEL),
        )
        .await
        .unwrap();
    assert_ne!(response.plan_id.as_deref(), Some(EXECUTED_SENTINEL));
    assert!(response.plan_id.unwrap().starts_with("plan-"));
}

#[tokio::test]
async fn test_rejects_unsafe_plan_ids() {
    let (_temp_dir, store) = create_test_store();
    let err = store
        .execute(
            &[todo_item(1, "2024-03-05T09:00:00Z")],
            start(),
            Some("../escape"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_load_missing_plan() {
    let (_temp_dir, store) = create_test_store();
    assert!(store.load_plan("plan-404").await.unwrap().is_none());
    assert!(store.list_plans().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_minted_ids_are_unique() {
    let (_temp_dir, store) = create_test_store();
    let todo = vec![todo_item(1, "2024-03-05T09:00:00Z")];
    let a = store.execute(&todo, start(), None).await.unwrap();
    let b = store.execute(&todo, start(), None).await.unwrap();
    assert_ne!(a.plan_id, b.plan_id);
    assert_eq!(store.list_plans().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_skips_malformed_plan_files() {
    let (_temp_dir, store) = create_test_store();
    let todo = vec![todo_item(1, "2024-03-05T09:00:00Z")];
    let response = store.execute(&todo, start(), None).await.unwrap();

    std::fs::write(store.directory().join("broken.json"), "{ not json").unwrap();
    std::fs::write(store.directory().join("notes.txt"), "ignored").unwrap();

    let plans = store.list_plans().await.expect("Failed to list plans");
    assert_eq!(plans.len(), 1);
    assert_eq!(Some(plans[0].plan_id.clone()), response.plan_id);
    assert!(store.load_plan("broken").await.is_err());
}
