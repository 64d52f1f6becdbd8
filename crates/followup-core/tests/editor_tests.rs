mod common;

use common::{create_test_editor, create_test_store, touchpoint};
use followup_core::{
    Action, ExecuteControl, ExecuteOutcome, NoticeKind, ScheduleView, TaskType, TodoList,
};

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_edit_save_and_execute_workflow() {
    let (_temp_dir, store) = create_test_store();
    let mut editor = create_test_editor(vec![
        touchpoint(2.0, "email", "Send recap"),
        touchpoint(19.0, "call", "Check in"),
        touchpoint(43.0, "whatsapp", "Share deck"),
    ]);
    assert_eq!(editor.days().len(), 3);

    // Add a second call on day 2 and move the WhatsApp day forward
    editor.apply(Action::BeginEdit { day: 2 });
    editor.apply(Action::SetCount {
        day: 2,
        kind: TaskType::Call,
        value: "2".to_string(),
    });
    editor.apply(Action::SetTime {
        day: 2,
        kind: TaskType::Call,
        index: 1,
        value: "16:30".to_string(),
    });
    let notice = editor
        .apply(Action::SaveDay { day: 2 })
        .expect("Save should produce a notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(editor.day(2).unwrap().counts().calls, 2);

    editor.apply(Action::ReassignDay {
        day: 3,
        value: "5".to_string(),
    });
    editor.apply(Action::SaveDay { day: 3 });
    let numbers: Vec<_> = editor.days().iter().map(|d| d.day).collect();
    assert_eq!(numbers, vec![1, 2, 5]);

    // First execution mints a plan id and persists the tasks
    let outcome = editor.execute(&store).await.expect("Failed to execute");
    let ExecuteOutcome::Executed { plan_id, tasks } = outcome else {
        panic!("Expected an executed plan");
    };
    assert_eq!(tasks, 4);
    assert!(plan_id.starts_with("plan-"));
    assert_eq!(editor.execute_control(false), ExecuteControl::Active);

    let stored = store
        .load_plan(&plan_id)
        .await
        .expect("Failed to load plan")
        .expect("Plan should exist");
    assert_eq!(stored.tasks.len(), 4);
    assert_eq!(stored.start_date.to_string(), "2024-03-05T00:00:00Z");
    assert!(stored.tasks.iter().all(|t| t.person_id == "lead-7"));
    let whatsapp = stored
        .tasks
        .iter()
        .find(|t| t.kind == TaskType::WhatsappMessage)
        .unwrap();
    assert_eq!(whatsapp.day, 5);
    assert_eq!(whatsapp.scheduled_for.to_string(), "2024-03-09T10:00:00Z");

    // Re-executing after an edit replaces the same plan
    editor.set_note(1, TaskType::Email, 0, "Send recap and pricing");
    assert_eq!(editor.execute_control(false), ExecuteControl::Execute);
    let outcome = editor.execute(&store).await.expect("Failed to re-execute");
    assert!(matches!(
        outcome,
        ExecuteOutcome::Executed { plan_id: ref id, .. } if *id == plan_id
    ));

    let plans = store.list_plans().await.expect("Failed to list plans");
    assert_eq!(plans.len(), 1);
    assert!(
        plans[0]
            .tasks
            .iter()
            .any(|t| t.notes == "Send recap and pricing")
    );
}

#[tokio::test]
async fn test_empty_schedule_is_not_stored() {
    let (_temp_dir, store) = create_test_store();
    let mut editor = create_test_editor(Vec::new());

    let outcome = editor.execute(&store).await.expect("Failed to execute");
    assert!(matches!(outcome, ExecuteOutcome::Skipped(_)));
    assert!(store.list_plans().await.unwrap().is_empty());
    assert_eq!(editor.executed_plan_id(), None);
}

#[tokio::test]
async fn test_added_day_is_executed() {
    let (_temp_dir, store) = create_test_store();
    let mut editor = create_test_editor(vec![touchpoint(1.0, "email", "")]);

    let day = editor.add_day().expect("Failed to add day");
    assert_eq!(day, 2);
    editor.set_count(day, TaskType::WhatsappMessage, "1");
    editor.set_note(day, TaskType::WhatsappMessage, 0, "Quick ping");
    editor.save_day(day);

    editor.execute(&store).await.expect("Failed to execute");
    let plans = store.list_plans().await.unwrap();
    assert_eq!(plans.len(), 1);
    let ping = plans[0]
        .tasks
        .iter()
        .find(|t| t.notes == "Quick ping")
        .unwrap();
    assert_eq!(ping.day, 2);
    assert_eq!(ping.scheduled_for.to_string(), "2024-03-06T09:00:00Z");
}

#[test]
fn test_schedule_view_tracks_edit_mode() {
    let mut editor = create_test_editor(vec![
        touchpoint(2.0, "email", "Send recap"),
        touchpoint(19.0, "call", ""),
    ]);

    let output = ScheduleView(&editor).to_string();
    assert!(output.starts_with("Discussed onboarding\n"));
    assert!(output.contains("## Day 1 (2024-03-04)"));
    assert!(output.contains("- 17:00 ✉ Email: Send recap"));
    assert!(output.contains("- 10:00 ☎ Call\n"));
    assert!(!output.contains("editing"));

    editor.begin_edit(2).unwrap();
    editor.set_count(2, TaskType::Call, "2");
    let output = ScheduleView(&editor).to_string();
    assert!(output.contains("## Day 2 (2024-03-05) - editing"));
    assert!(output.contains("- **Counts**: 0 emails, 2 calls, 0 WhatsApp"));
    assert!(output.contains("- *Unsaved changes*"));
    assert!(output.contains("1. 09:00 ☎ Call"));

    let todo = editor.todo_items().unwrap();
    let listing = TodoList(&todo, editor.time_zone()).to_string();
    assert!(listing.contains("- Day 1: 2024-03-05 17:00 UTC ✉ Email: Send recap"));
    assert_eq!(listing.lines().count(), 3);
}
