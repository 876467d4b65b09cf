use taskboard_core::db::open_db;
use taskboard_core::{
    Dashboard, FilterSelection, KeyValueStore, MemoryKeyValueStore, SelectionCounts,
    SqliteKeyValueStore, Task, TaskDraft, TaskId, TaskStatus, TaskValidationError,
};

fn stored_tasks(store: &MemoryKeyValueStore, key: &str) -> Vec<Task> {
    let raw = store
        .get_item(key)
        .expect("memory store read should succeed")
        .expect("slot should be written");
    serde_json::from_str(&raw).expect("slot should hold valid JSON")
}

#[test]
fn end_to_end_scenario() {
    let backend = MemoryKeyValueStore::new();
    let mut dashboard = Dashboard::open(&backend, "tasks");
    assert!(dashboard.tasks().is_empty());

    let first = dashboard
        .add_task("Buy milk", "")
        .expect("valid title should be accepted");
    let second = dashboard
        .add_task("Write report", "due Friday")
        .expect("valid title should be accepted");
    assert!(dashboard
        .update_status(&first.id, "Done")
        .expect("exact status label should be accepted"));

    dashboard.set_filter(FilterSelection::Done);
    let visible: Vec<&TaskId> = dashboard.visible_tasks().map(|task| &task.id).collect();
    assert_eq!(visible, vec![&first.id]);
    assert_eq!(
        dashboard.counts(),
        SelectionCounts {
            all: 2,
            todo: 1,
            in_progress: 0,
            done: 1,
        }
    );

    assert!(dashboard.delete_task(&second.id));
    let remaining: Vec<&TaskId> = dashboard
        .tasks()
        .tasks()
        .iter()
        .map(|task| &task.id)
        .collect();
    assert_eq!(remaining, vec![&first.id]);
    assert_eq!(stored_tasks(&backend, "tasks"), dashboard.tasks().tasks());
}

#[test]
fn every_mutation_is_written_through() {
    let backend = MemoryKeyValueStore::new();
    let mut dashboard = Dashboard::open(&backend, "tasks");

    let task = dashboard
        .add_task("Buy milk", "")
        .expect("valid title should be accepted");
    assert_eq!(stored_tasks(&backend, "tasks").len(), 1);

    dashboard
        .update_status(&task.id, "In Progress")
        .expect("exact status label should be accepted");
    assert_eq!(
        stored_tasks(&backend, "tasks")[0].status,
        TaskStatus::InProgress
    );

    dashboard.delete_task(&task.id);
    assert!(stored_tasks(&backend, "tasks").is_empty());
}

#[test]
fn validation_failures_do_not_write() {
    let backend = MemoryKeyValueStore::new();
    let mut dashboard = Dashboard::open(&backend, "tasks");

    let err = dashboard
        .add_task("   ", "x")
        .expect_err("blank title must be rejected");

    assert_eq!(err, TaskValidationError::TitleRequired);
    assert_eq!(
        backend
            .get_item("tasks")
            .expect("memory store read should succeed"),
        None
    );
}

#[test]
fn reopen_restores_tasks_but_not_filter() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("taskboard.sqlite3");

    let created = {
        let conn = open_db(&path).expect("store file should open");
        let mut dashboard = Dashboard::open(SqliteKeyValueStore::new(&conn), "tasks");
        let task = dashboard
            .add_task("Buy milk", "")
            .expect("valid title should be accepted");
        dashboard.set_filter(FilterSelection::Done);
        task
    };

    let conn = open_db(&path).expect("store file should open");
    let dashboard = Dashboard::open(SqliteKeyValueStore::new(&conn), "tasks");
    assert_eq!(dashboard.tasks().tasks(), &[created]);
    assert_eq!(dashboard.filter(), FilterSelection::All);
}

#[test]
fn corrupt_slot_opens_empty_session() {
    let backend = MemoryKeyValueStore::new();
    backend
        .set_item("tasks", "{oops")
        .expect("memory store write should succeed");

    let mut dashboard = Dashboard::open(&backend, "tasks");
    assert!(dashboard.tasks().is_empty());

    dashboard
        .add_task("fresh start", "")
        .expect("valid title should be accepted");
    assert_eq!(stored_tasks(&backend, "tasks").len(), 1);
}

#[test]
fn disabled_store_runs_as_in_memory_session() {
    let backend = MemoryKeyValueStore::new();
    backend.set_available(false);
    let mut dashboard = Dashboard::open(&backend, "tasks");

    let task = dashboard
        .add_task("Buy milk", "")
        .expect("valid title should be accepted");
    assert!(dashboard
        .update_status(&task.id, "Done")
        .expect("exact status label should be accepted"));

    assert_eq!(dashboard.tasks().len(), 1);
    assert_eq!(dashboard.counts().done, 1);
}

#[test]
fn failed_write_keeps_in_memory_state() {
    let backend = MemoryKeyValueStore::with_quota(16);
    let mut dashboard = Dashboard::open(&backend, "tasks");

    let task = dashboard
        .add_task("A title too large for the quota", "")
        .expect("valid title should be accepted");

    assert_eq!(dashboard.tasks().get(&task.id), Some(&task));
    assert_eq!(
        backend
            .get_item("tasks")
            .expect("memory store read should succeed"),
        None
    );
}

#[test]
fn submit_draft_persists_and_clears_draft() {
    let backend = MemoryKeyValueStore::new();
    let mut dashboard = Dashboard::open(&backend, "tasks");
    let mut draft = TaskDraft::new();

    assert!(dashboard.submit_draft(&mut draft).is_err());
    assert!(draft.error().is_some());

    draft.set_title("Plan sprint");
    let task = dashboard
        .submit_draft(&mut draft)
        .expect("titled draft should submit");

    assert_eq!(draft.title(), "");
    assert_eq!(stored_tasks(&backend, "tasks"), vec![task]);
}
