use chrono::NaiveDate;
use taskpad::model::{ModelError, Priority, TaskPatch, TaskStore, DEFAULT_PROJECT_ID};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_new_store_has_default_project() {
    let store = TaskStore::new();
    assert_eq!(store.projects().len(), 1);
    assert!(store.projects()[0].is_default());
    assert_eq!(store.current_project_id(), DEFAULT_PROJECT_ID);
    assert!(store.todos().is_empty());
}

#[test]
fn test_default_project_cannot_be_deleted() {
    let mut store = TaskStore::new();
    assert_eq!(
        store.delete_project(DEFAULT_PROJECT_ID),
        Err(ModelError::DefaultProjectImmutable)
    );
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.current_project_id(), DEFAULT_PROJECT_ID);
}

#[test]
fn test_create_then_delete_project() {
    let mut store = TaskStore::new();
    let id = store.create_project("Errands").id.clone();
    assert_eq!(store.projects().len(), 2);
    assert_eq!(store.project(&id).unwrap().name, "Errands");

    assert_eq!(store.delete_project(&id), Ok(()));
    assert_eq!(store.projects().len(), 1);
    assert!(store.project(&id).is_none());
}

#[test]
fn test_deleting_current_project_resets_to_default() {
    let mut store = TaskStore::new();
    let id = store.create_project("Work").id.clone();
    store.set_current_project(&id).unwrap();
    assert_eq!(store.current_project_id(), id);

    store.delete_project(&id).unwrap();
    assert_eq!(store.current_project_id(), DEFAULT_PROJECT_ID);
}

#[test]
fn test_deleting_other_project_keeps_current() {
    let mut store = TaskStore::new();
    let work = store.create_project("Work").id.clone();
    let home = store.create_project("Home").id.clone();
    store.set_current_project(&work).unwrap();

    store.delete_project(&home).unwrap();
    assert_eq!(store.current_project_id(), work);
}

#[test]
fn test_delete_unknown_project_fails() {
    let mut store = TaskStore::new();
    assert_eq!(
        store.delete_project("project-404"),
        Err(ModelError::ProjectNotFound("project-404".to_string()))
    );
}

#[test]
fn test_set_current_project_validates_existence() {
    let mut store = TaskStore::new();
    assert_eq!(
        store.set_current_project("project-404"),
        Err(ModelError::ProjectNotFound("project-404".to_string()))
    );
    // failed switch leaves the current project untouched
    assert_eq!(store.current_project_id(), DEFAULT_PROJECT_ID);
}

#[test]
fn test_create_todo_defaults() {
    let mut store = TaskStore::new();
    let id = store
        .create_todo("Buy milk", "", date("2025-01-10"), Priority::High, "")
        .id
        .clone();

    let todos = store.todos();
    assert_eq!(todos.len(), 1);
    let task = &todos[0];
    assert_eq!(task.id, id);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.due_date, date("2025-01-10"));
    assert!(!task.completed);
}

#[test]
fn test_toggle_is_its_own_inverse() {
    let mut store = TaskStore::new();
    let id = store
        .create_todo("Buy milk", "", date("2025-01-10"), Priority::High, "")
        .id
        .clone();

    assert!(store.toggle_todo_completion(&id).unwrap().completed);
    assert!(!store.toggle_todo_completion(&id).unwrap().completed);
}

#[test]
fn test_toggle_unknown_task_fails() {
    let mut store = TaskStore::new();
    assert_eq!(
        store.toggle_todo_completion("todo-404"),
        Err(ModelError::TaskNotFound("todo-404".to_string()))
    );
}

#[test]
fn test_update_todo_merges_only_present_fields() {
    let mut store = TaskStore::new();
    let id = store
        .create_todo("Draft report", "quarterly numbers", date("2025-03-01"), Priority::Medium, "ask Sam")
        .id
        .clone();

    let updated = store
        .update_todo(
            &id,
            TaskPatch {
                title: Some("Draft final report".to_string()),
                priority: Some(Priority::High),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "Draft final report");
    assert_eq!(updated.priority, Priority::High);
    // untouched fields keep their values
    assert_eq!(updated.description, "quarterly numbers");
    assert_eq!(updated.due_date, date("2025-03-01"));
    assert_eq!(updated.notes, "ask Sam");
}

#[test]
fn test_update_unknown_task_fails() {
    let mut store = TaskStore::new();
    assert!(matches!(
        store.update_todo("todo-404", TaskPatch::default()),
        Err(ModelError::TaskNotFound(_))
    ));
}

#[test]
fn test_task_list_reflects_creates_and_deletes() {
    let mut store = TaskStore::new();
    let a = store.create_todo("a", "", date("2025-01-01"), Priority::Low, "").id.clone();
    let b = store.create_todo("b", "", date("2025-01-02"), Priority::Low, "").id.clone();
    let c = store.create_todo("c", "", date("2025-01-03"), Priority::Low, "").id.clone();

    store.delete_todo(&b).unwrap();
    let ids: Vec<&str> = store.todos().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![a.as_str(), c.as_str()]);

    assert_eq!(
        store.delete_todo(&b),
        Err(ModelError::TaskNotFound(b.clone()))
    );
}

#[test]
fn test_task_ids_unique_even_within_one_millisecond() {
    let mut store = TaskStore::new();
    for i in 0..50 {
        store.create_todo(&format!("task {i}"), "", date("2025-01-01"), Priority::Low, "");
    }
    let mut ids: Vec<String> = store.todos().iter().map(|t| t.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_tasks_are_isolated_per_project() {
    let mut store = TaskStore::new();
    let work = store.create_project("Work").id.clone();
    store.set_current_project(&work).unwrap();
    store.create_todo("Ship release", "", date("2025-02-01"), Priority::High, "");

    assert_eq!(store.todos().len(), 1);

    store.set_current_project(DEFAULT_PROJECT_ID).unwrap();
    assert!(store.todos().is_empty());
}

#[test]
fn test_snapshot_uses_camel_case_layout() {
    let mut store = TaskStore::new();
    store.create_todo("Buy milk", "", date("2025-01-10"), Priority::High, "");

    let json = serde_json::to_string(&store).unwrap();
    assert!(json.contains("\"currentProjectId\":\"default\""));
    assert!(json.contains("\"dueDate\":\"2025-01-10\""));
    assert!(json.contains("\"priority\":\"high\""));
}

#[test]
fn test_repair_restores_missing_default_project() {
    let json = r#"{
        "projects": [{"id": "project-1", "name": "Solo", "todos": []}],
        "currentProjectId": "project-404"
    }"#;
    let mut store: TaskStore = serde_json::from_str(json).unwrap();
    store.repair();

    assert!(store.project(DEFAULT_PROJECT_ID).is_some());
    assert_eq!(store.current_project_id(), DEFAULT_PROJECT_ID);
    // the existing project survives the repair
    assert!(store.project("project-1").is_some());
}

#[test]
fn test_delete_todo_in_targets_named_project() {
    let mut store = TaskStore::new();
    let id = store
        .create_todo("Buy milk", "", date("2025-01-10"), Priority::Medium, "")
        .id
        .clone();
    let work = store.create_project("Work").id.clone();
    store.set_current_project(&work).unwrap();

    // removal reaches the default project even while Work is current
    store.delete_todo_in(DEFAULT_PROJECT_ID, &id).unwrap();
    store.set_current_project(DEFAULT_PROJECT_ID).unwrap();
    assert!(store.todos().is_empty());
}

#[test]
fn test_delete_todo_in_unknown_targets_fail() {
    let mut store = TaskStore::new();
    let id = store
        .create_todo("Buy milk", "", date("2025-01-10"), Priority::Medium, "")
        .id
        .clone();

    assert_eq!(
        store.delete_todo_in("project-404", &id),
        Err(ModelError::ProjectNotFound("project-404".to_string()))
    );
    assert_eq!(
        store.delete_todo_in(DEFAULT_PROJECT_ID, "todo-404"),
        Err(ModelError::TaskNotFound("todo-404".to_string()))
    );
    assert_eq!(store.todos().len(), 1);
}
