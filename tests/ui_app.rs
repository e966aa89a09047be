use std::time::{Duration, Instant};

use chrono::NaiveDate;
use taskpad::config::Config;
use taskpad::model::{Priority, DEFAULT_PROJECT_ID};
use taskpad::storage::Storage;
use taskpad::ui::App;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn app_with_tempdir() -> (App, tempfile::TempDir, Storage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::with_path(dir.path().join("tasks.json"));
    let app = App::new(&Config::default(), storage.clone());
    (app, dir, storage)
}

fn fill_task_form(app: &mut App, title: &str, due_date: &str) {
    app.start_create_task();
    let form = app.task_form.as_mut().unwrap();
    form.title = title.to_string();
    form.due_date = due_date.to_string();
}

#[test]
fn test_submit_requires_title_and_due_date() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    fill_task_form(&mut app, "", "2025-01-10");
    app.submit_task_form();
    assert!(app.error_message.is_some());
    assert!(app.store().todos().is_empty());
    // the form stays open so the user can fix the input
    assert!(app.task_form.is_some());
}

#[test]
fn test_submit_rejects_unparseable_due_date() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    fill_task_form(&mut app, "Buy milk", "tomorrow-ish");
    app.submit_task_form();
    assert!(app.error_message.is_some());
    assert!(app.store().todos().is_empty());
}

#[test]
fn test_submit_creates_task_and_persists() {
    let (mut app, _dir, storage) = app_with_tempdir();

    fill_task_form(&mut app, "Buy milk", "2025-01-10");
    app.submit_task_form();

    assert!(app.error_message.is_none());
    assert!(app.task_form.is_none());
    assert_eq!(app.store().todos().len(), 1);

    let reloaded = storage.load().expect("snapshot persisted on submit");
    assert_eq!(reloaded.todos().len(), 1);
    assert_eq!(reloaded.todos()[0].title, "Buy milk");
}

#[test]
fn test_edit_form_retains_task_identity() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    fill_task_form(&mut app, "Buy milk", "2025-01-10");
    app.submit_task_form();
    let id = app.store().todos()[0].id.clone();

    app.start_edit_task();
    let form = app.task_form.as_ref().unwrap();
    assert!(form.is_edit());
    assert_eq!(form.task_id.as_deref(), Some(id.as_str()));
    assert_eq!(form.title, "Buy milk");

    app.task_form.as_mut().unwrap().title = "Buy oat milk".to_string();
    app.submit_task_form();

    let todos = app.store().todos();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].title, "Buy oat milk");
}

#[test]
fn test_visible_tasks_sorted_by_due_date() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    fill_task_form(&mut app, "later", "2025-03-01");
    app.submit_task_form();
    fill_task_form(&mut app, "sooner", "2025-01-01");
    app.submit_task_form();

    let titles: Vec<&str> = app.visible_tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["sooner", "later"]);

    // model list keeps insertion order
    let stored: Vec<&str> = app.store().todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(stored, vec!["later", "sooner"]);
}

#[test]
fn test_delete_is_two_phase_with_deadline() {
    let (mut app, _dir, storage) = app_with_tempdir();

    fill_task_form(&mut app, "Buy milk", "2025-01-10");
    app.submit_task_form();
    let id = app.store().todos()[0].id.clone();

    app.start_delete_task();
    assert_eq!(app.delete_confirmation.as_deref(), Some(id.as_str()));

    app.confirm_delete_task();
    assert!(app.is_pending_delete(&id));
    // mark phase: the task is still in the model
    assert_eq!(app.store().todos().len(), 1);

    // before the deadline nothing commits
    app.tick(Instant::now());
    assert_eq!(app.store().todos().len(), 1);

    // past the deadline the deletion commits and persists
    app.tick(Instant::now() + Duration::from_secs(1));
    assert!(app.store().todos().is_empty());
    assert!(app.pending_delete.is_none());
    assert!(storage.load().unwrap().todos().is_empty());
}

#[test]
fn test_confirmed_delete_commits_on_project_switch() {
    let (mut app, _dir, storage) = app_with_tempdir();

    app.start_create_project();
    for c in "Work".chars() {
        app.add_char_to_project_name(c);
    }
    app.create_project();
    let work = app
        .store()
        .projects()
        .iter()
        .find(|p| p.name == "Work")
        .unwrap()
        .id
        .clone();

    fill_task_form(&mut app, "Buy milk", "2025-01-10");
    app.submit_task_form();

    app.start_delete_task();
    app.confirm_delete_task();

    // leaving the project commits the confirmed deletion instead of
    // dropping it
    app.select_project(&work);
    assert!(app.pending_delete.is_none());

    app.select_project(DEFAULT_PROJECT_ID);
    app.tick(Instant::now() + Duration::from_secs(1));
    assert!(app.store().todos().is_empty());
    assert!(storage.load().unwrap().todos().is_empty());
}

#[test]
fn test_second_confirmation_commits_first_delete() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    fill_task_form(&mut app, "first", "2025-01-01");
    app.submit_task_form();
    fill_task_form(&mut app, "second", "2025-02-01");
    app.submit_task_form();

    // confirm deletion of "first" (sorted to index 0)
    app.start_delete_task();
    app.confirm_delete_task();

    // confirming another deletion within the window commits the first
    app.next_task();
    app.start_delete_task();
    app.confirm_delete_task();

    let titles: Vec<&str> = app.store().todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["second"]);

    app.tick(Instant::now() + Duration::from_secs(1));
    assert!(app.store().todos().is_empty());
}

#[test]
fn test_cancelled_delete_leaves_task() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    fill_task_form(&mut app, "Buy milk", "2025-01-10");
    app.submit_task_form();

    app.start_delete_task();
    app.cancel_delete_task();
    app.tick(Instant::now() + Duration::from_secs(1));
    assert_eq!(app.store().todos().len(), 1);
}

#[test]
fn test_toggle_selected_task_persists() {
    let (mut app, _dir, storage) = app_with_tempdir();

    fill_task_form(&mut app, "Buy milk", "2025-01-10");
    app.submit_task_form();

    app.toggle_selected_task();
    assert!(app.store().todos()[0].completed);
    assert!(storage.load().unwrap().todos()[0].completed);

    app.toggle_selected_task();
    assert!(!app.store().todos()[0].completed);
}

#[test]
fn test_default_project_delete_refused() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    app.start_delete_project();
    assert!(app.error_message.is_some());
    assert!(app.delete_project_confirmation.is_none());
}

#[test]
fn test_project_switch_persists_current() {
    let (mut app, _dir, storage) = app_with_tempdir();

    app.start_create_project();
    for c in "Work".chars() {
        app.add_char_to_project_name(c);
    }
    app.create_project();

    let work = app
        .store()
        .projects()
        .iter()
        .find(|p| p.name == "Work")
        .unwrap()
        .id
        .clone();
    app.select_project(&work);
    assert_eq!(app.store().current_project_id(), work);

    let reloaded = storage.load().unwrap();
    assert_eq!(reloaded.current_project_id(), work);
}

#[test]
fn test_project_delete_returns_to_default() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    app.start_create_project();
    for c in "Work".chars() {
        app.add_char_to_project_name(c);
    }
    app.create_project();
    let work = app
        .store()
        .projects()
        .iter()
        .find(|p| p.name == "Work")
        .unwrap()
        .id
        .clone();
    app.select_project(&work);

    fill_task_form(&mut app, "Ship release", "2025-02-01");
    app.submit_task_form();
    assert_eq!(app.store().todos().len(), 1);

    app.start_delete_project();
    app.confirm_delete_project();

    assert_eq!(app.store().current_project_id(), DEFAULT_PROJECT_ID);
    // default project tasks were never touched
    assert!(app.store().todos().is_empty());
}

#[test]
fn test_tasks_created_under_work_do_not_leak_to_default() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    app.start_create_project();
    for c in "Work".chars() {
        app.add_char_to_project_name(c);
    }
    app.create_project();
    let work = app
        .store()
        .projects()
        .iter()
        .find(|p| p.name == "Work")
        .unwrap()
        .id
        .clone();
    app.select_project(&work);

    fill_task_form(&mut app, "Ship release", "2025-02-01");
    app.submit_task_form();

    app.select_project(DEFAULT_PROJECT_ID);
    assert!(app.store().todos().is_empty());

    app.select_project(&work);
    assert_eq!(app.store().todos().len(), 1);
    assert_eq!(app.store().todos()[0].priority, Priority::Medium);
    assert_eq!(app.store().todos()[0].due_date, date("2025-02-01"));
}

#[test]
fn test_display_config_is_wired_into_app() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::with_path(dir.path().join("tasks.json"));

    let mut config = Config::default();
    config.display.date_format = "%d.%m.%Y".to_string();
    config.display.show_descriptions = false;

    let app = App::new(&config, storage);
    assert_eq!(app.display.date_format, "%d.%m.%Y");
    assert!(!app.display.show_descriptions);
}

#[test]
fn test_task_navigation_drives_list_state() {
    let (mut app, _dir, _storage) = app_with_tempdir();

    fill_task_form(&mut app, "first", "2025-01-01");
    app.submit_task_form();
    fill_task_form(&mut app, "second", "2025-02-01");
    app.submit_task_form();

    // the list state is the single source of the selection highlight
    app.next_task();
    assert_eq!(app.task_list_state.selected(), Some(1));
    app.previous_task();
    assert_eq!(app.task_list_state.selected(), Some(0));
}
