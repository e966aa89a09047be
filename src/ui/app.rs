//! Application state and business logic

use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::config::{Config, DisplayConfig};
use crate::constants::{
    ERROR_DEFAULT_PROJECT_DELETE, ERROR_INVALID_DUE_DATE, ERROR_PROJECT_NAME_REQUIRED,
    ERROR_TASK_SAVE_FAILED, ERROR_TITLE_AND_DATE_REQUIRED, PENDING_DELETE_MS,
};
use crate::icons::IconService;
use crate::model::{Priority, Project, Task, TaskPatch, TaskStore};
use crate::storage::Storage;
use crate::utils::datetime;

/// Field focus inside the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    DueDate,
    Priority,
    Notes,
}

impl FormField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::DueDate,
            FormField::DueDate => FormField::Priority,
            FormField::Priority => FormField::Notes,
            FormField::Notes => FormField::Title,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Notes,
            FormField::Description => FormField::Title,
            FormField::DueDate => FormField::Description,
            FormField::Priority => FormField::DueDate,
            FormField::Notes => FormField::Priority,
        }
    }
}

/// Shared create/edit task form.
///
/// A retained `task_id` distinguishes editing an existing task (present) from
/// creating a new one (absent).
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub task_id: Option<String>,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub notes: String,
    pub focus: FormField,
}

impl TaskForm {
    /// Empty form for a new task, due date prefilled with today
    #[must_use]
    pub fn for_new_task() -> Self {
        Self {
            task_id: None,
            title: String::new(),
            description: String::new(),
            due_date: datetime::format_today(),
            priority: Priority::default(),
            notes: String::new(),
            focus: FormField::Title,
        }
    }

    /// Form prefilled from an existing task
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            task_id: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: datetime::format_ymd(task.due_date),
            priority: task.priority,
            notes: task.notes.clone(),
            focus: FormField::Title,
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.task_id.is_some()
    }

    fn focused_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Notes => Some(&mut self.notes),
            FormField::Priority => None,
        }
    }
}

/// A confirmed deletion waiting for its commit deadline.
///
/// The row stays visible in a pending style until the deadline elapses, then
/// the model mutation and persist are applied on the next tick. The deadline
/// is enforced by the tick clock, so the commit cannot be missed.
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub task_id: String,
    /// Project the task belonged to at confirmation time, so the commit
    /// targets the right project even after a switch
    pub project_id: String,
    pub deadline: Instant,
}

/// Application state
pub struct App {
    pub should_quit: bool,
    store: TaskStore,
    storage: Storage,
    pub icons: IconService,
    pub display: DisplayConfig,

    pub selected_task_index: usize,
    pub task_list_state: ListState,
    pub project_list_state: ListState,

    // Project management
    pub creating_project: bool,
    pub new_project_name: String,
    pub delete_project_confirmation: Option<String>,

    // Task management
    pub task_form: Option<TaskForm>,
    pub delete_confirmation: Option<String>,
    pub pending_delete: Option<PendingDelete>,
    pub viewing_task: Option<String>,

    pub error_message: Option<String>,
    pub show_help: bool,
    pub save_failed: bool,
    submit_in_progress: bool,
}

impl App {
    /// Create the application state from a loaded (or fresh) snapshot
    #[must_use]
    pub fn new(config: &Config, storage: Storage) -> Self {
        let mut store = storage.load().unwrap_or_default();

        // "last" keeps whichever project the snapshot says was current
        let startup = config.ui.startup_project.as_str();
        if startup != "last" {
            if let Err(e) = store.set_current_project(startup) {
                log::warn!("startup project not usable: {e}");
            }
        }

        let mut app = Self {
            should_quit: false,
            store,
            storage,
            icons: IconService::default(),
            display: config.display.clone(),
            selected_task_index: 0,
            task_list_state: ListState::default(),
            project_list_state: ListState::default(),
            creating_project: false,
            new_project_name: String::new(),
            delete_project_confirmation: None,
            task_form: None,
            delete_confirmation: None,
            pending_delete: None,
            viewing_task: None,
            error_message: None,
            show_help: false,
            save_failed: false,
            submit_in_progress: false,
        };
        app.task_list_state.select(Some(0));
        app.sync_project_selection();
        app
    }

    /// Read-only view of the model
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Persist the full snapshot; failures are logged and flagged, never fatal
    fn persist(&mut self) {
        self.save_failed = !self.storage.save(&self.store);
        if self.save_failed {
            log::warn!("snapshot save failed, in-memory state kept");
        }
    }

    // Rendering helpers

    /// Tasks of the current project in display order: ascending by due date.
    ///
    /// The model list keeps insertion order; only the view is sorted.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.store.todos().iter().collect();
        tasks.sort_by_key(|t| t.due_date);
        tasks
    }

    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_task_index).copied()
    }

    #[must_use]
    pub fn selected_project(&self) -> &Project {
        self.store.current_project()
    }

    /// Whether a task's deletion has been confirmed and awaits commit
    #[must_use]
    pub fn is_pending_delete(&self, task_id: &str) -> bool {
        self.pending_delete
            .as_ref()
            .is_some_and(|p| p.task_id == task_id)
    }

    fn sync_project_selection(&mut self) {
        let index = self
            .store
            .projects()
            .iter()
            .position(|p| p.id == self.store.current_project_id())
            .unwrap_or(0);
        self.project_list_state.select(Some(index));
    }

    fn clamp_task_selection(&mut self) {
        let len = self.store.todos().len();
        if len == 0 {
            self.selected_task_index = 0;
        } else if self.selected_task_index >= len {
            self.selected_task_index = len - 1;
        }
        self.task_list_state.select(Some(self.selected_task_index));
    }

    // Navigation

    pub fn next_task(&mut self) {
        let len = self.store.todos().len();
        if len > 0 {
            self.selected_task_index = (self.selected_task_index + 1) % len;
            self.task_list_state.select(Some(self.selected_task_index));
        }
    }

    pub fn previous_task(&mut self) {
        let len = self.store.todos().len();
        if len > 0 {
            self.selected_task_index = if self.selected_task_index == 0 {
                len - 1
            } else {
                self.selected_task_index - 1
            };
            self.task_list_state.select(Some(self.selected_task_index));
        }
    }

    /// Switch the current project by offset in the project list and persist
    pub fn select_project_offset(&mut self, offset: isize) {
        let projects = self.store.projects();
        if projects.is_empty() {
            return;
        }
        let current = projects
            .iter()
            .position(|p| p.id == self.store.current_project_id())
            .unwrap_or(0);
        let len = projects.len() as isize;
        let next = (current as isize + offset).rem_euclid(len) as usize;
        let id = projects[next].id.clone();
        self.select_project(&id);
    }

    /// Set a project current, reset the task selection and persist.
    ///
    /// A confirmed deletion commits before the switch; leaving the project
    /// never cancels it.
    pub fn select_project(&mut self, id: &str) {
        self.commit_pending_delete();
        if let Err(e) = self.store.set_current_project(id) {
            self.error_message = Some(e.to_string());
            return;
        }
        self.selected_task_index = 0;
        self.task_list_state.select(Some(0));
        self.sync_project_selection();
        self.persist();
    }

    // Project creation

    pub fn start_create_project(&mut self) {
        self.creating_project = true;
        self.new_project_name.clear();
    }

    pub fn cancel_create_project(&mut self) {
        self.creating_project = false;
        self.new_project_name.clear();
    }

    pub fn add_char_to_project_name(&mut self, c: char) {
        if self.creating_project {
            self.new_project_name.push(c);
        }
    }

    pub fn remove_char_from_project_name(&mut self) {
        if self.creating_project {
            self.new_project_name.pop();
        }
    }

    /// Create the new project; the name must be non-empty
    pub fn create_project(&mut self) {
        let name = self.new_project_name.trim().to_string();
        if name.is_empty() {
            self.error_message = Some(ERROR_PROJECT_NAME_REQUIRED.to_string());
            return;
        }
        self.creating_project = false;
        self.new_project_name.clear();
        self.store.create_project(&name);
        self.persist();
    }

    // Project deletion

    /// Ask for confirmation before deleting the current project.
    ///
    /// The default project is refused up front, matching the model invariant.
    pub fn start_delete_project(&mut self) {
        let project = self.store.current_project();
        if project.is_default() {
            self.error_message = Some(ERROR_DEFAULT_PROJECT_DELETE.to_string());
            return;
        }
        self.delete_project_confirmation = Some(project.id.clone());
    }

    pub fn cancel_delete_project(&mut self) {
        self.delete_project_confirmation = None;
    }

    pub fn confirm_delete_project(&mut self) {
        if let Some(project_id) = self.delete_project_confirmation.take() {
            match self.store.delete_project(&project_id) {
                Ok(()) => {
                    self.selected_task_index = 0;
                    self.task_list_state.select(Some(0));
                    self.sync_project_selection();
                    self.persist();
                }
                Err(e) => {
                    self.error_message = Some(e.to_string());
                }
            }
        }
    }

    // Task form

    pub fn start_create_task(&mut self) {
        self.task_form = Some(TaskForm::for_new_task());
    }

    /// Open the form prefilled with the selected (or viewed) task
    pub fn start_edit_task(&mut self) {
        let task_id = self
            .viewing_task
            .clone()
            .or_else(|| self.selected_task().map(|t| t.id.clone()));
        if let Some(id) = task_id {
            if let Some(task) = self.store.todo(&id) {
                self.task_form = Some(TaskForm::for_task(task));
                self.viewing_task = None;
            }
        }
    }

    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
    }

    pub fn form_add_char(&mut self, c: char) {
        if let Some(form) = self.task_form.as_mut() {
            if let Some(buffer) = form.focused_buffer_mut() {
                buffer.push(c);
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = self.task_form.as_mut() {
            if let Some(buffer) = form.focused_buffer_mut() {
                buffer.pop();
            }
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = self.task_form.as_mut() {
            form.focus = form.focus.next();
        }
    }

    pub fn form_previous_field(&mut self) {
        if let Some(form) = self.task_form.as_mut() {
            form.focus = form.focus.previous();
        }
    }

    pub fn form_cycle_priority(&mut self) {
        if let Some(form) = self.task_form.as_mut() {
            if form.focus == FormField::Priority {
                form.priority = form.priority.cycle();
            }
        }
    }

    /// Validate and apply the task form, creating or updating a task.
    ///
    /// Guarded by an in-flight flag so repeated submit keypresses cannot apply
    /// twice; the flag is cleared on every exit path. Validation failure
    /// surfaces an error and leaves all state untouched.
    pub fn submit_task_form(&mut self) {
        if self.submit_in_progress {
            log::debug!("form submission ignored, update already in progress");
            return;
        }
        self.submit_in_progress = true;

        let Some(form) = self.task_form.clone() else {
            self.submit_in_progress = false;
            return;
        };

        let title = form.title.trim().to_string();
        let due_date_raw = form.due_date.trim();
        if title.is_empty() || due_date_raw.is_empty() {
            self.error_message = Some(ERROR_TITLE_AND_DATE_REQUIRED.to_string());
            self.submit_in_progress = false;
            return;
        }
        let due_date = match datetime::parse_date(due_date_raw) {
            Ok(d) => d,
            Err(_) => {
                self.error_message = Some(ERROR_INVALID_DUE_DATE.to_string());
                self.submit_in_progress = false;
                return;
            }
        };

        let description = form.description.trim().to_string();
        let notes = form.notes.trim().to_string();

        if let Some(task_id) = &form.task_id {
            let patch = TaskPatch {
                title: Some(title),
                description: Some(description),
                due_date: Some(due_date),
                priority: Some(form.priority),
                notes: Some(notes),
            };
            if self.store.update_todo(task_id, patch).is_err() {
                // stale id, the task vanished under us
                self.error_message = Some(ERROR_TASK_SAVE_FAILED.to_string());
                self.submit_in_progress = false;
                return;
            }
        } else {
            self.store
                .create_todo(&title, &description, due_date, form.priority, &notes);
        }

        self.task_form = None;
        self.clamp_task_selection();
        self.persist();
        self.submit_in_progress = false;
    }

    // Task operations

    /// Flip the selected task's completion flag and persist
    pub fn toggle_selected_task(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id.clone()) else {
            return;
        };
        // stale selection is silently ignored
        if self.store.toggle_todo_completion(&id).is_ok() {
            self.persist();
        }
    }

    /// Open the read-only details view for the selected task
    pub fn open_task_details(&mut self) {
        if let Some(task) = self.selected_task() {
            self.viewing_task = Some(task.id.clone());
        }
    }

    pub fn close_task_details(&mut self) {
        self.viewing_task = None;
    }

    /// Ask for confirmation before deleting the selected (or viewed) task
    pub fn start_delete_task(&mut self) {
        let task_id = self
            .viewing_task
            .clone()
            .or_else(|| self.selected_task().map(|t| t.id.clone()));
        if let Some(id) = task_id {
            self.delete_confirmation = Some(id);
        }
    }

    pub fn cancel_delete_task(&mut self) {
        self.delete_confirmation = None;
    }

    /// Phase one of deletion: mark the task pending and schedule the commit.
    ///
    /// The actual model mutation happens in [`App::tick`] once the deadline
    /// elapses; until then the row renders in a pending-delete style.
    pub fn confirm_delete_task(&mut self) {
        if let Some(task_id) = self.delete_confirmation.take() {
            // an earlier confirmed deletion commits now instead of being
            // overwritten
            self.commit_pending_delete();
            self.viewing_task = None;
            self.pending_delete = Some(PendingDelete {
                task_id,
                project_id: self.store.current_project_id().to_string(),
                deadline: Instant::now() + Duration::from_millis(PENDING_DELETE_MS),
            });
        }
    }

    /// Apply a confirmed deletion immediately and persist.
    ///
    /// Called from the tick once the deadline elapses, and from any action
    /// that would otherwise drop the pending state. A stale id means the task
    /// is already gone; nothing to undo.
    fn commit_pending_delete(&mut self) {
        if let Some(pending) = self.pending_delete.take() {
            if let Err(e) = self
                .store
                .delete_todo_in(&pending.project_id, &pending.task_id)
            {
                log::debug!("pending delete skipped: {e}");
            }
            self.clamp_task_selection();
            self.persist();
        }
    }

    /// Advance deadline-driven state; called on every loop iteration
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .pending_delete
            .as_ref()
            .is_some_and(|p| now >= p.deadline);
        if due {
            self.commit_pending_delete();
        }
    }
}
