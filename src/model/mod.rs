//! In-memory task and project model.
//!
//! The [`TaskStore`] owns every project and task for the session and is the
//! single unit of persistence: the whole store serializes to one snapshot and
//! is written back after every mutation. Task-scoped operations implicitly
//! target the current project.

pub mod project;
pub mod task;

pub use project::{Project, DEFAULT_PROJECT_ID};
pub use task::{Priority, Task, TaskPatch};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use thiserror::Error;

/// Errors produced by model operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("the default project cannot be deleted")]
    DefaultProjectImmutable,
    #[error("project not found: {0}")]
    ProjectNotFound(String),
    #[error("task not found: {0}")]
    TaskNotFound(String),
}

/// Allocate a millisecond timestamp for id generation.
///
/// Strictly increasing within the process so two creations in the same
/// millisecond still get distinct ids. Best-effort uniqueness, matching the
/// persisted id scheme.
fn next_id_stamp() -> i64 {
    static LAST: AtomicI64 = AtomicI64::new(0);
    let now = Utc::now().timestamp_millis();
    let prev = LAST
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(last.max(now - 1) + 1)
        })
        .unwrap_or(now - 1);
    prev.max(now - 1) + 1
}

/// The whole application state: all projects plus the current project id.
///
/// Serializes wholesale as the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStore {
    projects: Vec<Project>,
    current_project_id: String,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Fresh store with a single empty default project
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: vec![Project::default_project()],
            current_project_id: DEFAULT_PROJECT_ID.to_string(),
        }
    }

    /// Re-establish structural invariants after deserializing.
    ///
    /// Loaded snapshots are not schema-validated, so a hand-edited file could
    /// be missing the default project or point at a project that no longer
    /// exists. Both are repaired rather than rejected.
    pub fn repair(&mut self) {
        if !self.projects.iter().any(Project::is_default) {
            self.projects.insert(0, Project::default_project());
        }
        if !self.projects.iter().any(|p| p.id == self.current_project_id) {
            self.current_project_id = DEFAULT_PROJECT_ID.to_string();
        }
    }

    // Project operations

    /// Create a project with a fresh id and empty task list
    pub fn create_project(&mut self, name: &str) -> &Project {
        let id = format!("project-{}", next_id_stamp());
        self.projects.push(Project::new(id, name.to_string()));
        // just pushed, so last() is the new project
        &self.projects[self.projects.len() - 1]
    }

    /// Delete a project; the default project is permanent.
    ///
    /// Deleting the current project resets the current project to the default.
    pub fn delete_project(&mut self, id: &str) -> Result<(), ModelError> {
        if id == DEFAULT_PROJECT_ID {
            return Err(ModelError::DefaultProjectImmutable);
        }
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ModelError::ProjectNotFound(id.to_string()))?;
        self.projects.remove(index);
        if self.current_project_id == id {
            self.current_project_id = DEFAULT_PROJECT_ID.to_string();
        }
        Ok(())
    }

    /// Switch the current project, failing on unknown ids so the current
    /// project reference can never dangle
    pub fn set_current_project(&mut self, id: &str) -> Result<(), ModelError> {
        if !self.projects.iter().any(|p| p.id == id) {
            return Err(ModelError::ProjectNotFound(id.to_string()));
        }
        self.current_project_id = id.to_string();
        Ok(())
    }

    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn current_project_id(&self) -> &str {
        &self.current_project_id
    }

    /// The project task-scoped operations operate on
    #[must_use]
    pub fn current_project(&self) -> &Project {
        let idx = self.current_project_index();
        &self.projects[idx]
    }

    fn current_project_index(&self) -> usize {
        self.projects
            .iter()
            .position(|p| p.id == self.current_project_id)
            .or_else(|| self.projects.iter().position(Project::is_default))
            .unwrap_or(0)
    }

    fn current_project_mut(&mut self) -> &mut Project {
        let idx = self.current_project_index();
        &mut self.projects[idx]
    }

    // Task operations, all scoped to the current project

    /// Create a task in the current project, not completed
    pub fn create_todo(
        &mut self,
        title: &str,
        description: &str,
        due_date: NaiveDate,
        priority: Priority,
        notes: &str,
    ) -> &Task {
        let id = format!("todo-{}", next_id_stamp());
        let task = Task::new(
            id,
            title.to_string(),
            description.to_string(),
            due_date,
            priority,
            notes.to_string(),
        );
        let todos = &mut self.current_project_mut().todos;
        todos.push(task);
        &todos[todos.len() - 1]
    }

    #[must_use]
    pub fn todo(&self, id: &str) -> Option<&Task> {
        self.current_project().todos.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn todos(&self) -> &[Task] {
        &self.current_project().todos
    }

    fn todo_mut(&mut self, id: &str) -> Result<&mut Task, ModelError> {
        self.current_project_mut()
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ModelError::TaskNotFound(id.to_string()))
    }

    /// Merge a partial update into an existing task
    pub fn update_todo(&mut self, id: &str, patch: TaskPatch) -> Result<&Task, ModelError> {
        let task = self.todo_mut(id)?;
        task.apply(patch);
        Ok(&*task)
    }

    /// Remove a task from the current project
    pub fn delete_todo(&mut self, id: &str) -> Result<(), ModelError> {
        let current = self.current_project_id.clone();
        self.delete_todo_in(&current, id)
    }

    /// Remove a task from a named project, regardless of which is current.
    ///
    /// Deferred deletions commit through this so a project switch between
    /// confirmation and commit cannot redirect the removal.
    pub fn delete_todo_in(&mut self, project_id: &str, id: &str) -> Result<(), ModelError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| ModelError::ProjectNotFound(project_id.to_string()))?;
        let index = project
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ModelError::TaskNotFound(id.to_string()))?;
        project.todos.remove(index);
        Ok(())
    }

    /// Flip a task's completion flag
    pub fn toggle_todo_completion(&mut self, id: &str) -> Result<&Task, ModelError> {
        let task = self.todo_mut(id)?;
        task.completed = !task.completed;
        Ok(&*task)
    }
}
