use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Human-readable label, capitalized for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority in the low -> medium -> high -> low cycle
    #[must_use]
    pub fn cycle(&self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single actionable item with a due date, priority and completion flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(
        id: String,
        title: String,
        description: String,
        due_date: NaiveDate,
        priority: Priority,
        notes: String,
    ) -> Self {
        Self {
            id,
            title,
            description,
            due_date,
            priority,
            notes,
            completed: false,
        }
    }

    /// Apply a partial update; fields not present in the patch are left untouched
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Explicit set of updatable task fields.
///
/// Replaces a free-form merge so unexpected fields cannot silently enter a
/// task; completion is toggled through its own operation instead.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
}
