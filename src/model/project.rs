use serde::{Deserialize, Serialize};

use super::task::Task;

/// Reserved id of the permanent default project
pub const DEFAULT_PROJECT_ID: &str = "default";

/// A named, ordered collection of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Task>,
}

impl Project {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
        }
    }

    /// The permanent project every store starts with
    #[must_use]
    pub fn default_project() -> Self {
        Self::new(DEFAULT_PROJECT_ID.to_string(), "Default Project".to_string())
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_PROJECT_ID
    }
}
