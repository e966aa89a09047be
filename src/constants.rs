//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Validation Error Messages
pub const ERROR_TITLE_AND_DATE_REQUIRED: &str = "Please fill in at least the title and due date.";
pub const ERROR_INVALID_DUE_DATE: &str = "Due date must be a valid date in YYYY-MM-DD format.";
pub const ERROR_PROJECT_NAME_REQUIRED: &str = "Project name cannot be empty";

// Entity-not-found Messages
pub const ERROR_TASK_SAVE_FAILED: &str = "There was an error saving your task. Please try again.";
pub const ERROR_DEFAULT_PROJECT_DELETE: &str = "The default project cannot be deleted.";

// Status Messages
pub const STATUS_SAVE_FAILED: &str = "save failed - changes kept in memory";

// Empty-state Text
pub const EMPTY_STATE_TASKS: &str = "No tasks yet. Press 'a' to create a task.";
pub const EMPTY_STATE_PROJECTS: &str = "No projects available";

// Timing
/// Delay between confirming a deletion and committing it, in milliseconds.
/// The row stays visible in a pending-delete style until the deadline.
pub const PENDING_DELETE_MS: u64 = 300;

// UI Layout Constants
/// Sidebar width cap in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 30;
