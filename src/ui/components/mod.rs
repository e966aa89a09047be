//! Reusable UI components

pub mod dialogs;
pub mod help_panel;
pub mod projects_list;
pub mod status_bar;
pub mod tasks_list;

pub use help_panel::HelpPanel;
pub use projects_list::ProjectsList;
pub use status_bar::StatusBar;
pub use tasks_list::TasksList;
