//! Taskpad - a terminal task manager
//!
//! This library provides a terminal-based interface for organizing tasks
//! into named projects, tracking due dates, priority and completion, with
//! state persisted across sessions as a single JSON snapshot.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`model`] - In-memory task and project model
//! * [`storage`] - Snapshot persistence
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// In-memory task and project model
pub mod model;

/// Snapshot persistence for the task store
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling and other helpers
pub mod utils;

// Re-export model types for convenient access
pub use model::{Priority, Project, Task, TaskPatch, TaskStore};
