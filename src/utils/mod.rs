//! Utility modules for the taskpad application.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date parsing, formatting and overdue checks

pub mod datetime;
