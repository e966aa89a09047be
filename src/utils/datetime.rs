//! Date utility functions
//!
//! Parsing and human-readable formatting for task due dates, with an explicit
//! fallback string for input that does not parse as a calendar date.

use chrono::{Local, NaiveDate};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback rendering for unparseable date input
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(today())
}

/// Long human-readable rendering, e.g. "January 1, 2025"
pub fn format_long(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}

/// Render a date with a caller-supplied chrono format string, falling back
/// to [`INVALID_DATE`] when the format itself is malformed.
///
/// Used for the configurable due-date column; `DelayedFormat` reports bad
/// specifiers through the write, so this never panics on user config.
pub fn format_with(d: NaiveDate, fmt: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    match write!(out, "{}", d.format(fmt)) {
        Ok(()) => out,
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Whether a due date is strictly before today, at day granularity
#[must_use]
pub fn is_overdue(due: NaiveDate, today: NaiveDate) -> bool {
    due < today
}
