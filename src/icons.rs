//! Icon service for managing different icon themes
//!
//! Centralizes the symbols used throughout the TUI, with Unicode and ASCII
//! fallback themes for terminals without emoji support.

use crate::model::Priority;

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Checkbox for a task that is still pending
    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "🔳",
            IconTheme::Unicode => "□",
            IconTheme::Ascii => "[ ]",
        }
    }

    /// Checkbox for a completed task
    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "✅",
            IconTheme::Unicode => "✓",
            IconTheme::Ascii => "[x]",
        }
    }

    /// Marker for a task whose deletion is pending commit
    #[must_use]
    pub fn task_deleting(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "❌",
            IconTheme::Unicode => "✗",
            IconTheme::Ascii => "[d]",
        }
    }

    /// Marker shown next to overdue due dates
    #[must_use]
    pub fn overdue(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "⏰",
            IconTheme::Unicode => "⚠",
            IconTheme::Ascii => "!",
        }
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "📝",
            IconTheme::Unicode => "▶",
            IconTheme::Ascii => ">",
        }
    }

    #[must_use]
    pub fn projects_title(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "📁",
            IconTheme::Unicode => "◆",
            IconTheme::Ascii => "#",
        }
    }

    /// Badge for a task priority level
    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => match priority {
                Priority::High => "🔴",
                Priority::Medium => "🟡",
                Priority::Low => "🔵",
            },
            IconTheme::Unicode => match priority {
                Priority::High => "●",
                Priority::Medium => "◉",
                Priority::Low => "○",
            },
            IconTheme::Ascii => match priority {
                Priority::High => "!!",
                Priority::Medium => "!",
                Priority::Low => "-",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_task_status_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.task_pending(), "[ ]");
        assert_eq!(service.task_completed(), "[x]");
        assert_eq!(service.task_deleting(), "[d]");
    }

    #[test]
    fn test_priority_icons_distinct() {
        let service = IconService::new(IconTheme::Ascii);
        assert_ne!(service.priority(Priority::High), service.priority(Priority::Low));
        assert_ne!(service.priority(Priority::High), service.priority(Priority::Medium));
    }
}
