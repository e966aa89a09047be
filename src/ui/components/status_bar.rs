//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::STATUS_SAVE_FAILED;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.save_failed {
            STATUS_SAVE_FAILED.to_string()
        } else {
            "Space: toggle • a: add • e: edit • d: delete • J/K: project • ?: help • q: quit"
                .to_string()
        };

        let status_color = if app.save_failed {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
