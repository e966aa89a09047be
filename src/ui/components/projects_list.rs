//! Projects list component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::constants::EMPTY_STATE_PROJECTS;

/// Projects list component
pub struct ProjectsList;

impl ProjectsList {
    /// Render the projects list, highlighting the current project
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let max_name_width = area.width.saturating_sub(4) as usize;
        let current_id = app.store().current_project_id();

        let projects = app.store().projects();
        if projects.is_empty() {
            // repair() prevents this, but render something sensible anyway
            let empty = List::new(vec![ListItem::new(EMPTY_STATE_PROJECTS)]).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} Projects", app.icons.projects_title()))
                    .title_alignment(Alignment::Center),
            );
            f.render_widget(empty, area);
            return;
        }

        let project_items: Vec<ListItem> = projects
            .iter()
            .map(|project| {
                let is_current = project.id == current_id;
                let style = if is_current {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                // Truncate project name to fit sidebar
                let display_name = if project.name.chars().count() > max_name_width {
                    let truncated: String =
                        project.name.chars().take(max_name_width.saturating_sub(1)).collect();
                    format!("{truncated}…")
                } else {
                    project.name.clone()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", app.icons.projects_title()), style),
                    Span::styled(display_name, style),
                    Span::styled(
                        format!(" ({})", project.todos.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let projects_list = List::new(project_items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} Projects", app.icons.projects_title()))
                    .title_alignment(Alignment::Center),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("→ ");

        f.render_stateful_widget(projects_list, area, &mut app.project_list_state.clone());
    }
}
