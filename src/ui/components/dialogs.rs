//! Dialog components

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::{App, FormField};
use super::super::layout::LayoutManager;
use crate::utils::datetime;

/// Error dialog component
pub struct ErrorDialog;

impl ErrorDialog {
    /// Render the error dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(error_msg) = &app.error_message {
            let error_area = LayoutManager::centered_rect(60, 20, f.area());
            f.render_widget(Clear, error_area);
            let error_paragraph = Paragraph::new(error_msg.as_str())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Error")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(error_paragraph, error_area);
        }
    }
}

/// Task deletion confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    /// Render the delete confirmation dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(task_id) = &app.delete_confirmation {
            if let Some(task) = app.store().todo(task_id) {
                let confirm_area = LayoutManager::centered_rect(60, 25, f.area());
                f.render_widget(Clear, confirm_area);

                let task_preview = if task.title.chars().count() > 40 {
                    let truncated: String = task.title.chars().take(37).collect();
                    format!("{truncated}...")
                } else {
                    task.title.clone()
                };

                let confirm_text = format!(
                    "Delete task?\n\n\"{task_preview}\"\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel",
                );

                let confirm_paragraph = Paragraph::new(confirm_text)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Confirm Delete")
                            .title_alignment(Alignment::Center),
                    )
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                f.render_widget(confirm_paragraph, confirm_area);
            }
        }
    }
}

/// Project deletion confirmation dialog component
pub struct ProjectDeleteConfirmationDialog;

impl ProjectDeleteConfirmationDialog {
    /// Render the project deletion confirmation dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(project_id) = &app.delete_project_confirmation {
            if let Some(project) = app.store().project(project_id) {
                let confirm_area = LayoutManager::centered_rect(70, 20, f.area());
                f.render_widget(Clear, confirm_area);

                let confirm_text = format!(
                    "Delete project?\n\n\"{}\"\n\nAll todos in this project will be lost!\n\nPress 'y' to confirm or 'n'/Esc to cancel",
                    project.name
                );

                let confirm_paragraph = Paragraph::new(confirm_text)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Confirm Project Delete")
                            .title_alignment(Alignment::Center),
                    )
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                f.render_widget(confirm_paragraph, confirm_area);
            }
        }
    }
}

/// Project creation dialog component
pub struct ProjectCreationDialog;

impl ProjectCreationDialog {
    /// Render the project creation dialog
    pub fn render(f: &mut Frame, app: &App) {
        if app.creating_project {
            let dialog_area = LayoutManager::centered_rect_lines(60, 5, f.area());
            f.render_widget(Clear, dialog_area);

            let name_text = if app.new_project_name.is_empty() {
                Span::styled("Enter project name", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(app.new_project_name.as_str())
            };
            let name_paragraph = Paragraph::new(Line::from(vec![name_text]))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("New Project")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Left);
            f.render_widget(name_paragraph, dialog_area);

            let hint_area = ratatui::layout::Rect::new(
                dialog_area.x,
                dialog_area.y + dialog_area.height.saturating_sub(1),
                dialog_area.width,
                1,
            );
            let hint = Paragraph::new("Enter: create  Esc: cancel")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(hint, hint_area);
        }
    }
}

/// Shared create/edit task form dialog
pub struct TaskFormDialog;

impl TaskFormDialog {
    /// Render the task form with one bordered input per field
    pub fn render(f: &mut Frame, app: &App) {
        let Some(form) = &app.task_form else {
            return;
        };

        let title = if form.is_edit() { "Edit Task" } else { "New Task" };
        let dialog_area = LayoutManager::centered_rect_lines(70, 21, f.area());
        f.render_widget(Clear, dialog_area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = outer.inner(dialog_area);
        f.render_widget(outer, dialog_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // title
                Constraint::Length(3), // description
                Constraint::Length(3), // due date
                Constraint::Length(3), // priority
                Constraint::Length(3), // notes
                Constraint::Length(1), // instructions
            ])
            .split(inner);

        Self::render_text_field(f, rows[0], "Title", &form.title, form.focus == FormField::Title);
        Self::render_text_field(
            f,
            rows[1],
            "Description",
            &form.description,
            form.focus == FormField::Description,
        );
        Self::render_text_field(
            f,
            rows[2],
            "Due date (YYYY-MM-DD)",
            &form.due_date,
            form.focus == FormField::DueDate,
        );

        let priority_focused = form.focus == FormField::Priority;
        let priority_text = format!("< {} >", form.priority.label());
        let priority_paragraph = Paragraph::new(priority_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Priority")
                    .border_style(Self::border_style(priority_focused)),
            )
            .alignment(Alignment::Left);
        f.render_widget(priority_paragraph, rows[3]);

        Self::render_text_field(f, rows[4], "Notes", &form.notes, form.focus == FormField::Notes);

        let instructions = "Tab: next field  Enter: save  Esc: cancel";
        let instructions_paragraph = Paragraph::new(instructions)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(instructions_paragraph, rows[5]);
    }

    fn border_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn render_text_field(
        f: &mut Frame,
        area: ratatui::layout::Rect,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        let content = if focused {
            // block cursor at the insertion point
            format!("{value}█")
        } else {
            value.to_string()
        };
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(label.to_string())
                    .border_style(Self::border_style(focused)),
            )
            .alignment(Alignment::Left);
        f.render_widget(paragraph, area);
    }
}

/// Read-only task details dialog
pub struct TaskDetailsDialog;

impl TaskDetailsDialog {
    /// Render the details view for the viewed task
    pub fn render(f: &mut Frame, app: &App) {
        let Some(task) = app.viewing_task.as_ref().and_then(|id| app.store().todo(id)) else {
            return;
        };

        let details_area = LayoutManager::centered_rect(70, 60, f.area());
        f.render_widget(Clear, details_area);

        let mut lines = vec![
            Line::from(Span::styled(
                task.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Due: {}", datetime::format_long(task.due_date))),
            Line::from(format!("Priority: {}", task.priority)),
            Line::from(""),
        ];
        if app.display.show_descriptions && !task.description.is_empty() {
            lines.push(Line::from(Span::styled(
                "Description",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )));
            lines.push(Line::from(task.description.clone()));
            lines.push(Line::from(""));
        }
        if !task.notes.is_empty() {
            lines.push(Line::from(Span::styled(
                "Notes",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )));
            lines.push(Line::from(task.notes.clone()));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(format!(
            "Status: {}",
            if task.completed { "Completed" } else { "Pending" }
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "e: edit  d: delete  Esc: close",
            Style::default().fg(Color::Yellow),
        )));

        let details_paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Task Details")
                    .title_alignment(Alignment::Center),
            )
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        f.render_widget(details_paragraph, details_area);
    }
}
