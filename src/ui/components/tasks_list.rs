//! Tasks list component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::constants::EMPTY_STATE_TASKS;
use crate::model::{Priority, Task};
use crate::utils::datetime;

/// Tasks list component
pub struct TasksList;

impl TasksList {
    /// Render the tasks of the current project, sorted by due date
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let title = format!(
            "{} {}",
            app.icons.tasks_title(),
            app.selected_project().name
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);

        let tasks = app.visible_tasks();
        if tasks.is_empty() {
            let empty_list = List::new(vec![ListItem::new(EMPTY_STATE_TASKS)]).block(block);
            f.render_stateful_widget(empty_list, area, &mut app.task_list_state.clone());
            return;
        }

        let today = datetime::today();
        let items: Vec<ListItem> = tasks
            .iter()
            .map(|task| Self::create_task_item(task, today, app))
            .collect();

        let tasks_list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(tasks_list, area, &mut app.task_list_state.clone());
    }

    /// Create a single task row: checkbox, priority badge, title, due date
    fn create_task_item<'a>(
        task: &'a Task,
        today: chrono::NaiveDate,
        app: &'a App,
    ) -> ListItem<'a> {
        let is_pending_delete = app.is_pending_delete(&task.id);

        let status_icon = if is_pending_delete {
            app.icons.task_deleting()
        } else if task.completed {
            app.icons.task_completed()
        } else {
            app.icons.task_pending()
        };

        let status_style = if is_pending_delete {
            Style::default().fg(Color::Red)
        } else if task.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        let mut line_spans = Vec::new();
        line_spans.push(Span::styled(format!("{status_icon} "), status_style));

        let priority_style = match task.priority {
            Priority::High => Style::default().fg(Color::Red),
            Priority::Medium => Style::default().fg(Color::Yellow),
            Priority::Low => Style::default().fg(Color::Blue),
        };
        line_spans.push(Span::styled(app.icons.priority(task.priority), priority_style));
        line_spans.push(Span::raw(" "));

        let content_style = if is_pending_delete {
            Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT)
        } else if task.completed {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(task.title.clone(), content_style));

        // Due date column, with overdue marker at day granularity
        let overdue = datetime::is_overdue(task.due_date, today) && !task.completed;
        let date_style = if overdue {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        line_spans.push(Span::raw("  "));
        line_spans.push(Span::styled(
            datetime::format_with(task.due_date, &app.display.date_format),
            date_style,
        ));
        if overdue {
            line_spans.push(Span::styled(
                format!(" {} overdue", app.icons.overdue()),
                date_style,
            ));
        }

        // selection highlight comes from the list state alone
        ListItem::new(Line::from(line_spans))
    }
}
