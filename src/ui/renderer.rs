//! Main UI rendering and coordination

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::App;
use super::components::{
    dialogs::{
        DeleteConfirmationDialog, ErrorDialog, ProjectCreationDialog,
        ProjectDeleteConfirmationDialog, TaskDetailsDialog, TaskFormDialog,
    },
    HelpPanel, ProjectsList, StatusBar, TasksList,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::storage::Storage;

/// Run the main TUI application
pub fn run_app(config: &Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, Storage::new());

    let res = run_ui(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop.
///
/// Single-threaded and event-driven: each key handler runs to completion
/// before the next event is read. The poll timeout doubles as the tick that
/// commits pending deletions past their deadline.
fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app);
                }
                Event::Resize(_, _) => {
                    // Next draw picks up the new size
                }
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let chunks = LayoutManager::main_layout(f.area());
    let top_chunks = LayoutManager::top_pane_layout(chunks[0]);

    ProjectsList::render(f, top_chunks[0], app);
    TasksList::render(f, top_chunks[1], app);
    StatusBar::render(f, chunks[1], app);

    // Overlays, in stacking order
    if app.viewing_task.is_some() {
        TaskDetailsDialog::render(f, app);
    }

    if app.creating_project {
        ProjectCreationDialog::render(f, app);
    }

    if app.task_form.is_some() {
        TaskFormDialog::render(f, app);
    }

    if app.delete_confirmation.is_some() {
        DeleteConfirmationDialog::render(f, app);
    }

    if app.delete_project_confirmation.is_some() {
        ProjectDeleteConfirmationDialog::render(f, app);
    }

    if app.error_message.is_some() {
        ErrorDialog::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
