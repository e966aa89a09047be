//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

/// Handle all user input events.
///
/// Dialogs take priority over normal-mode bindings, mirroring their stacking
/// order on screen.
pub fn handle_events(event: Event, app: &mut App) -> bool {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Error dialogs block everything until dismissed
            if app.error_message.is_some() {
                return handle_error_dialog(key, app);
            }

            if app.show_help {
                return handle_help_panel(key, app);
            }

            if app.creating_project {
                return handle_project_creation(key, app);
            }

            if app.task_form.is_some() {
                return handle_task_form(key, app);
            }

            if app.delete_confirmation.is_some() {
                return handle_delete_confirmation(key, app);
            }

            if app.delete_project_confirmation.is_some() {
                return handle_project_delete_confirmation(key, app);
            }

            if app.viewing_task.is_some() {
                return handle_task_details(key, app);
            }

            return handle_normal_mode(key, app);
        }
    }
    false
}

fn handle_error_dialog(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.error_message = None;
            true
        }
        _ => false,
    }
}

fn handle_help_panel(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | '?') => {
            app.show_help = false;
            true
        }
        _ => false,
    }
}

fn handle_project_creation(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            app.add_char_to_project_name(c);
            true
        }
        KeyCode::Backspace => {
            app.remove_char_from_project_name();
            true
        }
        KeyCode::Enter => {
            app.create_project();
            true
        }
        KeyCode::Esc => {
            app.cancel_create_project();
            true
        }
        _ => false,
    }
}

fn handle_task_form(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.form_next_field();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_previous_field();
            true
        }
        KeyCode::Left | KeyCode::Right => {
            app.form_cycle_priority();
            true
        }
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            app.form_add_char(c);
            true
        }
        KeyCode::Backspace => {
            app.form_backspace();
            true
        }
        KeyCode::Enter => {
            app.submit_task_form();
            true
        }
        KeyCode::Esc => {
            app.cancel_task_form();
            true
        }
        _ => false,
    }
}

fn handle_delete_confirmation(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            app.confirm_delete_task();
            true
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.cancel_delete_task();
            true
        }
        _ => false, // Ignore other keys during confirmation
    }
}

fn handle_project_delete_confirmation(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            app.confirm_delete_project();
            true
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.cancel_delete_project();
            true
        }
        _ => false,
    }
}

fn handle_task_details(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('e') => {
            app.start_edit_task();
            true
        }
        KeyCode::Char('d') => {
            app.start_delete_task();
            true
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            app.close_task_details();
            true
        }
        _ => false,
    }
}

/// Handle events in normal mode
fn handle_normal_mode(key: KeyEvent, app: &mut App) -> bool {
    // Check for Ctrl+C first
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_task();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_task();
            true
        }
        KeyCode::Char('K') => {
            app.select_project_offset(-1);
            true
        }
        KeyCode::Char('J') => {
            app.select_project_offset(1);
            true
        }
        KeyCode::Char(' ') => {
            app.toggle_selected_task();
            true
        }
        KeyCode::Enter => {
            app.open_task_details();
            true
        }
        KeyCode::Char('a') => {
            app.start_create_task();
            true
        }
        KeyCode::Char('e') => {
            app.start_edit_task();
            true
        }
        KeyCode::Char('d') => {
            app.start_delete_task();
            true
        }
        KeyCode::Char('A') => {
            app.start_create_project();
            true
        }
        KeyCode::Char('D') => {
            app.start_delete_project();
            true
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            true
        }
        _ => false,
    }
}
