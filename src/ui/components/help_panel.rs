//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, _app: &App) {
        let help_area = LayoutManager::centered_rect(70, 80, f.area());
        f.render_widget(Clear, help_area);

        let help_content = r"
NAVIGATION
----------
j/k         Navigate tasks (down/up)
J/K         Switch project (down/up)
Enter       Open task details
Esc         Cancel action or close dialogs

PROJECT MANAGEMENT
------------------
A           Create new project
D           Delete current project (with confirmation)

TASK MANAGEMENT
---------------
Space       Toggle task completion
a           Create new task
e           Edit selected task
d           Delete task (with confirmation)

TASK FORM
---------
Tab/Shift+Tab   Move between fields
Left/Right      Cycle priority
Enter           Save
Esc             Cancel

GENERAL
-------
?           Toggle help panel
q           Quit application

Press 'Esc' or '?' to close this help panel
";

        let help_paragraph = Paragraph::new(help_content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        f.render_widget(help_paragraph, help_area);
    }
}
