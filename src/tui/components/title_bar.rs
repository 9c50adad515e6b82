// Title bar component
//
// Renders the app title with the selected grade and the help hint.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows the app name and, once a grade is selected, its name.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = match app.selection.grade_name.as_deref() {
        Some(grade) => format!(" 📚 Standards Browser ──── {}", grade),
        None => " 📚 Standards Browser".to_string(),
    };

    let title = Paragraph::new(title_text)
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
