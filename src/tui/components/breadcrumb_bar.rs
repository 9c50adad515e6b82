// Breadcrumb bar component
//
// One line under the title: the selected path, or a placeholder.

use crate::tui::app::App;
use crate::view::breadcrumb::{self, PLACEHOLDER, SEPARATOR};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let parts = breadcrumb::project(&app.selection);

    let line = if parts.is_empty() {
        Line::from(Span::styled(
            format!(" {PLACEHOLDER}"),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let last = parts.len() - 1;
        let mut spans = vec![Span::raw(" ")];
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(theme.muted)));
            }
            let style = if i == last {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            spans.push(Span::styled(part.as_str(), style));
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line), area);
}
