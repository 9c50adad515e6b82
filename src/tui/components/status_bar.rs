// Status bar component
//
// Renders the focus hint and counts at the bottom: focused panel, its keys,
// tree position, buffered logs and problems among them, theme.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(status_text(app, area.width))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

/// Status line for a given terminal width
///
/// - Wide: focus hint, position, log counts and theme
/// - Narrow: compact position and problems only
fn status_text(app: &App, width: u16) -> String {
    let bp = Breakpoint::from_width(width);
    let rows = app.nav_panel.tree().rows().len();
    let position = if rows == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", app.nav_panel.cursor() + 1, rows)
    };
    let problems = app.log_buffer.problem_count();

    let problem_info = if problems > 0 {
        format!(" │ ⚠ {}", problems)
    } else {
        String::new()
    };

    if !bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ {}{} │ ?:help",
            app.focused.name(),
            position,
            problem_info
        )
    } else {
        format!(
            " {} │ {} │ {} │ {} logs{} │ {} │ g:grade t:theme ?:help q:quit",
            app.focused.name(),
            app.focus_hint().unwrap_or(""),
            position,
            app.log_buffer.count(),
            problem_info,
            app.theme.name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::config::Config;
    use crate::logging::{LogBuffer, LogEntry, LogLevel};
    use chrono::Utc;

    fn entry(level: LogLevel) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level,
            target: "standards_browser::tui".to_string(),
            message: "x".to_string(),
        }
    }

    fn app(buffer: LogBuffer) -> App {
        App::with_config(Ok(fixtures::sample()), buffer, &Config::default())
    }

    #[test]
    fn test_narrow_shows_position_and_problems() {
        let buffer = LogBuffer::new();
        let app = app(buffer.clone());
        let rows = app.nav_panel.tree().rows().len();

        let text = status_text(&app, 80);
        assert!(text.contains(&format!(" │ {}/{} │ ?:help", app.nav_panel.cursor() + 1, rows)));
        assert!(!text.contains('⚠'));

        buffer.add(entry(LogLevel::Warn));
        assert!(status_text(&app, 80).contains(" │ ⚠ 1 │ ?:help"));
    }

    #[test]
    fn test_wide_counts_all_buffered_logs() {
        let buffer = LogBuffer::new();
        let app = app(buffer.clone());
        buffer.add(entry(LogLevel::Info));
        buffer.add(entry(LogLevel::Info));
        buffer.add(entry(LogLevel::Error));

        let text = status_text(&app, 120);
        assert!(text.contains(" │ 3 logs │ ⚠ 1 │ "));
        assert!(text.ends_with("g:grade t:theme ?:help q:quit"));
    }

    #[test]
    fn test_empty_tree_has_no_position() {
        let app = App::with_config(Err("boom".to_string()), LogBuffer::new(), &Config::default());
        assert!(status_text(&app, 80).contains(" │ 0/0 │ "));
    }
}
