// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Grade picker: list of grades with a cursor

use crate::tui::app::App;
use crate::tui::modal::{GradeOption, Modal};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::GradePicker { options, cursor } => render_grade_picker(f, app, options, *cursor),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.code);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Tree", header_style)),
        kb("↑/↓, j/k", "Move cursor"),
        kb("Enter/Space", "Toggle row / select"),
        kb("→, l", "Expand row"),
        kb("←, h", "Collapse / go to parent"),
        kb("Esc", "Collapse everything"),
        kb("Home/End", "First / last row"),
        Line::raw(""),
        Line::from(Span::styled("  Grades", header_style)),
        kb("g", "Pick a grade"),
        kb("[ / ]", "Previous / next grade"),
        Line::raw(""),
        Line::from(Span::styled("  Panels", header_style)),
        kb("Tab", "Cycle panel focus"),
        kb("Shift+Tab", "Focus previous panel"),
        kb("PgUp/PgDn", "Scroll focused panel"),
        Line::raw(""),
        Line::from(Span::styled("  Clipboard", header_style)),
        kb("y", "Copy preview (or log entry)"),
        kb("Y", "Copy selection as JSON"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Cycle theme"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.name, key_style),
        ]),
    ]);

    let width = 48;
    let height = content.height() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the grade picker overlay
fn render_grade_picker(f: &mut Frame, app: &App, options: &[GradeOption], cursor: usize) {
    let theme = &app.theme;
    let current = app.selection.grade.as_deref();

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if Some(option.id.as_str()) == current {
                "●"
            } else {
                " "
            };
            let style = if i == cursor {
                theme.selected_style()
            } else {
                Style::default().fg(theme.foreground)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {marker} "), Style::default().fg(theme.highlight)),
                Span::styled(format!("{:<4}", option.id), Style::default().fg(theme.code)),
                Span::styled(option.name.as_str(), style),
            ]))
        })
        .collect();

    let longest = options
        .iter()
        .map(|o| unicode_width::UnicodeWidthStr::width(o.name.as_str()))
        .max()
        .unwrap_or(0) as u16;
    let width = (longest + 12).max(30);
    let height = options.len() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let list = List::new(items)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Grade ")
                .title_bottom(Line::from(" Enter: select  Esc: close ").centered()),
        );

    // Stateful render keeps the cursor row in view on short terminals
    let mut state = ListState::default().with_selected(Some(cursor));
    f.render_stateful_widget(list, area, &mut state);
}
