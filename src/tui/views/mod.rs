// Views module - screen-level rendering logic
//
// One screen: title, breadcrumb, tree and preview, logs, status. The tree
// and preview are re-projected from the selection on every frame.

mod modal;

use super::app::App;
use super::layout;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    app.refresh_views();

    let logs_height = layout::logs_height(f.area().height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(1),           // Breadcrumb
            Constraint::Min(6),              // Tree + preview
            Constraint::Length(logs_height), // Logs
            Constraint::Length(2),           // Status
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    components::render_breadcrumb(f, chunks[1], app);

    let (tree_area, preview_area) = layout::split_content(chunks[2]);
    components::render_nav(f, tree_area, app);
    components::render_preview(f, preview_area, app);

    if logs_height > 0 {
        components::render_logs_panel(f, chunks[3], app);
    }
    components::render_status(f, chunks[4], app);

    // Render modal overlay (on top of everything)
    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}
