// Components module - reusable UI building blocks
//
// Shell components are rendered every frame:
// - Title bar: app name and selected grade
// - Breadcrumb bar: selected path
// - Status bar: focus hint and counts
// - Logs panel: system log entries
//
// The tree and preview panels fill the content area between them.

pub mod breadcrumb_bar;
pub mod logs_panel;
pub mod nav_panel;
pub mod preview_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use logs_panel::LogsPanel;
pub use nav_panel::NavPanel;
pub use preview_panel::PreviewPanel;
pub use toast::Toast;

// Convenience wrappers
// Usage: components::render_title(f, area, app)

use crate::tui::app::App;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the breadcrumb bar (convenience wrapper)
pub fn render_breadcrumb(f: &mut Frame, area: Rect, app: &App) {
    breadcrumb_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the navigation tree, syncing its viewport first
pub fn render_nav(f: &mut Frame, area: Rect, app: &mut App) {
    app.nav_panel
        .sync_viewport(area.height.saturating_sub(2) as usize);
    let ctx = RenderContext::new(&app.theme, app.focused.into());
    app.nav_panel.render(f, area, &ctx);
}

/// Render the preview, syncing its viewport first
pub fn render_preview(f: &mut Frame, area: Rect, app: &mut App) {
    app.preview_panel.sync_viewport(
        area.width.saturating_sub(2) as usize,
        area.height.saturating_sub(2) as usize,
    );
    let ctx = RenderContext::new(&app.theme, app.focused.into());
    app.preview_panel.render(f, area, &ctx);
}

/// Render the logs panel from a fresh buffer snapshot
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &mut App) {
    let entries = app.log_buffer.get_all();
    app.logs_panel
        .sync_entries(entries, area.height.saturating_sub(2) as usize);
    let ctx = RenderContext::new(&app.theme, app.focused.into());
    app.logs_panel.render(f, area, &ctx);
}
