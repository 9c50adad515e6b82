//! Logs panel component
//!
//! Displays the tracing events captured by the TUI log layer: unresolved
//! actions, catalog load results, clipboard failures.
//!
//! The panel doesn't own the `LogBuffer` (it is shared with the logging
//! system); it takes a snapshot each frame with [`LogsPanel::sync_entries`].

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::LogEntry;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,

    /// Selected log entry index (None = auto-follow mode)
    pub selected: Option<usize>,

    /// Snapshot of the buffer from the last sync
    entries: Vec<LogEntry>,
}

impl LogsPanel {
    /// Create a new logs panel with auto-follow enabled
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            selected: None,
            entries: Vec::new(),
        }
    }

    /// Update with current log entries (call each frame)
    pub fn sync_entries(&mut self, entries: Vec<LogEntry>, viewport_height: usize) {
        self.scroll.update_dimensions(entries.len(), viewport_height);

        // Clamp selection to valid range
        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
        self.entries = entries;
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if focused && self.selected == Some(start + i) {
                    theme.selected_style()
                } else {
                    theme.log_style(&entry.level)
                };
                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        // Show scroll/selection indicator in title
        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.border_style(focused))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, self, ScrollbarStyle::Minimal);
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index.min(self.item_count().saturating_sub(1)));
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Override: selecting starts from last entry (most recent)
    fn select_next(&mut self) {
        match self.selected {
            Some(idx) if idx < self.item_count().saturating_sub(1) => {
                self.selected = Some(idx + 1);
                self.scroll.ensure_visible(idx + 1);
            }
            None if self.item_count() > 0 => {
                self.selected = Some(self.item_count() - 1);
            }
            _ => {}
        }
    }

    /// Override: selecting starts from last entry (most recent)
    fn select_previous(&mut self) {
        match self.selected {
            Some(idx) if idx > 0 => {
                self.selected = Some(idx - 1);
                self.scroll.auto_follow = false;
                self.scroll.ensure_visible(idx - 1);
            }
            None if self.item_count() > 0 => {
                self.selected = Some(self.item_count() - 1);
            }
            _ => {}
        }
    }
}

impl Copyable for LogsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected
            .and_then(|idx| self.entries.get(idx))
            .map(format_log_entry)
    }

    fn copy_description(&self) -> String {
        "log entry".to_string()
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Home => {
                self.scroll_to_top();
                self.select_first();
                Handled::Yes
            }
            KeyCode::End => {
                self.scroll_to_bottom();
                self.select_last();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.page_up();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.page_down();
                Handled::Yes
            }
            KeyCode::Esc => {
                // Clear selection if any, return to auto-follow
                if self.selected.is_some() {
                    self.selected = None;
                    self.scroll.auto_follow = true;
                    Handled::Yes
                } else {
                    Handled::No
                }
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy  Esc:clear")
    }
}

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        short_target(&entry.target),
        entry.message
    )
}

/// Module path with our crate prefix dropped; other crates keep theirs
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(concat!(env!("CARGO_CRATE_NAME"), "::"))
        .unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;

    fn entries(n: usize) -> Vec<LogEntry> {
        (0..n)
            .map(|i| LogEntry {
                timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, i as u32).unwrap(),
                level: if i % 2 == 0 { LogLevel::Info } else { LogLevel::Warn },
                target: "standards_browser::tui".to_string(),
                message: format!("entry {i}"),
            })
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_format_log_entry() {
        let entry = &entries(2)[1];
        assert_eq!(format_log_entry(entry), "[09:30:01] WARN  tui: entry 1");
    }

    #[test]
    fn test_short_target() {
        assert_eq!(short_target("standards_browser::catalog::loader"), "catalog::loader");
        assert_eq!(short_target("standards_browser"), "standards_browser");
        assert_eq!(short_target("reqwest::connect"), "reqwest::connect");
    }

    #[test]
    fn test_first_selection_is_most_recent() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries(5), 3);
        assert!(panel.copy_text().is_none());

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected, Some(4));
        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected, Some(3));
        assert_eq!(panel.copy_text().as_deref(), Some("[09:30:03] WARN  tui: entry 3"));
    }

    #[test]
    fn test_esc_clears_selection_then_bubbles() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries(3), 10);
        panel.handle_key(key(KeyCode::Down));

        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::Yes);
        assert_eq!(panel.selected, None);
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::No);
    }

    #[test]
    fn test_selection_clamped_when_buffer_shrinks() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries(5), 3);
        panel.select(4);
        panel.sync_entries(entries(2), 3);
        assert_eq!(panel.selected, Some(1));
    }
}
