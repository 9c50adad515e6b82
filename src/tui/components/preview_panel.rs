//! Preview panel
//!
//! Renders the projected [`Preview`] as wrapped, styled lines. Wrapping is
//! done here rather than by the Paragraph widget so the scroll state knows
//! the real line count.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
    ScrollableInteractive,
};
use crate::view::{Preview, PreviewKind};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// How a laid-out line is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Title,
    Code,
    Body,
    Heading,
    Item,
    ItemText,
    Blank,
}

pub struct PreviewPanel {
    scroll: ScrollState,
    preview: Preview,
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            preview: Preview::welcome(),
        }
    }

    /// Show a new projection; a different preview starts at the top
    pub fn set_preview(&mut self, preview: Preview) {
        if preview != self.preview {
            self.preview = preview;
            self.scroll.scroll_to_top();
        }
    }

    #[cfg(test)]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Sync dimensions for the inner (border-less) area
    pub fn sync_viewport(&mut self, width: usize, height: usize) {
        let total = layout_lines(&self.preview, width).len();
        self.scroll.update_dimensions(total, height);
    }

    fn style_for(&self, kind: LineKind, theme: &Theme) -> Style {
        match kind {
            LineKind::Title if self.preview.kind == PreviewKind::Error => Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
            LineKind::Title => theme.title_style(),
            LineKind::Code => Style::default().fg(theme.code),
            LineKind::Heading => theme.heading_style(),
            LineKind::Item => Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
            LineKind::ItemText => Style::default().fg(theme.muted),
            LineKind::Body | LineKind::Blank => Style::default().fg(theme.foreground),
        }
    }
}

impl Default for PreviewPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten a preview into wrapped lines for the given width
fn layout_lines(preview: &Preview, width: usize) -> Vec<(LineKind, String)> {
    let mut lines = Vec::new();
    let mut push = |kind: LineKind, text: &str, indent: usize| {
        for line in wrap(text, width.saturating_sub(indent)) {
            lines.push((kind, format!("{}{}", " ".repeat(indent), line)));
        }
    };

    push(LineKind::Title, &preview.title, 0);
    if let Some(code) = &preview.code {
        push(LineKind::Code, code, 0);
    }
    for paragraph in &preview.body {
        push(LineKind::Blank, "", 0);
        push(LineKind::Body, paragraph, 0);
    }
    for section in &preview.sections {
        push(LineKind::Blank, "", 0);
        push(LineKind::Heading, &section.heading, 0);
        for item in &section.items {
            let line = item.line();
            if !line.is_empty() {
                push(LineKind::Item, &format!("• {line}"), 1);
            }
            if let Some(text) = &item.text {
                push(LineKind::ItemText, text, 3);
            }
        }
    }
    lines
}

/// Greedy word wrap by display width
///
/// Words wider than the line are split; an empty input is one empty line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for ch in word.chars() {
                let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for PreviewPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Preview
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let inner_width = area.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = layout_lines(&self.preview, inner_width)
            .into_iter()
            .map(|(kind, text)| Line::styled(text, self.style_for(kind, theme)))
            .collect();

        let title = if self.scroll.needs_scrollbar() {
            format!(
                " Preview ({}/{}) ",
                self.scroll.offset() + 1,
                self.scroll.total()
            )
        } else {
            " Preview ".to_string()
        };

        let paragraph = Paragraph::new(lines)
            .scroll((self.scroll.offset() as u16, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(theme.border_style(ctx.is_focused(self.id())))
                    .title(title),
            );

        f.render_widget(paragraph, area);
        render_scrollbar(f, area, self, ScrollbarStyle::Arrows);
    }
}

impl Scrollable for PreviewPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Copyable for PreviewPanel {
    fn copy_text(&self) -> Option<String> {
        Some(self.preview.to_plain_text())
    }

    fn copy_description(&self) -> String {
        "preview".to_string()
    }
}

impl Interactive for PreviewPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  PgUp/PgDn:page  y:copy")
    }
}
