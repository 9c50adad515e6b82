//! Navigation tree panel
//!
//! Shows the projected rows for the selected grade with a keyboard cursor.
//! The panel owns only the cursor and scroll position; the rows are
//! re-projected from the selection on every frame and handed in with
//! [`NavPanel::set_tree`].

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::selection::NodeRef;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crate::view::{NavRow, NavTree};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub struct NavPanel {
    scroll: ScrollState,
    tree: NavTree,
    cursor: usize,
}

impl NavPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            tree: NavTree::NoGrade,
            cursor: 0,
        }
    }

    /// Replace the rows, keeping the cursor on the same node when it is
    /// still visible
    pub fn set_tree(&mut self, tree: NavTree) {
        let focused = self.focused_node().cloned();
        self.tree = tree;

        match focused.and_then(|node| self.tree.position(&node)) {
            Some(index) => self.cursor = index,
            None => self.cursor = self.cursor.min(self.item_count().saturating_sub(1)),
        }
        self.scroll.ensure_visible(self.cursor);
    }

    /// Sync viewport height (call each frame before rendering)
    pub fn sync_viewport(&mut self, viewport_height: usize) {
        let total = self.item_count();
        self.scroll.update_dimensions(total, viewport_height);
        self.scroll.ensure_visible(self.cursor);
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Node under the cursor
    pub fn focused_node(&self) -> Option<&NodeRef> {
        self.tree.rows().get(self.cursor).map(|row| &row.node)
    }

    /// Move the cursor onto `node` if it has a visible row
    pub fn focus_node(&mut self, node: &NodeRef) -> bool {
        match self.tree.position(node) {
            Some(index) => {
                self.select(index);
                true
            }
            None => false,
        }
    }

    /// Move the cursor to the row that owns the current one
    pub fn focus_parent(&mut self) -> bool {
        match self.tree.parent_of(self.cursor) {
            Some(parent) => {
                self.select(parent);
                true
            }
            None => false,
        }
    }

    fn row_line<'a>(&self, index: usize, row: &'a NavRow, ctx: &RenderContext) -> ListItem<'a> {
        let theme = ctx.theme;
        let indent = "  ".repeat(row.depth);

        let mut style = if row.selected {
            theme.selected_style()
        } else {
            Style::default().fg(theme.foreground)
        };
        if index == self.cursor && ctx.is_focused(self.id()) {
            style = style.bg(theme.cursor).add_modifier(Modifier::BOLD);
            if row.selected {
                style = style.bg(theme.selection).add_modifier(Modifier::UNDERLINED);
            }
        }

        let line = Line::from(vec![
            Span::raw(indent),
            Span::styled(row.expander.icon(), Style::default().fg(theme.expander)),
            Span::raw(" "),
            Span::styled(row.label.as_str(), style),
        ]);
        ListItem::new(line)
    }
}

impl Default for NavPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for NavPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Nav
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(ctx.is_focused(self.id())))
            .title(" Standards ");

        if let Some(message) = self.tree.message() {
            let placeholder = Paragraph::new(message)
                .style(
                    Style::default()
                        .fg(theme.muted)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = self.tree.rows()[start..end]
            .iter()
            .enumerate()
            .map(|(i, row)| self.row_line(start + i, row, ctx))
            .collect();

        f.render_widget(List::new(items).block(block), area);
        render_scrollbar(f, area, self, ScrollbarStyle::Minimal);
    }
}

impl Scrollable for NavPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for NavPanel {
    fn selected_index(&self) -> Option<usize> {
        (self.item_count() > 0).then_some(self.cursor)
    }

    fn select(&mut self, index: usize) {
        self.cursor = index.min(self.item_count().saturating_sub(1));
        self.scroll.ensure_visible(self.cursor);
    }

    fn item_count(&self) -> usize {
        self.tree.rows().len()
    }
}

impl Interactive for NavPanel {
    /// Cursor movement only; keys that change the selection need the
    /// catalog and bubble up to the App
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
                self.select_first();
                Handled::Yes
            }
            KeyCode::End => {
                self.select_last();
                Handled::Yes
            }
            KeyCode::PageUp => {
                let page = self.scroll.viewport().max(1);
                self.select(self.cursor.saturating_sub(page));
                Handled::Yes
            }
            KeyCode::PageDown => {
                let page = self.scroll.viewport().max(1);
                self.select(self.cursor + page);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:move  Enter:toggle  →:expand  ←:collapse  Esc:collapse all")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fixtures, ClusterId};
    use crate::selection::{apply, Action, Selection};
    use crate::view::{labels::DEFAULT_LABEL_WIDTH, nav};
    use crossterm::event::KeyModifiers;

    fn tree_for(actions: &[Action]) -> NavTree {
        let catalog = fixtures::sample();
        let mut state = Selection::default();
        for action in actions {
            state = apply(&state, &catalog, action).unwrap();
        }
        nav::project(&state, &catalog, DEFAULT_LABEL_WIDTH)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_rows() {
        let mut panel = NavPanel::new();
        panel.set_tree(tree_for(&[Action::SetGrade("K".into())]));
        assert_eq!(panel.item_count(), 2);

        assert_eq!(panel.handle_key(key(KeyCode::Down)), Handled::Yes);
        assert_eq!(panel.cursor(), 1);
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.cursor(), 1);
        panel.handle_key(key(KeyCode::Char('k')));
        assert_eq!(panel.cursor(), 0);
        assert_eq!(panel.handle_key(key(KeyCode::Enter)), Handled::No);
    }

    #[test]
    fn test_cursor_follows_node_across_reprojection() {
        let mut panel = NavPanel::new();
        panel.set_tree(tree_for(&[Action::SetGrade("K".into())]));
        panel.select(1);
        assert_eq!(panel.focused_node(), Some(&NodeRef::Domain("OA".into())));

        // Opening CC inserts its clusters above OA
        panel.set_tree(tree_for(&[
            Action::SetGrade("K".into()),
            Action::ToggleDomain("CC".into()),
        ]));
        assert_eq!(panel.cursor(), 3);
        assert_eq!(panel.focused_node(), Some(&NodeRef::Domain("OA".into())));
    }

    #[test]
    fn test_cursor_clamps_when_node_disappears() {
        let mut panel = NavPanel::new();
        panel.set_tree(tree_for(&[
            Action::SetGrade("K".into()),
            Action::ToggleDomain("CC".into()),
            Action::ToggleCluster(ClusterId::new("CC", "B")),
        ]));
        panel.select_last();
        assert_eq!(panel.focused_node(), Some(&NodeRef::Domain("OA".into())));
        panel.select(3);
        assert_eq!(panel.focused_node(), Some(&NodeRef::Standard("K.CC.4".into())));

        panel.set_tree(tree_for(&[Action::SetGrade("K".into())]));
        assert_eq!(panel.cursor(), 1);
    }

    #[test]
    fn test_focus_parent() {
        let mut panel = NavPanel::new();
        panel.set_tree(tree_for(&[
            Action::SetGrade("K".into()),
            Action::ToggleDomain("CC".into()),
        ]));
        assert!(panel.focus_node(&NodeRef::Cluster(ClusterId::new("CC", "B"))));
        assert!(panel.focus_parent());
        assert_eq!(panel.focused_node(), Some(&NodeRef::Domain("CC".into())));
        assert!(!panel.focus_parent());
    }

    #[test]
    fn test_no_grade_has_no_rows() {
        let mut panel = NavPanel::new();
        panel.set_tree(NavTree::NoGrade);
        assert_eq!(panel.selected_index(), None);
        assert_eq!(panel.focused_node(), None);
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.cursor(), 0);
    }
}
