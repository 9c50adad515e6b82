// TUI application state
//
// App owns the catalog, the current Selection and the panels. Every
// selection change goes through `dispatch`, which applies a transition and
// re-projects the tree and preview; an unresolved action is logged and the
// current state kept.

use super::clipboard;
use super::components::{LogsPanel, NavPanel, PreviewPanel, Toast};
use super::input::InputHandler;
use super::modal::{GradeOption, Modal};
use super::scroll::FocusablePanel;
use super::theme::{Theme, ThemeKind};
use super::traits::{Copyable, Handled, Interactive, Selectable};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::selection::{apply, Action, NodeRef, Selection};
use crate::view::{nav, preview, NavTree, Preview};
use crossterm::event::{KeyCode, KeyEvent};

/// Main application state for the TUI
pub struct App {
    /// Loaded catalog (None when the load failed)
    pub catalog: Option<Catalog>,

    /// Load failure shown in the preview
    pub load_error: Option<String>,

    pub selection: Selection,

    /// Column budget for domain and cluster labels
    pub label_width: usize,

    pub nav_panel: NavPanel,
    pub preview_panel: PreviewPanel,
    pub logs_panel: LogsPanel,

    /// Which panel receives navigation keys
    pub focused: FocusablePanel,

    /// Active modal overlay (captures all input when present)
    pub modal: Option<Modal>,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create app state from a load result and config
    ///
    /// A loaded catalog gets the configured startup selection; a failed load
    /// leaves the tree empty and shows the error in the preview.
    pub fn with_config(
        catalog: Result<Catalog, String>,
        log_buffer: LogBuffer,
        config: &Config,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            let fallback = ThemeKind::default();
            tracing::warn!("Unknown theme {:?}, using {}", config.theme, fallback.name());
            fallback
        });

        let (catalog, load_error) = match catalog {
            Ok(catalog) => (Some(catalog), None),
            Err(e) => (None, Some(e)),
        };

        let mut app = Self {
            catalog,
            load_error,
            selection: Selection::default(),
            label_width: config.label_width,
            nav_panel: NavPanel::new(),
            preview_panel: PreviewPanel::new(),
            logs_panel: LogsPanel::new(),
            focused: FocusablePanel::default(),
            modal: None,
            toast: None,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            input_handler: InputHandler::default(),
            should_quit: false,
        };

        if app.catalog.is_some() {
            app.startup_selection(&config.initial_grade, config.initial_domain.as_deref());
        }
        app.refresh_views();
        app
    }

    /// Select the initial grade, then open the initial domain
    ///
    /// Each step that fails is logged and the state stays at the last
    /// step that succeeded.
    pub fn startup_selection(&mut self, grade: &str, domain: Option<&str>) {
        if !self.dispatch(Action::SetGrade(grade.to_string())) {
            return;
        }
        if let Some(domain) = domain {
            if self.dispatch(Action::ToggleDomain(domain.to_string())) {
                self.nav_panel
                    .focus_node(&NodeRef::Domain(domain.to_string()));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────

    /// Apply an action; returns whether the state was replaced
    pub fn dispatch(&mut self, action: Action) -> bool {
        let Some(catalog) = &self.catalog else {
            tracing::debug!(?action, "Ignoring action: no catalog loaded");
            return false;
        };

        match apply(&self.selection, catalog, &action) {
            Ok(next) => {
                tracing::debug!(?action, "Applied");
                self.selection = next;
                self.refresh_views();
                true
            }
            Err(e) => {
                tracing::warn!("Ignoring unresolved action: {}", e);
                false
            }
        }
    }

    /// Re-derive the tree and preview from the current selection
    pub fn refresh_views(&mut self) {
        match &self.catalog {
            Some(catalog) => {
                self.nav_panel.set_tree(nav::project(
                    &self.selection,
                    catalog,
                    self.label_width,
                ));
                self.preview_panel
                    .set_preview(preview::project(&self.selection, catalog));
            }
            None => {
                let message = self
                    .load_error
                    .clone()
                    .unwrap_or_else(|| "No catalog loaded".to_string());
                self.nav_panel.set_tree(NavTree::NoGrade);
                self.preview_panel.set_preview(Preview::error(message));
            }
        }
    }

    /// Enter/Space on the focused row
    pub fn activate_focused(&mut self) {
        if let Some(node) = self.nav_panel.focused_node().cloned() {
            self.dispatch(Action::activate(&node));
        }
    }

    /// Right arrow: show the focused row's children
    pub fn expand_focused(&mut self) {
        if let Some(node) = self.nav_panel.focused_node().cloned() {
            self.dispatch(Action::Expand(node));
        }
    }

    /// Left arrow: collapse the focused row, or move to its parent
    pub fn collapse_focused(&mut self) {
        let Some(node) = self.nav_panel.focused_node().cloned() else {
            return;
        };
        if self.selection.is_expanded(&node) {
            self.dispatch(Action::Collapse(node));
        } else {
            self.nav_panel.focus_parent();
        }
    }

    /// Esc: close every open node, keep the selection
    pub fn collapse_all(&mut self) {
        if self.selection.has_expansion() {
            self.dispatch(Action::CollapseAll);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Grades
    // ─────────────────────────────────────────────────────────────

    fn grade_options(&self) -> Vec<GradeOption> {
        self.catalog
            .iter()
            .flat_map(|c| c.grades())
            .map(|g| GradeOption {
                id: g.id.clone(),
                name: g.name.clone(),
            })
            .collect()
    }

    pub fn open_grade_picker(&mut self) {
        let options = self.grade_options();
        if options.is_empty() {
            self.show_toast("No grades loaded");
            return;
        }
        self.modal = Some(Modal::grade_picker(
            options,
            self.selection.grade.as_deref(),
        ));
    }

    /// Switch grade; the tree cursor goes back to the first row
    pub fn choose_grade(&mut self, id: &str) {
        if self.dispatch(Action::SetGrade(id.to_string())) {
            self.nav_panel.select_first();
        }
    }

    /// `[` / `]`: previous or next grade in catalog order, stopping at the ends
    pub fn step_grade(&mut self, forward: bool) {
        let options = self.grade_options();
        let current = self
            .selection
            .grade
            .as_deref()
            .and_then(|id| options.iter().position(|o| o.id == id));

        let target = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(options.len().saturating_sub(1)),
            (Some(i), false) => i.saturating_sub(1),
        };

        if let Some(option) = options.get(target) {
            if current != Some(target) {
                self.choose_grade(&option.id);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Focus, theme, clipboard
    // ─────────────────────────────────────────────────────────────

    pub fn is_focused(&self, panel: FocusablePanel) -> bool {
        self.focused == panel
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Key hint of the focused panel
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            FocusablePanel::Nav => self.nav_panel.focus_hint(),
            FocusablePanel::Preview => self.preview_panel.focus_hint(),
            FocusablePanel::Logs => self.logs_panel.focus_hint(),
        }
    }

    /// Route a key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            FocusablePanel::Nav => self.nav_panel.handle_key(key),
            FocusablePanel::Preview => self.preview_panel.handle_key(key),
            FocusablePanel::Logs => self.logs_panel.handle_key(key),
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.show_toast(format!("Theme: {}", self.theme.name));
    }

    /// Text for `y`: the selected log entry when the logs panel has one,
    /// otherwise the preview
    pub fn copy_current_readable(&self) -> Option<(String, String)> {
        if self.focused == FocusablePanel::Logs {
            if let Some(text) = self.logs_panel.copy_text() {
                return Some((text, self.logs_panel.copy_description()));
            }
        }
        self.preview_panel
            .copy_text()
            .map(|text| (text, self.preview_panel.copy_description()))
    }

    /// Text for `Y`: the selection as JSON
    pub fn copy_selection_json(&self) -> Option<String> {
        match serde_json::to_string_pretty(&self.selection) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!("Failed to serialize selection: {}", e);
                None
            }
        }
    }

    /// Copy to the clipboard and report through a toast
    pub fn copy_and_notify(&mut self, text: &str, what: &str) {
        let message = clipboard::copy_with_feedback(text, what);
        self.show_toast(message);
    }

    // ─────────────────────────────────────────────────────────────
    // Input and toasts
    // ─────────────────────────────────────────────────────────────

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}
