// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Routing keys to modals, global commands, the tree and focused panels

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod views;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use scroll::FocusablePanel;
use std::io;
use std::time::Duration;
use traits::Handled;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. A failed catalog load still opens the UI with the error shown
/// in the preview.
pub async fn run_tui(
    catalog: Result<Catalog, String>,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(catalog, log_buffer, config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input and a redraw tick with tokio::select!; the tick
/// keeps toasts expiring and the logs panel current while no keys arrive.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Tree actions → Focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys (work regardless of focus)
    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if !app.handle_key_press(key) {
                return;
            }

            // Layer 3: Esc goes to the focused panel first (logs clears its
            // selection), then collapses the tree
            if key == KeyCode::Esc {
                if app.dispatch_to_focused(key_event) == Handled::No {
                    app.collapse_all();
                }
                return;
            }

            // Layer 3: Tree actions need the catalog, so App handles them
            if app.is_focused(FocusablePanel::Nav) && handle_tree_keys(app, key) {
                return;
            }

            // Layer 4: Navigation within the focused panel
            app.dispatch_to_focused(key_event);
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
    }
}

/// Keys that change the selection or expansion from the tree
fn handle_tree_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Right | KeyCode::Char('l') => app.expand_focused(),
        KeyCode::Left | KeyCode::Char('h') => app.collapse_focused(),
        _ => return false,
    }
    true
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let code = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };

    if let Some(modal) = app.modal.as_mut() {
        // Only the grade picker has anything to scroll
        modal.handle_input(code);
    } else {
        // Synthesize a key event for trait dispatch
        app.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync
    // Without this, keys get stuck in "pressed" state after modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true; // Modal absorbs other non-press events (Repeat, etc.)
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::ChooseGrade(id) => {
            app.modal = None;
            app.choose_grade(&id);
        }
    }

    true // Modal absorbed the input
}

/// Handle global keys - returns true if handled
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(modal::Modal::help());
            }
        }
        KeyCode::Char('g') => {
            if app.handle_key_press(key) {
                app.open_grade_picker();
            }
        }
        KeyCode::Char('[') | KeyCode::Char(']') => {
            if app.handle_key_press(key) {
                app.step_grade(key == KeyCode::Char(']'));
            }
        }
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.cycle_theme();
            }
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if app.handle_key_press(key) {
                if key == KeyCode::BackTab || key_event.modifiers.contains(KeyModifiers::SHIFT) {
                    app.focus_prev();
                } else {
                    app.focus_next();
                }
            }
        }
        // Copy to clipboard: y = readable, Y = selection JSON
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                if let Some((text, what)) = app.copy_current_readable() {
                    app.copy_and_notify(&text, &what);
                }
            }
        }
        KeyCode::Char('Y') => {
            if app.handle_key_press(key) {
                if let Some(json) = app.copy_selection_json() {
                    app.copy_and_notify(&json, "selection JSON");
                }
            }
        }
        _ => return false,
    }
    true
}
