// Input handling with per-key behaviors
//
// Tree movement keys repeat while held; keys that change the selection,
// open a modal or copy trigger once per press, so a held Enter does not
// toggle a domain open and shut at terminal repeat speed.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How a key behaves while held down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire on press; a held key fires again only after `ACTION_DEBOUNCE`
    Once,

    /// Fire on press, then every `interval` once `initial_delay` has passed
    Repeat {
        initial_delay: Duration,
        interval: Duration,
    },
}

/// Arrows and hjkl
const NAVIGATION: KeyBehavior = KeyBehavior::Repeat {
    initial_delay: Duration::from_millis(500),
    interval: Duration::from_millis(50),
};

/// Page and jump keys
const FAST_NAVIGATION: KeyBehavior = KeyBehavior::Repeat {
    initial_delay: Duration::from_millis(300),
    interval: Duration::from_millis(30),
};

/// Debounce for action keys on terminals that never send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Behavior for a key; anything not listed fires once per press
pub fn behavior_for(key: KeyCode) -> KeyBehavior {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => NAVIGATION,
        KeyCode::Char('j' | 'k' | 'h' | 'l') => NAVIGATION,
        KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home | KeyCode::End => FAST_NAVIGATION,
        _ => KeyBehavior::Once,
    }
}

/// A key currently held down
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Tracks held keys and decides which presses fire
#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior_for(key) {
            KeyBehavior::Once => now.duration_since(held.last_fired) >= ACTION_DEBOUNCE,
            KeyBehavior::Repeat {
                initial_delay,
                interval,
            } => {
                now.duration_since(held.since) >= initial_delay
                    && now.duration_since(held.last_fired) >= interval
            }
        };
        if fire {
            held.last_fired = now;
        }
        fire
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}
