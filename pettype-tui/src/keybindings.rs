//! Keybindings for the pettype TUI.
//!
//! A global layer applies on every screen. Screen-specific bindings are
//! checked first and win on conflict.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pettype_core::Screen;

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    Select,
    /// Pick option `n` (zero-based) of the current question
    SelectOption(usize),
    Restart,
    Share,
    ToggleTheme,
}

/// Keybindings with a global layer and per-screen overrides.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub global: HashMap<KeyEvent, Action>,
    pub screen_specific: HashMap<Screen, HashMap<KeyEvent, Action>>,
}

impl KeyBindings {
    /// Resolve a key press for `screen`; screen bindings take precedence.
    pub fn resolve(&self, key: KeyEvent, screen: Screen) -> Option<Action> {
        if let Some(bindings) = self.screen_specific.get(&screen)
            && let Some(action) = bindings.get(&key)
        {
            return Some(*action);
        }
        self.global.get(&key).copied()
    }

    pub fn add_screen_binding(&mut self, screen: Screen, key: KeyEvent, action: Action) {
        self.screen_specific
            .entry(screen)
            .or_default()
            .insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        global.insert(key('j'), Action::NavigateDown);
        global.insert(key('k'), Action::NavigateUp);
        global.insert(key_code(KeyCode::Down), Action::NavigateDown);
        global.insert(key_code(KeyCode::Up), Action::NavigateUp);
        global.insert(key_code(KeyCode::Enter), Action::Select);
        global.insert(key('q'), Action::Quit);
        global.insert(key('t'), Action::ToggleTheme);

        let mut bindings = Self {
            global,
            screen_specific: HashMap::new(),
        };

        for (digit, option) in ('1'..='9').zip(0..) {
            bindings.add_screen_binding(Screen::Quiz, key(digit), Action::SelectOption(option));
        }
        bindings.add_screen_binding(Screen::Result, key('r'), Action::Restart);
        bindings.add_screen_binding(Screen::Result, key('s'), Action::Share);

        bindings
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
