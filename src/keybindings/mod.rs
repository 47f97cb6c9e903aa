//! Customizable keybindings for coursebook
//!
//! Every [`KeybindingMode`] has its own dispatcher mapping keys to an
//! [`Action`]. Defaults live in `defaults.rs`; the config file can add or
//! replace bindings per mode using keybinds-rs key syntax:
//!
//! ```toml
//! [keybindings.Browser]
//! "x" = "Retry"
//! "Ctrl+n" = "Next"
//!
//! [keybindings.Page]
//! "Escape" = "GoBack"
//! ```

mod action;
mod defaults;

pub use action::Action;

use crossterm::event::KeyEvent;
use indexmap::IndexMap;
use keybinds::{Key, KeyInput, Keybinds, Mods};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use thiserror::Error;

/// Application modes that have their own keybinding sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum KeybindingMode {
    /// Course browser (the Learn page)
    Browser,
    /// Any other page
    Page,
    /// Help popup is shown
    Help,
    /// Go-to-path prompt
    Prompt,
    /// Lesson filter input
    Filter,
}

impl KeybindingMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            KeybindingMode::Browser => "Courses",
            KeybindingMode::Page => "Page",
            KeybindingMode::Help => "Help",
            KeybindingMode::Prompt => "Go to",
            KeybindingMode::Filter => "Filter",
        }
    }
}

/// A key string in the config file could not be parsed.
#[derive(Debug, Error)]
#[error("invalid key `{key}` in [keybindings.{mode:?}]: {reason}")]
pub struct KeybindingError {
    pub mode: KeybindingMode,
    pub key: String,
    pub reason: String,
}

/// Per-mode key dispatchers.
#[derive(Debug)]
pub struct Keybindings {
    modes: HashMap<KeybindingMode, Keybinds<Action>>,
}

impl Default for Keybindings {
    fn default() -> Self {
        defaults::default_keybindings()
    }
}

impl Keybindings {
    /// No bindings in any mode.
    pub fn empty() -> Self {
        Self {
            modes: HashMap::new(),
        }
    }

    /// Action bound to `event` in `mode`, if any.
    pub fn dispatch(&mut self, mode: KeybindingMode, event: KeyEvent) -> Option<Action> {
        self.modes
            .get_mut(&mode)
            .and_then(|kb| kb.dispatch(event).copied())
    }

    pub fn has_mode(&self, mode: KeybindingMode) -> bool {
        self.modes
            .get(&mode)
            .is_some_and(|kb| !kb.as_slice().is_empty())
    }

    pub fn bind(
        &mut self,
        mode: KeybindingMode,
        key: &str,
        action: Action,
    ) -> Result<(), KeybindingError> {
        self.modes
            .entry(mode)
            .or_default()
            .bind(key, action)
            .map_err(|e| KeybindingError {
                mode,
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    /// Display form of every key bound to `action` in `mode`.
    pub fn keys_for_action(&self, mode: KeybindingMode, action: Action) -> Vec<String> {
        let Some(kb) = self.modes.get(&mode) else {
            return Vec::new();
        };
        kb.as_slice()
            .iter()
            .filter(|bind| bind.action == action)
            .map(|bind| display_sequence(bind.seq.as_slice()))
            .collect()
    }

    /// Actions of `mode` with their keys, grouped by category. Within a
    /// category actions keep the order they were first bound in.
    pub fn help_entries(&self, mode: KeybindingMode) -> Vec<(Action, Vec<String>)> {
        let mut by_action: IndexMap<Action, Vec<String>> = IndexMap::new();
        if let Some(kb) = self.modes.get(&mode) {
            for bind in kb.as_slice() {
                by_action
                    .entry(bind.action)
                    .or_default()
                    .push(display_sequence(bind.seq.as_slice()));
            }
        }

        let mut entries: Vec<_> = by_action.into_iter().collect();
        entries.sort_by_key(|(action, _)| action.category());
        entries
    }

    /// Apply user overrides on top of the current bindings. Every valid key is
    /// bound; invalid ones are returned.
    pub fn merge(&mut self, overrides: &KeybindingsConfig) -> Vec<KeybindingError> {
        let mut errors = Vec::new();
        for (mode, keys) in &overrides.0 {
            for (key, action) in keys {
                if let Err(e) = self.bind(*mode, key, *action) {
                    errors.push(e);
                }
            }
        }
        errors
    }
}

fn display_sequence(seq: &[KeyInput]) -> String {
    seq.iter().map(display_input).collect::<Vec<_>>().join(" ")
}

/// `Ctrl+c`, `Shift+Tab`, `j`
fn display_input(input: &KeyInput) -> String {
    let mods = input.mods();
    let mut out = String::new();
    for (flag, name) in [
        (Mods::CTRL, "Ctrl+"),
        (Mods::ALT, "Alt+"),
        (Mods::SHIFT, "Shift+"),
    ] {
        if mods.contains(flag) {
            out.push_str(name);
        }
    }
    out.push_str(&key_name(input.key()));
    out
}

fn key_name(key: Key) -> Cow<'static, str> {
    let name = match key {
        Key::Char(' ') => "Space",
        Key::Char(c) => return Cow::Owned(c.to_string()),
        Key::Enter => "Enter",
        Key::Esc => "Esc",
        Key::Tab => "Tab",
        Key::Backspace => "Backspace",
        Key::Delete => "Delete",
        Key::Up => "↑",
        Key::Down => "↓",
        Key::Left => "←",
        Key::Right => "→",
        Key::PageUp => "PageUp",
        Key::PageDown => "PageDown",
        Key::Home => "Home",
        Key::End => "End",
        other => return Cow::Owned(format!("{:?}", other)),
    };
    Cow::Borrowed(name)
}

/// Keybinding overrides as written in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeybindingsConfig(pub HashMap<KeybindingMode, HashMap<String, Action>>);

impl KeybindingsConfig {
    /// Defaults with these overrides applied. Invalid keys are logged and
    /// skipped.
    pub fn to_keybindings(&self) -> Keybindings {
        let mut keybindings = Keybindings::default();
        for error in keybindings.merge(self) {
            tracing::warn!("ignoring keybinding override: {}", error);
        }
        keybindings
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dispatch_depends_on_mode() {
        let mut kb = Keybindings::default();
        assert_eq!(
            kb.dispatch(KeybindingMode::Browser, press(KeyCode::Char('j'))),
            Some(Action::Next)
        );
        assert_eq!(
            kb.dispatch(KeybindingMode::Page, press(KeyCode::Char('j'))),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            kb.dispatch(KeybindingMode::Prompt, press(KeyCode::Char('j'))),
            None
        );
    }

    #[test]
    fn test_keys_for_action() {
        let kb = Keybindings::default();
        let keys = kb.keys_for_action(KeybindingMode::Browser, Action::Next);
        assert!(keys.contains(&"j".to_string()));
        assert!(keys.contains(&"↓".to_string()));

        let quit = kb.keys_for_action(KeybindingMode::Browser, Action::Quit);
        assert!(quit.contains(&"Ctrl+c".to_string()));
    }

    #[test]
    fn test_user_overrides_merge_over_defaults() {
        let config: KeybindingsConfig = toml::from_str(
            r#"
            [Browser]
            "x" = "Retry"
            "#,
        )
        .unwrap();
        let mut kb = config.to_keybindings();

        assert_eq!(
            kb.dispatch(KeybindingMode::Browser, press(KeyCode::Char('x'))),
            Some(Action::Retry)
        );
        // Defaults still present
        assert_eq!(
            kb.dispatch(KeybindingMode::Browser, press(KeyCode::Char('r'))),
            Some(Action::Retry)
        );
    }

    #[test]
    fn test_invalid_override_is_skipped() {
        let mut config = KeybindingsConfig::default();
        config.0.insert(
            KeybindingMode::Page,
            HashMap::from([
                ("Foo+x".to_string(), Action::Quit),
                ("z".to_string(), Action::GoBack),
            ]),
        );
        let mut kb = Keybindings::default();
        let errors = kb.merge(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "Foo+x");
        assert_eq!(
            kb.dispatch(KeybindingMode::Page, press(KeyCode::Char('z'))),
            Some(Action::GoBack)
        );
    }

    #[test]
    fn test_help_entries_grouped_by_category() {
        let kb = Keybindings::default();
        let entries = kb.help_entries(KeybindingMode::Browser);
        assert!(!entries.is_empty());
        let categories: Vec<_> = entries.iter().map(|(a, _)| a.category()).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }
}
