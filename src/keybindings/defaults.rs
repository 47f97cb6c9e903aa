//! Default keybindings for coursebook
//!
//! This module defines the default keybindings that are used when no
//! user configuration is provided. Uses keybinds-rs key string syntax.

use super::{Action, KeybindingMode, Keybindings};

/// Create the default keybindings configuration
pub fn default_keybindings() -> Keybindings {
    let mut kb = Keybindings::empty();

    add_browser_mode(&mut kb);
    add_page_mode(&mut kb);
    add_help_mode(&mut kb);
    add_prompt_mode(&mut kb);
    add_filter_mode(&mut kb);

    kb
}

/// Bind a key, panicking on invalid key syntax (only used for built-in defaults)
fn bind(kb: &mut Keybindings, mode: KeybindingMode, key: &str, action: Action) {
    kb.bind(mode, key, action)
        .unwrap_or_else(|e| panic!("Invalid default keybinding '{}': {}", key, e));
}

/// Bindings shared by every page: page jumps, history, prompt, theme, help, quit.
fn add_global(kb: &mut Keybindings, mode: KeybindingMode) {
    use Action::*;

    bind(kb, mode, "1", GoToHome);
    bind(kb, mode, "2", GoToLearn);
    bind(kb, mode, "3", GoToAuth);
    bind(kb, mode, "4", GoToFaq);
    bind(kb, mode, "5", GoToContact);
    bind(kb, mode, "6", GoToAbout);
    bind(kb, mode, "b", GoBack);
    bind(kb, mode, "Backspace", GoBack);
    bind(kb, mode, "f", GoForward);

    bind(kb, mode, ":", OpenPrompt);
    bind(kb, mode, "t", CycleTheme);
    bind(kb, mode, "?", ToggleHelp);

    bind(kb, mode, "q", Quit);
    bind(kb, mode, "Ctrl+c", Quit);
}

fn add_browser_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Browser;

    // Navigation
    bind(kb, Browser, "j", Next);
    bind(kb, Browser, "Down", Next);
    bind(kb, Browser, "k", Previous);
    bind(kb, Browser, "Up", Previous);
    bind(kb, Browser, "g", First);
    bind(kb, Browser, "G", Last);
    bind(kb, Browser, "d", PageDown);
    bind(kb, Browser, "PageDown", PageDown);
    bind(kb, Browser, "u", PageUp);
    bind(kb, Browser, "PageUp", PageUp);

    // Panes
    bind(kb, Browser, "Tab", FocusNext);
    bind(kb, Browser, "l", FocusNext);
    bind(kb, Browser, "Right", FocusNext);
    bind(kb, Browser, "Shift+Tab", FocusPrevious);
    bind(kb, Browser, "h", FocusPrevious);
    bind(kb, Browser, "Left", FocusPrevious);
    bind(kb, Browser, "Enter", Open);
    bind(kb, Browser, "Space", Open);
    bind(kb, Browser, "r", Retry);
    bind(kb, Browser, "/", EnterFilter);

    add_global(kb, Browser);
}

fn add_page_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Page;

    bind(kb, Page, "j", ScrollDown);
    bind(kb, Page, "Down", ScrollDown);
    bind(kb, Page, "k", ScrollUp);
    bind(kb, Page, "Up", ScrollUp);
    bind(kb, Page, "d", PageDown);
    bind(kb, Page, "u", PageUp);
    bind(kb, Page, "Enter", Open);

    add_global(kb, Page);
}

fn add_help_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Help;

    bind(kb, Help, "j", HelpScrollDown);
    bind(kb, Help, "Down", HelpScrollDown);
    bind(kb, Help, "k", HelpScrollUp);
    bind(kb, Help, "Up", HelpScrollUp);

    // Close help
    bind(kb, Help, "?", ToggleHelp);
    bind(kb, Help, "Escape", ToggleHelp);

    bind(kb, Help, "q", Quit);
}

fn add_prompt_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Prompt;

    bind(kb, Prompt, "Enter", Confirm);
    bind(kb, Prompt, "Escape", Cancel);
    bind(kb, Prompt, "Backspace", InputBackspace);
    bind(kb, Prompt, "Ctrl+c", Quit);
}

fn add_filter_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Filter;

    bind(kb, Filter, "Enter", Confirm);
    bind(kb, Filter, "Escape", Cancel);
    bind(kb, Filter, "Backspace", InputBackspace);
    bind(kb, Filter, "Down", Next);
    bind(kb, Filter, "Ctrl+n", Next);
    bind(kb, Filter, "Up", Previous);
    bind(kb, Filter, "Ctrl+p", Previous);
    bind(kb, Filter, "Ctrl+c", Quit);
}
