//! Action definitions for keybindings
//!
//! This module defines all bindable actions in coursebook.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// All bindable actions in coursebook
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum Action {
    // === Navigation ===
    /// Move to next item in the focused list
    Next,
    /// Move to previous item in the focused list
    Previous,
    /// Jump to first item
    First,
    /// Jump to last item
    Last,
    /// Scroll down by page
    PageDown,
    /// Scroll up by page
    PageUp,
    /// Scroll content down one line
    ScrollDown,
    /// Scroll content up one line
    ScrollUp,

    // === Course browser ===
    /// Move focus to the next pane (courses, lessons, content)
    FocusNext,
    /// Move focus to the previous pane
    FocusPrevious,
    /// Open the selected course or lesson
    Open,
    /// Load the current lesson again after a failure
    Retry,

    // === Pages ===
    GoToHome,
    GoToLearn,
    GoToAuth,
    GoToFaq,
    GoToContact,
    GoToAbout,
    /// Navigate back in page history
    GoBack,
    /// Navigate forward in page history
    GoForward,

    // === Mode Transitions ===
    /// Open the go-to-path prompt
    OpenPrompt,
    /// Filter lessons by name
    EnterFilter,
    /// Accept the prompt or filter
    Confirm,
    /// Leave the prompt or filter without applying it
    Cancel,
    /// Delete last character of the input
    InputBackspace,

    // === View ===
    /// Toggle help popup
    ToggleHelp,
    /// Switch to the next color theme
    CycleTheme,

    // === Help Navigation ===
    /// Scroll help popup down
    HelpScrollDown,
    /// Scroll help popup up
    HelpScrollUp,

    // === Application ===
    /// Quit the application
    Quit,
}

impl Action {
    /// Get a human-readable description of the action
    pub fn description(&self) -> &'static str {
        match self {
            Action::Next => "Move to next item",
            Action::Previous => "Move to previous item",
            Action::First => "Jump to first item",
            Action::Last => "Jump to last item",
            Action::PageDown => "Page down",
            Action::PageUp => "Page up",
            Action::ScrollDown => "Scroll down",
            Action::ScrollUp => "Scroll up",

            Action::FocusNext => "Focus next pane",
            Action::FocusPrevious => "Focus previous pane",
            Action::Open => "Open selection",
            Action::Retry => "Retry loading lesson",

            Action::GoToHome => "Go to home",
            Action::GoToLearn => "Go to courses",
            Action::GoToAuth => "Go to sign in",
            Action::GoToFaq => "Go to FAQ",
            Action::GoToContact => "Go to contact",
            Action::GoToAbout => "Go to about",
            Action::GoBack => "Go back",
            Action::GoForward => "Go forward",

            Action::OpenPrompt => "Go to path",
            Action::EnterFilter => "Filter lessons",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel",
            Action::InputBackspace => "Delete character",

            Action::ToggleHelp => "Toggle help",
            Action::CycleTheme => "Cycle theme",

            Action::HelpScrollDown => "Scroll help down",
            Action::HelpScrollUp => "Scroll help up",

            Action::Quit => "Quit",
        }
    }

    /// Get the category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::Next
            | Action::Previous
            | Action::First
            | Action::Last
            | Action::PageDown
            | Action::PageUp
            | Action::ScrollDown
            | Action::ScrollUp => "Navigation",

            Action::FocusNext | Action::FocusPrevious | Action::Open | Action::Retry => {
                "Courses"
            }

            Action::GoToHome
            | Action::GoToLearn
            | Action::GoToAuth
            | Action::GoToFaq
            | Action::GoToContact
            | Action::GoToAbout
            | Action::GoBack
            | Action::GoForward => "Pages",

            Action::OpenPrompt
            | Action::EnterFilter
            | Action::Confirm
            | Action::Cancel
            | Action::InputBackspace => "Input",

            Action::ToggleHelp | Action::CycleTheme => "View",

            Action::HelpScrollDown | Action::HelpScrollUp => "Help",

            Action::Quit => "Application",
        }
    }

    /// Route path for page jump actions.
    pub fn route(&self) -> Option<&'static str> {
        match self {
            Action::GoToHome => Some("/"),
            Action::GoToLearn => Some("/learn"),
            Action::GoToAuth => Some("/auth"),
            Action::GoToFaq => Some("/faq"),
            Action::GoToContact => Some("/contact"),
            Action::GoToAbout => Some("/about"),
            _ => None,
        }
    }
}
