use crate::keybindings::{KeybindingMode, Keybindings};
use crate::tui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Key column width for keybindings
const KEY_COLUMN_WIDTH: usize = 14;

/// Modes listed in the help popup, in display order
const HELP_MODES: &[KeybindingMode] = &[
    KeybindingMode::Browser,
    KeybindingMode::Page,
    KeybindingMode::Filter,
    KeybindingMode::Prompt,
];

#[derive(Debug, Clone, PartialEq)]
pub enum HelpLine {
    Title(&'static str),
    Description(&'static str),
    SectionHeader(String),
    KeyBinding { key: String, desc: &'static str },
    Blank,
}

impl HelpLine {
    /// Convert this help line to a styled ratatui Line
    pub fn to_line(&self, theme: &Theme) -> Line<'static> {
        match self {
            HelpLine::Title(text) => Line::from(vec![Span::styled(
                text.to_string(),
                theme.heading_style(),
            )]),
            HelpLine::Description(text) => {
                Line::from(vec![Span::styled(text.to_string(), theme.muted_style())])
            }
            HelpLine::SectionHeader(text) => Line::from(vec![Span::styled(
                text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            HelpLine::KeyBinding { key, desc } => {
                let formatted_key = format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH);
                Line::from(vec![
                    Span::styled(formatted_key, Style::default().fg(theme.list_bullet)),
                    Span::raw(desc.to_string()),
                ])
            }
            HelpLine::Blank => Line::from(""),
        }
    }
}

/// Help content generated from the active keybindings, so user overrides
/// show up.
pub fn help_lines(keybindings: &Keybindings) -> Vec<HelpLine> {
    let mut lines = vec![
        HelpLine::Title("coursebook - Keyboard Shortcuts"),
        HelpLine::Description("Use j/k or ↓/↑ to scroll | Press Esc or ? to close"),
        HelpLine::Blank,
    ];

    for mode in HELP_MODES {
        let entries = keybindings.help_entries(*mode);
        if entries.is_empty() {
            continue;
        }
        lines.push(HelpLine::SectionHeader(mode.display_name().to_string()));
        for (action, keys) in entries {
            lines.push(HelpLine::KeyBinding {
                key: keys.join("/"),
                desc: action.description(),
            });
        }
        lines.push(HelpLine::Blank);
    }

    lines.push(HelpLine::Description(
        "Set COURSEBOOK_LOG=debug to trace lesson loading",
    ));
    lines
}

/// Build the help text with theme colors applied
pub fn build_help_text(keybindings: &Keybindings, theme: &Theme) -> Vec<Line<'static>> {
    help_lines(keybindings)
        .iter()
        .map(|line| line.to_line(theme))
        .collect()
}
