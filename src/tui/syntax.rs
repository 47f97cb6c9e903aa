//! Code block highlighting.
//!
//! The highlighter runs as a pass over a rendered lesson. Blocks that already
//! carry highlighted lines are skipped, so running the pass twice changes
//! nothing.

use crate::lesson::RenderedLesson;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme as SyntectTheme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Language names used by lessons that syntect does not know as tokens.
const ALIASES: &[(&str, &str)] = &[
    ("csharp", "cs"),
    ("c#", "cs"),
    ("cplusplus", "cpp"),
    ("c++", "cpp"),
    ("golang", "go"),
    ("shell", "sh"),
    ("bash", "sh"),
    ("zsh", "sh"),
    ("javascript", "js"),
    ("jsx", "js"),
    ("typescript", "js"),
    ("ts", "js"),
    ("tsx", "js"),
    ("vue", "html"),
    ("angular", "js"),
    ("python3", "py"),
];

pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: DEFAULT_THEME.to_string(),
        }
    }

    /// Switch the syntect theme. Unknown names are ignored.
    pub fn set_theme(&mut self, name: &str) -> bool {
        if self.theme_set.themes.contains_key(name) {
            self.theme_name = name.to_string();
            true
        } else {
            tracing::warn!(theme = name, "unknown syntax theme");
            false
        }
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    fn theme(&self) -> Option<&SyntectTheme> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.get(DEFAULT_THEME))
    }

    pub fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        let language = language.trim();
        if language.is_empty() {
            return None;
        }
        let lower = language.to_lowercase();

        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| {
                self.syntax_set
                    .syntaxes()
                    .iter()
                    .find(|s| s.name.to_lowercase() == lower)
            })
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == lower)
                    .and_then(|(_, token)| self.syntax_set.find_syntax_by_token(token))
            })
    }

    /// Highlight `code` into styled lines. Unknown or missing languages give
    /// plain lines.
    pub fn highlight_code(&self, code: &str, language: Option<&str>) -> Vec<Line<'static>> {
        let syntax = language.and_then(|l| self.find_syntax(l));
        let (Some(syntax), Some(theme)) = (syntax, self.theme()) else {
            return plain_lines(code);
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();

        for line in LinesWithEndings::from(code) {
            let Ok(ranges) = highlighter.highlight_line(line, &self.syntax_set) else {
                return plain_lines(code);
            };
            let spans: Vec<Span<'static>> = ranges
                .into_iter()
                .map(|(style, text)| {
                    Span::styled(
                        text.trim_end_matches(['\n', '\r']).to_string(),
                        convert_style(style),
                    )
                })
                .filter(|span| !span.content.is_empty())
                .collect();
            lines.push(Line::from(spans));
        }

        lines
    }

    /// Highlight every code block of `lesson` that has not been highlighted
    /// yet. Returns how many blocks were highlighted by this call.
    pub fn highlight_lesson(&self, lesson: &mut RenderedLesson) -> usize {
        let mut count = 0;
        for block in lesson.code_blocks_mut() {
            if block.is_highlighted() {
                continue;
            }
            let lines = self.highlight_code(&block.source, block.language.as_deref());
            block.set_highlighted(lines);
            count += 1;
        }
        if count > 0 {
            tracing::trace!(blocks = count, theme = %self.theme_name, "highlighted code blocks");
        }
        count
    }
}

fn plain_lines(code: &str) -> Vec<Line<'static>> {
    code.lines().map(|l| Line::from(l.to_string())).collect()
}

fn convert_style(style: syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut out = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}
