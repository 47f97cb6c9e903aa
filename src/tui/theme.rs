use ratatui::style::{Color, Modifier, Style};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum ThemeName {
    OceanDark,
    Nord,
    Dracula,
    Solarized,
    Monokai,
    Gruvbox,
}

impl ThemeName {
    /// Theme after this one, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let idx = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Name of the bundled syntect theme used for code blocks.
    pub fn syntax_theme(self) -> &'static str {
        match self {
            ThemeName::OceanDark => "base16-ocean.dark",
            ThemeName::Nord => "base16-eighties.dark",
            ThemeName::Dracula => "base16-mocha.dark",
            ThemeName::Solarized => "Solarized (dark)",
            ThemeName::Monokai => "base16-eighties.dark",
            ThemeName::Gruvbox => "base16-mocha.dark",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub background: Color,
    pub foreground: Color,
    pub heading: Color,
    pub subheading: Color,
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub code_fence: Color,
    pub list_bullet: Color,
    pub title_bar_fg: Color,
    pub scrollbar_fg: Color,
    pub error_fg: Color,
    pub muted_fg: Color,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::OceanDark => Self::ocean_dark(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Dracula => Self::dracula(),
            ThemeName::Solarized => Self::solarized(),
            ThemeName::Monokai => Self::monokai(),
            ThemeName::Gruvbox => Self::gruvbox(),
        }
    }

    pub fn ocean_dark() -> Self {
        Self {
            name: ThemeName::OceanDark,
            background: Color::Rgb(43, 48, 59),
            foreground: Color::Rgb(192, 197, 206),
            heading: Color::Rgb(143, 161, 179),
            subheading: Color::Rgb(163, 190, 140),
            border_focused: Color::Rgb(143, 161, 179),
            border_unfocused: Color::Rgb(79, 91, 102),
            selection_bg: Color::Rgb(79, 91, 102),
            selection_fg: Color::Rgb(239, 241, 245),
            status_bar_bg: Color::Rgb(52, 61, 70),
            status_bar_fg: Color::Rgb(192, 197, 206),
            code_fence: Color::Rgb(101, 115, 126),
            list_bullet: Color::Rgb(235, 203, 139),
            title_bar_fg: Color::Rgb(143, 161, 179),
            scrollbar_fg: Color::Rgb(101, 115, 126),
            error_fg: Color::Rgb(191, 97, 106),
            muted_fg: Color::Rgb(101, 115, 126),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: ThemeName::Nord,
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            heading: Color::Rgb(136, 192, 208),
            subheading: Color::Rgb(129, 161, 193),
            border_focused: Color::Rgb(136, 192, 208),
            border_unfocused: Color::Rgb(76, 86, 106),
            selection_bg: Color::Rgb(67, 76, 94),
            selection_fg: Color::Rgb(236, 239, 244),
            status_bar_bg: Color::Rgb(59, 66, 82),
            status_bar_fg: Color::Rgb(216, 222, 233),
            code_fence: Color::Rgb(76, 86, 106),
            list_bullet: Color::Rgb(163, 190, 140),
            title_bar_fg: Color::Rgb(136, 192, 208),
            scrollbar_fg: Color::Rgb(76, 86, 106),
            error_fg: Color::Rgb(191, 97, 106),
            muted_fg: Color::Rgb(97, 110, 136),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: ThemeName::Dracula,
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            heading: Color::Rgb(189, 147, 249),
            subheading: Color::Rgb(139, 233, 253),
            border_focused: Color::Rgb(255, 121, 198),
            border_unfocused: Color::Rgb(68, 71, 90),
            selection_bg: Color::Rgb(68, 71, 90),
            selection_fg: Color::Rgb(248, 248, 242),
            status_bar_bg: Color::Rgb(68, 71, 90),
            status_bar_fg: Color::Rgb(248, 248, 242),
            code_fence: Color::Rgb(98, 114, 164),
            list_bullet: Color::Rgb(80, 250, 123),
            title_bar_fg: Color::Rgb(189, 147, 249),
            scrollbar_fg: Color::Rgb(98, 114, 164),
            error_fg: Color::Rgb(255, 85, 85),
            muted_fg: Color::Rgb(98, 114, 164),
        }
    }

    pub fn solarized() -> Self {
        Self {
            name: ThemeName::Solarized,
            background: Color::Rgb(0, 43, 54),
            foreground: Color::Rgb(131, 148, 150),
            heading: Color::Rgb(38, 139, 210),
            subheading: Color::Rgb(42, 161, 152),
            border_focused: Color::Rgb(38, 139, 210),
            border_unfocused: Color::Rgb(88, 110, 117),
            selection_bg: Color::Rgb(7, 54, 66),
            selection_fg: Color::Rgb(238, 232, 213),
            status_bar_bg: Color::Rgb(7, 54, 66),
            status_bar_fg: Color::Rgb(147, 161, 161),
            code_fence: Color::Rgb(88, 110, 117),
            list_bullet: Color::Rgb(181, 137, 0),
            title_bar_fg: Color::Rgb(38, 139, 210),
            scrollbar_fg: Color::Rgb(88, 110, 117),
            error_fg: Color::Rgb(220, 50, 47),
            muted_fg: Color::Rgb(88, 110, 117),
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: ThemeName::Monokai,
            background: Color::Rgb(39, 40, 34),
            foreground: Color::Rgb(248, 248, 242),
            heading: Color::Rgb(166, 226, 46),
            subheading: Color::Rgb(102, 217, 239),
            border_focused: Color::Rgb(249, 38, 114),
            border_unfocused: Color::Rgb(117, 113, 94),
            selection_bg: Color::Rgb(73, 72, 62),
            selection_fg: Color::Rgb(248, 248, 242),
            status_bar_bg: Color::Rgb(62, 61, 50),
            status_bar_fg: Color::Rgb(248, 248, 242),
            code_fence: Color::Rgb(117, 113, 94),
            list_bullet: Color::Rgb(230, 219, 116),
            title_bar_fg: Color::Rgb(166, 226, 46),
            scrollbar_fg: Color::Rgb(117, 113, 94),
            error_fg: Color::Rgb(249, 38, 114),
            muted_fg: Color::Rgb(117, 113, 94),
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: ThemeName::Gruvbox,
            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            heading: Color::Rgb(250, 189, 47),
            subheading: Color::Rgb(142, 192, 124),
            border_focused: Color::Rgb(254, 128, 25),
            border_unfocused: Color::Rgb(102, 92, 84),
            selection_bg: Color::Rgb(80, 73, 69),
            selection_fg: Color::Rgb(251, 241, 199),
            status_bar_bg: Color::Rgb(60, 56, 54),
            status_bar_fg: Color::Rgb(235, 219, 178),
            code_fence: Color::Rgb(146, 131, 116),
            list_bullet: Color::Rgb(184, 187, 38),
            title_bar_fg: Color::Rgb(250, 189, 47),
            scrollbar_fg: Color::Rgb(146, 131, 116),
            error_fg: Color::Rgb(251, 73, 52),
            muted_fg: Color::Rgb(146, 131, 116),
        }
    }

    pub fn content_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border_unfocused)
        }
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subheading_style(&self) -> Style {
        Style::default()
            .fg(self.subheading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.status_bar_bg).fg(self.status_bar_fg)
    }

    pub fn code_fence_style(&self) -> Style {
        Style::default().fg(self.code_fence)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default()
            .fg(self.muted_fg)
            .add_modifier(Modifier::ITALIC)
    }
}
