//! Static pages: everything except the course browser.

use crate::router::Page;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

fn home(theme: &Theme, courses: usize, lessons: usize) -> Vec<Line<'static>> {
    vec![
        Line::styled("Learn to code, one lesson at a time", theme.heading_style()),
        Line::raw(""),
        Line::raw(format!(
            "{} courses and {} lessons covering languages, frameworks and the web platform.",
            courses, lessons
        )),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", theme.subheading_style()),
            Span::raw(" or "),
            Span::styled("2", theme.subheading_style()),
            Span::raw(" to browse the courses."),
        ]),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(":", theme.subheading_style()),
            Span::raw(" to jump to any page by path, e.g. /learn/Python/1."),
        ]),
    ]
}

fn auth(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled("Sign in", theme.heading_style()),
        Line::raw(""),
        Line::raw("Accounts are not needed here: every course is open to read."),
        Line::styled("Progress is not tracked between sessions.", theme.muted_style()),
    ]
}

fn faq(theme: &Theme) -> Vec<Line<'static>> {
    let qa = [
        (
            "Do I need to install anything to follow a lesson?",
            "No. Lessons are text and code; run the snippets with your own toolchain.",
        ),
        (
            "Why does a lesson say it could not be loaded?",
            "Not every lesson has content yet, or a content file failed to parse. Press r to retry.",
        ),
        (
            "Can I write my own lessons?",
            "Yes. Point --content-dir at a directory of TOML lesson modules; edits reload live.",
        ),
        (
            "How do I change colors?",
            "Press t to cycle themes. The choice is saved to the config file.",
        ),
    ];

    let mut lines = vec![
        Line::styled("Frequently asked questions", theme.heading_style()),
        Line::raw(""),
    ];
    for (question, answer) in qa {
        lines.push(Line::styled(question, theme.subheading_style()));
        lines.push(Line::raw(answer));
        lines.push(Line::raw(""));
    }
    lines
}

fn contact(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled("Contact", theme.heading_style()),
        Line::raw(""),
        Line::raw("Found a mistake in a lesson? Open an issue in the project's repository"),
        Line::raw("with the course, the lesson number and what looks wrong."),
    ]
}

fn about(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled("About", theme.heading_style()),
        Line::raw(""),
        Line::raw("A course catalog for programming languages and web technologies."),
        Line::raw("Lessons are built from a small set of components (headers, text sections,"),
        Line::raw("code listings and lists) and loaded only when you open them."),
    ]
}

fn not_found(theme: &Theme, path: &str, can_go_back: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled("404 - page not found", theme.error_style()),
        Line::raw(""),
        Line::raw(format!("Nothing lives at {}.", path)),
        Line::raw(""),
    ];
    if can_go_back {
        lines.push(Line::styled("Press b to go back.", theme.muted_style()));
    }
    lines.push(Line::styled(
        "Press Enter to go home.",
        theme.muted_style(),
    ));
    lines
}

/// Lines for a static page. The course browser has its own renderer.
pub fn page_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    match app.page {
        Page::Home => home(
            theme,
            app.catalog().len(),
            app.catalog().lessons().count(),
        ),
        Page::Auth => auth(theme),
        Page::Faq => faq(theme),
        Page::Contact => contact(theme),
        Page::About => about(theme),
        Page::NotFound => not_found(theme, &app.path, app.can_go_back()),
        Page::Learn => Vec::new(),
    }
}

pub fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true))
        .title(format!(" {} ", app.page.title()));

    let paragraph = Paragraph::new(page_lines(app))
        .block(block)
        .style(app.theme.content_style())
        .wrap(Wrap { trim: false })
        .scroll((app.page_scroll, 0));

    frame.render_widget(paragraph, area);
}
