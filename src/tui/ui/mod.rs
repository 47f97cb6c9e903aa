mod pages;
mod popups;
mod util;

use crate::lesson::{LessonBlock, RenderedLesson};
use crate::router::Page;
use crate::tui::app::{App, AppMode, Focus, LessonView};
use crate::tui::theme::Theme;
use popups::{render_filter, render_help_popup, render_prompt};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    Wrap,
};
use util::truncate_to_width;

/// Pages shown as tabs in the title bar, with their jump keys
const TABS: &[(Page, &str)] = &[
    (Page::Home, "1"),
    (Page::Learn, "2"),
    (Page::Auth, "3"),
    (Page::Faq, "4"),
    (Page::Contact, "5"),
    (Page::About, "6"),
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let [title_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title_bar(frame, app, title_area);

    if app.page == Page::Learn {
        render_browser(frame, app, main_area);
    } else {
        pages::render_page(frame, app, main_area);
    }

    render_status_bar(frame, app, status_area);

    match app.mode {
        AppMode::Help => render_help_popup(frame, app, area),
        AppMode::Prompt => render_prompt(frame, app, area),
        AppMode::Filter => render_filter(frame, app, area),
        AppMode::Normal => {}
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        " coursebook ",
        Style::default()
            .fg(theme.title_bar_fg)
            .add_modifier(Modifier::BOLD),
    )];

    for (page, key) in TABS {
        let label = format!(" {}:{} ", key, page.title());
        let style = if *page == app.page {
            theme.selection_style()
        } else {
            Style::default().fg(theme.muted_fg)
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_browser(frame: &mut Frame, app: &mut App, area: Rect) {
    let sidebar = app.sidebar_width;
    let [sidebar_area, content_area] = Layout::horizontal([
        Constraint::Percentage(sidebar),
        Constraint::Percentage(100 - sidebar),
    ])
    .areas(area);
    let [courses_area, lessons_area] =
        Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)])
            .areas(sidebar_area);

    render_courses(frame, app, courses_area);
    render_lessons(frame, app, lessons_area);
    render_content(frame, app, content_area);
}

fn render_courses(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let width = area.width.saturating_sub(4) as usize;
    let selected_course = app.selected.map(|k| k.course);

    let items: Vec<ListItem> = app
        .catalog()
        .courses()
        .iter()
        .map(|course| {
            let marker = if Some(course.id) == selected_course {
                "● "
            } else {
                "  "
            };
            let label = format!("{}{} ({})", marker, course.title, course.subcourses.len());
            ListItem::new(truncate_to_width(&label, width))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(app.focus == Focus::Courses))
                .title(" Courses "),
        )
        .style(theme.content_style())
        .highlight_style(theme.selection_style())
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, area, &mut app.course_state);
}

fn render_lessons(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let width = area.width.saturating_sub(4) as usize;

    let (title, items) = match app.highlighted_course() {
        Some(course) => {
            let items: Vec<ListItem> = course
                .subcourses
                .iter()
                .enumerate()
                .map(|(i, sub)| {
                    let is_open = app
                        .selected
                        .is_some_and(|k| k.course == course.id && k.index == i);
                    let label = format!("{:>2}. {}", i + 1, sub.title);
                    let style = if is_open {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::styled(truncate_to_width(&label, width), style))
                })
                .collect();
            (format!(" {} ", course.title), items)
        }
        None => (" Lessons ".to_string(), Vec::new()),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(app.focus == Focus::Lessons))
                .title(title),
        )
        .style(theme.content_style())
        .highlight_style(theme.selection_style())
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, area, &mut app.lesson_state);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let title = app
        .view
        .key()
        .and_then(|key| app.catalog().subcourse(key).ok())
        .map(|sub| format!(" {} ", sub.title))
        .unwrap_or_else(|| " Lesson ".to_string());

    let lines = match &app.view {
        LessonView::Empty => vec![
            Line::styled("Pick a course, then a lesson.", theme.muted_style()),
            Line::raw(""),
            Line::styled("Tab switches panes, Enter opens, / filters lessons.", theme.muted_style()),
        ],
        LessonView::Loading { .. } => vec![Line::styled("Loading lesson…", theme.muted_style())],
        LessonView::Ready { lesson, .. } => lesson_lines(lesson, theme),
        LessonView::Failed { message, .. } => vec![
            Line::styled("This lesson could not be loaded.", theme.error_style()),
            Line::raw(""),
            Line::raw(message.clone()),
            Line::raw(""),
            Line::styled("Press r to retry.", theme.muted_style()),
        ],
    };
    let line_count = lines.len();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(app.focus == Focus::Content))
                .title(title),
        )
        .style(theme.content_style())
        .wrap(Wrap { trim: false })
        .scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .style(Style::default().fg(theme.scrollbar_fg));
    let mut scrollbar_state =
        ScrollbarState::new(line_count).position(app.content_scroll as usize);
    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );

    app.content_height = line_count.min(u16::MAX as usize) as u16;
}

/// Display lines for a rendered lesson. Code blocks use their highlighted
/// lines when present.
pub(crate) fn lesson_lines(lesson: &RenderedLesson, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in &lesson.blocks {
        match block {
            LessonBlock::Heading { title, subtitle } => {
                lines.push(Line::styled(title.clone(), theme.heading_style()));
                if let Some(subtitle) = subtitle {
                    lines.push(Line::styled(subtitle.clone(), theme.muted_style()));
                }
            }
            LessonBlock::Paragraph(text) => {
                lines.push(Line::raw(text.clone()));
            }
            LessonBlock::Section { title, paragraphs } => {
                lines.push(Line::styled(title.clone(), theme.subheading_style()));
                for (i, p) in paragraphs.iter().enumerate() {
                    if i > 0 {
                        lines.push(Line::raw(""));
                    }
                    lines.push(Line::raw(p.clone()));
                }
            }
            LessonBlock::Code(code) => {
                let fence = format!("```{}", code.language.as_deref().unwrap_or(""));
                lines.push(Line::styled(fence, theme.code_fence_style()));
                match code.highlighted() {
                    Some(highlighted) => lines.extend(highlighted.iter().cloned()),
                    None => lines.extend(code.source.lines().map(|l| Line::raw(l.to_string()))),
                }
                lines.push(Line::styled("```", theme.code_fence_style()));
            }
            LessonBlock::List {
                title,
                items,
                ordered,
            } => {
                if let Some(title) = title {
                    lines.push(Line::styled(
                        title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                }
                for (i, item) in items.iter().enumerate() {
                    let bullet = if *ordered {
                        format!("{:>3}. ", i + 1)
                    } else {
                        "  • ".to_string()
                    };
                    lines.push(Line::from(vec![
                        Span::styled(bullet, Style::default().fg(theme.list_bullet)),
                        Span::raw(item.clone()),
                    ]));
                }
            }
        }
        lines.push(Line::raw(""));
    }

    // No trailing blank line
    lines.pop();
    lines
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let text = if let Some(message) = &app.status_message {
        format!(" {} ", message)
    } else {
        let loading = if app.is_loading() { " • loading…" } else { "" };
        let history = match (app.can_go_back(), app.can_go_forward()) {
            (true, true) => " • b/f:History",
            (true, false) => " • b:Back",
            (false, true) => " • f:Forward",
            (false, false) => "",
        };
        format!(
            " {}{}{} • :Go to • t:Theme • ?:Help • q:Quit ",
            app.path, loading, history
        )
    };
    let theme_name = format!(" Theme:{} ", app.current_theme);

    let width = area.width as usize;
    let left_width = width.saturating_sub(theme_name.chars().count());
    let line = Line::from(vec![
        Span::raw(format!(
            "{:<w$}",
            truncate_to_width(&text, left_width),
            w = left_width
        )),
        Span::styled(theme_name, Style::default().add_modifier(Modifier::BOLD)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(theme.status_bar_style()),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CourseId, SubcourseKey};
    use crate::config::Config;
    use crate::lesson::{BundledLoader, CodeBlock, ComponentRegistry};
    use crate::lesson::resolver::tests::wait_until;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(start: &str) -> App {
        App::new(
            Catalog::builtin().unwrap(),
            Arc::new(ComponentRegistry::with_defaults().unwrap()),
            Arc::new(BundledLoader),
            Config::default(),
            start,
        )
    }

    #[test]
    fn test_lesson_lines() {
        let theme = Theme::from_name(crate::tui::theme::ThemeName::Nord);
        let lesson = RenderedLesson {
            title: None,
            blocks: vec![
                LessonBlock::Heading {
                    title: "Loops".into(),
                    subtitle: None,
                },
                LessonBlock::Code(CodeBlock::new("for i in range(3):\n    print(i)", None)),
                LessonBlock::List {
                    title: None,
                    items: vec!["a".into()],
                    ordered: true,
                },
            ],
        };
        let text: Vec<String> = lesson_lines(&lesson, &theme)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(
            text,
            vec![
                "Loops",
                "",
                "```",
                "for i in range(3):",
                "    print(i)",
                "```",
                "",
                "  1. a",
            ]
        );
    }

    #[test]
    fn test_browser_shows_loaded_lesson() {
        let mut app = app("/learn");
        app.select_subcourse(SubcourseKey::new(CourseId::Python, 0));
        wait_until(|| {
            app.tick();
            matches!(app.view, LessonView::Ready { .. })
        });

        let text = screen(&mut app);
        assert!(text.contains("Courses"));
        assert!(text.contains("Python"));
        assert!(text.contains("Introduction to Python"));
        assert!(app.content_height > 0);
    }

    #[test]
    fn test_not_found_page() {
        let mut app = app("/");
        app.navigate("/nowhere");
        let text = screen(&mut app);
        assert!(text.contains("404"));
        assert!(text.contains("/nowhere"));
        assert!(text.contains("Press b to go back."));
    }

    #[test]
    fn test_help_popup_renders() {
        let mut app = app("/");
        app.toggle_help();
        let text = screen(&mut app);
        assert!(text.contains("Keyboard Shortcuts"));
    }
}
