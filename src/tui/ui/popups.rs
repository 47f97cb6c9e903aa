//! Popup and overlay rendering: help, go-to prompt, lesson filter.

use super::util::{bottom_bar_area, centered_area, truncate_to_width};
use crate::tui::app::App;
use crate::tui::help_text;
use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation,
    ScrollbarState, Wrap,
};

pub fn render_help_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_area(area, 70, 80);
    let theme = &app.theme;

    frame.render_widget(Clear, popup_area);

    let help_lines = help_text::build_help_text(app.keybindings(), theme);
    let help_text_len = help_lines.len();

    let paragraph = Paragraph::new(help_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(true))
                .title(" Help ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));

    frame.render_widget(paragraph, popup_area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .style(Style::default().fg(theme.scrollbar_fg));

    let mut scrollbar_state = ScrollbarState::new(help_text_len).position(app.help_scroll as usize);

    frame.render_stateful_widget(
        scrollbar,
        popup_area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}

/// Single-line input for a page path.
pub fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let prompt_area = bottom_bar_area(area, 60, 4);
    let theme = &app.theme;

    frame.render_widget(Clear, prompt_area);

    let input = Line::from(vec![
        Span::styled(":", theme.subheading_style()),
        Span::raw(app.input.clone()),
        Span::styled("█", Style::default().fg(theme.border_focused)),
    ]);
    let hint = Line::styled("Enter to go, Esc to cancel", theme.muted_style());

    let paragraph = Paragraph::new(vec![input, hint]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(true))
            .title(" Go to path ")
            .style(Style::default().bg(theme.background)),
    );
    frame.render_widget(paragraph, prompt_area);
}

/// Lesson filter: query line plus ranked matches.
pub fn render_filter(frame: &mut Frame, app: &mut App, area: Rect) {
    let popup_area = centered_area(area, 60, 60);
    frame.render_widget(Clear, popup_area);

    let theme = app.theme.clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .title(format!(" Filter lessons ({}) ", app.filter_hits.len()))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 2 {
        return;
    }
    let query_area = Rect { height: 1, ..inner };
    let list_area = Rect {
        y: inner.y + 2,
        height: inner.height.saturating_sub(2),
        ..inner
    };

    let query = Line::from(vec![
        Span::styled("/", theme.subheading_style()),
        Span::raw(app.input.clone()),
        Span::styled("█", Style::default().fg(theme.border_focused)),
    ]);
    frame.render_widget(Paragraph::new(query), query_area);

    let width = list_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = if app.filter_hits.is_empty() && !app.input.trim().is_empty() {
        vec![ListItem::new(Line::styled("No matching lessons", theme.muted_style()))]
    } else {
        app.filter_hits
            .iter()
            .map(|hit| {
                let label = format!(
                    "{} #{} {}",
                    hit.course_title,
                    hit.key.index + 1,
                    hit.lesson_title
                );
                ListItem::new(truncate_to_width(&label, width))
            })
            .collect()
    };

    let list = List::new(items)
        .style(theme.content_style())
        .highlight_style(theme.selection_style())
        .highlight_symbol("► ");
    frame.render_stateful_widget(list, list_area, &mut app.filter_state);
}
