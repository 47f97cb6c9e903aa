//! Utility functions for UI rendering
//!
//! Pure functions for layout calculations and text formatting.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculate a centered rectangular area within a parent area.
///
/// Returns a `Rect` that is centered both horizontally and vertically,
/// sized as a percentage of the parent area.
pub fn centered_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// A rectangle `height` rows tall, centered horizontally at `percent_x` width,
/// anchored to the bottom of `area`.
pub fn bottom_bar_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let height = height.min(area.height);
    let [_, bar] = Layout::vertical([Constraint::Min(0), Constraint::Length(height)]).areas(area);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [bar] = horizontal.areas(bar);
    bar
}

/// Truncate `text` to at most `max_width` terminal columns, adding an
/// ellipsis when something was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
