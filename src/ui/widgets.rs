//! Reusable UI widget helpers

use super::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListState},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// Wraps `render_stateful_widget` with a `ListState` so the list scrolls to
/// keep the highlighted item in view.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// `key:action` pairs rendered as one hint line
pub fn hint_line<'a>(theme: &Theme, hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let key_style = Style::default()
        .fg(theme.secondary)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.muted);

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }
    Line::from(spans)
}

/// Label style for form and detail headings
pub fn label_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.secondary)
        .add_modifier(Modifier::BOLD)
}
