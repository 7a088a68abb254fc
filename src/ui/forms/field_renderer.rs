//! Field rendering utilities for the time entry form

use crate::state::{DatePicker, HoursSelector, TextInput};
use crate::ui::Theme;
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Bordered block whose colour follows focus
fn field_block<'a>(label: &'a str, is_active: bool, theme: &Theme) -> Block<'a> {
    let border = if is_active { theme.highlight } else { theme.muted };
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// Month grid with the selected day highlighted while focused
pub fn calendar_lines<'a>(picker: &DatePicker, theme: &Theme) -> Vec<Line<'a>> {
    let view = picker.view_month();
    let today = picker.today();
    let selected = picker.selected();
    let in_view = |day: u32| (view.year(), view.month(), day);

    let mut lines = vec![
        Line::from(Span::styled(
            view.format("%B %Y").to_string(),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(WEEKDAY_HEADER, Style::default().fg(theme.muted))),
    ];

    // One line per week, blanks before the first
    for row in picker.calendar_rows() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for cell in row {
            let Some(day) = cell else {
                spans.push(Span::raw("   "));
                continue;
            };
            let is_selected = in_view(day) == (selected.year(), selected.month(), selected.day());
            let is_today = in_view(day) == (today.year(), today.month(), today.day());

            let style = if is_selected && picker.is_focused() {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else if is_today {
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.foreground)
            };
            spans.push(Span::styled(format!("{day:>2}"), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Visible slice of hour options with overflow arrows
pub fn hours_line<'a>(selector: &HoursSelector, theme: &Theme) -> Line<'a> {
    let window = selector.visible_window();
    let arrow_style = Style::default().fg(theme.muted);

    let mut spans = vec![Span::styled(
        if window.has_left { "< " } else { "  " },
        arrow_style,
    )];

    for index in window.start..window.end {
        let value = selector.options()[index];
        let style = if index == selector.selected_index() {
            let base = Style::default().add_modifier(Modifier::BOLD);
            if selector.is_focused() {
                base.fg(theme.background).bg(theme.highlight)
            } else {
                base.fg(theme.highlight)
            }
        } else {
            Style::default().fg(theme.foreground)
        };
        spans.push(Span::styled(format!(" {value:.2} "), style));
    }

    spans.push(Span::styled(
        if window.has_right { " >" } else { "  " },
        arrow_style,
    ));
    Line::from(spans)
}

/// Draw a wrapped text input with a character counter while focused
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    theme: &Theme,
) {
    let is_active = input.is_focused();
    let block = field_block(label, is_active, theme);
    let inner_width = block.inner(area).width.max(1) as usize;

    let mut lines: Vec<Line> = if input.is_empty() {
        vec![Line::from(Span::styled(
            input.placeholder(),
            Style::default().fg(theme.muted),
        ))]
    } else {
        input
            .wrapped_lines(inner_width.saturating_sub(1).max(1))
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.foreground))))
            .collect()
    };

    // Cursor after the last character
    if is_active {
        let cursor = Span::styled("▌", Style::default().fg(theme.highlight));
        match lines.last_mut() {
            Some(last) if !input.is_empty() => last.spans.push(cursor),
            Some(last) => last.spans.insert(0, cursor),
            None => lines.push(Line::from(cursor)),
        }
    }

    let block = if is_active {
        block.title_bottom(
            Line::from(Span::styled(
                format!(" {}/{} ", input.len(), input.char_limit()),
                Style::default().fg(theme.muted),
            ))
            .right_aligned(),
        )
    } else {
        block
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw arbitrary field content inside a focus-coloured block
pub fn draw_block_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    lines: Vec<Line>,
    is_active: bool,
    theme: &Theme,
) {
    frame.render_widget(
        Paragraph::new(lines).block(field_block(label, is_active, theme)),
        area,
    );
}
