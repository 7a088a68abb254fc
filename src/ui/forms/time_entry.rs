//! Time entry form rendering

use super::field_renderer::{calendar_lines, draw_block_field, draw_text_field, hours_line};
use crate::state::{FormFocus, FormState, TimeEntryForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::widgets::label_style;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the form in its current state
pub fn draw_time_entry(frame: &mut Frame, area: Rect, form: &TimeEntryForm, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_header(frame, chunks[0], form, theme);

    match form.state() {
        FormState::Editing => draw_editing(frame, chunks[1], form, theme),
        FormState::Submitting => draw_message(
            frame,
            chunks[1],
            Line::from(Span::styled(
                "Submitting time entry...",
                Style::default().fg(theme.info),
            )),
        ),
        FormState::Completed => draw_completed(frame, chunks[1], form, theme),
        FormState::Error(message) => draw_error(frame, chunks[1], message, theme),
    }
}

fn draw_header(frame: &mut Frame, area: Rect, form: &TimeEntryForm, theme: &Theme) {
    let issue = form.issue();
    let lines = vec![
        Line::from(Span::styled(
            "TIME ENTRY",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Issue: #{} {}", issue.id, issue.title),
            label_style(theme),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_editing(frame: &mut Frame, area: Rect, form: &TimeEntryForm, theme: &Theme) {
    let activity_rows = form.activities().len().max(1) as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),            // Date
            Constraint::Length(3),             // Hours
            Constraint::Length(5),             // Description
            Constraint::Length(activity_rows), // Activity
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Validation message
            Constraint::Min(0),
        ])
        .split(area);

    let focus = form.focus();

    // Fields in focus order
    draw_block_field(
        frame,
        chunks[0],
        "Date",
        calendar_lines(&form.date, theme),
        focus == FormFocus::Date,
        theme,
    );
    draw_block_field(
        frame,
        chunks[1],
        "Hours",
        vec![hours_line(&form.hours, theme)],
        focus == FormFocus::Hours,
        theme,
    );
    draw_text_field(frame, chunks[2], "Description", &form.description, theme);
    draw_block_field(
        frame,
        chunks[3],
        "Activity",
        activity_lines(form, theme),
        focus == FormFocus::Activity,
        theme,
    );
    render_button(
        frame,
        chunks[4],
        "Submit",
        focus == FormFocus::Submit,
        theme,
    );

    // Inline validation message under the button
    if let Some(message) = form.validation_error() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("⚠ {message}"),
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            )),
            chunks[5],
        );
    }
}

fn activity_lines<'a>(form: &'a TimeEntryForm, theme: &Theme) -> Vec<Line<'a>> {
    if form.activities().is_empty() {
        return vec![Line::from(Span::styled(
            "No activities available",
            Style::default().fg(theme.muted),
        ))];
    }

    form.activities()
        .iter()
        .enumerate()
        .map(|(idx, activity)| {
            let is_selected = form.activity_index() == Some(idx);
            let (prefix, style) = if is_selected {
                (
                    "▸ ",
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme.foreground))
            };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(activity.name.as_str(), style),
            ])
        })
        .collect()
}

fn draw_message(frame: &mut Frame, area: Rect, line: Line) {
    let row = Rect {
        y: area.y + area.height / 3,
        height: 1.min(area.height),
        ..area
    };
    frame.render_widget(Paragraph::new(line), row);
}

fn draw_completed(frame: &mut Frame, area: Rect, form: &TimeEntryForm, theme: &Theme) {
    let mut lines = vec![Line::from(Span::styled(
        "✓ Time entry submitted successfully!",
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(entry) = form.receipt() {
        let activity = entry
            .activity
            .as_ref()
            .map(|a| format!(" ({})", a.name))
            .unwrap_or_default();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "{:.2}h on {}{} · entry #{}",
                entry.hours, entry.spent_on, activity, entry.id
            ),
            Style::default().fg(theme.foreground),
        )));
    }

    // Start a third of the way down
    let area = Rect {
        y: area.y + area.height / 3,
        height: area.height - area.height / 3,
        ..area
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let area = Rect {
        y: area.y + area.height / 3,
        height: 5.min(area.height - area.height / 3),
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error));

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("✗ Error: {message}"),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true })
        .block(block),
        area,
    );
}
