//! Issue detail view

use super::Theme;
use crate::state::IssueScreen;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draw project, link, title and the scrolled description
pub fn draw(frame: &mut Frame, area: Rect, screen: &IssueScreen, theme: &Theme) {
    let issue = screen.issue();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Project
            Constraint::Length(2), // Link
            Constraint::Length(2), // Title
            Constraint::Min(0),    // Description
        ])
        .split(area);

    // Project and link header
    frame.render_widget(
        Paragraph::new(Span::styled(
            issue.project_name(),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            issue.link.as_str(),
            Style::default().fg(theme.link),
        )),
        chunks[1],
    );

    // Title with id and author
    let title = Line::from(vec![
        Span::styled(
            format!("#{} ", issue.id),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            issue.title.as_str(),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" by ", Style::default().fg(theme.muted)),
        Span::styled(
            issue.author.as_str(),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[2]);

    // Only the rows inside the viewport
    let lines: Vec<Line> = screen
        .lines()
        .into_iter()
        .skip(screen.scroll())
        .take(screen.viewport_height() as usize)
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.foreground))))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(lines).block(block), chunks[3]);
}
