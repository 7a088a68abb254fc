//! Loading screen view

use super::Theme;
use crate::state::LoadingScreen;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, screen: &LoadingScreen, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", screen.spinner()),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(screen.message(), Style::default().fg(theme.foreground)),
    ]);

    let top = area.y + area.height / 2;
    let row = Rect {
        y: top,
        height: 1.min(area.height),
        ..area
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}
