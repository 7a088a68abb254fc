//! Button component for TUI

use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button, highlighted while selected
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_selected: bool, theme: &Theme) {
    let (border_style, text_style) = if is_selected {
        (
            Style::default().fg(theme.highlight),
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(theme.muted),
            Style::default().fg(theme.foreground),
        )
    };

    // Shrink to the label plus padding and borders
    let width = (label.chars().count() as u16 + 4).min(area.width);
    let area = Rect { width, ..area };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(format!(" {label} "))
            .style(text_style)
            .block(block),
        area,
    );
}
