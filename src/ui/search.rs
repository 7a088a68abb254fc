//! Search screen view

use super::widgets::{label_style, render_scrollable_list};
use super::Theme;
use crate::state::{SearchFocus, SearchScreen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the search input and the favourites list
pub fn draw(frame: &mut Frame, area: Rect, screen: &SearchScreen, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Headline
            Constraint::Length(3), // Input
            Constraint::Length(1),
            Constraint::Min(0), // Favorites
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled("Search issues:", label_style(theme))),
        chunks[0],
    );

    draw_input(frame, chunks[1], screen, theme);
    draw_favorites(frame, chunks[3], screen, theme);
}

fn draw_input(frame: &mut Frame, area: Rect, screen: &SearchScreen, theme: &Theme) {
    let is_active = screen.focus() == SearchFocus::Input;
    let border = if is_active { theme.highlight } else { theme.muted };

    // Placeholder when empty, value plus cursor otherwise
    let line = if screen.input.is_empty() {
        Line::from(vec![
            Span::styled("▌", Style::default().fg(theme.highlight)),
            Span::styled(screen.input.placeholder(), Style::default().fg(theme.muted)),
        ])
    } else {
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(screen.input.value(), Style::default().fg(theme.foreground)),
            Span::styled(cursor, Style::default().fg(theme.highlight)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_favorites(frame: &mut Frame, area: Rect, screen: &SearchScreen, theme: &Theme) {
    let is_active = screen.focus() == SearchFocus::Favorites;
    let border = if is_active { theme.highlight } else { theme.muted };

    let items: Vec<ListItem> = screen
        .favorites()
        .iter()
        .enumerate()
        .map(|(idx, favorite)| {
            let is_selected = is_active && idx == screen.selected_favorite();
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.highlight)),
                Span::styled(favorite.name.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Favorites ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );

    render_scrollable_list(frame, area, list, screen.selected_favorite());
}
