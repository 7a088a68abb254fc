//! Issue list view

use super::widgets::render_scrollable_list;
use super::Theme;
use crate::state::{FilterState, ListScreen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Draw the filter line and the matching issues
pub fn draw(frame: &mut Frame, area: Rect, screen: &ListScreen, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let visible = screen.visible();
    frame.render_widget(
        Paragraph::new(filter_line(screen, visible.len(), theme)),
        chunks[0],
    );

    if visible.is_empty() {
        let message = if screen.issues().is_empty() {
            "No issues found."
        } else {
            "No issues match the filter."
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(theme.muted)),
            chunks[1],
        );
        return;
    }

    // Matches are marked while a filter is being typed or applied
    let filter = match screen.filter_state() {
        FilterState::Unfiltered => "",
        FilterState::Filtering | FilterState::Applied => screen.filter(),
    };
    let match_style = Style::default()
        .fg(theme.background)
        .bg(theme.warning)
        .add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, issue)| {
            let is_selected = idx == screen.selected();
            let (title_style, marker) = if is_selected {
                (
                    Style::default()
                        .fg(theme.secondary)
                        .bg(theme.background_alt)
                        .add_modifier(Modifier::BOLD),
                    "▸ ",
                )
            } else {
                (
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                    "  ",
                )
            };
            let desc_style = Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC);

            let mut title = vec![
                Span::styled(marker, Style::default().fg(theme.highlight)),
                Span::styled(format!("#{} ", issue.id), Style::default().fg(theme.info)),
            ];
            title.extend(highlight_matches(
                &issue.display_title(),
                filter,
                title_style,
                match_style,
            ));
            let mut description = vec![Span::raw("  ")];
            description.extend(highlight_matches(
                &issue.display_description(),
                filter,
                desc_style,
                match_style,
            ));

            ListItem::new(vec![
                Line::from(title),
                Line::from(description),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(issue.author.as_str(), Style::default().fg(theme.muted)),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    render_scrollable_list(frame, chunks[1], List::new(items), screen.selected());
}

fn filter_line<'a>(screen: &'a ListScreen, matches: usize, theme: &Theme) -> Line<'a> {
    let count = Span::styled(
        format!("{matches} of {} issues", screen.issues().len()),
        Style::default().fg(theme.muted),
    );

    match screen.filter_state() {
        FilterState::Unfiltered => Line::from(count),
        FilterState::Filtering => Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(theme.secondary)),
            Span::styled(screen.filter(), Style::default().fg(theme.foreground)),
            Span::styled("▌  ", Style::default().fg(theme.highlight)),
            count,
        ]),
        FilterState::Applied => Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(theme.secondary)),
            Span::styled(
                screen.filter(),
                Style::default().fg(theme.background).bg(theme.warning),
            ),
            Span::raw("  "),
            count,
        ]),
    }
}

/// Split `text` into spans, styling case-insensitive occurrences of `filter`
fn highlight_matches(text: &str, filter: &str, base: Style, hit: Style) -> Vec<Span<'static>> {
    let needle: Vec<char> = filter.chars().collect();
    if needle.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let chars: Vec<char> = text.chars().collect();
    let same = |a: char, b: char| a.to_lowercase().eq(b.to_lowercase());
    let collect = |range: &[char]| range.iter().collect::<String>();

    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let end = i + needle.len();
        if chars[i..end].iter().zip(&needle).all(|(&a, &b)| same(a, b)) {
            if start < i {
                spans.push(Span::styled(collect(&chars[start..i]), base));
            }
            spans.push(Span::styled(collect(&chars[i..end]), hit));
            start = end;
            i = end;
        } else {
            i += 1;
        }
    }
    if start < chars.len() {
        spans.push(Span::styled(collect(&chars[start..]), base));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn parts(spans: &[Span]) -> Vec<(String, bool)> {
        spans
            .iter()
            .map(|s| (s.content.to_string(), s.style.bg == Some(Color::Yellow)))
            .collect()
    }

    fn hit() -> Style {
        Style::default().bg(Color::Yellow)
    }

    #[test]
    fn test_highlight_marks_every_match_ignoring_case() {
        let spans = highlight_matches("Login fails on login page", "LOGIN", Style::default(), hit());
        assert_eq!(
            parts(&spans),
            vec![
                ("Login".to_string(), true),
                (" fails on ".to_string(), false),
                ("login".to_string(), true),
                (" page".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_highlight_without_filter_is_one_span() {
        let spans = highlight_matches("Crash on save", "", Style::default(), hit());
        assert_eq!(parts(&spans), vec![("Crash on save".to_string(), false)]);
    }

    #[test]
    fn test_highlight_without_match_keeps_text() {
        let spans = highlight_matches("Crash", "zzz", Style::default(), hit());
        assert_eq!(parts(&spans), vec![("Crash".to_string(), false)]);
    }
}
