//! Layout components (title, content frame, hint bar)

use super::widgets::hint_line;
use crate::app::App;
use crate::state::{FilterState, FormFocus, FormState, Screen, SearchFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Application title shown above every screen
pub const TITLE: &str = "RMT - Redmine Management Tool";

/// Split the terminal into title, content and hint rows
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Hints
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title row with the active screen name
pub fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let line = Line::from(vec![
        Span::styled(
            format!(" {TITLE} "),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("› {}", app.active_kind().label()),
            Style::default().fg(theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Bordered frame around the screen content; returns the inner area
pub fn draw_content_frame(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let theme = app.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .padding(ratatui::widgets::Padding::horizontal(1));
    // Screens draw inside the border and padding
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Draw the keyboard hints of the active screen
pub fn draw_hint_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = app.active_screen().map(screen_hints).unwrap_or_default();
    let line = hint_line(app.theme(), &hints);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme().background_alt)),
        area,
    );
}

/// Keyboard hints for a screen in its current state
pub fn screen_hints(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    match screen {
        Screen::Search(search) => match search.focus() {
            SearchFocus::Input => vec![
                ("Enter", "search"),
                ("Tab", "favorites"),
                ("Esc", "clear"),
                ("^C", "quit"),
            ],
            SearchFocus::Favorites => vec![
                ("↑/↓", "select"),
                ("Enter", "open favorite"),
                ("Tab", "search"),
                ("^C", "quit"),
            ],
        },
        Screen::Loading(_) => vec![("Esc", "cancel"), ("^C", "quit")],
        Screen::List(list) => match list.filter_state() {
            FilterState::Filtering => vec![("Enter", "apply filter"), ("/", "reset")],
            FilterState::Unfiltered | FilterState::Applied => vec![
                ("↑/↓/j/k", "move"),
                ("Enter", "open"),
                ("t", "log time"),
                ("/", "filter"),
                ("Esc", "back"),
                ("^F", "new search"),
            ],
        },
        Screen::Issue(_) => vec![
            ("↑/↓/j/k", "scroll"),
            ("PgUp/PgDn", "page"),
            ("Home/End", "jump"),
            ("t", "log time"),
            ("Esc", "back"),
        ],
        Screen::TimeEntry(form) => match form.state() {
            FormState::Editing => {
                let mut hints = vec![("Tab/Shift+Tab", "next/previous field")];
                hints.extend(match form.focus() {
                    FormFocus::Date => vec![("←/→/↑/↓", "day/week"), ("Shift+←/→", "month")],
                    FormFocus::Hours => vec![("←/→", "adjust"), ("1-8", "hours")],
                    FormFocus::Description => vec![("^U", "clear")],
                    FormFocus::Activity => vec![("↑/↓", "select")],
                    FormFocus::Submit => vec![("Enter", "submit")],
                });
                hints.push(("Esc", "back"));
                hints
            }
            FormState::Submitting => vec![("^C", "quit")],
            FormState::Completed => vec![("any key", "return to issue")],
            FormState::Error(_) => vec![("Enter", "try again"), ("any key", "return to issue")],
        },
    }
}
