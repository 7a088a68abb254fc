//! UI module for rendering the TUI

mod components;
mod forms;
mod issue;
mod issue_list;
mod layout;
mod loading;
mod search;
mod theme;
mod widgets;

pub use theme::Theme;

use crate::app::App;
use crate::state::Screen;
use components::render_error_dialog;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        area,
    );

    let (title_area, content_area, hint_area) = layout::create_layout(area);
    layout::draw_title(frame, title_area, app);
    let content_area = layout::draw_content_frame(frame, content_area, app);

    match app.active_screen() {
        Some(Screen::Search(screen)) => search::draw(frame, content_area, screen, theme),
        Some(Screen::Loading(screen)) => loading::draw(frame, content_area, screen, theme),
        Some(Screen::List(screen)) => issue_list::draw(frame, content_area, screen, theme),
        Some(Screen::Issue(screen)) => issue::draw(frame, content_area, screen, theme),
        Some(Screen::TimeEntry(form)) => {
            forms::draw_time_entry(frame, content_area, form, theme)
        }
        None => {}
    }

    layout::draw_hint_bar(frame, hint_area, app);

    if let Some(error) = app.current_error() {
        render_error_dialog(frame, theme, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::AppEvent;
    use crate::state::{Issue, Project, TimeEntryForm};
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::collections::BTreeMap;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn issue() -> Issue {
        Issue {
            id: 314,
            link: "https://redmine.example/issues/314".to_string(),
            author: "Frank".to_string(),
            title: "Crash on save".to_string(),
            project: Some(Project {
                id: 2,
                name: "Desktop".to_string(),
            }),
            description: "Steps to reproduce".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    /// Drive an app through search, list and issue detail
    fn app_on_issue() -> App {
        let mut app = App::new(Theme::default(), Vec::new(), Some("crash".to_string()))
            .with_today(today);
        let id = app.init()[0].id();
        app.handle_event(AppEvent::SearchCompleted {
            id,
            result: Ok(vec![issue()]),
        });
        app.handle_event(key(KeyCode::Enter));
        app
    }

    #[test]
    fn test_search_screen_renders_title_and_favorites() {
        let favorites = crate::state::favorites(&[], None);
        let app = App::new(Theme::default(), favorites, None);
        let screen = render(&app);

        assert!(screen.contains("RMT - Redmine Management Tool"));
        assert!(screen.contains("Search issues:"));
        assert!(screen.contains("My open issues"));
    }

    #[test]
    fn test_list_screen_renders_issue() {
        let mut app = App::new(Theme::default(), Vec::new(), Some("crash".to_string()));
        let id = app.init()[0].id();
        app.handle_event(AppEvent::SearchCompleted {
            id,
            result: Ok(vec![issue()]),
        });
        let screen = render(&app);

        assert!(screen.contains("#314 Crash on save"));
        assert!(screen.contains("Steps to reproduce"));
    }

    #[test]
    fn test_issue_screen_renders_details() {
        let app = app_on_issue();
        let screen = render(&app);

        assert!(screen.contains("Desktop"));
        assert!(screen.contains("https://redmine.example/issues/314"));
        assert!(screen.contains("by Frank"));
    }

    #[test]
    fn test_time_entry_form_renders_fields() {
        let mut app = app_on_issue();
        let id = app.handle_event(key(KeyCode::Char('t')))[0].id();
        let form = TimeEntryForm::new(
            issue(),
            BTreeMap::from([(9, "Development".to_string())]),
            today(),
        );
        app.handle_event(AppEvent::FormOpened {
            id,
            result: Ok(Box::new(form)),
        });
        let screen = render(&app);

        assert!(screen.contains("TIME ENTRY"));
        assert!(screen.contains("May 2024"));
        assert!(screen.contains("1.00"));
        assert!(screen.contains("Development"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_error_dialog_is_drawn_on_top() {
        let mut app = App::new(Theme::default(), Vec::new(), None);
        app.push_error("connection refused");
        let screen = render(&app);

        assert!(screen.contains("Error"));
        assert!(screen.contains("connection refused"));
        assert!(screen.contains("to dismiss"));
    }
}
