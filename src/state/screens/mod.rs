//! Full-terminal screens and the closed set of screen kinds

mod issue;
mod list;
mod loading;
mod search;

pub use issue::IssueScreen;
pub use list::{FilterState, ListScreen};
pub use loading::LoadingScreen;
pub use search::{SearchFocus, SearchScreen, SEARCH_CHAR_LIMIT};

use super::{Signal, TimeEntryForm};
use crossterm::event::KeyEvent;

/// Tag identifying a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Search,
    Loading,
    List,
    Issue,
    TimeEntry,
}

impl ScreenKind {
    /// Screen that Esc returns to
    pub fn previous(self) -> Self {
        match self {
            Self::Search | Self::Loading | Self::List => Self::Search,
            Self::Issue => Self::List,
            Self::TimeEntry => Self::Issue,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Loading => "Loading",
            Self::List => "Issues",
            Self::Issue => "Issue",
            Self::TimeEntry => "Log time",
        }
    }
}

/// One full-terminal view
#[derive(Debug, Clone)]
pub enum Screen {
    Search(SearchScreen),
    Loading(LoadingScreen),
    List(ListScreen),
    Issue(IssueScreen),
    TimeEntry(Box<TimeEntryForm>),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Search(_) => ScreenKind::Search,
            Self::Loading(_) => ScreenKind::Loading,
            Self::List(_) => ScreenKind::List,
            Self::Issue(_) => ScreenKind::Issue,
            Self::TimeEntry(_) => ScreenKind::TimeEntry,
        }
    }

    /// Forward a key press to the screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Signal> {
        match self {
            Self::Search(screen) => screen.handle_key(key),
            Self::Loading(_) => None,
            Self::List(screen) => screen.handle_key(key),
            Self::Issue(screen) => screen.handle_key(key),
            Self::TimeEntry(form) => form.handle_key(key),
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        if let Self::Issue(screen) = self {
            screen.set_size(width, height);
        }
    }

    pub fn tick(&mut self) {
        if let Self::Loading(screen) = self {
            screen.tick();
        }
    }
}
