//! Application state and core logic

use crate::runtime::{AppEvent, RequestId, Task};
use crate::state::{
    Favorite, Issue, IssueScreen, ListScreen, LoadingScreen, Screen, ScreenKind, SearchQuery,
    SearchScreen, Signal,
};
use crate::ui::Theme;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::{HashMap, VecDeque};

/// Message shown while a search runs
const SEARCHING_MESSAGE: &str = "Searching issues...";

/// Main application struct
pub struct App {
    theme: Theme,
    /// Screen receiving input
    active: ScreenKind,
    /// Built screens, kept so going back does not rebuild them
    screens: HashMap<ScreenKind, Screen>,
    favorites: Vec<Favorite>,
    /// Errors waiting to be acknowledged, oldest first
    errors: VecDeque<String>,
    startup_query: Option<String>,
    next_request_id: RequestId,
    pending_search: Option<RequestId>,
    pending_form: Option<RequestId>,
    pending_submission: Option<RequestId>,
    /// Content size (columns, rows)
    size: (u16, u16),
    today: fn() -> NaiveDate,
    quit: bool,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl App {
    /// Create a new App instance showing the search screen
    pub fn new(theme: Theme, favorites: Vec<Favorite>, startup_query: Option<String>) -> Self {
        let mut screens = HashMap::new();
        screens.insert(
            ScreenKind::Search,
            Screen::Search(SearchScreen::new(favorites.clone())),
        );

        Self {
            theme,
            active: ScreenKind::Search,
            screens,
            favorites,
            errors: VecDeque::new(),
            startup_query,
            next_request_id: 0,
            pending_search: None,
            pending_form: None,
            pending_submission: None,
            size: (80, 20),
            today: local_today,
            quit: false,
        }
    }

    /// Replace the clock used for the form's initial date
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Tasks to run right after startup
    pub fn init(&mut self) -> Vec<Task> {
        match self.startup_query.take() {
            Some(query) if !query.trim().is_empty() => self.handle_signal(
                Signal::SearchSubmitted(SearchQuery::Text(query.trim().to_string())),
            ),
            _ => Vec::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn active_kind(&self) -> ScreenKind {
        self.active
    }

    pub fn active_screen(&self) -> Option<&Screen> {
        self.screens.get(&self.active)
    }

    /// Retained screen of the given kind
    pub fn screen(&self, kind: ScreenKind) -> Option<&Screen> {
        self.screens.get(&kind)
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply one event and return the work it schedules
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Task> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(width, height) => {
                self.resize(width, height);
                Vec::new()
            }
            AppEvent::Tick => {
                if let Some(screen) = self.screens.get_mut(&self.active) {
                    screen.tick();
                }
                Vec::new()
            }
            AppEvent::SearchCompleted { id, result } => {
                if !take_pending(&mut self.pending_search, id) {
                    tracing::debug!("Dropping stale search result {id}");
                    return Vec::new();
                }
                self.screens.remove(&ScreenKind::Loading);
                match result {
                    Ok(issues) => {
                        tracing::info!("Search {id} returned {} issues", issues.len());
                        self.show(Screen::List(ListScreen::new(issues)));
                    }
                    Err(message) => {
                        self.activate(ScreenKind::Search);
                        self.push_error(format!("Search failed: {message}"));
                    }
                }
                Vec::new()
            }
            AppEvent::FormOpened { id, result } => {
                if !take_pending(&mut self.pending_form, id) {
                    tracing::debug!("Dropping stale form {id}");
                    return Vec::new();
                }
                match result {
                    Ok(form) => {
                        // A replaced form can no longer receive its submission
                        self.pending_submission = None;
                        self.show(Screen::TimeEntry(form));
                    }
                    Err(message) => {
                        self.push_error(format!("Could not open time entry form: {message}"))
                    }
                }
                Vec::new()
            }
            AppEvent::TimeEntryCreated { id, result } => {
                if !take_pending(&mut self.pending_submission, id) {
                    tracing::debug!("Dropping stale submission result {id}");
                    return Vec::new();
                }
                match self.screens.get_mut(&ScreenKind::TimeEntry) {
                    Some(Screen::TimeEntry(form)) => form.apply_submission(result),
                    _ => tracing::warn!("Submission {id} finished without a form"),
                }
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Task> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Vec::new();
        }

        // Error dialog is modal
        if !self.errors.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.errors.pop_front();
            }
            return Vec::new();
        }

        if ctrl && key.code == KeyCode::Char('f') {
            self.pending_search = None;
            self.pending_form = None;
            self.screens.remove(&ScreenKind::Loading);
            self.show(Screen::Search(SearchScreen::new(self.favorites.clone())));
            return Vec::new();
        }

        if key.code == KeyCode::Esc && self.active != ScreenKind::Search {
            self.go_back();
            return Vec::new();
        }

        let signal = self
            .screens
            .get_mut(&self.active)
            .and_then(|screen| screen.handle_key(key));

        match signal {
            Some(signal) => self.handle_signal(signal),
            None => Vec::new(),
        }
    }

    fn handle_signal(&mut self, signal: Signal) -> Vec<Task> {
        match signal {
            Signal::SearchSubmitted(query) => {
                let id = self.next_id();
                self.pending_search = Some(id);
                self.pending_form = None;
                tracing::info!("Search {id}: {query:?}");
                self.show(Screen::Loading(LoadingScreen::new(SEARCHING_MESSAGE)));
                vec![Task::Search { id, query }]
            }
            Signal::IssueSelected(issue) => {
                self.pending_form = None;
                let (width, height) = self.size;
                self.show(Screen::Issue(IssueScreen::new(issue, width, height)));
                Vec::new()
            }
            Signal::TimeEntryRequested(issue) => {
                let id = self.next_id();
                self.pending_form = Some(id);
                tracing::info!("Opening time entry form for issue #{}", issue.id);
                vec![Task::OpenTimeEntryForm {
                    id,
                    issue,
                    today: (self.today)(),
                }]
            }
            Signal::SubmitTimeEntry(request) => {
                let id = self.next_id();
                self.pending_submission = Some(id);
                vec![Task::CreateTimeEntry { id, request }]
            }
            Signal::ReturnToIssue => {
                self.pending_submission = None;
                match self.screens.remove(&ScreenKind::TimeEntry) {
                    Some(Screen::TimeEntry(form)) => self.show_issue(form.issue()),
                    _ => self.activate_or_search(ScreenKind::Issue),
                }
                Vec::new()
            }
        }
    }

    fn next_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Retain a screen and make it active
    fn show(&mut self, screen: Screen) {
        let kind = screen.kind();
        self.screens.insert(kind, screen);
        self.activate(kind);
    }

    fn activate(&mut self, kind: ScreenKind) {
        if self.active != kind {
            tracing::debug!("Screen {} -> {}", self.active.label(), kind.label());
        }
        self.active = kind;
    }

    fn activate_or_search(&mut self, kind: ScreenKind) {
        if self.screens.contains_key(&kind) {
            self.activate(kind);
        } else {
            self.activate(ScreenKind::Search);
        }
    }

    fn go_back(&mut self) {
        self.pending_form = None;
        match self.active {
            ScreenKind::Loading => {
                self.pending_search = None;
                self.screens.remove(&ScreenKind::Loading);
            }
            ScreenKind::TimeEntry => {
                if let Some(Screen::TimeEntry(form)) = self.screens.get(&ScreenKind::TimeEntry) {
                    let issue = form.issue().clone();
                    self.show_issue(&issue);
                    return;
                }
            }
            _ => {}
        }
        self.activate_or_search(self.active.previous());
    }

    /// Activate the detail screen of `issue`, rebuilding it when another
    /// issue's screen is retained
    fn show_issue(&mut self, issue: &Issue) {
        let retained = matches!(
            self.screens.get(&ScreenKind::Issue),
            Some(Screen::Issue(screen)) if screen.issue().id == issue.id
        );
        if retained {
            self.activate(ScreenKind::Issue);
        } else {
            let (width, height) = self.size;
            self.show(Screen::Issue(IssueScreen::new(issue.clone(), width, height)));
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.size = (width.saturating_sub(2), height.saturating_sub(4));
        let (width, height) = self.size;
        for screen in self.screens.values_mut() {
            screen.set_size(width, height);
        }
    }
}

/// Clear `pending` when it holds `id`
fn take_pending(pending: &mut Option<RequestId>, id: RequestId) -> bool {
    if *pending == Some(id) {
        *pending = None;
        true
    } else {
        false
    }
}
