//! Issue list with an incremental filter

use crate::state::{Issue, Signal};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Filter lifecycle of the issue list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    /// Keystrokes edit the filter query
    Filtering,
    /// Query applied, navigation keys active again
    Applied,
}

#[derive(Debug, Clone)]
pub struct ListScreen {
    issues: Vec<Issue>,
    filter: String,
    filter_state: FilterState,
    selected: usize,
}

impl ListScreen {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            filter: String::new(),
            filter_state: FilterState::default(),
            selected: 0,
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    /// Index into [`Self::visible`] of the highlighted issue
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Issues matching the current filter, in result order
    pub fn visible(&self) -> Vec<&Issue> {
        if self.filter_state == FilterState::Unfiltered || self.filter.is_empty() {
            return self.issues.iter().collect();
        }

        let needle = self.filter.to_lowercase();
        self.issues
            .iter()
            .filter(|issue| issue.filter_value().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_issue(&self) -> Option<&Issue> {
        self.visible().get(self.selected).copied()
    }

    fn reset_filter(&mut self) {
        self.filter.clear();
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Signal> {
        if key.code == KeyCode::Char('/') {
            self.reset_filter();
            self.filter_state = match self.filter_state {
                FilterState::Filtering => FilterState::Unfiltered,
                FilterState::Unfiltered | FilterState::Applied => FilterState::Filtering,
            };
            return None;
        }

        if self.filter_state == FilterState::Filtering {
            self.handle_filter_key(key);
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.visible().len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => self.selected_issue().cloned().map(Signal::IssueSelected),
            KeyCode::Char('t') => self
                .selected_issue()
                .cloned()
                .map(Signal::TimeEntryRequested),
            _ => None,
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.filter_state = if self.filter.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::Applied
                };
            }
            KeyCode::Backspace => {
                self.filter.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.filter.push(c);
            }
            _ => {}
        }
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn issue(n: u32) -> Issue {
        Issue {
            id: n,
            link: format!("L{n}"),
            author: format!("A{n}"),
            title: format!("T{n}"),
            project: None,
            description: String::new(),
        }
    }

    fn screen() -> ListScreen {
        ListScreen::new(vec![issue(1), issue(2)])
    }

    fn type_text(screen: &mut ListScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    mod filtering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_slash_then_query_leaves_one_match() {
            let mut list = screen();
            assert_eq!(list.issues()[0].filter_value(), "L1 A1 T1");

            list.handle_key(key(KeyCode::Char('/')));
            type_text(&mut list, "T1");

            assert_eq!(list.filter_state(), FilterState::Filtering);
            let visible: Vec<u32> = list.visible().iter().map(|i| i.id).collect();
            assert_eq!(visible, vec![1]);
        }

        #[test]
        fn test_filter_is_case_insensitive() {
            let mut list = screen();
            list.handle_key(key(KeyCode::Char('/')));
            type_text(&mut list, "a2");
            assert_eq!(list.visible().len(), 1);
            assert_eq!(list.visible()[0].id, 2);
        }

        #[test]
        fn test_slash_while_filtering_resets() {
            let mut list = screen();
            list.handle_key(key(KeyCode::Char('/')));
            type_text(&mut list, "T1");
            list.handle_key(key(KeyCode::Char('/')));

            assert_eq!(list.filter_state(), FilterState::Unfiltered);
            assert_eq!(list.filter(), "");
            assert_eq!(list.visible().len(), 2);
        }

        #[test]
        fn test_enter_applies_filter() {
            let mut list = screen();
            list.handle_key(key(KeyCode::Char('/')));
            type_text(&mut list, "T2");
            assert_eq!(list.handle_key(key(KeyCode::Enter)), None);

            assert_eq!(list.filter_state(), FilterState::Applied);
            assert_eq!(
                list.handle_key(key(KeyCode::Enter)),
                Some(Signal::IssueSelected(issue(2)))
            );
        }

        #[test]
        fn test_filter_keys_do_not_navigate() {
            let mut list = screen();
            list.handle_key(key(KeyCode::Char('/')));
            type_text(&mut list, "jt");
            assert_eq!(list.filter(), "jt");
            assert_eq!(list.selected(), 0);
        }

        #[test]
        fn test_backspace_edits_query() {
            let mut list = screen();
            list.handle_key(key(KeyCode::Char('/')));
            type_text(&mut list, "T1");
            list.handle_key(key(KeyCode::Backspace));
            assert_eq!(list.filter(), "T");
            assert_eq!(list.visible().len(), 2);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_down_is_clamped() {
            let mut list = screen();
            list.handle_key(key(KeyCode::Down));
            list.handle_key(key(KeyCode::Char('j')));
            assert_eq!(list.selected(), 1);
            list.handle_key(key(KeyCode::Up));
            list.handle_key(key(KeyCode::Char('k')));
            assert_eq!(list.selected(), 0);
        }

        #[test]
        fn test_t_requests_time_entry() {
            let mut list = screen();
            list.handle_key(key(KeyCode::Down));
            assert_eq!(
                list.handle_key(key(KeyCode::Char('t'))),
                Some(Signal::TimeEntryRequested(issue(2)))
            );
        }

        #[test]
        fn test_empty_list_emits_nothing() {
            let mut list = ListScreen::new(Vec::new());
            assert_eq!(list.handle_key(key(KeyCode::Enter)), None);
            assert_eq!(list.handle_key(key(KeyCode::Char('t'))), None);
        }
    }
}
