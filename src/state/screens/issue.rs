//! Read-only issue detail with a scrollable description

use crate::state::{Issue, Signal};
use crossterm::event::{KeyCode, KeyEvent};

/// Rows used by the header, title and help line around the description
const CHROME_HEIGHT: u16 = 12;

/// Columns reserved for the viewport border and padding
const CHROME_WIDTH: u16 = 4;

#[derive(Debug, Clone)]
pub struct IssueScreen {
    issue: Issue,
    scroll: usize,
    viewport_width: u16,
    viewport_height: u16,
}

impl IssueScreen {
    pub fn new(issue: Issue, width: u16, height: u16) -> Self {
        let mut screen = Self {
            issue,
            scroll: 0,
            viewport_width: 1,
            viewport_height: 1,
        };
        screen.set_size(width, height);
        screen
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    /// First visible description line
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.viewport_width = width.saturating_sub(CHROME_WIDTH).max(1);
        self.viewport_height = height.saturating_sub(CHROME_HEIGHT).max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Description split into lines that fit the viewport width
    pub fn lines(&self) -> Vec<String> {
        let width = self.viewport_width as usize;
        self.issue
            .description
            .lines()
            .flat_map(|line| {
                let chars: Vec<char> = line.chars().collect();
                if chars.is_empty() {
                    return vec![String::new()];
                }
                chars
                    .chunks(width)
                    .map(|chunk| chunk.iter().collect())
                    .collect()
            })
            .collect()
    }

    fn max_scroll(&self) -> usize {
        self.lines()
            .len()
            .saturating_sub(self.viewport_height as usize)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Signal> {
        let page = self.viewport_height as usize;
        let max = self.max_scroll();

        self.scroll = match key.code {
            KeyCode::Char('t') => return Some(Signal::TimeEntryRequested(self.issue.clone())),
            KeyCode::Up | KeyCode::Char('k') => self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (self.scroll + 1).min(max),
            KeyCode::PageUp => self.scroll.saturating_sub(page),
            KeyCode::PageDown => (self.scroll + page).min(max),
            KeyCode::Home => 0,
            KeyCode::End => max,
            _ => self.scroll,
        };
        None
    }
}
