//! Month-grid date picker

use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Calendar date picker with keyboard navigation
#[derive(Debug, Clone)]
pub struct DatePicker {
    selected: NaiveDate,
    /// Always the first day of the displayed month
    view_month: NaiveDate,
    today: NaiveDate,
    focused: bool,
}

impl DatePicker {
    /// Create a picker with `today` selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected: today,
            view_month: first_of_month(today),
            today,
            focused: false,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn view_month(&self) -> NaiveDate {
        self.view_month
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Apply a key press. Ignored while blurred.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.focused {
            return;
        }

        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let moved = match key.code {
            KeyCode::Left if shift => self.selected.checked_sub_months(Months::new(1)),
            KeyCode::Right if shift => self.selected.checked_add_months(Months::new(1)),
            KeyCode::Left => self.selected.checked_sub_days(Days::new(1)),
            KeyCode::Right => self.selected.checked_add_days(Days::new(1)),
            KeyCode::Up => self.selected.checked_sub_days(Days::new(7)),
            KeyCode::Down => self.selected.checked_add_days(Days::new(7)),
            KeyCode::Home => Some(self.today),
            _ => None,
        };

        if let Some(date) = moved {
            self.select(date);
        }
    }

    fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        if date.year() != self.view_month.year() || date.month() != self.view_month.month() {
            self.view_month = first_of_month(date);
        }
    }

    /// Day grid of the viewed month, Monday first.
    ///
    /// `None` cells are leading blanks before day one; the last row is not
    /// padded.
    pub fn calendar_rows(&self) -> Vec<Vec<Option<u32>>> {
        calendar_rows(self.view_month)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Monday-first grid for the month starting at `first`
pub fn calendar_rows(first: NaiveDate) -> Vec<Vec<Option<u32>>> {
    let first = first_of_month(first);
    let blanks = first.weekday().num_days_from_monday() as usize;

    let mut rows = Vec::new();
    let mut row: Vec<Option<u32>> = vec![None; blanks];

    for day in 1..=days_in_month(first) {
        row.push(Some(day));
        if row.len() == 7 {
            rows.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows
}
