//! Quarter-hour duration picker

use crossterm::event::{KeyCode, KeyEvent};

/// Number of selectable durations (0.25 to 8.00 in quarter-hour steps)
pub const HOURS_OPTION_COUNT: usize = 32;

/// Index of the default selection (1.00 hours)
pub const DEFAULT_HOURS_INDEX: usize = 3;

/// Number of options visible at once
pub const VISIBLE_OPTIONS: usize = 7;

/// Range of options currently shown, with overflow markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursWindow {
    pub start: usize,
    pub end: usize,
    /// More options exist before `start`
    pub has_left: bool,
    /// More options exist at or after `end`
    pub has_right: bool,
}

#[derive(Debug, Clone)]
pub struct HoursSelector {
    options: Vec<f64>,
    selected_index: usize,
    focused: bool,
}

impl Default for HoursSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl HoursSelector {
    pub fn new() -> Self {
        Self {
            options: (1..=HOURS_OPTION_COUNT).map(|q| q as f64 * 0.25).collect(),
            selected_index: DEFAULT_HOURS_INDEX,
            focused: false,
        }
    }

    pub fn options(&self) -> &[f64] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Currently selected number of hours
    pub fn value(&self) -> f64 {
        self.options[self.selected_index]
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

    fn last_index(&self) -> usize {
        self.options.len() - 1
    }

    /// Apply a key press. Ignored while blurred.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.focused {
            return;
        }

        match key.code {
            KeyCode::Left => self.selected_index = self.selected_index.saturating_sub(1),
            KeyCode::Right => {
                self.selected_index = (self.selected_index + 1).min(self.last_index())
            }
            KeyCode::Home => self.selected_index = 0,
            KeyCode::End => self.selected_index = self.last_index(),
            KeyCode::Char(c @ '1'..='8') => {
                let hour = c.to_digit(10).map(f64::from).unwrap_or_default();
                if let Some(index) = self.options.iter().position(|v| v.trunc() == hour) {
                    self.selected_index = index;
                }
            }
            _ => {}
        }
    }

    /// Window of up to seven options around the selection.
    ///
    /// Starts three options before the selection and is shifted back inside
    /// the option list when it would overflow either end.
    pub fn visible_window(&self) -> HoursWindow {
        let len = self.options.len();
        let width = VISIBLE_OPTIONS.min(len);
        let start = self
            .selected_index
            .saturating_sub(3)
            .min(len.saturating_sub(width));
        let end = start + width;

        HoursWindow {
            start,
            end,
            has_left: start > 0,
            has_right: end < len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused() -> HoursSelector {
        let mut selector = HoursSelector::new();
        selector.focus();
        selector
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_quarter_hour_range() {
            let selector = HoursSelector::new();
            assert_eq!(selector.options().len(), 32);
            assert_eq!(selector.options()[0], 0.25);
            assert_eq!(selector.options()[31], 8.0);
        }

        #[test]
        fn test_default_is_one_hour() {
            let selector = HoursSelector::new();
            assert_eq!(selector.selected_index(), 3);
            assert_eq!(selector.value(), 1.0);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_left_right_are_clamped() {
            let mut selector = focused();
            selector.handle_key(key(KeyCode::Home));
            selector.handle_key(key(KeyCode::Left));
            assert_eq!(selector.selected_index(), 0);

            selector.handle_key(key(KeyCode::End));
            selector.handle_key(key(KeyCode::Right));
            assert_eq!(selector.selected_index(), 31);
        }

        #[test]
        fn test_digit_jumps_to_first_matching_hour() {
            let mut selector = focused();
            selector.handle_key(key(KeyCode::Char('2')));
            assert_eq!(selector.value(), 2.0);

            selector.handle_key(key(KeyCode::Char('8')));
            assert_eq!(selector.value(), 8.0);
        }

        #[test]
        fn test_non_hour_digits_are_ignored() {
            let mut selector = focused();
            selector.handle_key(key(KeyCode::Char('9')));
            selector.handle_key(key(KeyCode::Char('0')));
            assert_eq!(selector.selected_index(), 3);
        }

        #[test]
        fn test_blurred_selector_ignores_keys() {
            let mut selector = HoursSelector::new();
            selector.handle_key(key(KeyCode::Right));
            assert_eq!(selector.selected_index(), 3);
        }
    }

    mod window {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_window_at_start() {
            let mut selector = focused();
            selector.handle_key(key(KeyCode::Home));
            assert_eq!(
                selector.visible_window(),
                HoursWindow {
                    start: 0,
                    end: 7,
                    has_left: false,
                    has_right: true
                }
            );
        }

        #[test]
        fn test_window_centres_selection() {
            let mut selector = focused();
            selector.handle_key(key(KeyCode::Char('3')));
            let window = selector.visible_window();
            assert_eq!((window.start, window.end), (8, 15));
            assert!(window.has_left && window.has_right);
        }

        #[test]
        fn test_window_at_end() {
            let mut selector = focused();
            selector.handle_key(key(KeyCode::End));
            assert_eq!(
                selector.visible_window(),
                HoursWindow {
                    start: 25,
                    end: 32,
                    has_left: true,
                    has_right: false
                }
            );
        }
    }
}
