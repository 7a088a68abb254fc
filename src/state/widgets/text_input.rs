//! Single-line text input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default character limit of a text input
pub const DEFAULT_CHAR_LIMIT: usize = 255;

/// Focus-gated single-line text buffer with a character limit
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    placeholder: String,
    char_limit: usize,
    focused: bool,
}

impl TextInput {
    /// Create an empty input with the default limit
    pub fn new(placeholder: &str) -> Self {
        Self::with_limit(placeholder, DEFAULT_CHAR_LIMIT)
    }

    /// Create an empty input holding at most `char_limit` characters
    pub fn with_limit(placeholder: &str, char_limit: usize) -> Self {
        Self {
            value: String::new(),
            placeholder: placeholder.to_string(),
            char_limit,
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Number of characters currently stored
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
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

    /// Replace the value, truncated to the limit
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
    }

    /// Push a character to the value unless the limit is reached
    pub fn push_char(&mut self, c: char) {
        if self.len() < self.char_limit {
            self.value.push(c);
        }
    }

    /// Remove the last character from the value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Apply a key press. Ignored while blurred.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.focused {
            return;
        }

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.clear(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push_char(c)
            }
            KeyCode::Backspace => self.pop_char(),
            _ => {}
        }
    }

    /// Word-wrap the value for display.
    ///
    /// Lines break after the last space that fits in `width`; a word longer
    /// than `width` is split hard.
    pub fn wrapped_lines(&self, width: usize) -> Vec<String> {
        wrap(&self.value, width)
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut rest: Vec<char> = text.chars().collect();

    while rest.len() > width {
        let window = &rest[..=width.min(rest.len() - 1)];
        let split = match window.iter().rposition(|c| *c == ' ') {
            Some(pos) if pos > 0 => pos + 1,
            _ => width,
        };
        lines.push(rest[..split].iter().collect::<String>().trim_end().to_string());
        rest = rest[split..].to_vec();
    }
    lines.push(rest.into_iter().collect());

    lines
}
