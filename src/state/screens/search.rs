//! Search screen: free-text query plus favourite queries

use crate::state::{Favorite, SearchQuery, Signal, TextInput};
use crossterm::event::{KeyCode, KeyEvent};

/// Character limit of the search input
pub const SEARCH_CHAR_LIMIT: usize = 256;

/// Which part of the search screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Input,
    Favorites,
}

impl SearchFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Input => Self::Favorites,
            Self::Favorites => Self::Input,
        };
    }
}

#[derive(Debug, Clone)]
pub struct SearchScreen {
    pub input: TextInput,
    favorites: Vec<Favorite>,
    selected_favorite: usize,
    focus: SearchFocus,
}

impl SearchScreen {
    pub fn new(favorites: Vec<Favorite>) -> Self {
        let mut input = TextInput::with_limit("#1234 or search text", SEARCH_CHAR_LIMIT);
        input.focus();

        Self {
            input,
            favorites,
            selected_favorite: 0,
            focus: SearchFocus::default(),
        }
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn selected_favorite(&self) -> usize {
        self.selected_favorite
    }

    pub fn focus(&self) -> SearchFocus {
        self.focus
    }

    /// Reset the query text
    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Signal> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus.toggle();
                match self.focus {
                    SearchFocus::Input => self.input.focus(),
                    SearchFocus::Favorites => self.input.blur(),
                }
                None
            }
            KeyCode::Esc => {
                self.clear();
                None
            }
            KeyCode::Enter => self.submit(),
            _ => {
                match self.focus {
                    SearchFocus::Input => self.input.handle_key(key),
                    SearchFocus::Favorites => self.move_favorite(key.code),
                }
                None
            }
        }
    }

    fn submit(&self) -> Option<Signal> {
        match self.focus {
            SearchFocus::Input => {
                let query = self.input.value().trim();
                (!query.is_empty())
                    .then(|| Signal::SearchSubmitted(SearchQuery::Text(query.to_string())))
            }
            SearchFocus::Favorites => self
                .favorites
                .get(self.selected_favorite)
                .map(|f| Signal::SearchSubmitted(SearchQuery::Filter(f.query.clone()))),
        }
    }

    fn move_favorite(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_favorite = self.selected_favorite.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_favorite + 1 < self.favorites.len() {
                    self.selected_favorite += 1;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn favorites() -> Vec<Favorite> {
        vec![
            Favorite {
                id: 1,
                name: "Mine".to_string(),
                query: "assigned_to_id=me".to_string(),
            },
            Favorite {
                id: 2,
                name: "Team".to_string(),
                query: "project_id=3".to_string(),
            },
        ]
    }

    fn type_text(screen: &mut SearchScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_submits_text_query() {
        let mut screen = SearchScreen::new(favorites());
        type_text(&mut screen, "login");
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            Some(Signal::SearchSubmitted(SearchQuery::Text("login".to_string())))
        );
    }

    #[test]
    fn test_enter_on_empty_input_does_nothing() {
        let mut screen = SearchScreen::new(favorites());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_tab_switches_to_favorites() {
        let mut screen = SearchScreen::new(favorites());
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), SearchFocus::Favorites);
        assert!(!screen.input.is_focused());

        type_text(&mut screen, "x");
        assert!(screen.input.is_empty());
    }

    #[test]
    fn test_enter_on_favorite_submits_filter() {
        let mut screen = SearchScreen::new(favorites());
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.selected_favorite(), 1);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            Some(Signal::SearchSubmitted(SearchQuery::Filter(
                "project_id=3".to_string()
            )))
        );
    }

    #[test]
    fn test_esc_clears_input() {
        let mut screen = SearchScreen::new(favorites());
        type_text(&mut screen, "abc");
        screen.handle_key(key(KeyCode::Esc));
        assert!(screen.input.is_empty());
    }
}
