//! Loading screen shown while a search is in flight

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

#[derive(Debug, Clone)]
pub struct LoadingScreen {
    message: String,
    frame: usize,
}

impl LoadingScreen {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            frame: 0,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Advance the spinner by one frame
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        let mut screen = LoadingScreen::new("Searching issues...");
        assert_eq!(screen.spinner(), '|');
        for _ in 0..SPINNER_FRAMES.len() {
            screen.tick();
        }
        assert_eq!(screen.spinner(), '|');
        screen.tick();
        assert_eq!(screen.spinner(), '/');
        assert_eq!(screen.message(), "Searching issues...");
    }
}
