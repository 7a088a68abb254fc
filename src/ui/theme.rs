//! Colour theme shared by every draw function

use ratatui::style::Color;

const RED: Color = Color::Rgb(0xf7, 0x76, 0x8e);
const YELLOW: Color = Color::Rgb(0xe0, 0xaf, 0x68);
const GREEN: Color = Color::Rgb(0x9e, 0xce, 0x6a);
const LIGHT_GREEN: Color = Color::Rgb(0x73, 0xda, 0xca);
const BLUE_CYAN: Color = Color::Rgb(0x2a, 0xc3, 0xde);
const SKY_BLUE: Color = Color::Rgb(0x7d, 0xcf, 0xff);
const MAGENTA: Color = Color::Rgb(0xbb, 0x9a, 0xf7);
const WHITE: Color = Color::Rgb(0xc0, 0xca, 0xf5);
const COMMENT: Color = Color::Rgb(0x56, 0x5f, 0x89);
const TERMINAL_BLACK: Color = Color::Rgb(0x41, 0x48, 0x68);
const BG_STORM: Color = Color::Rgb(0x24, 0x28, 0x3b);
const BG_NIGHT: Color = Color::Rgb(0x1a, 0x1b, 0x26);

/// Semantic colour roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub background: Color,
    pub background_alt: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,
    pub link: Color,
}

impl Theme {
    /// Tokyo Night palette
    pub const fn tokyo_night() -> Self {
        Self {
            secondary: SKY_BLUE,
            success: GREEN,
            warning: YELLOW,
            error: RED,
            info: BLUE_CYAN,
            background: BG_NIGHT,
            background_alt: BG_STORM,
            foreground: WHITE,
            muted: COMMENT,
            border: TERMINAL_BLACK,
            highlight: MAGENTA,
            link: LIGHT_GREEN,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}
