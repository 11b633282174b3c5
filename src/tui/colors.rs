//! Color constants for the terminal user interface.

use ratatui::style::Color;

use crate::fields::Theme;

pub const PINK: Color = Color::Rgb(255, 192, 203);
pub const LIGHT_YELLOW: Color = Color::Rgb(255, 255, 224);
pub const CHARCOAL: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const DARK_PANEL: Color = Color::Rgb(0x44, 0x44, 0x44);
pub const DARK_INPUT: Color = Color::Rgb(0x55, 0x55, 0x55);
/// Used for the heart in the footer
pub const HEART_RED: Color = Color::Rgb(220, 20, 60);

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub input: Color,
    pub text: Color,
    /// Text on panels and in the input box
    pub panel_text: Color,
    pub muted: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: PINK,
                panel: LIGHT_YELLOW,
                input: Color::White,
                text: Color::Black,
                panel_text: Color::Black,
                muted: Color::DarkGray,
                highlight: Color::Rgb(255, 215, 0),
            },
            Theme::Dark => Palette {
                background: CHARCOAL,
                panel: DARK_PANEL,
                input: DARK_INPUT,
                text: Color::White,
                panel_text: Color::White,
                muted: Color::Gray,
                highlight: Color::Rgb(86, 60, 92),
            },
        }
    }
}
