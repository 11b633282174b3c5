//! Enumerations for user-selectable settings.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Colour scheme of the interface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Short label for the theme switch; names the theme it switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Theme::Light => "☾ Dark",
            Theme::Dark => "☀ Light",
        }
    }
}

/// Format a theme for display.
pub fn format_theme(t: Theme) -> &'static str {
    match t {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    }
}
