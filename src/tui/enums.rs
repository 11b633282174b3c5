//! Enumerations for TUI state management.

/// Which screen is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    Main,
    Help,
}

/// Which part of the main screen receives key presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Input,
    Tasks,
    EmojiPicker,
    Keyboard,
}

impl Focus {
    /// Short name for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Focus::Input => "Input",
            Focus::Tasks => "Tasks",
            Focus::EmojiPicker => "Emoji",
            Focus::Keyboard => "Keyboard",
        }
    }
}
