//! User actions as data.
//!
//! Both front ends speak this vocabulary: the TUI turns key presses into
//! `Action`s, and `todo replay` reads them from a JSON array such as
//!
//! ```json
//! [
//!   {"action": "set_input", "text": "buy milk"},
//!   {"action": "add"},
//!   {"action": "delete", "index": 0},
//!   {"action": "undo"}
//! ]
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::state::TodoState;

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Replace the input text (one keystroke's worth of editing).
    SetInput { text: String },
    /// Append text at the end of the input (virtual keyboard).
    Append { text: String },
    /// Append an emoji and close the picker.
    InsertEmoji { emoji: String },
    /// Commit the current input.
    Add,
    /// Commit the given text directly, bypassing the input.
    AddText { text: String },
    Delete { index: usize },
    Toggle { index: usize },
    Undo,
    ToggleTheme,
    ToggleEmojiPicker,
    ToggleKeyboard,
}

impl TodoState {
    /// Apply one action. `now` is only read by the add actions.
    pub fn apply(self, action: &Action, now: NaiveDateTime) -> Self {
        match action {
            Action::SetInput { text } => self.set_input_text(text),
            Action::Append { text } => self.append_input(text),
            Action::InsertEmoji { emoji } => self.insert_emoji(emoji),
            Action::Add => self.add_task(now),
            Action::AddText { text } => self.add_task_text(text, now),
            Action::Delete { index } => self.delete_task(*index),
            Action::Toggle { index } => self.toggle_completion(*index),
            Action::Undo => self.undo(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::ToggleEmojiPicker => self.toggle_emoji_picker(),
            Action::ToggleKeyboard => self.toggle_keyboard(),
        }
    }

    /// Apply actions in order.
    pub fn apply_all<'a, I>(self, actions: I, now: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = &'a Action>,
    {
        actions
            .into_iter()
            .fold(self, |state, action| state.apply(action, now))
    }
}

/// Parse a JSON array of actions.
pub fn parse_actions(json: &str) -> serde_json::Result<Vec<Action>> {
    serde_json::from_str(json)
}
