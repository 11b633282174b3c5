//! Task data structure.
//!
//! A `Task` is a single line of user text with its creation timestamp baked in,
//! plus a completion flag. The text never changes after construction.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::text::format_timestamp;

/// A to-do item as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Build a task from draft text, stamped with `created_at`.
    ///
    /// Returns `None` when the draft is blank. Otherwise the draft is kept as
    /// typed, surrounding whitespace included.
    pub fn new(draft: &str, created_at: NaiveDateTime) -> Option<Self> {
        if draft.trim().is_empty() {
            return None;
        }
        Some(Task {
            text: format!("{} - {}", draft, format_timestamp(&created_at)),
            completed: false,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
