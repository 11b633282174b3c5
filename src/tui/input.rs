//! Input field handling for the terminal user interface.

use crate::text::remap_cursor;

/// A single-line text input with a cursor.
///
/// The cursor counts characters, not bytes, so emoji and other multi-byte
/// characters are edited as one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field with initial text, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.byte_index(self.cursor)]
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Take over `corrected`, which was derived from this field's value,
    /// keeping the cursor next to the text it was next to.
    pub fn sync_corrected(&mut self, corrected: &str) {
        if corrected != self.value {
            self.cursor = remap_cursor(&self.value, corrected, self.cursor);
            self.value = corrected.to_string();
        }
    }

    /// Replace the value outright and park the cursor at the end.
    pub fn reset_to(&mut self, value: &str) {
        *self = Self::with_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut field = InputField::new();
        for c in "a😊b".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.cursor, 3);
        field.move_cursor_left();
        field.handle_backspace();
        assert_eq!(field.value, "ab");
        assert_eq!(field.cursor, 1);
        assert_eq!(field.before_cursor(), "a");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut field = InputField::with_value("héllo");
        field.move_home();
        field.move_cursor_right();
        field.handle_delete();
        assert_eq!(field.value, "hllo");
        field.move_end();
        field.handle_delete();
        assert_eq!(field.value, "hllo");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut field = InputField::with_value("ab");
        field.move_cursor_right();
        assert_eq!(field.cursor, 2);
        field.move_home();
        field.move_cursor_left();
        assert_eq!(field.cursor, 0);
        field.handle_backspace();
        assert_eq!(field.value, "ab");
    }

    #[test]
    fn test_sync_corrected_moves_cursor_with_text() {
        let mut field = InputField::with_value("fix tod");
        field.sync_corrected("fix to-do");
        assert_eq!(field.value, "fix to-do");
        assert_eq!(field.cursor, 9);

        let mut field = InputField::with_value("tod list");
        field.cursor = 6;
        field.sync_corrected("to-do list");
        assert_eq!(field.cursor, 8);
    }

    #[test]
    fn test_reset_to() {
        let mut field = InputField::with_value("abc");
        field.move_home();
        field.reset_to("");
        assert_eq!(field, InputField::new());
    }
}
