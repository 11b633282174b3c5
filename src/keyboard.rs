//! On-screen keyboard.
//!
//! A fixed grid of keys that can be picked with the arrow keys and appended
//! to the input, for terminals where typing some characters is awkward.

/// Key rows, top to bottom.
pub const ROWS: &[&[&str]] = &[
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &["z", "x", "c", "v", "b", "n", "m"],
    &["@", ".", ","],
];

/// All keys in reading order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    ROWS.iter().flat_map(|row| row.iter().copied())
}

/// Cursor over the key grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualKeyboard {
    pub row: usize,
    pub col: usize,
}

impl VirtualKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key under the cursor.
    pub fn current(&self) -> &'static str {
        ROWS[self.row][self.col]
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = ROWS[self.row].len() - 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.col + 1 < ROWS[self.row].len() {
            self.col += 1;
        } else if self.row + 1 < ROWS.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < ROWS.len() {
            self.row += 1;
            self.clamp_col();
        }
    }

    // Shorter rows pull the cursor back onto their last key.
    fn clamp_col(&mut self) {
        self.col = self.col.min(ROWS[self.row].len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_set() {
        let all: String = keys().collect();
        assert_eq!(all, "1234567890qwertyuiopasdfghjklzxcvbnm@.,");
        assert_eq!(keys().count(), 39);
    }

    #[test]
    fn test_horizontal_movement_wraps_rows() {
        let mut kb = VirtualKeyboard::new();
        kb.move_left();
        assert_eq!(kb.current(), "1");
        for _ in 0..10 {
            kb.move_right();
        }
        assert_eq!(kb.current(), "q");
        kb.move_left();
        assert_eq!(kb.current(), "0");
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut kb = VirtualKeyboard { row: 1, col: 9 };
        assert_eq!(kb.current(), "p");
        kb.move_down();
        assert_eq!(kb.current(), "l");
        kb.move_down();
        assert_eq!(kb.current(), "m");
        kb.move_down();
        assert_eq!(kb.current(), ",");
        kb.move_down();
        assert_eq!(kb.current(), ",");
        kb.move_up();
        assert_eq!(kb.current(), "c");
    }

    #[test]
    fn test_last_key_is_a_dead_end() {
        let mut kb = VirtualKeyboard { row: 4, col: 2 };
        kb.move_right();
        assert_eq!(kb.current(), ",");
    }
}
