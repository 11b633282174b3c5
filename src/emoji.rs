//! Emoji catalog and picker state.
//!
//! The picker shows a filtered grid of emojis. Typing narrows the list by
//! name or keyword, arrow keys move through the grid, and the chosen glyph is
//! handed to [`crate::state::TodoState::insert_emoji`].

/// Single emoji entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emoji {
    pub glyph: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

const fn emoji(glyph: &'static str, name: &'static str, keywords: &'static [&'static str]) -> Emoji {
    Emoji { glyph, name, keywords }
}

/// Every emoji the picker offers, in display order.
pub const CATALOG: &[Emoji] = &[
    emoji("😊", "smiling face", &["smile", "happy", "blush"]),
    emoji("😀", "grinning face", &["grin", "happy"]),
    emoji("😂", "tears of joy", &["laugh", "lol", "funny"]),
    emoji("😍", "heart eyes", &["love", "crush"]),
    emoji("😎", "sunglasses", &["cool"]),
    emoji("🤔", "thinking face", &["think", "hmm"]),
    emoji("😴", "sleeping face", &["sleep", "tired", "zzz"]),
    emoji("😢", "crying face", &["sad", "tear"]),
    emoji("😡", "angry face", &["angry", "mad"]),
    emoji("🥳", "partying face", &["party", "celebrate", "birthday"]),
    emoji("👍", "thumbs up", &["ok", "yes", "approve"]),
    emoji("👎", "thumbs down", &["no", "disapprove"]),
    emoji("👏", "clapping hands", &["clap", "applause"]),
    emoji("🙏", "folded hands", &["please", "thanks", "pray"]),
    emoji("💪", "flexed biceps", &["strong", "gym", "workout"]),
    emoji("👋", "waving hand", &["hello", "bye", "wave"]),
    emoji("❤️", "red heart", &["love", "heart"]),
    emoji("⭐", "star", &["favourite", "important"]),
    emoji("🔥", "fire", &["hot", "urgent", "lit"]),
    emoji("✅", "check mark", &["done", "complete", "tick"]),
    emoji("❌", "cross mark", &["cancel", "wrong", "no"]),
    emoji("⚠️", "warning", &["caution", "alert"]),
    emoji("❗", "exclamation", &["important", "urgent"]),
    emoji("❓", "question mark", &["question", "unsure"]),
    emoji("💡", "light bulb", &["idea", "tip"]),
    emoji("📌", "pushpin", &["pin", "remember"]),
    emoji("📅", "calendar", &["date", "schedule", "appointment"]),
    emoji("⏰", "alarm clock", &["time", "deadline", "wake"]),
    emoji("📝", "memo", &["note", "write", "todo"]),
    emoji("📞", "telephone", &["call", "phone"]),
    emoji("📧", "e-mail", &["email", "mail", "message"]),
    emoji("💻", "laptop", &["computer", "work", "code"]),
    emoji("📚", "books", &["read", "study", "library"]),
    emoji("🛒", "shopping cart", &["shop", "groceries", "buy"]),
    emoji("💰", "money bag", &["money", "pay", "bills"]),
    emoji("🏠", "house", &["home", "chores"]),
    emoji("🧹", "broom", &["clean", "sweep", "chores"]),
    emoji("🧺", "basket", &["laundry", "picnic"]),
    emoji("🍎", "red apple", &["fruit", "food", "healthy"]),
    emoji("🥛", "glass of milk", &["milk", "drink", "groceries"]),
    emoji("🍕", "pizza", &["food", "dinner"]),
    emoji("☕", "hot beverage", &["coffee", "tea", "break"]),
    emoji("🎂", "birthday cake", &["birthday", "cake", "party"]),
    emoji("🎉", "party popper", &["party", "celebrate", "tada"]),
    emoji("🎁", "wrapped gift", &["gift", "present", "birthday"]),
    emoji("🏃", "person running", &["run", "exercise", "jog"]),
    emoji("🚲", "bicycle", &["bike", "cycle", "ride"]),
    emoji("🚗", "automobile", &["car", "drive"]),
    emoji("✈️", "airplane", &["travel", "flight", "trip"]),
    emoji("🚀", "rocket", &["launch", "ship", "fast"]),
    emoji("🐶", "dog face", &["dog", "pet", "walk"]),
    emoji("🐱", "cat face", &["cat", "pet"]),
    emoji("🌱", "seedling", &["plant", "garden", "grow"]),
    emoji("☀️", "sun", &["sunny", "weather", "day"]),
    emoji("🌙", "crescent moon", &["night", "moon", "sleep"]),
    emoji("💊", "pill", &["medicine", "doctor", "health"]),
    emoji("🎵", "musical note", &["music", "song"]),
    emoji("🎮", "video game", &["game", "play"]),
];

/// Return catalog entries whose name or a keyword contains `query`.
///
/// Matching is case-insensitive; a blank query returns the whole catalog.
pub fn search(query: &str) -> Vec<&'static Emoji> {
    let query = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|e| {
            query.is_empty()
                || e.name.contains(&query)
                || e.keywords.iter().any(|k| k.contains(&query))
        })
        .collect()
}

/// Selection state of the emoji picker.
#[derive(Debug, Clone, Default)]
pub struct EmojiPicker {
    pub query: String,
    pub selected: usize,
}

impl EmojiPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emojis matching the current query.
    pub fn matches(&self) -> Vec<&'static Emoji> {
        search(&self.query)
    }

    /// The emoji under the cursor, if the filter matched anything.
    pub fn current(&self) -> Option<&'static Emoji> {
        self.matches().get(self.selected).copied()
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.clamp();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.clamp();
    }

    /// Forget the query and selection, for the next time the picker opens.
    pub fn reset(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.matches().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self, columns: usize) {
        if self.selected >= columns {
            self.selected -= columns;
        }
    }

    pub fn move_down(&mut self, columns: usize) {
        let len = self.matches().len();
        if self.selected + columns < len {
            self.selected += columns;
        }
    }

    fn clamp(&mut self) {
        let len = self.matches().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_returns_catalog() {
        assert_eq!(search("").len(), CATALOG.len());
        assert_eq!(search("   ").len(), CATALOG.len());
    }

    #[test]
    fn test_search_by_keyword_and_name() {
        let party: Vec<&str> = search("party").iter().map(|e| e.glyph).collect();
        assert!(party.contains(&"🥳"));
        assert!(party.contains(&"🎉"));
        assert!(party.contains(&"🎂"));

        let milk = search("MILK");
        assert_eq!(milk.len(), 1);
        assert_eq!(milk[0].glyph, "🥛");
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(search("zebra crossing").is_empty());
    }

    #[test]
    fn test_catalog_glyphs_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.glyph, b.glyph);
            }
        }
    }

    #[test]
    fn test_picker_grid_movement() {
        let mut picker = EmojiPicker::new();
        picker.move_left();
        assert_eq!(picker.selected, 0);
        picker.move_right();
        picker.move_down(8);
        assert_eq!(picker.selected, 9);
        picker.move_up(8);
        assert_eq!(picker.selected, 1);
        picker.move_up(8);
        assert_eq!(picker.selected, 1);
        assert_eq!(picker.current().unwrap().glyph, CATALOG[1].glyph);
    }

    #[test]
    fn test_picker_stops_at_end() {
        let mut picker = EmojiPicker::new();
        picker.selected = CATALOG.len() - 1;
        picker.move_right();
        assert_eq!(picker.selected, CATALOG.len() - 1);
        picker.move_down(4);
        assert_eq!(picker.selected, CATALOG.len() - 1);
    }

    #[test]
    fn test_picker_clamps_when_filter_narrows() {
        let mut picker = EmojiPicker::new();
        picker.selected = 20;
        for c in "milk".chars() {
            picker.push_query(c);
        }
        assert_eq!(picker.selected, 0);
        assert_eq!(picker.current().unwrap().glyph, "🥛");

        picker.push_query('z');
        assert!(picker.current().is_none());
        picker.pop_query();
        assert!(picker.current().is_some());

        picker.reset();
        assert!(picker.query.is_empty());
        assert_eq!(picker.selected, 0);
    }
}
