//! String helpers: autocorrect, timestamp formatting and cursor bookkeeping.
//!
//! Everything here is pure. The TUI and the state transitions call into these
//! functions, none of them touch application state.

use chrono::NaiveDateTime;

/// Word substitutions applied by [`autocorrect`].
///
/// Keys are lowercase. No value may itself be a key, otherwise the
/// correction stops being idempotent.
pub const CORRECTIONS: &[(&str, &str)] = &[
    ("tod", "to-do"),
    ("ap", "app"),
    ("wrogn", "wrong"),
];

/// Look up the correction for a single word, case-insensitively.
pub fn correction_for(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    CORRECTIONS
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, to)| *to)
}

/// Replace known misspellings word by word.
///
/// Words are separated by single spaces only, so runs of spaces survive
/// untouched and the word count never changes. Replacements are lowercase.
pub fn autocorrect(text: &str) -> String {
    text.split(' ')
        .map(|word| correction_for(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a creation timestamp as `D/M/YYYY H:M:S` without zero padding.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format("%-d/%-m/%Y %-H:%-M:%-S").to_string()
}

/// Map a character cursor in `draft` onto `corrected`.
///
/// Both strings must split into the same number of space-separated words,
/// which holds for anything produced by [`autocorrect`]. A cursor sitting at
/// the end of a replaced word lands at the end of its replacement.
pub fn remap_cursor(draft: &str, corrected: &str, cursor: usize) -> usize {
    let corrected_len = corrected.chars().count();
    let before: Vec<&str> = draft.split(' ').collect();
    let after: Vec<&str> = corrected.split(' ').collect();
    if before.len() != after.len() {
        return cursor.min(corrected_len);
    }

    let mut remaining = cursor;
    let mut mapped = 0;
    for (old, new) in before.iter().zip(after.iter()) {
        let old_len = old.chars().count();
        let new_len = new.chars().count();
        if remaining <= old_len {
            let offset = if old == new {
                remaining
            } else if remaining == old_len {
                new_len
            } else {
                remaining.min(new_len)
            };
            return mapped + offset;
        }
        remaining -= old_len + 1;
        mapped += new_len + 1;
    }
    corrected_len
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
