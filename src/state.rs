//! Application state and its transitions.
//!
//! `TodoState` owns the task list, the stack of deleted tasks, the input
//! draft and the view flags. Transitions consume the state and hand back the
//! next one; invalid requests (bad index, blank draft, empty undo stack)
//! return the state untouched.

use chrono::NaiveDateTime;
use log::debug;
use serde::Serialize;

use crate::fields::Theme;
use crate::task::Task;
use crate::text::autocorrect;

/// The text being typed, plus its corrected projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputBuffer {
    draft: String,
    text: String,
}

impl InputBuffer {
    /// Text exactly as last edited.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Corrected text; this is what gets committed and displayed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when autocorrect changed the last edit.
    pub fn was_corrected(&self) -> bool {
        self.draft != self.text
    }
}

/// Presentation flags. Not part of the task logic, but owned here so that a
/// single value describes the whole screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub theme: Theme,
    pub emoji_picker_open: bool,
    pub keyboard_open: bool,
}

/// Whole to-do list state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoState {
    tasks: Vec<Task>,
    undo_stack: Vec<Task>,
    input: InputBuffer,
    view: ViewState,
    autocorrect: bool,
}

impl Default for TodoState {
    fn default() -> Self {
        TodoState {
            tasks: Vec::new(),
            undo_stack: Vec::new(),
            input: InputBuffer::default(),
            view: ViewState::default(),
            autocorrect: true,
        }
    }
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.view.theme = theme;
        self
    }

    /// Enable or disable correction of the input draft.
    pub fn with_autocorrect(mut self, enabled: bool) -> Self {
        self.autocorrect = enabled;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Deleted tasks, oldest first. The last entry is restored by [`Self::undo`].
    pub fn undo_stack(&self) -> &[Task] {
        &self.undo_stack
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn autocorrect_enabled(&self) -> bool {
        self.autocorrect
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Replace the input draft and recompute its corrected projection.
    pub fn set_input_text(mut self, text: &str) -> Self {
        self.input.draft = text.to_string();
        self.input.text = if self.autocorrect {
            autocorrect(text)
        } else {
            text.to_string()
        };
        self
    }

    /// Append to the end of the corrected input, as typing at the end would.
    pub fn append_input(self, s: &str) -> Self {
        let next = format!("{}{}", self.input.text, s);
        self.set_input_text(&next)
    }

    /// Append an emoji and close the picker.
    pub fn insert_emoji(self, emoji: &str) -> Self {
        let mut next = self.append_input(emoji);
        next.view.emoji_picker_open = false;
        next
    }

    /// Commit the current input as a new task.
    pub fn add_task(self, now: NaiveDateTime) -> Self {
        let text = self.input.text.clone();
        self.add_task_text(&text, now)
    }

    /// Commit `raw` as a new task at the end of the list and clear the input.
    ///
    /// Blank text leaves the state unchanged, input included.
    pub fn add_task_text(mut self, raw: &str, now: NaiveDateTime) -> Self {
        match Task::new(raw, now) {
            Some(task) => {
                self.tasks.push(task);
                self.input = InputBuffer::default();
                debug!("event=task_added len={}", self.tasks.len());
            },
            None => debug!("event=task_add_skipped reason=blank"),
        }
        self
    }

    /// Remove the task at `index` and remember it for undo.
    pub fn delete_task(mut self, index: usize) -> Self {
        if index >= self.tasks.len() {
            debug!(
                "event=task_delete_skipped index={} len={}",
                index,
                self.tasks.len()
            );
            return self;
        }
        let task = self.tasks.remove(index);
        self.undo_stack.push(task);
        debug!(
            "event=task_deleted index={} len={} undo_depth={}",
            index,
            self.tasks.len(),
            self.undo_stack.len()
        );
        self
    }

    pub fn toggle_completion(mut self, index: usize) -> Self {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.toggle();
                debug!("event=task_toggled index={} completed={}", index, task.completed);
            },
            None => debug!(
                "event=task_toggle_skipped index={} len={}",
                index,
                self.tasks.len()
            ),
        }
        self
    }

    /// Restore the most recently deleted task.
    ///
    /// The task goes to the end of the list, not back to where it was.
    pub fn undo(mut self) -> Self {
        match self.undo_stack.pop() {
            Some(task) => {
                self.tasks.push(task);
                debug!(
                    "event=task_restored len={} undo_depth={}",
                    self.tasks.len(),
                    self.undo_stack.len()
                );
            },
            None => debug!("event=undo_skipped reason=empty"),
        }
        self
    }

    pub fn toggle_theme(mut self) -> Self {
        self.view.theme = self.view.theme.toggled();
        self
    }

    pub fn toggle_emoji_picker(mut self) -> Self {
        self.view.emoji_picker_open = !self.view.emoji_picker_open;
        self
    }

    pub fn toggle_keyboard(mut self) -> Self {
        self.view.keyboard_open = !self.view.keyboard_open;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(8, 5, 9).unwrap()
    }

    fn with_tasks(texts: &[&str]) -> TodoState {
        texts
            .iter()
            .fold(TodoState::new(), |s, t| s.add_task_text(t, now()))
    }

    #[test]
    fn test_add_task_appends_one_task() {
        for s in ["buy milk", "a", "tod", "x  y", "😊 party"] {
            let state = with_tasks(&["first"]).add_task_text(s, now());
            assert_eq!(state.tasks().len(), 2);
            let last = state.tasks().last().unwrap();
            assert!(last.text.starts_with(s), "{:?}", last.text);
            assert!(!last.completed);
        }
    }

    #[test]
    fn test_add_task_text_format() {
        let state = TodoState::new().add_task_text("buy milk", now());
        assert_eq!(state.tasks()[0].text, "buy milk - 1/6/2024 8:5:9");
    }

    #[test]
    fn test_add_keeps_surrounding_whitespace() {
        let state = TodoState::new().set_input_text("  buy milk ").add_task(now());
        assert_eq!(state.tasks()[0].text, "  buy milk  - 1/6/2024 8:5:9");
        let state = TodoState::new().add_task_text("  x ", now());
        assert_eq!(state.tasks()[0].text, "  x  - 1/6/2024 8:5:9");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let before = with_tasks(&["a"]).set_input_text("   ");
        let after = before.clone().add_task(now());
        assert_eq!(after, before);
        let after = before.clone().add_task_text("", now());
        assert_eq!(after, before);
    }

    #[test]
    fn test_add_task_commits_corrected_input_and_clears_it() {
        let state = TodoState::new().set_input_text("fix tod ap").add_task(now());
        assert_eq!(state.tasks()[0].text, "fix to-do app - 1/6/2024 8:5:9");
        assert!(state.input().is_empty());
        assert_eq!(state.input().draft(), "");
    }

    #[test]
    fn test_duplicates_allowed() {
        let state = with_tasks(&["same", "same"]);
        assert_eq!(state.tasks().len(), 2);
        assert_eq!(state.tasks()[0], state.tasks()[1]);
    }

    #[test]
    fn test_delete_moves_task_to_undo_stack() {
        let state = with_tasks(&["a", "b", "c"]);
        let removed = state.tasks()[1].clone();
        let state = state.delete_task(1);
        assert_eq!(state.tasks().len(), 2);
        assert_eq!(state.undo_stack().len(), 1);
        assert_eq!(state.undo_stack()[0], removed);
        assert!(state.tasks()[0].text.starts_with("a"));
        assert!(state.tasks()[1].text.starts_with("c"));
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let state = with_tasks(&["a"]);
        assert_eq!(state.clone().delete_task(1), state);
        assert_eq!(state.clone().delete_task(usize::MAX), state);
        assert_eq!(TodoState::new().delete_task(0), TodoState::new());
    }

    #[test]
    fn test_undo_after_delete_appends_at_end() {
        let state = with_tasks(&["a", "b", "c"]);
        let removed = state.tasks()[0].clone();
        let state = state.delete_task(0).undo();
        assert_eq!(state.tasks().len(), 3);
        assert_eq!(state.tasks()[2], removed);
        assert!(state.undo_stack().is_empty());
    }

    #[test]
    fn test_undo_is_lifo() {
        let state = with_tasks(&["a", "b", "c"]).delete_task(0).delete_task(0);
        let state = state.undo();
        assert!(state.tasks().last().unwrap().text.starts_with("b"));
        let state = state.undo();
        assert!(state.tasks().last().unwrap().text.starts_with("a"));
        assert!(!state.can_undo());
    }

    #[test]
    fn test_undo_on_empty_stack_is_noop() {
        let state = with_tasks(&["a"]);
        assert_eq!(state.clone().undo(), state);
    }

    #[test]
    fn test_redeleting_restored_task_pushes_new_entry() {
        let state = with_tasks(&["a", "b"]).delete_task(0).delete_task(0).undo();
        // "a" is still stacked; the restored "b" is the only task
        let state = state.delete_task(0);
        assert_eq!(state.undo_stack().len(), 2);
        assert!(state.undo_stack()[1].text.starts_with("b"));
    }

    #[test]
    fn test_undo_stack_is_never_pruned() {
        let mut state = with_tasks(&["x"; 200]);
        for _ in 0..200 {
            state = state.delete_task(0);
        }
        assert_eq!(state.undo_stack().len(), 200);
        assert!(state.tasks().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let state = with_tasks(&["a", "b"]).toggle_completion(1);
        assert!(state.tasks()[1].completed);
        assert!(!state.tasks()[0].completed);
        let state = state.toggle_completion(1);
        assert!(!state.tasks()[1].completed);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let state = with_tasks(&["a"]);
        assert_eq!(state.clone().toggle_completion(3), state);
    }

    #[test]
    fn test_completed_flag_survives_delete_and_undo() {
        let state = with_tasks(&["a"]).toggle_completion(0).delete_task(0).undo();
        assert!(state.tasks()[0].completed);
    }

    #[test]
    fn test_scenario_add_delete_undo() {
        let state = TodoState::new()
            .add_task_text("buy milk", now())
            .delete_task(0)
            .undo();
        assert_eq!(state.tasks().len(), 1);
        assert!(state.tasks()[0].text.starts_with("buy milk"));
        assert!(state.undo_stack().is_empty());
    }

    #[test]
    fn test_set_input_text_keeps_draft_and_projection() {
        let state = TodoState::new().set_input_text("Tod list");
        assert_eq!(state.input().draft(), "Tod list");
        assert_eq!(state.input().text(), "to-do list");
    }

    #[test]
    fn test_set_input_text_without_autocorrect() {
        let state = TodoState::new().with_autocorrect(false).set_input_text("tod");
        assert_eq!(state.input().text(), "tod");
        assert!(!state.input().was_corrected());
    }

    #[test]
    fn test_was_corrected_tracks_last_edit() {
        let state = TodoState::new().set_input_text("fix the ap");
        assert!(state.input().was_corrected());
        let state = state.set_input_text("fix the app");
        assert!(!state.input().was_corrected());
        let state = state.add_task(now()).set_input_text("tod");
        assert!(state.input().was_corrected());
    }

    #[test]
    fn test_recomputing_projection_is_stable() {
        let state = TodoState::new().set_input_text("tod ap is wrogn");
        let text = state.input().text().to_string();
        let again = state.set_input_text(&text);
        assert_eq!(again.input().text(), text);
    }

    #[test]
    fn test_append_input_runs_autocorrect() {
        let state = TodoState::new().set_input_text("to").append_input("d");
        assert_eq!(state.input().text(), "to-do");
        let state = state.append_input(" x");
        assert_eq!(state.input().text(), "to-do x");
    }

    #[test]
    fn test_insert_emoji_appends_and_closes_picker() {
        let state = TodoState::new()
            .set_input_text("party ")
            .toggle_emoji_picker()
            .insert_emoji("🎉");
        assert_eq!(state.input().text(), "party 🎉");
        assert!(!state.view().emoji_picker_open);
    }

    #[test]
    fn test_view_toggles() {
        let state = TodoState::new().with_theme(Theme::Dark);
        assert_eq!(state.view().theme, Theme::Dark);
        let state = state.toggle_theme().toggle_keyboard().toggle_emoji_picker();
        assert_eq!(state.view().theme, Theme::Light);
        assert!(state.view().keyboard_open);
        assert!(state.view().emoji_picker_open);
    }
}
