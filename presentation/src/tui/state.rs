//! TUI application state
//!
//! Single source of truth for everything the TUI renders. The state owns
//! the questionnaire engine instance; widgets only read from here and the
//! action handler is the only writer.

use super::mode::Mode;
use kokoro_domain::{Question, QuestionId, Questionnaire, Score};
use std::time::{Duration, Instant};

/// Central TUI state — owned by the TuiApp event loop
pub struct TuiState {
    /// The questionnaire engine (live/draft lists, scoring)
    pub engine: Questionnaire,

    // -- Mode / selection --
    pub mode: Mode,
    pub selected: usize,

    // -- Text editing (Insert mode) --
    pub edit_input: String,
    pub edit_cursor: usize,
    /// Draft question currently being rewritten
    pub editing_id: Option<QuestionId>,

    // -- Pending confirmation --
    pub pending_delete: Option<QuestionId>,

    // -- Overlays --
    pub result: Option<Score>,
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(engine: Questionnaire) -> Self {
        Self {
            engine,
            mode: Mode::default(),
            selected: 0,
            edit_input: String::new(),
            edit_cursor: 0,
            editing_id: None,
            pending_delete: None,
            result: None,
            show_help: false,
            flash_message: None,
            should_quit: false,
        }
    }

    // -- Selection --

    /// The question currently under the cursor, from the visible list
    pub fn selected_question(&self) -> Option<&Question> {
        self.engine.visible().get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.engine.visible().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Pull the selection back into range after a delete
    pub fn clamp_selection(&mut self) {
        let len = self.engine.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    // -- Input editing --

    /// Load a question's text into the edit buffer
    pub fn begin_text_edit(&mut self, id: QuestionId, text: &str) {
        self.editing_id = Some(id);
        self.edit_input = text.to_string();
        self.edit_cursor = self.edit_input.len();
    }

    /// Take the edit buffer contents and clear the editing state
    pub fn take_edit_input(&mut self) -> String {
        self.editing_id = None;
        self.edit_cursor = 0;
        std::mem::take(&mut self.edit_input)
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit_input.insert(self.edit_cursor, c);
        self.edit_cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.edit_cursor > 0 {
            let prev_char_len = self.edit_input[..self.edit_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.edit_input.remove(self.edit_cursor - prev_char_len);
            self.edit_cursor -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.edit_cursor > 0 {
            let prev_char_len = self.edit_input[..self.edit_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.edit_cursor -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.edit_cursor < self.edit_input.len() {
            let next_char_len = self.edit_input[self.edit_cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.edit_cursor += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.edit_cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.edit_cursor = self.edit_input.len();
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    /// Whether a modal overlay (help or result) is covering the screen
    pub fn overlay_open(&self) -> bool {
        self.show_help || self.result.is_some()
    }

    /// Whether a yes/no confirmation dialog should be drawn
    pub fn pending_confirmation(&self) -> bool {
        matches!(self.mode, Mode::ConfirmDelete | Mode::ConfirmDiscard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokoro_domain::{Question, Weight};

    fn state_with_questions(n: u32) -> TuiState {
        let questions = (1..=n)
            .map(|i| Question::new(QuestionId(i), format!("q{i}"), Weight::MIN))
            .collect();
        TuiState::new(Questionnaire::try_new(questions).unwrap())
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = state_with_questions(3);
        state.select_prev();
        assert_eq!(state.selected, 0);

        state.select_next();
        state.select_next();
        state.select_next(); // already at the end
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_selection_on_empty_list() {
        let mut state = state_with_questions(0);
        state.select_next();
        assert_eq!(state.selected, 0);
        assert!(state.selected_question().is_none());
    }

    #[test]
    fn test_clamp_selection_after_delete() {
        let mut state = state_with_questions(3);
        state.selected = 2;
        state.engine.delete_question(QuestionId(3));
        state.clamp_selection();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_text_edit_buffer_round_trip() {
        let mut state = state_with_questions(1);
        state.begin_text_edit(QuestionId(1), "hello");
        assert_eq!(state.edit_cursor, 5);

        state.insert_char('!');
        assert_eq!(state.edit_input, "hello!");

        state.delete_char();
        state.delete_char();
        assert_eq!(state.edit_input, "hell");

        let taken = state.take_edit_input();
        assert_eq!(taken, "hell");
        assert!(state.edit_input.is_empty());
        assert!(state.editing_id.is_none());
        assert_eq!(state.edit_cursor, 0);
    }

    #[test]
    fn test_cursor_movement_multibyte() {
        let mut state = state_with_questions(1);
        state.begin_text_edit(QuestionId(1), "día");
        assert_eq!(state.edit_cursor, 4); // 'í' is two bytes

        state.cursor_left(); // before 'a'
        state.cursor_left(); // before 'í'
        assert_eq!(state.edit_cursor, 1);

        state.cursor_right();
        assert_eq!(state.edit_cursor, 3);

        state.cursor_home();
        assert_eq!(state.edit_cursor, 0);
        state.cursor_end();
        assert_eq!(state.edit_cursor, 4);
    }

    #[test]
    fn test_flash_message() {
        let mut state = state_with_questions(1);
        state.set_flash("saved");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }

    #[test]
    fn test_overlay_open() {
        let mut state = state_with_questions(1);
        assert!(!state.overlay_open());
        state.show_help = true;
        assert!(state.overlay_open());
        state.show_help = false;
        state.result = Some(Score::ZERO);
        assert!(state.overlay_open());
    }
}
