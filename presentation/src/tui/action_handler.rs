//! Applies user actions to the TUI state
//!
//! This is the single writer of `TuiState`: every key event becomes an
//! [`Action`] (see `mode.rs`) and lands here as a synchronous state
//! transition, in dispatch order.

use super::mode::{Action, Mode};
use super::state::TuiState;
use kokoro_domain::{QuestionEdit, Weight};
use tracing::debug;

/// Apply a single action to the state
pub fn apply(state: &mut TuiState, action: Action) {
    // A modal overlay swallows everything except closing it or quitting
    if state.overlay_open() {
        match action {
            Action::CloseOverlay => {
                state.result = None;
                state.show_help = false;
            }
            Action::Quit => state.should_quit = true,
            _ => {}
        }
        return;
    }

    match action {
        // -- Navigation --
        Action::SelectPrev => state.select_prev(),
        Action::SelectNext => state.select_next(),

        // -- Answering --
        Action::SetAnswer(answer) => {
            if let Some(question) = state.selected_question() {
                let id = question.id;
                state.engine.set_answer(id, answer);
            }
        }
        Action::Diagnose => {
            if state.engine.is_complete() {
                let score = state.engine.score();
                debug!(score = score.value(), "diagnosis");
                state.result = Some(score);
            } else {
                state.set_flash("Answer every question first (x = not applicable)");
            }
        }

        // -- Edit transaction --
        Action::EnterEdit => {
            state.engine.begin_edit();
            state.mode = Mode::Edit;
        }
        Action::SaveEdits => {
            state.engine.commit_edit();
            state.mode = Mode::Answer;
            state.set_flash("Questions saved");
        }
        Action::RequestDiscard => {
            if state.engine.has_pending_edits() {
                state.mode = Mode::ConfirmDiscard;
            } else {
                state.engine.discard_edit();
                state.mode = Mode::Answer;
            }
        }

        // -- Draft operations --
        Action::AddQuestion => {
            state.engine.add_question();
            let len = state.engine.visible().len();
            state.selected = len.saturating_sub(1);
        }
        Action::RequestDelete => {
            if let Some(question) = state.selected_question() {
                state.pending_delete = Some(question.id);
                state.mode = Mode::ConfirmDelete;
            }
        }
        Action::EnterInsert => {
            if let Some(question) = state.selected_question() {
                let (id, text) = (question.id, question.text.clone());
                state.begin_text_edit(id, &text);
                state.mode = Mode::Insert;
            }
        }
        Action::WeightDigit(digit) => {
            // Non-numeric input never reaches here; parse still clamps
            // digits outside 1..=5 (0 -> 1, 9 -> 5)
            if let (Some(question), Some(weight)) =
                (state.selected_question(), Weight::parse(&digit.to_string()))
            {
                let id = question.id;
                state.engine.apply_edit(id, QuestionEdit::Weight(weight));
            }
        }
        Action::IncreaseWeight => {
            if let Some(question) = state.selected_question() {
                let (id, weight) = (question.id, question.weight);
                state
                    .engine
                    .apply_edit(id, QuestionEdit::Weight(weight.heavier()));
            }
        }
        Action::DecreaseWeight => {
            if let Some(question) = state.selected_question() {
                let (id, weight) = (question.id, question.weight);
                state
                    .engine
                    .apply_edit(id, QuestionEdit::Weight(weight.lighter()));
            }
        }

        // -- Text editing --
        Action::InsertChar(c) => state.insert_char(c),
        Action::DeleteChar => state.delete_char(),
        Action::CursorLeft => state.cursor_left(),
        Action::CursorRight => state.cursor_right(),
        Action::CursorStart => state.cursor_home(),
        Action::CursorEnd => state.cursor_end(),
        Action::SubmitText => {
            if let Some(id) = state.editing_id {
                let text = state.take_edit_input();
                state.engine.apply_edit(id, QuestionEdit::Text(text));
            }
            state.mode = Mode::Edit;
        }
        Action::CancelText => {
            state.take_edit_input();
            state.mode = Mode::Edit;
        }

        // -- Confirmation --
        Action::ConfirmYes => match state.mode {
            Mode::ConfirmDelete => {
                if let Some(id) = state.pending_delete.take() {
                    state.engine.delete_question(id);
                    state.clamp_selection();
                }
                state.mode = Mode::Edit;
            }
            Mode::ConfirmDiscard => {
                state.engine.discard_edit();
                state.clamp_selection();
                state.mode = Mode::Answer;
                state.set_flash("Edits discarded");
            }
            _ => {}
        },
        Action::ConfirmNo => {
            state.pending_delete = None;
            state.mode = Mode::Edit;
        }

        // -- Overlays / lifecycle --
        Action::ToggleHelp => state.show_help = !state.show_help,
        Action::CloseOverlay => {}
        Action::Quit => state.should_quit = true,
        Action::None => {}
    }
}
