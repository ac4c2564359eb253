//! TUI mode system (vim-like mode switching)
//!
//! Defines the mode-based interaction model:
//! - Answer mode: navigate and answer questions, trigger diagnosis
//! - Edit mode: work on the draft question set
//! - Insert mode: rewrite a prompt text
//! - Confirm modes: yes/no prompts for delete and discard

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kokoro_domain::Answer;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Answering questions (the default screen)
    #[default]
    Answer,
    /// Editing the draft question set
    Edit,
    /// Text input for a question prompt
    Insert,
    /// Confirming a question delete
    ConfirmDelete,
    /// Confirming discarding unsaved edits
    ConfirmDiscard,
}

impl Mode {
    /// Get the mode indicator string for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Answer => "ANSWER",
            Self::Edit => "EDIT",
            Self::Insert => "INSERT",
            Self::ConfirmDelete => "CONFIRM",
            Self::ConfirmDiscard => "CONFIRM",
        }
    }

    /// Get the mode color for the status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Answer => Color::Blue,
            Self::Edit => Color::Yellow,
            Self::Insert => Color::Green,
            Self::ConfirmDelete | Self::ConfirmDiscard => Color::Magenta,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // -- Navigation --
    SelectPrev,
    SelectNext,

    // -- Answering --
    SetAnswer(Answer),
    Diagnose,

    // -- Edit transaction --
    EnterEdit,
    SaveEdits,
    RequestDiscard,

    // -- Draft operations --
    AddQuestion,
    RequestDelete,
    EnterInsert,
    WeightDigit(char),
    IncreaseWeight,
    DecreaseWeight,

    // -- Text editing --
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    SubmitText,
    CancelText,

    // -- Confirmation --
    ConfirmYes,
    ConfirmNo,

    // -- Overlays / lifecycle --
    ToggleHelp,
    CloseOverlay,
    Quit,
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: Mode, key: KeyEvent) -> Action {
        // Ctrl-C always quits, regardless of mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match mode {
            Mode::Answer => Self::handle_answer(key),
            Mode::Edit => Self::handle_edit(key),
            Mode::Insert => Self::handle_insert(key),
            Mode::ConfirmDelete | Mode::ConfirmDiscard => Self::handle_confirm(key),
        }
    }

    fn handle_answer(key: KeyEvent) -> Action {
        match key.code {
            // Navigation
            KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,
            KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,

            // Answers
            KeyCode::Char('y') => Action::SetAnswer(Answer::Yes),
            KeyCode::Char('n') => Action::SetAnswer(Answer::No),
            KeyCode::Char('x') => Action::SetAnswer(Answer::NotApplicable),

            // Diagnosis
            KeyCode::Char('d') | KeyCode::Enter => Action::Diagnose,

            // Edit mode
            KeyCode::Char('e') => Action::EnterEdit,

            // Help / quit
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('q') => Action::Quit,

            _ => Action::None,
        }
    }

    fn handle_edit(key: KeyEvent) -> Action {
        match key.code {
            // Navigation
            KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,
            KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,

            // Draft operations
            KeyCode::Char('i') | KeyCode::Enter => Action::EnterInsert,
            KeyCode::Char('a') => Action::AddQuestion,
            KeyCode::Char('D') => Action::RequestDelete,
            KeyCode::Char('+') => Action::IncreaseWeight,
            KeyCode::Char('-') => Action::DecreaseWeight,
            KeyCode::Char(c) if c.is_ascii_digit() => Action::WeightDigit(c),

            // Transaction
            KeyCode::Char('w') => Action::SaveEdits,
            KeyCode::Esc => Action::RequestDiscard,

            // Help
            KeyCode::Char('?') => Action::ToggleHelp,

            _ => Action::None,
        }
    }

    fn handle_insert(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CancelText,
            KeyCode::Enter => Action::SubmitText,
            KeyCode::Char(c) => Action::InsertChar(c),
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorStart,
            KeyCode::End => Action::CursorEnd,
            _ => Action::None,
        }
    }

    fn handle_confirm(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Action::ConfirmYes,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::ConfirmNo,
            _ => Action::None,
        }
    }
}
