//! Questionnaire entities

use super::value_objects::{Answer, QuestionEdit, QuestionId, Weight};
use serde::{Deserialize, Serialize};

/// Text given to a question created through the engine's "add" operation
pub const DEFAULT_QUESTION_TEXT: &str = "new question";

/// A single weighted yes/no/na prompt shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the list
    pub id: QuestionId,
    /// Free-form prompt text
    pub text: String,
    /// Relative contribution to the final score (1..=5)
    pub weight: Weight,
    /// Current answer; `None` until the user answers explicitly
    pub answer: Option<Answer>,
}

impl Question {
    /// Create an unanswered question
    pub fn new(id: QuestionId, text: impl Into<String>, weight: Weight) -> Self {
        Self {
            id,
            text: text.into(),
            weight,
            answer: None,
        }
    }

    /// Create the placeholder question appended by the "add" operation
    pub fn placeholder(id: QuestionId) -> Self {
        Self::new(id, DEFAULT_QUESTION_TEXT, Weight::MIN)
    }

    /// Whether the user has answered this question (na counts as answered)
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// Apply a draft edit to this question
    pub fn apply(&mut self, edit: QuestionEdit) {
        match edit {
            QuestionEdit::Text(text) => self.text = text,
            QuestionEdit::Weight(weight) => self.weight = weight,
        }
    }
}
