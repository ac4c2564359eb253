//! Questionnaire engine — live/draft lists and the edit transaction
//!
//! The engine owns two parallel collections: the **live** list used for
//! answering and scoring, and a **draft** list that exists only while an
//! edit transaction is open. Every operation is a synchronous in-memory
//! state transition; unknown ids are silent no-ops.

use super::entities::Question;
use super::scoring::weighted_score;
use super::value_objects::{Answer, QuestionEdit, QuestionId, Score};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// The questionnaire state machine
///
/// Owned by the presentation layer as an explicit instance; there is no
/// ambient global state.
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    live: Vec<Question>,
    draft: Option<Vec<Question>>,
}

impl Questionnaire {
    /// Create an engine over a seed list
    ///
    /// Returns an error if two seed questions share an id.
    pub fn try_new(questions: Vec<Question>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(DomainError::DuplicateId(question.id));
            }
        }
        Ok(Self {
            live: questions,
            draft: None,
        })
    }

    // -- Read access --

    /// The live list, used for answering and scoring
    pub fn questions(&self) -> &[Question] {
        &self.live
    }

    /// The draft list, present only while an edit transaction is open
    pub fn draft(&self) -> Option<&[Question]> {
        self.draft.as_deref()
    }

    /// The list the user is currently looking at: draft while editing,
    /// live otherwise
    pub fn visible(&self) -> &[Question] {
        self.draft.as_deref().unwrap_or(&self.live)
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of live questions the user has answered (na counts)
    pub fn answered_count(&self) -> usize {
        self.live.iter().filter(|q| q.is_answered()).count()
    }

    /// True iff every live question has an answer; vacuously true when empty
    pub fn is_complete(&self) -> bool {
        self.live.iter().all(|q| q.is_answered())
    }

    /// Weighted score of the live list
    pub fn score(&self) -> Score {
        weighted_score(&self.live)
    }

    // -- Answering --

    /// Answer the live question with the given id; no-op on unknown id
    ///
    /// Answers only ever touch the live list, never the draft.
    pub fn set_answer(&mut self, id: QuestionId, answer: Answer) {
        if let Some(question) = self.live.iter_mut().find(|q| q.id == id) {
            question.answer = Some(answer);
        }
    }

    // -- Edit transaction --

    /// Open an edit transaction, snapshotting live into draft
    ///
    /// No-op when a transaction is already open.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.live.clone());
        }
    }

    /// Commit the draft, replacing the live list wholesale
    ///
    /// No-op when no transaction is open.
    pub fn commit_edit(&mut self) {
        if let Some(draft) = self.draft.take() {
            self.live = draft;
        }
    }

    /// Drop the draft, leaving the live list untouched
    pub fn discard_edit(&mut self) {
        self.draft = None;
    }

    /// Whether the open draft differs from the live list
    pub fn has_pending_edits(&self) -> bool {
        self.draft.as_ref().is_some_and(|d| *d != self.live)
    }

    /// Apply an edit to the draft question with the given id
    ///
    /// No-op when no transaction is open or the id is unknown; the live
    /// list is never touched.
    pub fn apply_edit(&mut self, id: QuestionId, edit: QuestionEdit) {
        if let Some(draft) = self.draft.as_mut()
            && let Some(question) = draft.iter_mut().find(|q| q.id == id)
        {
            question.apply(edit);
        }
    }

    /// Remove the question with the given id from both lists
    ///
    /// Deleting from both keeps the lists consistent even though the UI
    /// only offers deletion while editing.
    pub fn delete_question(&mut self, id: QuestionId) {
        self.live.retain(|q| q.id != id);
        if let Some(draft) = self.draft.as_mut() {
            draft.retain(|q| q.id != id);
        }
    }

    /// Append a new placeholder question to both lists and return its id
    pub fn add_question(&mut self) -> QuestionId {
        let id = self.next_id();
        let question = Question::placeholder(id);
        self.live.push(question.clone());
        if let Some(draft) = self.draft.as_mut() {
            draft.push(question);
        }
        id
    }

    /// `max(existing ids) + 1`, or 1 for an empty list
    fn next_id(&self) -> QuestionId {
        self.live
            .iter()
            .map(|q| q.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(QuestionId::FIRST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::value_objects::Weight;

    fn engine_with_weights(weights: &[i64]) -> Questionnaire {
        let questions = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                Question::new(QuestionId(i as u32 + 1), format!("q{}", i + 1), Weight::new(w))
            })
            .collect();
        Questionnaire::try_new(questions).unwrap()
    }

    #[test]
    fn test_try_new_rejects_duplicate_ids() {
        let questions = vec![
            Question::placeholder(QuestionId(1)),
            Question::placeholder(QuestionId(1)),
        ];
        assert!(matches!(
            Questionnaire::try_new(questions),
            Err(DomainError::DuplicateId(QuestionId(1)))
        ));
    }

    #[test]
    fn test_set_answer_unknown_id_is_noop() {
        let mut engine = engine_with_weights(&[1]);
        engine.set_answer(QuestionId(99), Answer::Yes);
        assert!(engine.questions()[0].answer.is_none());
    }

    #[test]
    fn test_set_answer_never_touches_draft() {
        let mut engine = engine_with_weights(&[1]);
        engine.begin_edit();
        engine.set_answer(QuestionId(1), Answer::Yes);
        assert_eq!(engine.questions()[0].answer, Some(Answer::Yes));
        assert!(engine.draft().unwrap()[0].answer.is_none());
    }

    #[test]
    fn test_completion_flag() {
        let mut engine = engine_with_weights(&[1, 2]);
        assert!(!engine.is_complete());

        engine.set_answer(QuestionId(1), Answer::Yes);
        engine.set_answer(QuestionId(2), Answer::NotApplicable);
        assert!(engine.is_complete());
        assert_eq!(engine.answered_count(), 2);
    }

    #[test]
    fn test_empty_list_is_vacuously_complete_and_scores_zero() {
        let engine = Questionnaire::default();
        assert!(engine.is_complete());
        assert_eq!(engine.score(), Score::ZERO);
    }

    #[test]
    fn test_add_question_breaks_completion() {
        let mut engine = engine_with_weights(&[1]);
        engine.set_answer(QuestionId(1), Answer::Yes);
        assert!(engine.is_complete());

        let id = engine.add_question();
        assert!(!engine.is_complete());

        engine.set_answer(id, Answer::No);
        assert!(engine.is_complete());
    }

    #[test]
    fn test_add_question_id_is_max_plus_one() {
        let questions = vec![
            Question::placeholder(QuestionId(1)),
            Question::placeholder(QuestionId(3)),
            Question::placeholder(QuestionId(5)),
        ];
        let mut engine = Questionnaire::try_new(questions).unwrap();
        assert_eq!(engine.add_question(), QuestionId(6));
    }

    #[test]
    fn test_add_question_on_empty_list() {
        let mut engine = Questionnaire::default();
        assert_eq!(engine.add_question(), QuestionId(1));
        assert_eq!(engine.questions().len(), 1);
    }

    #[test]
    fn test_add_question_appends_to_both_lists() {
        let mut engine = engine_with_weights(&[1]);
        engine.begin_edit();
        engine.add_question();
        assert_eq!(engine.questions().len(), 2);
        assert_eq!(engine.draft().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_question_removes_from_both_lists() {
        let mut engine = engine_with_weights(&[3, 2]);
        engine.set_answer(QuestionId(1), Answer::Yes);
        engine.set_answer(QuestionId(2), Answer::Yes);
        engine.begin_edit();

        engine.delete_question(QuestionId(1));
        assert_eq!(engine.questions().len(), 1);
        assert_eq!(engine.draft().unwrap().len(), 1);

        // The deleted question no longer contributes to the score
        engine.commit_edit();
        assert_eq!(engine.score().value(), 5.0);
    }

    #[test]
    fn test_delete_all_then_score_is_zero() {
        let mut engine = engine_with_weights(&[1, 2]);
        engine.delete_question(QuestionId(1));
        engine.delete_question(QuestionId(2));
        assert!(engine.is_empty());
        assert_eq!(engine.score(), Score::ZERO);
    }

    #[test]
    fn test_edit_round_trip_without_changes_preserves_live() {
        let mut engine = engine_with_weights(&[3, 2, 1]);
        engine.set_answer(QuestionId(1), Answer::Yes);
        let before = engine.questions().to_vec();

        engine.begin_edit();
        assert!(engine.is_editing());
        assert!(!engine.has_pending_edits());
        engine.commit_edit();

        assert!(!engine.is_editing());
        assert_eq!(engine.questions(), &before[..]);
    }

    #[test]
    fn test_apply_edit_only_touches_draft_until_commit() {
        let mut engine = engine_with_weights(&[1]);
        engine.begin_edit();
        engine.apply_edit(QuestionId(1), QuestionEdit::Text("updated".into()));

        assert_eq!(engine.questions()[0].text, "q1");
        assert_eq!(engine.draft().unwrap()[0].text, "updated");
        assert!(engine.has_pending_edits());

        engine.commit_edit();
        assert_eq!(engine.questions()[0].text, "updated");
    }

    #[test]
    fn test_apply_edit_outside_transaction_is_noop() {
        let mut engine = engine_with_weights(&[1]);
        engine.apply_edit(QuestionId(1), QuestionEdit::Text("updated".into()));
        assert_eq!(engine.questions()[0].text, "q1");
    }

    #[test]
    fn test_discard_edit_restores_live_view() {
        let mut engine = engine_with_weights(&[1]);
        engine.begin_edit();
        engine.apply_edit(QuestionId(1), QuestionEdit::Weight(Weight::new(5)));
        engine.discard_edit();

        assert!(!engine.is_editing());
        assert_eq!(engine.questions()[0].weight, Weight::MIN);
        assert_eq!(engine.visible()[0].weight, Weight::MIN);
    }

    #[test]
    fn test_begin_edit_twice_keeps_first_draft() {
        let mut engine = engine_with_weights(&[1]);
        engine.begin_edit();
        engine.apply_edit(QuestionId(1), QuestionEdit::Text("kept".into()));
        engine.begin_edit(); // must not re-snapshot over the draft
        assert_eq!(engine.draft().unwrap()[0].text, "kept");
    }

    #[test]
    fn test_visible_switches_with_transaction() {
        let mut engine = engine_with_weights(&[1]);
        assert_eq!(engine.visible()[0].text, "q1");
        engine.begin_edit();
        engine.apply_edit(QuestionId(1), QuestionEdit::Text("draft view".into()));
        assert_eq!(engine.visible()[0].text, "draft view");
        engine.discard_edit();
        assert_eq!(engine.visible()[0].text, "q1");
    }

    #[test]
    fn test_concrete_scoring_scenario() {
        let mut engine = engine_with_weights(&[3, 2, 1]);
        engine.set_answer(QuestionId(1), Answer::Yes);
        engine.set_answer(QuestionId(2), Answer::No);
        engine.set_answer(QuestionId(3), Answer::Yes);
        assert_eq!(engine.score().to_string(), "3.3/5.0");
    }
}
