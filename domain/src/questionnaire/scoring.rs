//! Weighted score computation

use super::entities::Question;
use super::value_objects::{Answer, Score};

/// Compute the weighted score of a question list
///
/// Only questions answered yes or no participate: the score is
/// `5 * sum(weight | yes) / sum(weight | yes or no)`. An empty answered
/// set (including an empty list) scores zero rather than dividing by it.
pub fn weighted_score(questions: &[Question]) -> Score {
    let answered = questions
        .iter()
        .filter(|q| q.answer.is_some_and(|a| a.counts_toward_score()));

    let mut yes_weight: u32 = 0;
    let mut total_weight: u32 = 0;
    for question in answered {
        let w = question.weight.get() as u32;
        total_weight += w;
        if question.answer == Some(Answer::Yes) {
            yes_weight += w;
        }
    }

    if total_weight == 0 {
        return Score::ZERO;
    }
    Score::new(5.0 * yes_weight as f64 / total_weight as f64)
}
