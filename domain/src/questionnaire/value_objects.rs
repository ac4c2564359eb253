//! Questionnaire value objects

use serde::{Deserialize, Serialize};

/// Identifier of a question, unique within a list
///
/// Ids are assigned monotonically: a new question gets
/// `max(existing ids) + 1`, or `1` when the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// The id assigned to the first question of an empty list
    pub const FIRST: QuestionId = QuestionId(1);

    /// The id following this one
    pub fn next(&self) -> QuestionId {
        QuestionId(self.0 + 1)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relative importance of a question, always within 1..=5
///
/// Out-of-range values are clamped on construction, so a `Weight` held
/// anywhere in the system is valid by definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Weight(u8);

impl Weight {
    pub const MIN: Weight = Weight(1);
    pub const MAX: Weight = Weight(5);

    /// Create a weight, clamping to the valid 1..=5 range
    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, 5) as u8)
    }

    /// Parse user input into a weight
    ///
    /// Returns `None` for non-numeric input so the caller can retain the
    /// previous weight. Numeric values outside 1..=5 are clamped.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<i64>().ok().map(Self::new)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// One step heavier, saturating at 5
    pub fn heavier(&self) -> Self {
        Self::new(self.0 as i64 + 1)
    }

    /// One step lighter, saturating at 1
    pub fn lighter(&self) -> Self {
        Self::new(self.0 as i64 - 1)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::MIN
    }
}

impl From<i64> for Weight {
    fn from(value: i64) -> Self {
        Weight::new(value)
    }
}

impl From<Weight> for i64 {
    fn from(weight: Weight) -> Self {
        weight.0 as i64
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answer to a question
///
/// A question holds `Option<Answer>`; `None` means not yet answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    #[serde(rename = "na")]
    NotApplicable,
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::NotApplicable => "na",
        }
    }

    /// Whether this answer participates in scoring
    ///
    /// "Not applicable" is excluded from both numerator and denominator —
    /// it neither helps nor hurts the score.
    pub fn counts_toward_score(&self) -> bool {
        matches!(self, Answer::Yes | Answer::No)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single edit applied to a draft question
///
/// Edits are a closed set of tagged variants rather than a generic
/// field/value update, so an invalid field name cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionEdit {
    /// Replace the prompt text (stored as-is)
    Text(String),
    /// Replace the weight
    Weight(Weight),
}

/// Weighted score on a 0–5 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(0.0);

    /// Create a score, clamping to the representable 0..=5 range
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 5.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}/5.0", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_clamps_on_construction() {
        assert_eq!(Weight::new(0), Weight::MIN);
        assert_eq!(Weight::new(-7), Weight::MIN);
        assert_eq!(Weight::new(3).get(), 3);
        assert_eq!(Weight::new(9), Weight::MAX);
    }

    #[test]
    fn test_weight_parse_numeric() {
        assert_eq!(Weight::parse("4"), Some(Weight::new(4)));
        assert_eq!(Weight::parse(" 2 "), Some(Weight::new(2)));
        // Out-of-range input clamps rather than failing
        assert_eq!(Weight::parse("0"), Some(Weight::MIN));
        assert_eq!(Weight::parse("99"), Some(Weight::MAX));
    }

    #[test]
    fn test_weight_parse_non_numeric_is_none() {
        assert_eq!(Weight::parse(""), None);
        assert_eq!(Weight::parse("heavy"), None);
        assert_eq!(Weight::parse("3.5"), None);
    }

    #[test]
    fn test_weight_stepping_saturates() {
        assert_eq!(Weight::MAX.heavier(), Weight::MAX);
        assert_eq!(Weight::MIN.lighter(), Weight::MIN);
        assert_eq!(Weight::new(2).heavier(), Weight::new(3));
        assert_eq!(Weight::new(2).lighter(), Weight::MIN);
    }

    #[test]
    fn test_answer_scoring_participation() {
        assert!(Answer::Yes.counts_toward_score());
        assert!(Answer::No.counts_toward_score());
        assert!(!Answer::NotApplicable.counts_toward_score());
    }

    #[test]
    fn test_answer_as_str() {
        assert_eq!(Answer::Yes.as_str(), "yes");
        assert_eq!(Answer::No.as_str(), "no");
        assert_eq!(Answer::NotApplicable.as_str(), "na");
    }

    #[test]
    fn test_question_id_next() {
        assert_eq!(QuestionId(5).next(), QuestionId(6));
        assert_eq!(QuestionId::FIRST, QuestionId(1));
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::new(10.0 / 3.0).to_string(), "3.3/5.0");
        assert_eq!(Score::ZERO.to_string(), "0.0/5.0");
        assert_eq!(Score::new(5.0).to_string(), "5.0/5.0");
    }

    #[test]
    fn test_score_clamps() {
        assert_eq!(Score::new(-1.0).value(), 0.0);
        assert_eq!(Score::new(7.0).value(), 5.0);
    }
}
