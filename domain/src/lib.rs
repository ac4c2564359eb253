//! Domain layer for kokoro-check
//!
//! This crate contains the questionnaire engine, its entities, and value
//! objects. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Live and draft lists
//!
//! The engine keeps the authoritative **live** list of questions, used for
//! answering and scoring. Editing happens inside a two-phase transaction:
//! [`Questionnaire::begin_edit`] snapshots live into a **draft** list,
//! edits apply only to the draft, and [`Questionnaire::commit_edit`]
//! replaces live wholesale (or [`Questionnaire::discard_edit`] drops it).
//!
//! ## Scoring
//!
//! The score is a weighted ratio of "yes" answers among the answered
//! (yes/no) questions, scaled to 0–5. "Not applicable" answers are
//! excluded from both numerator and denominator.

pub mod core;
pub mod questionnaire;

// Re-export commonly used types
pub use core::error::DomainError;
pub use questionnaire::{
    engine::Questionnaire,
    entities::Question,
    scoring::weighted_score,
    value_objects::{Answer, QuestionEdit, QuestionId, Score, Weight},
};
