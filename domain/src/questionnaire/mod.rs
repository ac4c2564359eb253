//! Questionnaire module — entities, value objects, engine, and scoring

pub mod engine;
pub mod entities;
pub mod scoring;
pub mod value_objects;
