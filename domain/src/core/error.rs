//! Domain error types

use crate::questionnaire::value_objects::QuestionId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Duplicate question id: {0}")]
    DuplicateId(QuestionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let error = DomainError::DuplicateId(QuestionId(3));
        assert_eq!(error.to_string(), "Duplicate question id: 3");
    }
}
