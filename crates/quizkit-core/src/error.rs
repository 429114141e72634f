use thiserror::Error;

/// A draft or merged record that cannot be stored as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid question type: {0}")]
    InvalidQuestionType(String),

    #[error("points must be a non-negative number, got {0}")]
    InvalidPoints(f64),
}
