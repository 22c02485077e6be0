use thiserror::Error;

/// Rejection of a submission before anything is persisted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),
}
