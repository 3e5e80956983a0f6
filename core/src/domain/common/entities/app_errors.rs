use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("This substitution already exists for the household")]
    DuplicateSubstitution,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Recoverable conditions are reported to the user and leave the store untouched.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CoreError::InternalServerError)
    }
}
