use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::domain::UserId;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),
    #[error("User already exists: {0}")]
    DuplicateId(UserId),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// Translate a framework error raised while operating on `id`.
    pub fn from_framework(id: UserId, err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(_) => UserError::NotFound(id),
            FrameworkError::DuplicateId(_) => UserError::DuplicateId(id),
            FrameworkError::Rejected(reason) => UserError::ValidationError(reason),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                UserError::ActorCommunicationError(err.to_string())
            }
        }
    }
}
