use thiserror::Error;

/// Failures reported by item repositories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid item: {0}")]
    Invalid(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Failure to play a sound clip. Never fatal for the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("sound playback failed: {0}")]
pub struct SoundError(pub String);
