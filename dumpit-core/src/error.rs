use dumpit_contracts::error::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "File type not supported: {0}. Please upload a JPEG, PNG, GIF or WEBP image."
    )]
    UnsupportedType(String),

    #[error("File too large ({size} bytes). Maximum size is {max} bytes.")]
    TooLarge { size: u64, max: u64 },

    #[error(
        "Invalid image URL: {0}. URL must point to a JPG, PNG, GIF or WEBP file."
    )]
    InvalidUrl(String),

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("Expected {expected} source")]
    WrongSource { expected: &'static str },
}

impl From<ValidationError> for RepositoryError {
    fn from(err: ValidationError) -> Self {
        RepositoryError::Invalid(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
