use dumpit_contracts::error::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarouselError {
    #[error("invalid carousel configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
