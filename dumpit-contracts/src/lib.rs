//! Trait surfaces that describe the collaborators around the gallery.
//!
//! The carousel itself never talks to storage or audio; these contracts are
//! the seams the surrounding application plugs its implementations into.

pub mod collectable;
pub mod error;
pub mod repository;
pub mod settings;
pub mod sound;

/// Frequently used trait combinators for UI and orchestration crates.
pub mod prelude {
    pub use super::collectable::Collectable;
    pub use super::error::{RepositoryError, RepositoryResult, SoundError};
    pub use super::repository::ItemRepository;
    pub use super::settings::{SettingsError, SettingsStore};
    pub use super::sound::{ClickSound, NoopClickSound, SoundSink};
}
