//! Shared configuration library for dumpit.
//!
//! Centralizes loading of the `dumpit.toml` file, `.env` handling and
//! `DUMPIT_*` environment overrides so the player binary and tests agree on
//! precedence and validation rules.

pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{CarouselSettings, Config, ConfigSource, SoundSettings};
