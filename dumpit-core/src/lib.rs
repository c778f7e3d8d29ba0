//! # dumpit core
//!
//! Collaborator layer around the gallery carousel: the pieces of the
//! application that store, validate and decorate items before the player
//! ever sees them.
//!
//! - [`repository`]: in-memory [`ItemRepository`](dumpit_contracts::repository::ItemRepository)
//!   implementation with draft validation
//! - [`validation`]: upload rules for image files and image URLs
//! - [`journal`]: inline mood marker encoding for journal content
//! - [`sound`]: injected click-sound service and its settings stores

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod error;
pub mod journal;
pub mod repository;
pub mod sound;
pub mod validation;

pub use error::{Result, ValidationError};
pub use repository::{InMemoryRepository, ValidateDraft};
pub use sound::{
    ClickSoundManager, JsonFileSettingsStore, MemorySettingsStore,
};
