//! Core data model definitions shared across dumpit crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod error;
pub mod ids;
pub mod image;
pub mod journal;
pub mod prelude;
pub mod quote;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ImageID, JournalEntryID, QuoteID};
pub use image::{ImageDraft, ImageItem, ImageSource, StoredBlob};
pub use journal::{JournalDraft, JournalEntry, Mood};
pub use quote::{Quote, QuoteDraft};
