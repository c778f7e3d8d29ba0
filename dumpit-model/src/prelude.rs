//! Gallery focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in dumpit-player or other presentation layers.

pub use super::ids::{ImageID, JournalEntryID, QuoteID};
pub use super::image::{ImageDraft, ImageItem, ImageSource, StoredBlob};
pub use super::journal::{JournalDraft, JournalEntry, Mood};
pub use super::quote::{Quote, QuoteDraft};
