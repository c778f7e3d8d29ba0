use dumpit_model::chrono::{DateTime, Utc};
use dumpit_model::{
    ImageDraft, ImageID, ImageItem, JournalDraft, JournalEntry,
    JournalEntryID, Quote, QuoteDraft, QuoteID,
};
use std::fmt::Display;
use std::hash::Hash;

/// Common interface for everything a user can dump into a collection.
pub trait Collectable: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Ord + Hash + Display + Send + Sync + 'static;
    type Draft: Send + 'static;

    /// Collection name used in logs and status messages.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    fn created_at(&self) -> DateTime<Utc>;

    /// Listing key, newest first.
    fn sort_key(&self) -> DateTime<Utc> {
        self.created_at()
    }

    /// Build a stored item from a validated draft.
    fn from_draft(draft: Self::Draft, now: DateTime<Utc>) -> Self;
}

impl Collectable for ImageItem {
    type Id = ImageID;
    type Draft = ImageDraft;

    const KIND: &'static str = "image";

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(draft: Self::Draft, now: DateTime<Utc>) -> Self {
        ImageItem::from_draft(draft, now)
    }
}

impl Collectable for JournalEntry {
    type Id = JournalEntryID;
    type Draft = JournalDraft;

    const KIND: &'static str = "journal entry";

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Entries list by the day they describe, not when they were written.
    fn sort_key(&self) -> DateTime<Utc> {
        self.date
    }

    fn from_draft(draft: Self::Draft, now: DateTime<Utc>) -> Self {
        JournalEntry::from_draft(draft, now)
    }
}

impl Collectable for Quote {
    type Id = QuoteID;
    type Draft = QuoteDraft;

    const KIND: &'static str = "quote";

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(draft: Self::Draft, now: DateTime<Utc>) -> Self {
        Quote::from_draft(draft, now)
    }
}
