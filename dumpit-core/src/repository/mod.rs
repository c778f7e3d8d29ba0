//! Repository adapters.

pub mod in_memory;

pub use in_memory::{
    ImageRepository, InMemoryRepository, JournalRepository, QuoteRepository,
    ValidateDraft,
};
