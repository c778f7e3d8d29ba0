use async_trait::async_trait;
use chrono::Utc;
use dumpit_contracts::collectable::Collectable;
use dumpit_contracts::error::{RepositoryError, RepositoryResult};
use dumpit_contracts::repository::ItemRepository;
use dumpit_model::{
    ImageDraft, ImageItem, JournalDraft, JournalEntry, Quote, QuoteDraft,
};
use std::cmp::Reverse;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{Result, ValidationError};
use crate::journal::{
    StoredJournalRow, validate_journal_draft, validate_quote_draft,
};
use crate::validation::parse_image_url;

/// Drafts are checked by the repository before they are stored.
pub trait ValidateDraft {
    fn validate(&self) -> Result<()>;
}

impl ValidateDraft for ImageDraft {
    fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::Empty("image url"));
        }
        // Linked images must still look like images; uploads point at the
        // blob store and are trusted.
        if self.storage_key.is_none() {
            parse_image_url(&self.url)?;
        }
        Ok(())
    }
}

impl ValidateDraft for JournalDraft {
    fn validate(&self) -> Result<()> {
        validate_journal_draft(self)
    }
}

impl ValidateDraft for QuoteDraft {
    fn validate(&self) -> Result<()> {
        validate_quote_draft(self)
    }
}

/// Process-local collection. Listing is newest first by
/// [`Collectable::sort_key`], ties broken by id.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Collectable> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing items, e.g. fixtures or a snapshot.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl InMemoryRepository<JournalEntry> {
    /// Restore from single-column rows, decoding each mood marker.
    pub fn from_rows(rows: Vec<StoredJournalRow>) -> Self {
        Self::with_items(rows.into_iter().map(JournalEntry::from).collect())
    }

    /// Snapshot as single-column rows, newest entry first.
    pub async fn export_rows(&self) -> RepositoryResult<Vec<StoredJournalRow>> {
        let entries = self.list().await?;
        Ok(entries.iter().map(StoredJournalRow::from).collect())
    }
}

pub type ImageRepository = InMemoryRepository<ImageItem>;
pub type JournalRepository = InMemoryRepository<JournalEntry>;
pub type QuoteRepository = InMemoryRepository<Quote>;

#[async_trait]
impl<T> ItemRepository<T> for InMemoryRepository<T>
where
    T: Collectable,
    T::Draft: ValidateDraft,
{
    async fn list(&self) -> RepositoryResult<Vec<T>> {
        let mut items = self.items.read().await.clone();
        items.sort_by_key(|item| Reverse((item.sort_key(), item.id())));
        Ok(items)
    }

    async fn get(&self, id: T::Id) -> RepositoryResult<T> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("{} {id}", T::KIND)))
    }

    async fn create(&self, draft: T::Draft) -> RepositoryResult<T> {
        draft.validate()?;
        let item = T::from_draft(draft, Utc::now());
        debug!("created {} {}", T::KIND, item.id());
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn delete(&self, id: T::Id) -> RepositoryResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound(format!("{} {id}", T::KIND)));
        }
        info!("deleted {} {id}", T::KIND);
        Ok(())
    }
}
