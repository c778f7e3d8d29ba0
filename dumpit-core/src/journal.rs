//! Inline mood marker for journal content.
//!
//! Stores that keep entries as a single text column persist the mood as a
//! `[MOOD:<name>]\n` prefix on the content; [`StoredJournalRow`] is that
//! shape. Decoding strips the marker even when the name is not a known mood.

use dumpit_model::chrono::{DateTime, Utc};
use dumpit_model::{
    JournalDraft, JournalEntry, JournalEntryID, Mood, QuoteDraft,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ValidationError};

static MOOD_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[MOOD:(.*?)\]\n").expect("mood marker regex should compile")
});

pub fn encode_mood_marker(content: &str, mood: Option<Mood>) -> String {
    match mood {
        Some(mood) => format!("[MOOD:{}]\n{content}", mood.name()),
        None => content.to_string(),
    }
}

/// Split stored content into the user's text and its mood, if any.
pub fn decode_mood_marker(raw: &str) -> (String, Option<Mood>) {
    let Some(caps) = MOOD_MARKER.captures(raw) else {
        return (raw.to_string(), None);
    };
    let mood = caps.get(1).and_then(|name| {
        name.as_str()
            .parse::<Mood>()
            .inspect_err(|err| tracing::debug!("dropping marker: {err}"))
            .ok()
    });
    let marker_len = caps.get(0).map(|m| m.end()).unwrap_or(0);
    (raw[marker_len..].to_string(), mood)
}

/// A journal entry as a single-column store keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredJournalRow {
    pub id: JournalEntryID,
    /// Content with the mood marker prefixed.
    pub content: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<&JournalEntry> for StoredJournalRow {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id,
            content: encode_mood_marker(&entry.content, entry.mood),
            date: entry.date,
            created_at: entry.created_at,
        }
    }
}

impl From<StoredJournalRow> for JournalEntry {
    fn from(row: StoredJournalRow) -> Self {
        let (content, mood) = decode_mood_marker(&row.content);
        Self {
            id: row.id,
            content,
            date: row.date,
            mood,
            created_at: row.created_at,
        }
    }
}

pub fn validate_journal_draft(draft: &JournalDraft) -> Result<()> {
    if draft.content.trim().is_empty() {
        return Err(ValidationError::Empty("journal content"));
    }
    Ok(())
}

pub fn validate_quote_draft(draft: &QuoteDraft) -> Result<()> {
    if draft.content.trim().is_empty() {
        return Err(ValidationError::Empty("quote"));
    }
    Ok(())
}
