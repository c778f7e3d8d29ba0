//! Mood-tagged journal entries.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::JournalEntryID;

/// Mood a journal entry can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mood {
    Happy,
    Sad,
    Calm,
    Angry,
    Tired,
    Thoughtful,
    Cool,
    Excited,
}

impl Mood {
    pub const ALL: [Self; 8] = [
        Self::Happy,
        Self::Sad,
        Self::Calm,
        Self::Angry,
        Self::Tired,
        Self::Thoughtful,
        Self::Cool,
        Self::Excited,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Calm => "Calm",
            Self::Angry => "Angry",
            Self::Tired => "Tired",
            Self::Thoughtful => "Thoughtful",
            Self::Cool => "Cool",
            Self::Excited => "Excited",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😔",
            Self::Calm => "😌",
            Self::Angry => "😡",
            Self::Tired => "😴",
            Self::Thoughtful => "🤔",
            Self::Cool => "😎",
            Self::Excited => "🥳",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownMood(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JournalEntry {
    pub id: JournalEntryID,
    pub content: String,
    /// Day the entry is about, as chosen by the writer.
    pub date: DateTime<Utc>,
    pub mood: Option<Mood>,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn from_draft(draft: JournalDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: JournalEntryID::new(),
            content: draft.content,
            date: draft.date,
            mood: draft.mood,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JournalDraft {
    pub content: String,
    pub date: DateTime<Utc>,
    pub mood: Option<Mood>,
}
