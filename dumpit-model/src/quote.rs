//! Short saved quotes.

use chrono::{DateTime, Utc};

use crate::ids::QuoteID;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    pub id: QuoteID,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn from_draft(draft: QuoteDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: QuoteID::new(),
            content: draft.content,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteDraft {
    pub content: String,
}
