//! Image items shown in the gallery carousel.

use chrono::{DateTime, Utc};

use crate::ids::ImageID;

/// An image stored either in the blob store or referenced by URL.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageItem {
    pub id: ImageID,
    pub url: String,
    pub file_name: Option<String>,
    /// Blob store key; `None` for images linked by URL.
    pub storage_key: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ImageItem {
    /// Materialize a draft into a stored item with a fresh id.
    pub fn from_draft(draft: ImageDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ImageID::new(),
            url: draft.url,
            file_name: draft.file_name,
            storage_key: draft.storage_key,
            file_size: draft.file_size,
            mime_type: draft.mime_type,
            created_at,
        }
    }

    /// Label used for alt text and status messages.
    pub fn display_name(&self) -> &str {
        self.file_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Image")
    }

    pub fn is_linked(&self) -> bool {
        self.storage_key.is_none()
    }
}

/// Where a new image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageSource {
    /// Remote image referenced by URL, stored as-is.
    Url(String),
    /// Uploaded file, described before its bytes reach the blob store.
    File {
        file_name: String,
        mime_type: String,
        size: u64,
    },
}

/// Location of an upload once the blob store has accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoredBlob {
    pub key: String,
    pub url: String,
}

/// Validated, not yet persisted image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageDraft {
    pub url: String,
    pub file_name: Option<String>,
    pub storage_key: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
}
