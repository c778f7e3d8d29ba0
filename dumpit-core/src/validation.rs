//! Upload rules for new images.
//!
//! Files are checked before their bytes are handed to the blob store; URL
//! sources are stored as-is once their path looks like an image.

use dumpit_model::{ImageDraft, ImageSource, StoredBlob};
use url::Url;

use crate::error::{Result, ValidationError};

/// Largest accepted upload (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const SUPPORTED_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

pub const SUPPORTED_EXTENSIONS: [&str; 5] =
    [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// File name given to URL images whose path has no usable last segment.
pub const URL_FALLBACK_FILE_NAME: &str = "url-image";

pub fn validate_image_file(mime_type: &str, size: u64) -> Result<()> {
    if !SUPPORTED_MIME_TYPES.contains(&mime_type) {
        return Err(ValidationError::UnsupportedType(mime_type.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge {
            size,
            max: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Parse `raw` and require an image extension on its path.
pub fn parse_image_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|_| ValidationError::InvalidUrl(raw.to_string()))?;
    let path = url.path().to_ascii_lowercase();
    if SUPPORTED_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        Ok(url)
    } else {
        Err(ValidationError::InvalidUrl(raw.to_string()))
    }
}

pub fn is_valid_image_url(raw: &str) -> bool {
    parse_image_url(raw).is_ok()
}

pub fn url_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| URL_FALLBACK_FILE_NAME.to_string())
}

/// Check a source before anything is uploaded or stored.
pub fn validate_source(source: &ImageSource) -> Result<()> {
    match source {
        ImageSource::Url(raw) => parse_image_url(raw).map(|_| ()),
        ImageSource::File {
            mime_type, size, ..
        } => validate_image_file(mime_type, *size),
    }
}

/// Draft for an image linked by URL. No blob is stored.
pub fn url_draft(raw: &str) -> Result<ImageDraft> {
    let url = parse_image_url(raw)?;
    Ok(ImageDraft {
        file_name: Some(url_file_name(&url)),
        url: url.into(),
        storage_key: None,
        file_size: None,
        mime_type: None,
    })
}

/// Draft for an uploaded file once the blob store returned its location.
pub fn upload_draft(
    source: &ImageSource,
    stored: StoredBlob,
) -> Result<ImageDraft> {
    let ImageSource::File {
        file_name,
        mime_type,
        size,
    } = source
    else {
        return Err(ValidationError::WrongSource { expected: "file" });
    };
    validate_image_file(mime_type, *size)?;
    Ok(ImageDraft {
        url: stored.url,
        file_name: Some(file_name.clone()),
        storage_key: Some(stored.key),
        file_size: Some(*size),
        mime_type: Some(mime_type.clone()),
    })
}
