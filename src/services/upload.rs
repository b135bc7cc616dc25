//! Drawing file uploads.
//!
//! DESIGN
//! ======
//! Files are stored flat under the configured upload dir as `{uuid}{ext}`.
//! The client-supplied name only contributes its extension, and only when
//! that extension is short and alphanumeric. Stored files are served back
//! under `/uploads/`.

use std::path::Path;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::services::ReviewError;

const MAX_EXTENSION_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredUpload {
    pub filename: String,
    pub original_filename: String,
    pub url: String,
    pub full_url: String,
}

/// Lowercased `.ext` from a client filename, or empty when there is none worth keeping.
#[must_use]
pub fn safe_extension(original_filename: &str) -> String {
    Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= MAX_EXTENSION_LEN && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}

/// Write `bytes` to a fresh file in the upload dir.
///
/// # Errors
///
/// Returns `Invalid` for an empty upload and `Io` if the directory or file
/// cannot be written.
pub async fn store_upload(
    config: &ServerConfig,
    original_filename: &str,
    bytes: &[u8],
) -> Result<StoredUpload, ReviewError> {
    if bytes.is_empty() {
        return Err(ReviewError::Invalid("uploaded file is empty".into()));
    }

    let filename = format!("{}{}", Uuid::new_v4(), safe_extension(original_filename));
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tokio::fs::write(config.upload_dir.join(&filename), bytes).await?;

    info!(%filename, original_filename, size = bytes.len(), "upload stored");

    let url = format!("/uploads/{filename}");
    Ok(StoredUpload {
        full_url: format!("{}{url}", config.public_base_url),
        filename,
        original_filename: original_filename.to_owned(),
        url,
    })
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;
