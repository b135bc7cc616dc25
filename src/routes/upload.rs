//! `POST /api/upload`: multipart file upload.

use axum::extract::{Multipart, State};
use axum::response::Json;
use tracing::debug;

use crate::routes::{ApiError, ApiResult};
use crate::services::ReviewError;
use crate::services::upload::{self, StoredUpload};
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const FALLBACK_FILENAME: &str = "upload";

/// Store the first `file` field; other fields are skipped.
pub async fn upload_file(State(state): State<AppState>, mut multipart: Multipart) -> ApiResult<StoredUpload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!(name = ?field.name(), "skipping multipart field");
            continue;
        }
        let original_filename = field.file_name().unwrap_or(FALLBACK_FILENAME).to_owned();
        let bytes = field.bytes().await?;
        let stored = upload::store_upload(&state.config, &original_filename, &bytes).await?;
        return Ok(Json(stored));
    }
    Err(ApiError::from(ReviewError::Invalid(format!("missing multipart field `{FILE_FIELD}`"))))
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;
