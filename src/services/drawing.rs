//! Drawing service: listing, lookup, and version history.
//!
//! DESIGN
//! ======
//! A new version is appended to the drawing's history, becomes its current
//! version, and starts in `draft` status. Version ids are
//! `ver-{drawing_id}-{n}` where `n` is the new history length.

use serde::Deserialize;
use time::OffsetDateTime;
use tracing::info;

use crate::model::{Drawing, ReviewStatus, Version};
use crate::services::ReviewError;
use crate::services::user::resolve_author;
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NewVersion {
    pub file_url: String,
    #[serde(default)]
    pub changes_summary: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<String>,
}

// =============================================================================
// READ
// =============================================================================

/// All drawings, or only those in `project_id`. An empty id means no filter.
pub async fn list_drawings(state: &AppState, project_id: Option<&str>) -> Vec<Drawing> {
    let project_id = project_id.filter(|p| !p.is_empty());
    let store = state.store.read().await;
    store
        .drawings
        .iter()
        .filter(|d| project_id.is_none_or(|p| d.project_id == p))
        .cloned()
        .collect()
}

/// # Errors
///
/// Returns `NotFound` if no drawing has this id.
pub async fn get_drawing(state: &AppState, drawing_id: &str) -> Result<Drawing, ReviewError> {
    let store = state.store.read().await;
    store
        .drawings
        .iter()
        .find(|d| d.id == drawing_id)
        .cloned()
        .ok_or_else(|| ReviewError::not_found("Drawing", drawing_id))
}

/// # Errors
///
/// Returns `NotFound` if no drawing has this id.
pub async fn list_versions(state: &AppState, drawing_id: &str) -> Result<Vec<Version>, ReviewError> {
    Ok(get_drawing(state, drawing_id).await?.versions)
}

// =============================================================================
// CREATE VERSION
// =============================================================================

/// Append a version to a drawing and make it current.
///
/// # Errors
///
/// Returns `NotFound` for an unknown drawing and `Invalid` for a blank `file_url`.
pub async fn create_version(state: &AppState, drawing_id: &str, new: NewVersion) -> Result<Version, ReviewError> {
    let file_url = new.file_url.trim();
    if file_url.is_empty() {
        return Err(ReviewError::Invalid("file_url must not be empty".into()));
    }

    let mut store = state.store.write().await;
    let creator = resolve_author(&store, new.created_by_id.as_deref())?;
    let drawing = store
        .drawings
        .iter_mut()
        .find(|d| d.id == drawing_id)
        .ok_or_else(|| ReviewError::not_found("Drawing", drawing_id))?;

    #[allow(clippy::cast_possible_truncation)]
    let version_number = drawing.versions.len() as u32 + 1;
    let now = OffsetDateTime::now_utc();
    let version = Version {
        id: format!("ver-{drawing_id}-{version_number}"),
        version_number,
        created_at: now,
        created_by: creator,
        file_url: file_url.to_owned(),
        changes_summary: new.changes_summary.filter(|s| !s.trim().is_empty()),
        status: ReviewStatus::Draft,
    };

    drawing.versions.push(version.clone());
    drawing.current_version = version.clone();
    drawing.updated_at = now;

    info!(%drawing_id, version_id = %version.id, version_number, "version created");
    Ok(version)
}

#[cfg(test)]
#[path = "drawing_test.rs"]
mod drawing_test;
