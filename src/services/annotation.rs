//! Annotation service: list, create, resolve, delete, reply.
//!
//! DESIGN
//! ======
//! Annotations are pinned to one drawing version and one page. New ids come
//! from the store's monotonic counter so a delete never frees an id for reuse.
//! Reply ids are `reply-{n}` within their annotation; replies are never removed.
//!
//! VALIDATION
//! ==========
//! A position must be finite, lie on page 1 or later, and cover some area.
//! Only its size must be non-negative: `x` and `y` may be negative, since a
//! region can be drawn off the page's top-left edge after panning. A
//! zero-by-zero region is a click, not an annotation.

use serde::Deserialize;
use time::OffsetDateTime;
use tracing::info;

use crate::model::{Annotation, AnnotationReply, AnnotationType, Position};
use crate::services::ReviewError;
use crate::services::user::resolve_author;
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

/// Optional filters for the per-drawing list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotationFilter {
    pub version_id: Option<String>,
    pub page: Option<u32>,
}

/// Body of `POST /api/annotations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnotation {
    pub drawing_id: String,
    pub version_id: String,
    #[serde(rename = "type")]
    pub kind: AnnotationType,
    pub content: String,
    pub position: Position,
    #[serde(default)]
    pub author_id: Option<String>,
}

// =============================================================================
// READ
// =============================================================================

/// Annotations on `drawing_id`. An empty `version_id` is treated as absent.
pub async fn list_annotations(state: &AppState, drawing_id: &str, filter: &AnnotationFilter) -> Vec<Annotation> {
    let version_id = filter.version_id.as_deref().filter(|v| !v.is_empty());
    let store = state.store.read().await;
    store
        .annotations
        .iter()
        .filter(|a| a.drawing_id == drawing_id)
        .filter(|a| version_id.is_none_or(|v| a.version_id == v))
        .filter(|a| filter.page.is_none_or(|p| a.position.page == p))
        .cloned()
        .collect()
}

// =============================================================================
// CREATE
// =============================================================================

/// Check that a position describes a real region on a real page: finite
/// values, non-negative width and height, non-zero area, page 1 or later.
///
/// # Errors
///
/// Returns `Invalid` describing the first violated rule.
pub fn validate_position(position: &Position) -> Result<(), ReviewError> {
    let Position { x, y, width, height, page } = *position;
    if ![x, y, width, height].iter().all(|v| v.is_finite()) {
        return Err(ReviewError::Invalid("position values must be finite".into()));
    }
    if width < 0.0 || height < 0.0 {
        return Err(ReviewError::Invalid("position width and height must not be negative".into()));
    }
    if width == 0.0 && height == 0.0 {
        return Err(ReviewError::Invalid("position must cover a non-zero area".into()));
    }
    if page == 0 {
        return Err(ReviewError::Invalid("position page starts at 1".into()));
    }
    Ok(())
}

/// Create an annotation on an existing drawing version.
///
/// # Errors
///
/// Returns `Invalid` for blank content or a bad position, and `NotFound` if the
/// drawing or version does not exist.
pub async fn create_annotation(state: &AppState, req: CreateAnnotation) -> Result<Annotation, ReviewError> {
    let content = req.content.trim();
    if content.is_empty() {
        return Err(ReviewError::Invalid("content must not be empty".into()));
    }
    validate_position(&req.position)?;

    let mut store = state.store.write().await;
    let drawing = store
        .drawings
        .iter()
        .find(|d| d.id == req.drawing_id)
        .ok_or_else(|| ReviewError::not_found("Drawing", &req.drawing_id))?;
    if !drawing.versions.iter().any(|v| v.id == req.version_id) {
        return Err(ReviewError::not_found("Version", &req.version_id));
    }
    let author = resolve_author(&store, req.author_id.as_deref())?;

    let now = OffsetDateTime::now_utc();
    let annotation = Annotation {
        id: store.allocate_annotation_id(),
        drawing_id: req.drawing_id,
        version_id: req.version_id,
        kind: req.kind,
        author,
        content: content.to_owned(),
        position: req.position,
        created_at: now,
        updated_at: now,
        resolved: false,
        replies: Vec::new(),
    };
    store.annotations.push(annotation.clone());

    info!(
        id = %annotation.id,
        drawing_id = %annotation.drawing_id,
        page = annotation.position.page,
        "annotation created"
    );
    Ok(annotation)
}

// =============================================================================
// UPDATE
// =============================================================================

/// Mark an annotation resolved or open again.
///
/// # Errors
///
/// Returns `NotFound` if no annotation has this id.
pub async fn set_resolved(state: &AppState, annotation_id: &str, resolved: bool) -> Result<Annotation, ReviewError> {
    let mut store = state.store.write().await;
    let annotation = store
        .annotations
        .iter_mut()
        .find(|a| a.id == annotation_id)
        .ok_or_else(|| ReviewError::not_found("Annotation", annotation_id))?;
    annotation.resolved = resolved;
    annotation.updated_at = OffsetDateTime::now_utc();
    info!(id = %annotation_id, resolved, "annotation resolution changed");
    Ok(annotation.clone())
}

/// Append a reply to an annotation.
///
/// # Errors
///
/// Returns `Invalid` for blank content and `NotFound` for an unknown annotation.
pub async fn add_reply(
    state: &AppState,
    annotation_id: &str,
    content: &str,
    author_id: Option<&str>,
) -> Result<Annotation, ReviewError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ReviewError::Invalid("content must not be empty".into()));
    }

    let mut store = state.store.write().await;
    let author = resolve_author(&store, author_id)?;
    let annotation = store
        .annotations
        .iter_mut()
        .find(|a| a.id == annotation_id)
        .ok_or_else(|| ReviewError::not_found("Annotation", annotation_id))?;

    let now = OffsetDateTime::now_utc();
    annotation.replies.push(AnnotationReply {
        id: format!("reply-{}", annotation.replies.len() + 1),
        author,
        content: content.to_owned(),
        created_at: now,
    });
    annotation.updated_at = now;
    info!(id = %annotation_id, replies = annotation.replies.len(), "reply added");
    Ok(annotation.clone())
}

// =============================================================================
// DELETE
// =============================================================================

/// Remove an annotation and return it.
///
/// # Errors
///
/// Returns `NotFound` if no annotation has this id.
pub async fn delete_annotation(state: &AppState, annotation_id: &str) -> Result<Annotation, ReviewError> {
    let mut store = state.store.write().await;
    let index = store
        .annotations
        .iter()
        .position(|a| a.id == annotation_id)
        .ok_or_else(|| ReviewError::not_found("Annotation", annotation_id))?;
    let removed = store.annotations.remove(index);
    info!(id = %annotation_id, "annotation deleted");
    Ok(removed)
}

#[cfg(test)]
#[path = "annotation_test.rs"]
mod annotation_test;
