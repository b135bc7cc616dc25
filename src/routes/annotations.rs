//! Annotation routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::model::Annotation;
use crate::routes::ApiResult;
use crate::services::annotation::{self, AnnotationFilter, CreateAnnotation};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReplyQuery {
    pub content: String,
    pub author_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub id: String,
}

/// `GET /api/drawings/:id/annotations?version_id=&page=`
pub async fn list_annotations(
    State(state): State<AppState>,
    Path(drawing_id): Path<String>,
    filter: Result<Query<AnnotationFilter>, QueryRejection>,
) -> ApiResult<Vec<Annotation>> {
    let Query(filter) = filter?;
    Ok(Json(annotation::list_annotations(&state, &drawing_id, &filter).await))
}

/// `POST /api/annotations`
pub async fn create_annotation(
    State(state): State<AppState>,
    body: Result<Json<CreateAnnotation>, JsonRejection>,
) -> ApiResult<Annotation> {
    let Json(body) = body?;
    Ok(Json(annotation::create_annotation(&state, body).await?))
}

/// `PUT /api/annotations/:id/resolve`
pub async fn resolve_annotation(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Annotation> {
    Ok(Json(annotation::set_resolved(&state, &id, true).await?))
}

/// `PUT /api/annotations/:id/unresolve`
pub async fn unresolve_annotation(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Annotation> {
    Ok(Json(annotation::set_resolved(&state, &id, false).await?))
}

/// `DELETE /api/annotations/:id`
pub async fn delete_annotation(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<DeletedResponse> {
    let removed = annotation::delete_annotation(&state, &id).await?;
    Ok(Json(DeletedResponse { message: "Annotation deleted successfully", id: removed.id }))
}

/// `POST /api/annotations/:id/replies?content=&author_id=`
pub async fn add_reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<ReplyQuery>, QueryRejection>,
) -> ApiResult<Annotation> {
    let Query(query) = query?;
    Ok(Json(
        annotation::add_reply(&state, &id, &query.content, query.author_id.as_deref()).await?,
    ))
}

#[cfg(test)]
#[path = "annotations_test.rs"]
mod annotations_test;
