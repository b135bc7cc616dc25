//! Drawing and version routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::model::{Drawing, Version};
use crate::routes::ApiResult;
use crate::services::drawing::{self, NewVersion};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DrawingQuery {
    pub project_id: Option<String>,
}

/// `GET /api/drawings?project_id=`
pub async fn list_drawings(
    State(state): State<AppState>,
    query: Result<Query<DrawingQuery>, QueryRejection>,
) -> ApiResult<Vec<Drawing>> {
    let Query(query) = query?;
    Ok(Json(drawing::list_drawings(&state, query.project_id.as_deref()).await))
}

/// `GET /api/drawings/:id`
pub async fn get_drawing(State(state): State<AppState>, Path(drawing_id): Path<String>) -> ApiResult<Drawing> {
    Ok(Json(drawing::get_drawing(&state, &drawing_id).await?))
}

/// `GET /api/drawings/:id/versions`
pub async fn list_versions(State(state): State<AppState>, Path(drawing_id): Path<String>) -> ApiResult<Vec<Version>> {
    Ok(Json(drawing::list_versions(&state, &drawing_id).await?))
}

/// `POST /api/drawings/:id/versions`: append a version and make it current.
pub async fn create_version(
    State(state): State<AppState>,
    Path(drawing_id): Path<String>,
    body: Result<Json<NewVersion>, JsonRejection>,
) -> ApiResult<Version> {
    let Json(body) = body?;
    Ok(Json(drawing::create_version(&state, &drawing_id, body).await?))
}

#[cfg(test)]
#[path = "drawings_test.rs"]
mod drawings_test;
