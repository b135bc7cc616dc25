//! Review workflow routes.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::model::{ReviewStatus, ReviewWorkflow};
use crate::routes::ApiResult;
use crate::services::workflow;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct WorkflowQuery {
    pub drawing_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: ReviewStatus,
}

/// `GET /api/workflows?drawing_id=`
pub async fn list_workflows(
    State(state): State<AppState>,
    query: Result<Query<WorkflowQuery>, QueryRejection>,
) -> ApiResult<Vec<ReviewWorkflow>> {
    let Query(query) = query?;
    Ok(Json(workflow::list_workflows(&state, query.drawing_id.as_deref()).await))
}

/// `PUT /api/workflows/:id/status?status=`
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> ApiResult<ReviewWorkflow> {
    let Query(query) = query?;
    Ok(Json(workflow::update_status(&state, &id, query.status).await?))
}

#[cfg(test)]
#[path = "workflows_test.rs"]
mod workflows_test;
