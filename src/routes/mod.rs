//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the review REST API and the static upload directory
//! under a single Axum router. Handlers translate HTTP to service calls; the
//! services own every lookup and mutation on the review store.
//!
//! ERROR MAPPING
//! =============
//! `ApiError` turns service errors into a status code plus a
//! `{"detail": "..."}` body: not found is 404, invalid input is 422, and I/O
//! failures are 500 with the cause logged rather than returned. Extractor
//! rejections go through the same type, so a malformed body or query string
//! also answers with `{"detail"}`; query errors are 422.

pub mod annotations;
pub mod drawings;
pub mod projects;
pub mod upload;
pub mod users;
pub mod workflows;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post, put};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::services::ReviewError;
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    Review(ReviewError),
    Json(JsonRejection),
    Query(QueryRejection),
    Multipart(MultipartError),
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        Self::Review(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Json(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        Self::Query(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::Multipart(err)
    }
}

pub(crate) fn review_error_to_status(err: &ReviewError) -> StatusCode {
    match err {
        ReviewError::NotFound { .. } => StatusCode::NOT_FOUND,
        ReviewError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ReviewError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Review(err) => {
                let status = review_error_to_status(&err);
                if status.is_server_error() {
                    error!(error = %err, "request failed");
                    (status, "internal server error".to_owned())
                } else {
                    (status, err.to_string())
                }
            }
            Self::Json(err) => (err.status(), err.body_text()),
            Self::Query(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.body_text()),
            Self::Multipart(err) => (err.status(), err.body_text()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

// =============================================================================
// ROUTER
// =============================================================================

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Full application router: REST API, health check, and `/uploads` static files.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    let uploads = ServeDir::new(&state.config.upload_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects/{id}", get(projects::get_project))
        .route("/api/drawings", get(drawings::list_drawings))
        .route("/api/drawings/{id}", get(drawings::get_drawing))
        .route(
            "/api/drawings/{id}/versions",
            get(drawings::list_versions).post(drawings::create_version),
        )
        .route("/api/drawings/{id}/annotations", get(annotations::list_annotations))
        .route("/api/annotations", post(annotations::create_annotation))
        .route("/api/annotations/{id}", axum::routing::delete(annotations::delete_annotation))
        .route("/api/annotations/{id}/resolve", put(annotations::resolve_annotation))
        .route("/api/annotations/{id}/unresolve", put(annotations::unresolve_annotation))
        .route("/api/annotations/{id}/replies", post(annotations::add_reply))
        .route("/api/workflows", get(workflows::list_workflows))
        .route("/api/workflows/{id}/status", put(workflows::update_status))
        .route("/api/users", get(users::list_users))
        .route("/api/users/me", get(users::current_user))
        .route("/api/upload", post(upload::upload_file))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Drawing Review API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
pub(crate) mod test_server;
