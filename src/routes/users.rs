//! User routes.

use axum::extract::State;
use axum::response::Json;

use crate::model::User;
use crate::routes::ApiResult;
use crate::services::user;
use crate::state::AppState;

/// `GET /api/users`
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(user::list_users(&state).await)
}

/// `GET /api/users/me`: the mock signed-in user.
pub async fn current_user(State(state): State<AppState>) -> ApiResult<User> {
    Ok(Json(user::current_user(&state).await?))
}
