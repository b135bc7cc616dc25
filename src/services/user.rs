//! User lookups. There is no authentication: the first seeded user is "me".

use crate::model::User;
use crate::services::ReviewError;
use crate::state::{AppState, ReviewStore};

pub async fn list_users(state: &AppState) -> Vec<User> {
    state.store.read().await.users.clone()
}

/// The mock signed-in user.
///
/// # Errors
///
/// Returns `NotFound` if the store has no users at all.
pub async fn current_user(state: &AppState) -> Result<User, ReviewError> {
    let store = state.store.read().await;
    resolve_author(&store, None)
}

/// Find `author_id`, falling back to the current user when it is absent or unknown.
pub(crate) fn resolve_author(store: &ReviewStore, author_id: Option<&str>) -> Result<User, ReviewError> {
    author_id
        .and_then(|id| store.users.iter().find(|u| u.id == id))
        .or_else(|| store.users.first())
        .cloned()
        .ok_or_else(|| ReviewError::not_found("User", author_id.unwrap_or("me")))
}

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;
