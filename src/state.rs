//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the server configuration and the in-memory review store. There is
//! no database: the store is seeded from fixtures at startup and lost on exit.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::model::{Annotation, Drawing, ProjectRecord, ReviewWorkflow, User};

// =============================================================================
// REVIEW STORE
// =============================================================================

/// All review data. Plain vectors keep the fixture order stable on the wire.
#[derive(Debug, Clone)]
pub struct ReviewStore {
    pub users: Vec<User>,
    pub projects: Vec<ProjectRecord>,
    pub drawings: Vec<Drawing>,
    pub annotations: Vec<Annotation>,
    pub workflows: Vec<ReviewWorkflow>,
    /// Next numeric suffix for `ann-{n}`. Never reused after a delete.
    pub next_annotation_seq: u32,
}

impl ReviewStore {
    #[must_use]
    pub fn new(
        users: Vec<User>,
        projects: Vec<ProjectRecord>,
        drawings: Vec<Drawing>,
        annotations: Vec<Annotation>,
        workflows: Vec<ReviewWorkflow>,
    ) -> Self {
        let next_annotation_seq = annotations
            .iter()
            .filter_map(|a| a.id.strip_prefix("ann-").and_then(|n| n.parse::<u32>().ok()))
            .max()
            .unwrap_or(0)
            + 1;
        Self { users, projects, drawings, annotations, workflows, next_annotation_seq }
    }

    /// Hand out the next annotation id.
    pub fn allocate_annotation_id(&mut self) -> String {
        let id = format!("ann-{}", self.next_annotation_seq);
        self.next_annotation_seq += 1;
        id
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ReviewStore>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ReviewStore, config: ServerConfig) -> Self {
        Self { store: Arc::new(RwLock::new(store)), config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::path::Path;

    use super::*;
    use crate::fixtures;

    /// Seeded state with default config and uploads under `upload_dir`.
    #[must_use]
    pub fn test_app_state(upload_dir: &Path) -> AppState {
        let config = ServerConfig { upload_dir: upload_dir.to_path_buf(), ..ServerConfig::default() };
        AppState::new(fixtures::seed(), config)
    }

    /// Seeded state whose upload dir is never written.
    #[must_use]
    pub fn seeded_state() -> AppState {
        AppState::new(fixtures::seed(), ServerConfig::default())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
