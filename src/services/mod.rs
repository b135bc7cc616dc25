//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the lookups and mutations on the in-memory review
//! store so route handlers can stay focused on protocol translation.
//!
//! ERROR HANDLING
//! ==============
//! Every service returns `ReviewError`. Routes map it to a status code and a
//! `{"detail": ...}` body; services never build HTTP responses themselves.

pub mod annotation;
pub mod drawing;
pub mod project;
pub mod upload;
pub mod user;
pub mod workflow;

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("{0}")]
    Invalid(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReviewError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound { entity, id: id.to_owned() }
    }
}
