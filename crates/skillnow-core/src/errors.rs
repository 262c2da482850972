//! Cross-cutting error types for SkillNow.
//!
//! Storage failures live in `skillnow-store` as `StoreError`. The HTTP layer
//! in `skillnow-server` is where every error converges into a status code.

use thiserror::Error;

/// Errors that can be raised by any SkillNow crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Request data failed key-presence validation.
    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Build a `NotFound` for a numeric record id.
    #[must_use]
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
