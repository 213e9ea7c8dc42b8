//! Cross-cutting error types for Taskdeck.
//!
//! Domain-specific errors (`SessionError`, `ApiError`, `ConfigError`) live in
//! their respective crates; these are the errors any crate may raise.

use thiserror::Error;

/// Errors that can be raised by any Taskdeck crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("invalid status transition for task {id}: {from} → {to}")]
    InvalidTransition {
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, constraints).
    #[error("validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
