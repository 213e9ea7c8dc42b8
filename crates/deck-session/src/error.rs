//! Session error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The persisted record could not be read, parsed, or written.
    #[error("session storage error: {0}")]
    Storage(String),

    /// `set_auth` was called with an empty token.
    #[error("refusing to store an empty auth token")]
    EmptyToken,
}
