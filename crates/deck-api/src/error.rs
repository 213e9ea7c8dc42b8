//! API error types.

use thiserror::Error;

/// Errors from the Taskdeck server API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection, timeout, body decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// The server's `{"message": ...}` payload, or the raw body when the
        /// response carried no such envelope.
        message: String,
    },

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited - retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
