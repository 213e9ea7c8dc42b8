//! # deck-api
//!
//! HTTP client for the Taskdeck server API.
//!
//! Wraps a `reqwest::Client` and attaches the current bearer token to every
//! request when one is set. Resource paths (`/auth/login`, `/projects`,
//! `/tasks/{project_id}`, ...) are fixed contracts with the server; this
//! crate maps them to typed request/response pairs and nothing more. Cache
//! consistency is the caller's concern (see `deck-query`).

pub mod auth;
pub mod projects;
pub mod tasks;

mod error;
mod http;

pub use error::ApiError;

use std::time::Duration;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Taskdeck API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against `base_url` (no trailing slash) with the
    /// default timeout and no token.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("taskdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client builds with static configuration");
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Set or clear the bearer token attached to subsequent requests.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Whether a bearer token is currently attached.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build a request for `path` (leading slash), attaching the bearer
    /// token iff one is set.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, authorized = self.token.is_some(), "api request");
        let req = self.http.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}
