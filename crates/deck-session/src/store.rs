//! The in-memory session store and its hydration lifecycle.

use deck_core::User;
use tracing::debug;

use crate::backend::{PersistedSession, StorageBackend};
use crate::error::SessionError;

/// Single-owner session state. Only this type writes the token and user;
/// both are always set or cleared together.
pub struct SessionStore {
    backend: Box<dyn StorageBackend>,
    token: Option<String>,
    user: Option<User>,
    has_hydrated: bool,
}

impl SessionStore {
    /// A fresh, unhydrated store with an empty session.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            token: None,
            user: None,
            has_hydrated: false,
        }
    }

    /// Load the persisted record into memory. One-shot: repeat calls are
    /// no-ops, so `has_hydrated` transitions `false → true` exactly once.
    ///
    /// A missing or corrupt record is normalized to "no session" — hydration
    /// always completes, and it never returns an error.
    pub fn hydrate(&mut self) {
        if self.has_hydrated {
            return;
        }
        match self.backend.load() {
            Ok(Some(record)) => {
                // A record with only one half set is treated as corrupt: the
                // pair invariant must hold after hydration.
                if let (Some(token), Some(user)) = (record.token, record.user) {
                    self.token = Some(token);
                    self.user = Some(user);
                } else {
                    debug!("persisted session incomplete; starting unauthenticated");
                }
            }
            Ok(None) => {}
            Err(error) => {
                debug!(%error, "persisted session unreadable; starting unauthenticated");
            }
        }
        self.has_hydrated = true;
    }

    /// Store the token and user atomically, persisting before the in-memory
    /// state changes. Any non-empty token is accepted; no format validation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for an empty token and
    /// [`SessionError::Storage`] if the record cannot be persisted (in which
    /// case the in-memory session is left untouched).
    pub fn set_auth(&mut self, token: &str, user: User) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let record = PersistedSession {
            token: Some(token.to_string()),
            user: Some(user.clone()),
        };
        self.backend.store(&record)?;
        self.token = Some(token.to_string());
        self.user = Some(user);
        Ok(())
    }

    /// Clear both fields and the persisted record. Idempotent: logging out
    /// while logged out succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the cleared record cannot be
    /// persisted.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.backend.store(&PersistedSession::default())?;
        self.token = None;
        self.user = None;
        Ok(())
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether the one-time load of persisted state has completed. Until
    /// this is `true`, the session must not be trusted — not even as
    /// "logged out".
    #[must_use]
    pub const fn has_hydrated(&self) -> bool {
        self.has_hydrated
    }

    /// Hydrated with both token and user present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.has_hydrated && self.token.is_some() && self.user.is_some()
    }
}
