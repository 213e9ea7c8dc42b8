//! # deck-session
//!
//! The persisted session store for Taskdeck.
//!
//! Holds the bearer token and the authenticated user, persists both as a
//! single record on every mutation, and exposes a one-shot hydration barrier:
//! `has_hydrated` stays `false` until the persisted record (if any) has been
//! loaded, and no guard decision is trusted before then.
//!
//! The storage backend is injectable so tests can run against an in-memory
//! record; production uses a JSON file under the user config directory.

mod backend;
mod error;
mod store;

pub use backend::{FileBackend, MemoryBackend, PersistedSession, StorageBackend};
pub use error::SessionError;
pub use store::SessionStore;
