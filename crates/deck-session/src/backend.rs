//! Storage backends for the persisted session record.
//!
//! The record is a single JSON document `{token, user}` rewritten in full on
//! every session mutation. Production uses [`FileBackend`]; tests inject
//! [`MemoryBackend`], which can be pre-seeded with valid or corrupt payloads.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use deck_core::User;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

const SESSION_FILE_NAME: &str = "session.json";

/// The durable session record. Both fields are set or cleared together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Durable storage for the session record.
///
/// `load` distinguishes "no record" (`Ok(None)`) from "record unreadable"
/// (`Err`); the store normalizes the latter to "no session" during hydration.
pub trait StorageBackend: Send + Sync {
    /// Read the persisted record, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if a record exists but cannot be
    /// read or parsed.
    fn load(&self) -> Result<Option<PersistedSession>, SessionError>;

    /// Rewrite the full record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the record cannot be written.
    fn store(&self, record: &PersistedSession) -> Result<(), SessionError>;
}

/// Shared handles delegate to the underlying backend, letting callers keep
/// a reference to a backend they hand to the store.
impl<B: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<B> {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        (**self).load()
    }

    fn store(&self, record: &PersistedSession) -> Result<(), SessionError> {
        (**self).store(record)
    }
}

// ── File backend ───────────────────────────────────────────────────

/// JSON file storage under the user config directory.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Backend at an explicit path (config override, tests).
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Backend at the platform default, `~/.config/taskdeck/session.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if no config directory can be
    /// resolved for the current user.
    pub fn at_default_path() -> Result<Self, SessionError> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SessionError::Storage("config directory not found; cannot persist session".into())
        })?;
        Ok(Self::new(dir.join("taskdeck").join(SESSION_FILE_NAME)))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            SessionError::Storage(format!("read {}: {e}", self.path.display()))
        })?;
        let record = serde_json::from_str(&raw).map_err(|e| {
            SessionError::Storage(format!("parse {}: {e}", self.path.display()))
        })?;
        Ok(Some(record))
    }

    fn store(&self, record: &PersistedSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SessionError::Storage(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let raw = serde_json::to_string(record)
            .map_err(|e| SessionError::Storage(format!("serialize session: {e}")))?;
        fs::write(&self.path, raw)
            .map_err(|e| SessionError::Storage(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::Storage(format!("chmod {}: {e}", self.path.display())))?;
        }

        Ok(())
    }
}

// ── Memory backend ─────────────────────────────────────────────────

/// In-memory storage holding the raw JSON record, for tests.
///
/// Storing raw text rather than the parsed struct lets tests seed corrupt
/// payloads and assert on exactly what would hit disk.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    raw: Mutex<Option<String>>,
}

impl MemoryBackend {
    /// Empty backend: no persisted record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a raw payload (valid JSON or garbage).
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: Mutex::new(Some(raw.to_string())),
        }
    }

    /// Backend pre-seeded with a valid record.
    ///
    /// # Panics
    ///
    /// Panics if the record fails to serialize (cannot happen for this type).
    #[must_use]
    pub fn with_record(record: &PersistedSession) -> Self {
        Self::with_raw(&serde_json::to_string(record).expect("session record serializes"))
    }

    /// The raw payload as last written, for assertions.
    ///
    /// # Panics
    ///
    /// Panics if the interior lock is poisoned.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().expect("memory backend lock").clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        let guard = self
            .raw
            .lock()
            .map_err(|_| SessionError::Storage("memory backend lock poisoned".into()))?;
        match guard.as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| SessionError::Storage(format!("parse in-memory record: {e}"))),
        }
    }

    fn store(&self, record: &PersistedSession) -> Result<(), SessionError> {
        let raw = serde_json::to_string(record)
            .map_err(|e| SessionError::Storage(format!("serialize session: {e}")))?;
        *self
            .raw
            .lock()
            .map_err(|_| SessionError::Storage("memory backend lock poisoned".into()))? = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ada() -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn file_backend_missing_record_is_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let backend = FileBackend::new(tmp.path().join("session.json"));
        assert!(backend.load().expect("load").is_none());
    }

    #[test]
    fn file_backend_store_load_roundtrip() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let backend = FileBackend::new(tmp.path().join("nested").join("session.json"));

        let record = PersistedSession {
            token: Some("tok123".to_string()),
            user: Some(ada()),
        };
        backend.store(&record).expect("store");

        let loaded = backend.load().expect("load").expect("record exists");
        assert_eq!(loaded, record);
    }

    #[cfg(unix)]
    #[test]
    fn file_backend_tightens_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("taskdeck").join("session.json");
        let backend = FileBackend::new(path.clone());
        backend.store(&PersistedSession::default()).expect("store");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "session file should be 0600");
    }

    #[test]
    fn file_backend_corrupt_record_errors() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");
        fs::write(&path, "{not json").expect("write");

        let backend = FileBackend::new(path);
        assert!(backend.load().is_err());
    }

    #[test]
    fn memory_backend_seeded_corrupt_errors() {
        let backend = MemoryBackend::with_raw("][");
        assert!(backend.load().is_err());
    }

    #[test]
    fn memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.load().expect("empty").is_none());

        let record = PersistedSession {
            token: Some("tok123".to_string()),
            user: Some(ada()),
        };
        backend.store(&record).expect("store");
        assert_eq!(backend.load().expect("load"), Some(record));
    }
}
