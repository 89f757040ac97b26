//! Session persistence module.
//!
//! The session is a single optional user record. The durable implementation
//! keeps it in one JSON file, rehydrated on every read and overwritten
//! wholesale on login and profile saves. The provider is a trait so tests can
//! substitute an in-memory implementation.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::errors::ClientError;
use crate::models::User;

/// Holder of the current authenticated user.
pub trait SessionProvider {
    /// The current user, if any.
    fn current(&self) -> Option<User>;

    /// Store a user record, replacing any previous one.
    fn set_user(&self, user: &User) -> Result<(), ClientError>;

    /// Forget the stored user. Idempotent.
    fn clear(&self) -> Result<(), ClientError>;
}

/// File-backed session: one JSON slot on disk, trusted until cleared.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionProvider for FileSession {
    fn current(&self) -> Option<User> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {}", e);
                None
            }
        }
    }

    fn set_user(&self, user: &User) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(user)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session used by tests and non-persistent runs.
#[derive(Debug, Default)]
pub struct MemorySession {
    slot: RwLock<Option<User>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionProvider for MemorySession {
    fn current(&self) -> Option<User> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    fn set_user(&self, user: &User) -> Result<(), ClientError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| ClientError::Io("session lock poisoned".to_string()))?;
        *slot = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| ClientError::Io("session lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 42,
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            qualification: "MCA".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_file_session_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let session = FileSession::new(dir.path().join("session.json"));

        assert!(session.current().is_none());

        session.set_user(&sample_user()).unwrap();
        let stored = session.current().unwrap();
        assert_eq!(stored.id, 42);
        assert_eq!(stored.email, "asha@example.com");

        session.clear().unwrap();
        assert!(session.current().is_none());
    }

    #[test]
    fn test_file_session_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let session = FileSession::new(dir.path().join("session.json"));

        session.clear().unwrap();
        session.clear().unwrap();
    }

    #[test]
    fn test_file_session_overwrites_slot() {
        let dir = tempfile::tempdir().unwrap();
        let session = FileSession::new(dir.path().join("session.json"));

        session.set_user(&sample_user()).unwrap();
        let mut other = sample_user();
        other.id = 7;
        other.first_name = "Ravi".to_string();
        session.set_user(&other).unwrap();

        let stored = session.current().unwrap();
        assert_eq!(stored.id, 7);
        assert_eq!(stored.first_name, "Ravi");
    }

    #[test]
    fn test_file_session_ignores_corrupt_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let session = FileSession::new(path);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_memory_session_roundtrip() {
        let session = MemorySession::new();

        assert!(session.current().is_none());
        session.set_user(&sample_user()).unwrap();
        assert_eq!(session.current().unwrap().id, 42);
        session.clear().unwrap();
        assert!(session.current().is_none());
    }
}
