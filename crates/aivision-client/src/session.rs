//! Session storage
//!
//! The original front end read the auth token and principal id from ambient
//! browser storage inside every component; here the session is an explicit
//! store injected into the client at construction, so everything above it is
//! testable without a browser storage layer.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token attached to every request
    pub token: String,

    /// Principal id sent as the `PUID` audit field
    pub puid: i64,

    /// When the session was established
    pub established_at: DateTime<Utc>,
}

/// Shared, injectable session store
///
/// Cloning is cheap and all clones observe the same session. A 401 from the
/// backend clears the store; the hosting shell watches for that and routes
/// to the login screen.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh session after login
    pub fn establish(&self, token: impl Into<String>, puid: i64) {
        let session = Session {
            token: token.into(),
            puid,
            established_at: Utc::now(),
        };
        *self.inner.write() = Some(session);
    }

    /// Current session, if any
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    /// Bearer token of the current session
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.token.clone())
    }

    /// Principal id of the current session; 0 when unauthenticated,
    /// matching the backend's anonymous convention
    #[must_use]
    pub fn puid(&self) -> i64 {
        self.inner.read().as_ref().map_or(0, |s| s.puid)
    }

    /// Whether a session is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Drop the session (logout or 401)
    pub fn clear(&self) {
        *self.inner.write() = None;
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_store_starts_unauthenticated() {
        let store = SessionStore::new();

        assert!(!store.is_authenticated());
        assert_eq!(store.puid(), 0);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_establish_and_clear() {
        let store = SessionStore::new();
        store.establish("tok-123", 42);

        assert!(store.is_authenticated());
        assert_eq!(store.puid(), 42);
        assert_eq!(store.token(), Some("tok-123".to_string()));

        store.clear();
        assert!(!store.is_authenticated());
        assert_eq!(store.puid(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();

        store.establish("tok", 7);
        assert!(other.is_authenticated());

        other.clear();
        assert!(!store.is_authenticated());
    }
}
