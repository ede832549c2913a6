//! Shared UI context
//!
//! The session and the manage client are constructed once and injected
//! through Leptos context, replacing the original's pattern of reading
//! ambient browser storage inside every component.

use aivision_client::{ManageClient, SessionStore};
use aivision_core::{Config, Result};
use leptos::prelude::*;

/// Everything the admin screens need from the outside world
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Client for the manage API
    pub client: ManageClient,
    /// Session store shared with the client
    pub session: SessionStore,
    /// Reactive mirror of the session's presence
    pub authenticated: RwSignal<bool>,
}

impl AppContext {
    /// Build the context from configuration
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let session = SessionStore::new();
        let client = ManageClient::new(&config.api, session.clone())?;
        Ok(Self {
            client,
            session,
            authenticated: RwSignal::new(false),
        })
    }

    /// Establish a session and flip the reactive flag
    pub fn login(&self, token: &str, puid: i64) {
        self.session.establish(token, puid);
        self.authenticated.set(true);
    }

    /// Drop the session (logout)
    pub fn logout(&self) {
        self.session.clear();
        self.authenticated.set(false);
    }

    /// Record that the backend rejected the session; the store itself was
    /// already cleared by the client on the 401
    pub fn note_session_expired(&self) {
        self.authenticated.set(false);
    }
}

/// Fetch the [`AppContext`] provided by the application root
///
/// # Panics
///
/// Panics when called outside the application tree.
#[must_use]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
