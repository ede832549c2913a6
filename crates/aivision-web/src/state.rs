//! Application state management

use aivision_client::SessionStore;
use aivision_core::Config;

/// Application state holding configuration and the shared session store
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Session store shared with the UI layer
    pub session: SessionStore,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: SessionStore::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_unauthenticated() {
        let state = AppState::new(Config::default());
        assert!(!state.session.is_authenticated());
    }
}
