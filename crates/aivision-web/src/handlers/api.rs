//! JSON handlers exposing the shell's session state

use crate::state::AppState;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

/// Report whether the shell currently holds a session
pub async fn session_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let session = state.session.current();
    match session {
        Some(session) => Json(serde_json::json!({
            "authenticated": true,
            "puid": session.puid,
            "establishedAt": session.established_at,
        })),
        None => Json(serde_json::json!({ "authenticated": false })),
    }
}

/// Clear the shell's session
pub async fn logout(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    info!("clearing session on logout");
    state.session.clear();
    Json(serde_json::json!({ "authenticated": false }))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use aivision_core::Config;

    #[test]
    fn test_health_check() {
        assert_eq!(tokio_test::block_on(health_check()), "OK");
    }

    #[test]
    fn test_session_status_reflects_store() {
        let state = Arc::new(AppState::new(Config::default()));

        let Json(body) = tokio_test::block_on(session_status(State(state.clone())));
        assert_eq!(body["authenticated"], false);

        state.session.establish("tok", 9);
        let Json(body) = tokio_test::block_on(session_status(State(state.clone())));
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["puid"], 9);
    }

    #[test]
    fn test_logout_clears_session() {
        let state = Arc::new(AppState::new(Config::default()));
        state.session.establish("tok", 9);

        let Json(body) = tokio_test::block_on(logout(State(state.clone())));
        assert_eq!(body["authenticated"], false);
        assert!(!state.session.is_authenticated());
    }
}
