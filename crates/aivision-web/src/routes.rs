//! Route definitions for the web interface

use crate::{handlers::api, handlers::pages, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Build the complete web application router
///
/// Every admin screen is served the same shell; the client-side router
/// picks the page. The JSON routes expose the shell's own session state.
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes (all serve the shell)
        .route("/", get(pages::shell))
        .route("/login", get(pages::shell))
        .route("/cameras", get(pages::shell))
        .route("/users", get(pages::shell))
        .route("/clients", get(pages::shell))
        .route("/prompts", get(pages::shell))
        .route("/camera-prompts", get(pages::shell))
        .route("/user-cameras", get(pages::shell))
        .route("/subscriptions", get(pages::shell))
        // Session state for the shell
        .route("/api/session", get(api::session_status))
        .route("/api/logout", post(api::logout))
        // Health check
        .route("/health", get(api::health_check))
        .fallback(pages::shell)
}
