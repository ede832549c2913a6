//! AI Vision admin web interface
//!
//! The hosting shell (axum) plus the Leptos admin UI: one thin page per
//! managed resource, all driven by the generic CRUD controller.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod bridge;
pub mod components;
pub mod context;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main entry points
pub use server::build_app;
pub use state::AppState;
