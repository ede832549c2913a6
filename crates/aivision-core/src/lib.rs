//! Core types and utilities for the AI Vision admin dashboard
//!
//! Shared foundation for the workspace: the error taxonomy, layered
//! configuration, wire-level list/pagination types, and the managed
//! resource schemas with their client-side validation rules.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod resources;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use resources::ManagedResource;
pub use types::{
    CrudAction, ListPage, ListQuery, PAGE_SIZE_OPTIONS, PageView, Transport, is_allowed_page_size,
};
