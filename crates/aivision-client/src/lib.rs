//! HTTP client for the AI Vision manage API
//!
//! Implements the fixed backend contract: `POST {base}/{Resource}/manage`
//! with a `CrudAction` discriminator, fields carried as multipart form
//! parts or URL query parameters per resource, a bearer token from the
//! injected session store, and a dedicated non-retryable error class for
//! HTTP 401.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod fields;
pub mod manage;
pub mod session;

pub use manage::{ManageApi, ManageClient};
pub use session::{Session, SessionStore};
