//! Generic paginated CRUD resource controller
//!
//! Every admin screen follows the same shape: fetch a paginated list,
//! render it, and mutate rows through a modal form. This crate implements
//! that shape once, parameterized by resource, so the debounce, refetch
//! coalescing, and stale-response guarding exist in exactly one place
//! instead of once per screen.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod controller;
pub mod lookup;
pub mod state;

pub use controller::{ControllerOptions, CrudController};
pub use lookup::{LookupCache, LookupEntry};
pub use state::{ControllerState, DialogMode, Notice, NoticeKind};
