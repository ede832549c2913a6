//! Admin screens
//!
//! One module per managed resource plus the dashboard, login, and
//! not-found pages. Resource pages are thin adapters: the pagination,
//! debounce, and modal lifecycle all live in the shared controller.

pub mod camera_prompts;
pub mod cameras;
pub mod clients;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod prompts;
pub mod subscriptions;
pub mod user_cameras;
pub mod users;
