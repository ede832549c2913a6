//! Shared UI components for the admin screens

pub mod form;
pub mod guard;
pub mod loading;
pub mod modal;
pub mod notice;
pub mod pagination;
pub mod search_box;
pub mod status_badge;

pub use form::{SelectField, TextAreaField, TextField, ToggleField};
pub use guard::ExpiryGuard;
pub use loading::Loading;
pub use modal::{DeleteConfirm, ModalShell};
pub use notice::NoticeBar;
pub use pagination::Pagination;
pub use search_box::SearchBox;
pub use status_badge::StatusBadge;
