//! Controller state snapshot types

use aivision_core::{ManagedResource, PageView};

/// The one open dialog, if any
///
/// The four UI modes are mutually exclusive by construction; impossible
/// combinations (create and edit open at once) cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogMode<T> {
    /// No dialog open; the list is idle
    #[default]
    Closed,
    /// Create form over an empty draft
    Create,
    /// Edit form pre-filled with the record
    Edit(T),
    /// Read-only projection of the record: same form, inputs disabled,
    /// no submit action
    View(T),
    /// Delete confirmation carrying the record it would remove
    ConfirmDelete(T),
}

impl<T> DialogMode<T> {
    /// Whether any dialog is open
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation failed; prior state is intact
    Error,
    /// Mutation succeeded
    Success,
}

/// A transient user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub kind: NoticeKind,
    /// Message shown to the user
    pub message: String,
}

impl Notice {
    /// Build an error notice
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Build a success notice
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// Snapshot of one resource screen's state
///
/// Published through a watch channel after every change; the UI renders
/// snapshots and never mutates them.
#[derive(Debug, Clone)]
pub struct ControllerState<T: ManagedResource> {
    /// Records for the current page, replaced wholesale on every
    /// successful fetch
    pub items: Vec<T>,

    /// Pagination state and math
    pub page: PageView,

    /// The applied (post-debounce) search filter
    pub search: String,

    /// A list fetch is in flight
    pub loading: bool,

    /// A mutation is in flight; the dialog shows a busy state
    pub saving: bool,

    /// The open dialog, if any
    pub dialog: DialogMode<T>,

    /// Transient notice, if any
    pub notice: Option<Notice>,

    /// The backend rejected the session (401); the shell redirects to
    /// login and no per-resource notice is shown
    pub session_expired: bool,
}

impl<T: ManagedResource> ControllerState<T> {
    /// Fresh state at page 1 with the given page size
    #[must_use]
    pub const fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: PageView::new(page_size),
            search: String::new(),
            loading: false,
            saving: false,
            dialog: DialogMode::Closed,
            notice: None,
            session_expired: false,
        }
    }

    /// Whether the list has nothing to show (and is not still loading)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.loading
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use aivision_core::resources::Camera;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dialog_modes_are_exclusive() {
        let closed: DialogMode<Camera> = DialogMode::Closed;
        assert!(!closed.is_open());

        let create: DialogMode<Camera> = DialogMode::Create;
        assert!(create.is_open());

        let confirm = DialogMode::ConfirmDelete(Camera::default());
        assert!(confirm.is_open());
    }

    #[test]
    fn test_fresh_state() {
        let state: ControllerState<Camera> = ControllerState::new(10);

        assert!(state.items.is_empty());
        assert_eq!(state.page.page, 1);
        assert_eq!(state.page.page_size, 10);
        assert_eq!(state.page.total, 0);
        assert_eq!(state.search, "");
        assert!(!state.loading);
        assert_eq!(state.dialog, DialogMode::Closed);
        assert!(state.notice.is_none());
        assert!(!state.session_expired);
    }

    #[test]
    fn test_notice_constructors() {
        let err = Notice::error("boom");
        assert_eq!(err.kind, NoticeKind::Error);
        assert_eq!(err.message, "boom");

        let ok = Notice::success("Camera added successfully");
        assert_eq!(ok.kind, NoticeKind::Success);
    }
}
