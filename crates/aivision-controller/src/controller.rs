//! The resource-parameterized CRUD controller
//!
//! One worker task per screen owns the list/pagination/search/dialog state
//! and publishes immutable snapshots through a watch channel. UI code sends
//! commands and renders snapshots; it never touches the state directly.
//!
//! Two invariants live here and nowhere else:
//!
//! - a list request is issued once per coalesced change-set of
//!   (page, page size, search, refresh counter), never once per input;
//! - every fetch carries a sequence number, and a response is dropped
//!   unless it is the newest one, so rapid pagination or search clicks can
//!   never let a stale response overwrite a newer result.

use std::sync::Arc;
use std::time::Duration;

use aivision_client::ManageApi;
use aivision_core::{Error, ListPage, ListQuery, ManagedResource, is_allowed_page_size};
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, warn};

use crate::state::{ControllerState, DialogMode, Notice};

/// Search debounce used by the admin screens
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Controller construction options
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Initial page size; one of the UI choices
    pub page_size: u32,

    /// Delay between the last keystroke and the search being applied
    pub debounce: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            debounce: SEARCH_DEBOUNCE,
        }
    }
}

/// Commands accepted by the worker
enum Command<T> {
    SetPage(u32),
    SetPageSize(u32),
    SetSearch(String),
    Refresh,
    OpenCreate,
    OpenEdit(T),
    OpenView(T),
    OpenDelete(T),
    CloseDialog,
    Submit(T),
    ConfirmDelete,
    DismissNotice,
}

/// What a finished mutation was doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    const fn verb(self) -> &'static str {
        match self {
            Self::Create => "added",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

/// Completions reported back by spawned request tasks
enum Event<T> {
    FetchDone {
        seq: u64,
        result: Result<ListPage<T>, Error>,
    },
    MutationDone {
        kind: MutationKind,
        result: Result<(), Error>,
    },
}

/// Handle to a running resource controller
///
/// Cheap to clone; dropping every handle stops the worker.
#[derive(Debug)]
pub struct CrudController<T: ManagedResource> {
    commands: mpsc::UnboundedSender<Command<T>>,
    state: watch::Receiver<ControllerState<T>>,
}

impl<T: ManagedResource> Clone for CrudController<T> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: ManagedResource> CrudController<T> {
    /// Spawn a controller with default options and load the first page
    #[must_use]
    pub fn spawn(api: Arc<dyn ManageApi<T>>) -> Self {
        Self::spawn_with(api, ControllerOptions::default())
    }

    /// Spawn a controller with explicit options
    #[must_use]
    pub fn spawn_with(api: Arc<dyn ManageApi<T>>, options: ControllerOptions) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ControllerState::new(options.page_size));

        let worker = Worker {
            api,
            state: ControllerState::new(options.page_size),
            state_tx,
            events_tx,
            debounce: options.debounce,
            pending_search: None,
            debounce_deadline: None,
            dirty: false,
            seq: 0,
        };
        tokio::spawn(worker.run(commands_rx, events_rx));

        Self {
            commands: commands_tx,
            state: state_rx,
        }
    }

    /// Current state snapshot
    #[must_use]
    pub fn snapshot(&self) -> ControllerState<T> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<ControllerState<T>> {
        self.state.clone()
    }

    fn send(&self, command: Command<T>) {
        // A dropped worker means the screen is gone; nothing to report.
        let _ = self.commands.send(command);
    }

    /// Navigate to a page (1-based)
    pub fn set_page(&self, page: u32) {
        self.send(Command::SetPage(page));
    }

    /// Switch the page size; sizes outside the UI choices are ignored
    pub fn set_page_size(&self, page_size: u32) {
        self.send(Command::SetPageSize(page_size));
    }

    /// Update the search text; applied after the debounce delay
    pub fn set_search(&self, text: impl Into<String>) {
        self.send(Command::SetSearch(text.into()));
    }

    /// Force a refetch independent of any other change
    pub fn refresh(&self) {
        self.send(Command::Refresh);
    }

    /// Open the create dialog over an empty draft
    pub fn open_create(&self) {
        self.send(Command::OpenCreate);
    }

    /// Open the edit dialog pre-filled with a record
    pub fn open_edit(&self, record: T) {
        self.send(Command::OpenEdit(record));
    }

    /// Open the read-only view dialog
    pub fn open_view(&self, record: T) {
        self.send(Command::OpenView(record));
    }

    /// Open the delete confirmation dialog
    pub fn open_delete(&self, record: T) {
        self.send(Command::OpenDelete(record));
    }

    /// Close whatever dialog is open
    pub fn close_dialog(&self) {
        self.send(Command::CloseDialog);
    }

    /// Validate and persist the dialog's record; creates when the record
    /// has no id, updates otherwise
    pub fn submit(&self, record: T) {
        self.send(Command::Submit(record));
    }

    /// Carry out the deletion the confirmation dialog is showing
    pub fn confirm_delete(&self) {
        self.send(Command::ConfirmDelete);
    }

    /// Clear the transient notice
    pub fn dismiss_notice(&self) {
        self.send(Command::DismissNotice);
    }
}

struct Worker<T: ManagedResource> {
    api: Arc<dyn ManageApi<T>>,
    state: ControllerState<T>,
    state_tx: watch::Sender<ControllerState<T>>,
    events_tx: mpsc::UnboundedSender<Event<T>>,
    debounce: Duration,
    pending_search: Option<String>,
    debounce_deadline: Option<Instant>,
    dirty: bool,
    seq: u64,
}

impl<T: ManagedResource> Worker<T> {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command<T>>,
        mut events: mpsc::UnboundedReceiver<Event<T>>,
    ) {
        // Initial load on mount.
        self.dirty = true;
        self.maybe_fetch();
        self.publish();

        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    self.handle_command(command);
                    // Everything already queued belongs to the same
                    // change-set; drain it before deciding to fetch.
                    while let Ok(next) = commands.try_recv() {
                        self.handle_command(next);
                    }
                    self.maybe_fetch();
                    self.publish();
                }
                event = events.recv() => {
                    let Some(event) = event else { break };
                    self.handle_event(event);
                    self.maybe_fetch();
                    self.publish();
                }
                () = sleep_until(self.debounce_deadline.unwrap_or_else(Instant::now)),
                    if self.debounce_deadline.is_some() =>
                {
                    self.apply_pending_search();
                    self.maybe_fetch();
                    self.publish();
                }
            }
        }
    }

    fn handle_command(&mut self, command: Command<T>) {
        match command {
            Command::SetPage(page) => {
                let page = page.max(1);
                if page != self.state.page.page {
                    self.state.page.page = page;
                    self.dirty = true;
                }
            }
            Command::SetPageSize(size) => {
                if is_allowed_page_size(size) && size != self.state.page.page_size {
                    self.state.page.page_size = size;
                    let last = self.state.page.last_page();
                    if self.state.page.page > last {
                        self.state.page.page = last;
                    }
                    self.dirty = true;
                }
            }
            Command::SetSearch(text) => {
                self.pending_search = Some(text);
                self.debounce_deadline = Some(Instant::now() + self.debounce);
            }
            Command::Refresh => {
                self.dirty = true;
            }
            Command::OpenCreate => {
                self.state.dialog = DialogMode::Create;
                self.state.notice = None;
            }
            Command::OpenEdit(record) => {
                self.state.dialog = DialogMode::Edit(record);
                self.state.notice = None;
            }
            Command::OpenView(record) => {
                self.state.dialog = DialogMode::View(record);
            }
            Command::OpenDelete(record) => {
                self.state.dialog = DialogMode::ConfirmDelete(record);
                self.state.notice = None;
            }
            Command::CloseDialog => {
                if !self.state.saving {
                    self.state.dialog = DialogMode::Closed;
                }
            }
            Command::Submit(record) => self.submit(record),
            Command::ConfirmDelete => self.confirm_delete(),
            Command::DismissNotice => {
                self.state.notice = None;
            }
        }
    }

    /// Validate and persist a create/edit dialog's record
    fn submit(&mut self, record: T) {
        if self.state.saving {
            return;
        }
        if !matches!(
            self.state.dialog,
            DialogMode::Create | DialogMode::Edit(_)
        ) {
            return;
        }

        // Validation failures block request issuance entirely.
        if let Err(err) = record.validate_record() {
            self.state.notice = Some(Notice::error(err.notice()));
            return;
        }

        let kind = if record.id().is_none() {
            MutationKind::Create
        } else {
            MutationKind::Update
        };
        self.state.saving = true;
        self.state.notice = None;

        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = match kind {
                MutationKind::Create => api.create(&record).await,
                _ => api.update(&record).await,
            };
            let _ = events.send(Event::MutationDone { kind, result });
        });
    }

    /// Carry out the deletion shown by the confirmation dialog
    fn confirm_delete(&mut self) {
        if self.state.saving {
            return;
        }
        let DialogMode::ConfirmDelete(record) = &self.state.dialog else {
            return;
        };
        let Some(id) = record.id() else {
            return;
        };

        self.state.saving = true;
        self.state.notice = None;

        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.remove(id).await;
            let _ = events.send(Event::MutationDone {
                kind: MutationKind::Delete,
                result,
            });
        });
    }

    fn handle_event(&mut self, event: Event<T>) {
        match event {
            Event::FetchDone { seq, result } => {
                if seq != self.seq {
                    // A newer request is in flight; its completion owns
                    // the loading flag and the items.
                    debug!(seq, latest = self.seq, "discarding stale list response");
                    return;
                }
                self.state.loading = false;
                match result {
                    Ok(page) => {
                        self.state.items = page.data;
                        self.state.page.total = page.total_count;
                        let last = self.state.page.last_page();
                        if self.state.page.page > last {
                            // The data set shrank under us; step back into
                            // range and reload.
                            self.state.page.page = last;
                            self.dirty = true;
                        }
                    }
                    Err(err) if err.is_authentication() => {
                        self.state.session_expired = true;
                    }
                    Err(err) => {
                        warn!(error = %err, "list fetch failed");
                        self.state.notice = Some(Notice::error(err.notice()));
                    }
                }
            }
            Event::MutationDone { kind, result } => {
                self.state.saving = false;
                match result {
                    Ok(()) => {
                        // Close first, then schedule the single refetch.
                        self.state.dialog = DialogMode::Closed;
                        self.state.notice = Some(Notice::success(format!(
                            "{} {} successfully",
                            T::DISPLAY_NAME,
                            kind.verb()
                        )));
                        self.dirty = true;
                    }
                    Err(err) if err.is_authentication() => {
                        self.state.session_expired = true;
                    }
                    Err(err) => {
                        warn!(error = %err, "mutation failed");
                        // Dialog stays open so the user can retry.
                        self.state.notice = Some(Notice::error(err.notice()));
                    }
                }
            }
        }
    }

    /// Apply the debounced search text
    fn apply_pending_search(&mut self) {
        self.debounce_deadline = None;
        let Some(text) = self.pending_search.take() else {
            return;
        };
        if text != self.state.search {
            self.state.search = text;
            // Search is never evaluated against a stale page.
            self.state.page.page = 1;
            self.dirty = true;
        }
    }

    /// Issue one list fetch if any input changed since the last one
    fn maybe_fetch(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        self.seq += 1;
        let seq = self.seq;
        self.state.loading = true;

        let query = ListQuery {
            page_no: self.state.page.page,
            page_size: self.state.page.page_size,
            search: self.state.search.clone(),
        };
        debug!(seq, page = query.page_no, size = query.page_size, "issuing list fetch");

        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.list(&query).await;
            let _ = events.send(Event::FetchDone { seq, result });
        });
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.state.clone());
    }
}
