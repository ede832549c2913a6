//! Behavioral tests for the generic CRUD controller
//!
//! These run against a scripted in-process backend with controllable
//! latency and failure injection, under paused tokio time, so debounce and
//! request-race behavior are fully deterministic.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use aivision_client::ManageApi;
use aivision_controller::{ControllerState, CrudController, DialogMode, NoticeKind};
use aivision_core::resources::Camera;
use aivision_core::{Error, ListPage, ListQuery, ManagedResource};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::watch;
use tokio::time::timeout;

/// What kind of failure the backend should inject next
#[derive(Debug, Clone, Copy)]
enum FailKind {
    Auth,
    Server(&'static str),
}

impl FailKind {
    fn to_error(self) -> Error {
        match self {
            Self::Auth => Error::Authentication,
            Self::Server(message) => Error::server(500, message),
        }
    }
}

/// Requests observed by the backend
#[derive(Debug, Clone, PartialEq)]
enum Observed {
    List(ListQuery),
    Create(String),
    Update(i64),
    Remove(i64),
}

/// Scripted in-memory backend for cameras
#[derive(Default)]
struct ScriptedBackend {
    store: Mutex<Vec<Camera>>,
    next_id: AtomicI64,
    log: Mutex<Vec<Observed>>,
    /// Extra latency per requested page number
    list_delays: Mutex<HashMap<u32, Duration>>,
    fail_next_list: Mutex<Option<FailKind>>,
    fail_next_mutation: Mutex<Option<FailKind>>,
}

impl ScriptedBackend {
    fn with_cameras(count: usize) -> Arc<Self> {
        let backend = Self::default();
        {
            let mut store = backend.store.lock().unwrap();
            for i in 1..=count {
                store.push(Camera {
                    id: Some(i as i64),
                    name: format!("Camera {i:03}"),
                    rtsp_link: format!("rtsp://cams.local/{i}"),
                    ..Camera::default()
                });
            }
        }
        backend.next_id.store(count as i64 + 1, Ordering::SeqCst);
        Arc::new(backend)
    }

    fn delay_page(&self, page: u32, delay: Duration) {
        self.list_delays.lock().unwrap().insert(page, delay);
    }

    fn fail_next_list(&self, kind: FailKind) {
        *self.fail_next_list.lock().unwrap() = Some(kind);
    }

    fn fail_next_mutation(&self, kind: FailKind) {
        *self.fail_next_mutation.lock().unwrap() = Some(kind);
    }

    fn list_requests(&self) -> Vec<ListQuery> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|entry| match entry {
                Observed::List(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    fn mutation_count(&self) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| !matches!(entry, Observed::List(_)))
            .count()
    }
}

#[async_trait]
impl ManageApi<Camera> for ScriptedBackend {
    async fn list(&self, query: &ListQuery) -> Result<ListPage<Camera>, Error> {
        self.log.lock().unwrap().push(Observed::List(query.clone()));

        let delay = self
            .list_delays
            .lock()
            .unwrap()
            .get(&query.page_no)
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(kind) = self.fail_next_list.lock().unwrap().take() {
            return Err(kind.to_error());
        }

        let store = self.store.lock().unwrap();
        let matching: Vec<Camera> = store
            .iter()
            .filter(|camera| {
                query.search.is_empty()
                    || camera
                        .name
                        .to_lowercase()
                        .contains(&query.search.to_lowercase())
            })
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let start = ((query.page_no - 1) * query.page_size) as usize;
        let data = matching
            .into_iter()
            .skip(start)
            .take(query.page_size as usize)
            .collect();

        Ok(ListPage {
            data,
            total_count: total,
        })
    }

    async fn list_active(&self) -> Result<Vec<Camera>, Error> {
        let store = self.store.lock().unwrap();
        Ok(store.iter().filter(|c| c.status).cloned().collect())
    }

    async fn create(&self, record: &Camera) -> Result<(), Error> {
        self.log
            .lock()
            .unwrap()
            .push(Observed::Create(record.name.clone()));
        if let Some(kind) = self.fail_next_mutation.lock().unwrap().take() {
            return Err(kind.to_error());
        }
        let mut stored = record.clone();
        stored.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.store.lock().unwrap().push(stored);
        Ok(())
    }

    async fn update(&self, record: &Camera) -> Result<(), Error> {
        let id = record.id.unwrap_or_default();
        self.log.lock().unwrap().push(Observed::Update(id));
        if let Some(kind) = self.fail_next_mutation.lock().unwrap().take() {
            return Err(kind.to_error());
        }
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|c| c.id == Some(id)) {
            *slot = record.clone();
            Ok(())
        } else {
            Err(Error::server(404, "Camera not found"))
        }
    }

    async fn remove(&self, id: i64) -> Result<(), Error> {
        self.log.lock().unwrap().push(Observed::Remove(id));
        if let Some(kind) = self.fail_next_mutation.lock().unwrap().take() {
            return Err(kind.to_error());
        }
        self.store.lock().unwrap().retain(|c| c.id != Some(id));
        Ok(())
    }
}

/// Wait (with auto-advancing paused time) until the state matches
async fn wait_for<F>(
    rx: &mut watch::Receiver<ControllerState<Camera>>,
    predicate: F,
) -> ControllerState<Camera>
where
    F: Fn(&ControllerState<Camera>) -> bool,
{
    let result = timeout(Duration::from_secs(60), async {
        loop {
            {
                let snapshot = rx.borrow().clone();
                if predicate(&snapshot) {
                    return snapshot;
                }
            }
            rx.changed().await.unwrap();
        }
    })
    .await;
    result.unwrap_or_else(|_| panic!("state never reached the expected condition"))
}

fn settled(state: &ControllerState<Camera>) -> bool {
    !state.loading && !state.saving
}

fn valid_draft(name: &str) -> Camera {
    Camera {
        name: name.to_string(),
        rtsp_link: "rtsp://cams.local/new".to_string(),
        about: Some("test draft".to_string()),
        ..Camera::default()
    }
}

#[tokio::test(start_paused = true)]
async fn scenario_a_single_row_list() {
    let backend = ScriptedBackend::with_cameras(1);
    {
        let mut store = backend.store.lock().unwrap();
        store[0].name = "Cam A".to_string();
    }
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();

    let state = wait_for(&mut rx, |s| settled(s) && !s.items.is_empty()).await;

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Cam A");
    assert!(state.items[0].is_active());
    assert_eq!(state.page.total, 1);
    assert_eq!(state.page.range(), Some((1, 1)));

    let requests = backend.list_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].page_no, 1);
    assert_eq!(requests[0].page_size, 10);
    assert_eq!(requests[0].search, "");
}

#[tokio::test(start_paused = true)]
async fn p1_page_navigation_sends_the_exact_page() {
    let backend = ScriptedBackend::with_cameras(95);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();

    wait_for(&mut rx, |s| settled(s) && s.page.total == 95).await;
    assert_eq!(rx.borrow().page.total_pages(), 10);

    controller.set_page(3);
    let state = wait_for(&mut rx, |s| settled(s) && s.page.page == 3).await;

    assert_eq!(state.items.len(), 10);
    assert_eq!(state.items[0].name, "Camera 021");
    assert_eq!(state.page.row_number(0), 21);

    let requests = backend.list_requests();
    assert_eq!(requests.last().unwrap().page_no, 3);
}

#[tokio::test(start_paused = true)]
async fn p2_search_change_resets_to_page_one() {
    let backend = ScriptedBackend::with_cameras(95);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();

    wait_for(&mut rx, |s| settled(s) && s.page.total == 95).await;
    controller.set_page(5);
    wait_for(&mut rx, |s| settled(s) && s.page.page == 5).await;

    controller.set_search("Camera 01");
    let state = wait_for(&mut rx, |s| settled(s) && s.search == "Camera 01").await;

    assert_eq!(state.page.page, 1);

    // The reset happened before the request went out, not after.
    let last = backend.list_requests().pop().unwrap();
    assert_eq!(last.page_no, 1);
    assert_eq!(last.search, "Camera 01");
}

#[tokio::test(start_paused = true)]
async fn p3_stale_response_never_overwrites_newer_result() {
    let backend = ScriptedBackend::with_cameras(30);
    // Page 1 answers slowly, page 2 answers fast.
    backend.delay_page(1, Duration::from_millis(500));
    backend.delay_page(2, Duration::from_millis(50));

    let controller = CrudController::spawn(backend.clone());
    controller.set_page(2);

    let mut rx = controller.watch();
    let state = wait_for(&mut rx, |s| settled(s) && s.page.page == 2 && !s.items.is_empty()).await;
    assert_eq!(state.items[0].name, "Camera 011");

    // Let the slow page-1 response land, then confirm it was discarded.
    tokio::time::sleep(Duration::from_secs(1)).await;
    let after = controller.snapshot();
    assert_eq!(after.page.page, 2);
    assert_eq!(after.items[0].name, "Camera 011");
    assert!(!after.loading);
}

#[tokio::test(start_paused = true)]
async fn scenario_b_typing_debounces_to_one_request() {
    let backend = ScriptedBackend::with_cameras(20);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s) && s.page.total == 20).await;
    assert_eq!(backend.list_requests().len(), 1);

    for text in ["f", "fr", "fro", "fron", "front"] {
        controller.set_search(text);
    }

    let state = wait_for(&mut rx, |s| settled(s) && s.search == "front").await;
    assert_eq!(state.page.page, 1);

    // One keystroke burst, one request: the mount fetch plus exactly one
    // search fetch.
    let requests = backend.list_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].search, "front");
    assert_eq!(requests[1].page_no, 1);
}

#[tokio::test(start_paused = true)]
async fn scenario_c_validation_failure_blocks_the_request() {
    let backend = ScriptedBackend::with_cameras(0);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s)).await;

    controller.open_create();
    let missing_name = Camera {
        rtsp_link: "rtsp://cams.local/x".to_string(),
        ..Camera::default()
    };
    controller.submit(missing_name);

    let state = wait_for(&mut rx, |s| s.notice.is_some()).await;
    let notice = state.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("name"));

    // The dialog stays open for correction and nothing reached the wire.
    assert_eq!(state.dialog, DialogMode::Create);
    assert_eq!(backend.mutation_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn p4_p5_create_closes_dialog_and_refetches_once() {
    let backend = ScriptedBackend::with_cameras(0);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s)).await;
    let fetches_before = backend.list_requests().len();

    controller.open_create();
    controller.submit(valid_draft("Cam A"));

    let state = wait_for(&mut rx, |s| settled(s) && !s.items.is_empty()).await;

    // Dialog closed, success notice shown, exactly one refetch issued.
    assert_eq!(state.dialog, DialogMode::Closed);
    assert_eq!(
        state.notice.unwrap().message,
        "Camera added successfully"
    );
    assert_eq!(backend.list_requests().len(), fetches_before + 1);

    // Round-trip: server assigned an id and the fields survived.
    let created = &state.items[0];
    assert_eq!(created.id, Some(1));
    assert_eq!(created.name, "Cam A");
    assert_eq!(created.about.as_deref(), Some("test draft"));

    // The id is stable across another fetch.
    controller.refresh();
    let state = wait_for(&mut rx, |s| settled(s) && !s.loading).await;
    assert_eq!(state.items[0].id, Some(1));
}

#[tokio::test(start_paused = true)]
async fn edit_resends_the_full_field_set_by_id() {
    let backend = ScriptedBackend::with_cameras(3);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    let state = wait_for(&mut rx, |s| settled(s) && s.items.len() == 3).await;

    let mut record = state.items[1].clone();
    controller.open_edit(record.clone());
    wait_for(&mut rx, |s| s.dialog.is_open()).await;

    record.name = "Renamed Camera".to_string();
    record.status = false;
    controller.submit(record);

    let state = wait_for(&mut rx, |s| {
        settled(s) && s.items.iter().any(|c| c.name == "Renamed Camera")
    })
    .await;

    assert_eq!(state.dialog, DialogMode::Closed);
    assert_eq!(
        state.notice.unwrap().message,
        "Camera updated successfully"
    );
    let renamed = state
        .items
        .iter()
        .find(|c| c.name == "Renamed Camera")
        .unwrap();
    assert_eq!(renamed.id, Some(2));
    assert!(!renamed.is_active());
}

#[tokio::test(start_paused = true)]
async fn scenario_d_delete_removes_row_and_closes_confirmation() {
    let backend = ScriptedBackend::with_cameras(8);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    let state = wait_for(&mut rx, |s| settled(s) && s.items.len() == 8).await;

    let victim = state
        .items
        .iter()
        .find(|c| c.id == Some(5))
        .cloned()
        .unwrap();
    controller.open_delete(victim);
    let state = wait_for(&mut rx, |s| s.dialog.is_open()).await;
    assert!(matches!(state.dialog, DialogMode::ConfirmDelete(_)));

    let fetches_before = backend.list_requests().len();
    controller.confirm_delete();

    let state = wait_for(&mut rx, |s| settled(s) && s.items.len() == 7).await;
    assert_eq!(state.dialog, DialogMode::Closed);
    assert!(state.items.iter().all(|c| c.id != Some(5)));
    assert_eq!(backend.list_requests().len(), fetches_before + 1);
    assert_eq!(
        state.notice.unwrap().message,
        "Camera deleted successfully"
    );
}

#[tokio::test(start_paused = true)]
async fn scenario_e_expired_session_escalates_without_notice() {
    let backend = ScriptedBackend::with_cameras(3);
    backend.fail_next_list(FailKind::Auth);

    let controller = CrudController::spawn(backend);
    let mut rx = controller.watch();

    let state = wait_for(&mut rx, |s| s.session_expired).await;

    // The shell handles the redirect; no per-resource notice is shown.
    assert!(state.notice.is_none());
    assert!(!state.loading);
}

#[tokio::test(start_paused = true)]
async fn fetch_failure_keeps_prior_items() {
    let backend = ScriptedBackend::with_cameras(4);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s) && s.items.len() == 4).await;

    backend.fail_next_list(FailKind::Server("backend fell over"));
    controller.refresh();

    let state = wait_for(&mut rx, |s| settled(s) && s.notice.is_some()).await;

    assert_eq!(state.items.len(), 4);
    assert_eq!(state.notice.unwrap().message, "backend fell over");
}

#[tokio::test(start_paused = true)]
async fn mutation_failure_keeps_dialog_open_for_retry() {
    let backend = ScriptedBackend::with_cameras(0);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s)).await;

    backend.fail_next_mutation(FailKind::Server("Camera already exists"));
    controller.open_create();
    controller.submit(valid_draft("Dup"));

    let state = wait_for(&mut rx, |s| settled(s) && s.notice.is_some()).await;

    assert_eq!(state.dialog, DialogMode::Create);
    assert_eq!(state.notice.unwrap().message, "Camera already exists");

    // Retrying after the failure works and closes the dialog.
    controller.submit(valid_draft("Dup"));
    let state = wait_for(&mut rx, |s| settled(s) && !s.items.is_empty()).await;
    assert_eq!(state.dialog, DialogMode::Closed);
}

#[tokio::test(start_paused = true)]
async fn page_size_outside_the_ui_choices_is_ignored() {
    let backend = ScriptedBackend::with_cameras(60);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s) && s.page.total == 60).await;
    let fetches_before = backend.list_requests().len();

    controller.set_page_size(25);
    tokio::time::sleep(Duration::from_secs(1)).await;

    let state = controller.snapshot();
    assert_eq!(state.page.page_size, 10);
    assert_eq!(backend.list_requests().len(), fetches_before);

    controller.set_page_size(50);
    let state = wait_for(&mut rx, |s| settled(s) && s.page.page_size == 50).await;
    assert_eq!(state.items.len(), 50);
    assert_eq!(backend.list_requests().last().unwrap().page_size, 50);
}

#[tokio::test(start_paused = true)]
async fn shrinking_page_size_keeps_the_page_in_range() {
    let backend = ScriptedBackend::with_cameras(60);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s) && s.page.total == 60).await;

    controller.set_page(6);
    wait_for(&mut rx, |s| settled(s) && s.page.page == 6).await;

    // 60 items at 50 per page only has 2 pages; page 6 must be clamped.
    controller.set_page_size(50);
    let state = wait_for(&mut rx, |s| settled(s) && s.page.page_size == 50).await;
    assert_eq!(state.page.page, 2);
}

#[tokio::test(start_paused = true)]
async fn manual_refresh_reissues_the_same_query() {
    let backend = ScriptedBackend::with_cameras(12);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s) && s.page.total == 12).await;

    let before = backend.list_requests();
    controller.refresh();
    wait_for(&mut rx, |s| settled(s)).await;

    let after = backend.list_requests();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), before.last());
}

#[tokio::test(start_paused = true)]
async fn view_dialog_never_submits() {
    let backend = ScriptedBackend::with_cameras(2);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    let state = wait_for(&mut rx, |s| settled(s) && s.items.len() == 2).await;

    let record = state.items[0].clone();
    controller.open_view(record.clone());
    wait_for(&mut rx, |s| s.dialog.is_open()).await;

    controller.submit(record);
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(backend.mutation_count(), 0);
    assert!(matches!(controller.snapshot().dialog, DialogMode::View(_)));
}

#[tokio::test(start_paused = true)]
async fn unchanged_search_text_does_not_refetch() {
    let backend = ScriptedBackend::with_cameras(5);
    let controller = CrudController::spawn(backend.clone());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| settled(s) && s.page.total == 5).await;
    let fetches_before = backend.list_requests().len();

    // Clearing an already-empty search box changes nothing.
    controller.set_search("");
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(backend.list_requests().len(), fetches_before);
}
