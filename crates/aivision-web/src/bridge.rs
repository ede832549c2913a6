//! Controller-to-signal bridge
//!
//! The generic CRUD controller publishes state snapshots through a watch
//! channel; this adapter mirrors them into a Leptos signal so views can
//! render them reactively.

use std::sync::Arc;

use aivision_client::ManageApi;
use aivision_controller::{ControllerState, CrudController};
use aivision_core::ManagedResource;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Spawn a controller for one resource screen and mirror its snapshots
/// into a signal
pub fn use_controller<T: ManagedResource>(
    api: Arc<dyn ManageApi<T>>,
) -> (ReadSignal<ControllerState<T>>, CrudController<T>) {
    let controller = CrudController::spawn(api);
    let (state, set_state) = signal(controller.snapshot());

    let mut rx = controller.watch();
    spawn_local(async move {
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow().clone();
            set_state.set(snapshot);
        }
    });

    (state, controller)
}
