//! User-camera access screen
//!
//! Grants a user access to a camera feed. Like the prompt assignments,
//! these are pure association records resolved against active reference
//! lists.

use std::sync::Arc;

use aivision_client::{ManageApi, ManageClient};
use aivision_controller::{DialogMode, LookupCache};
use aivision_core::resources::{Camera, User, UserCamera};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::bridge::use_controller;
use crate::components::{
    DeleteConfirm, ExpiryGuard, Loading, ModalShell, NoticeBar, Pagination, SearchBox, SelectField,
    StatusBadge, ToggleField,
    form::{id_text, opt_i64},
};
use crate::context::use_app_context;

/// Fetch both reference lists concurrently
fn reload_lookups(
    client: ManageClient,
    users: RwSignal<LookupCache>,
    cameras: RwSignal<LookupCache>,
) {
    spawn_local(async move {
        let user_api: &dyn ManageApi<User> = &client;
        let camera_api: &dyn ManageApi<Camera> = &client;
        match LookupCache::load_pair(user_api, camera_api).await {
            Ok((user_cache, camera_cache)) => {
                users.set(user_cache);
                cameras.set(camera_cache);
            }
            Err(err) => warn!(error = %err, "failed to load reference lists"),
        }
    });
}

/// User-camera access page component
#[component]
pub fn UserCamerasPage() -> impl IntoView {
    let context = use_app_context();
    let api: Arc<dyn ManageApi<UserCamera>> = Arc::new(context.client.clone());
    let (state, controller) = use_controller(api);

    let users = RwSignal::new(LookupCache::default());
    let cameras = RwSignal::new(LookupCache::default());
    reload_lookups(context.client.clone(), users, cameras);

    let dialog = Memo::new(move |_| state.get().dialog);
    {
        let client = context.client.clone();
        Effect::new(move |_| {
            if matches!(dialog.get(), DialogMode::Create | DialogMode::Edit(_)) {
                reload_lookups(client.clone(), users, cameras);
            }
        });
    }

    let saving = Signal::derive(move || state.get().saving);
    let page = Signal::derive(move || state.get().page);

    let on_search = Callback::new({
        let controller = controller.clone();
        move |text| controller.set_search(text)
    });
    let on_page = Callback::new({
        let controller = controller.clone();
        move |page| controller.set_page(page)
    });
    let on_page_size = Callback::new({
        let controller = controller.clone();
        move |size| controller.set_page_size(size)
    });
    let on_dismiss = Callback::new({
        let controller = controller.clone();
        move |()| controller.dismiss_notice()
    });
    let on_submit = Callback::new({
        let controller = controller.clone();
        move |record| controller.submit(record)
    });
    let on_close = Callback::new({
        let controller = controller.clone();
        move |()| controller.close_dialog()
    });
    let on_confirm_delete = Callback::new({
        let controller = controller.clone();
        move |()| controller.confirm_delete()
    });

    let refresh = controller.clone();
    let add = controller.clone();
    let rows_controller = controller.clone();

    view! {
        <section class="page">
            <ExpiryGuard expired=Signal::derive(move || state.get().session_expired) />

            <header class="page-header">
                <div>
                    <h2>"User Camera Access"</h2>
                    <p class="page-subtitle">"Which users can watch which cameras"</p>
                </div>
                <div class="page-actions">
                    <SearchBox placeholder="Search grants..." on_change=on_search />
                    <button class="btn" on:click=move |_| refresh.refresh()>
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| add.open_create()>
                        "Grant Access"
                    </button>
                </div>
            </header>

            <NoticeBar notice=Signal::derive(move || state.get().notice) on_dismiss=on_dismiss />

            <Show when=move || state.get().loading>
                <Loading />
            </Show>

            <Show when=move || state.get().is_empty()>
                <div class="empty-state">
                    <h3>"No Access Grants Found"</h3>
                    <p>"Grant a user access to a camera to get started."</p>
                </div>
            </Show>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"User"</th>
                        <th>"Camera"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let snapshot = state.get();
                        let page_view = snapshot.page;
                        let user_lookup = users.get();
                        let camera_lookup = cameras.get();
                        snapshot
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(index, link)| {
                                let edit_record = link.clone();
                                let delete_record = link.clone();
                                let edit_ctl = rows_controller.clone();
                                let delete_ctl = rows_controller.clone();
                                let user_label = user_lookup.display(link.user_id);
                                let camera_label = camera_lookup.display(link.camera_id);
                                view! {
                                    <tr>
                                        <td>{page_view.row_number(index)}</td>
                                        <td>{user_label}</td>
                                        <td>{camera_label}</td>
                                        <td>
                                            <StatusBadge active=link.status />
                                        </td>
                                        <td class="cell-actions">
                                            <button
                                                class="btn btn-sm"
                                                on:click=move |_| edit_ctl.open_edit(edit_record.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn-sm btn-danger"
                                                on:click=move |_| {
                                                    delete_ctl.open_delete(delete_record.clone())
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <Pagination page=page on_page_change=on_page on_page_size_change=on_page_size />

            {move || match dialog.get() {
                DialogMode::Closed => ().into_any(),
                DialogMode::Create => {
                    view! {
                        <UserCameraFormModal
                            link=UserCamera::default()
                            users=users
                            cameras=cameras
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::Edit(link) => {
                    view! {
                        <UserCameraFormModal
                            link=link
                            users=users
                            cameras=cameras
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::View(link) => {
                    view! {
                        <UserCameraFormModal
                            link=link
                            users=users
                            cameras=cameras
                            view_only=true
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::ConfirmDelete(link) => {
                    view! {
                        <DeleteConfirm
                            message=format!(
                                "Revoke camera access for {}?",
                                users.get_untracked().display(link.user_id),
                            )
                            saving=saving
                            on_confirm=on_confirm_delete
                            on_cancel=on_close
                        />
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// Create/edit/view dialog for a user-camera grant
#[component]
fn UserCameraFormModal(
    /// Record backing the form; a default draft for create
    link: UserCamera,
    /// Active users for the picker
    users: RwSignal<LookupCache>,
    /// Active cameras for the picker
    cameras: RwSignal<LookupCache>,
    /// Disable all inputs and hide the submit action
    view_only: bool,
    /// Whether a mutation is in flight
    #[prop(into)]
    saving: Signal<bool>,
    /// Receives the assembled record
    on_submit: Callback<UserCamera>,
    /// Close/cancel
    on_close: Callback<()>,
) -> impl IntoView {
    let id = link.id;
    let user_id = RwSignal::new(id_text(link.user_id));
    let camera_id = RwSignal::new(id_text(link.camera_id));
    let status = RwSignal::new(link.status);

    let title = if view_only {
        "Access Details"
    } else if id.is_some() {
        "Edit Access"
    } else {
        "Grant Camera Access"
    };

    let user_options = move || {
        users
            .get()
            .entries()
            .iter()
            .map(|entry| (entry.id.to_string(), entry.label.clone()))
            .collect::<Vec<_>>()
    };
    let camera_options = move || {
        cameras
            .get()
            .entries()
            .iter()
            .map(|entry| (entry.id.to_string(), entry.label.clone()))
            .collect::<Vec<_>>()
    };

    let submit = move |_| {
        let record = UserCamera {
            id,
            user_id: opt_i64(&user_id.get()),
            camera_id: opt_i64(&camera_id.get()),
            status: status.get(),
        };
        on_submit.run(record);
    };

    view! {
        <ModalShell title=title on_close=on_close>
            <div class="form-grid">
                {move || {
                    view! {
                        <SelectField
                            label="User"
                            value=user_id
                            options=user_options()
                            disabled=view_only
                        />
                    }
                }}
                {move || {
                    view! {
                        <SelectField
                            label="Camera"
                            value=camera_id
                            options=camera_options()
                            disabled=view_only
                        />
                    }
                }}
                <ToggleField label="Access active" value=status disabled=view_only />
            </div>
            <div class="modal-footer">
                <button class="btn" on:click=move |_| on_close.run(())>
                    {if view_only { "Close" } else { "Cancel" }}
                </button>
                <Show when=move || !view_only>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                        {if id.is_some() { "Update Access" } else { "Grant Access" }}
                    </button>
                </Show>
            </div>
        </ModalShell>
    }
}
