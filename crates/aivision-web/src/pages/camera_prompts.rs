//! Camera-prompt assignment screen
//!
//! Pure association records; the camera and prompt columns are resolved
//! against active reference lists fetched alongside the page.

use std::sync::Arc;

use aivision_client::{ManageApi, ManageClient};
use aivision_controller::{DialogMode, LookupCache};
use aivision_core::resources::{Camera, CameraPrompt, Prompt};
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
    cameras: RwSignal<LookupCache>,
    prompts: RwSignal<LookupCache>,
) {
    spawn_local(async move {
        let camera_api: &dyn ManageApi<Camera> = &client;
        let prompt_api: &dyn ManageApi<Prompt> = &client;
        match LookupCache::load_pair(camera_api, prompt_api).await {
            Ok((camera_cache, prompt_cache)) => {
                cameras.set(camera_cache);
                prompts.set(prompt_cache);
            }
            Err(err) => warn!(error = %err, "failed to load reference lists"),
        }
    });
}

/// Camera-prompt assignment page component
#[component]
pub fn CameraPromptsPage() -> impl IntoView {
    let context = use_app_context();
    let api: Arc<dyn ManageApi<CameraPrompt>> = Arc::new(context.client.clone());
    let (state, controller) = use_controller(api);

    let cameras = RwSignal::new(LookupCache::default());
    let prompts = RwSignal::new(LookupCache::default());
    reload_lookups(context.client.clone(), cameras, prompts);

    let dialog = Memo::new(move |_| state.get().dialog);
    {
        let client = context.client.clone();
        Effect::new(move |_| {
            if matches!(dialog.get(), DialogMode::Create | DialogMode::Edit(_)) {
                reload_lookups(client.clone(), cameras, prompts);
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
                    <h2>"Camera Prompts"</h2>
                    <p class="page-subtitle">"Which analysis prompts run on which cameras"</p>
                </div>
                <div class="page-actions">
                    <SearchBox placeholder="Search assignments..." on_change=on_search />
                    <button class="btn" on:click=move |_| refresh.refresh()>
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| add.open_create()>
                        "Assign Prompt"
                    </button>
                </div>
            </header>

            <NoticeBar notice=Signal::derive(move || state.get().notice) on_dismiss=on_dismiss />

            <Show when=move || state.get().loading>
                <Loading />
            </Show>

            <Show when=move || state.get().is_empty()>
                <div class="empty-state">
                    <h3>"No Assignments Found"</h3>
                    <p>"Assign a prompt to a camera to start analyzing its feed."</p>
                </div>
            </Show>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Camera"</th>
                        <th>"Prompt"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let snapshot = state.get();
                        let page_view = snapshot.page;
                        let camera_lookup = cameras.get();
                        let prompt_lookup = prompts.get();
                        snapshot
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(index, link)| {
                                let edit_record = link.clone();
                                let delete_record = link.clone();
                                let edit_ctl = rows_controller.clone();
                                let delete_ctl = rows_controller.clone();
                                let camera_label = camera_lookup.display(link.camera_id);
                                let prompt_label = prompt_lookup.display(link.prompt_id);
                                view! {
                                    <tr>
                                        <td>{page_view.row_number(index)}</td>
                                        <td>{camera_label}</td>
                                        <td>{prompt_label}</td>
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
                        <CameraPromptFormModal
                            link=CameraPrompt::default()
                            cameras=cameras
                            prompts=prompts
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
                        <CameraPromptFormModal
                            link=link
                            cameras=cameras
                            prompts=prompts
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
                        <CameraPromptFormModal
                            link=link
                            cameras=cameras
                            prompts=prompts
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
                                "Remove this prompt assignment ({})?",
                                cameras.get_untracked().display(link.camera_id),
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

/// Create/edit/view dialog for a camera-prompt assignment
#[component]
fn CameraPromptFormModal(
    /// Record backing the form; a default draft for create
    link: CameraPrompt,
    /// Active cameras for the picker
    cameras: RwSignal<LookupCache>,
    /// Active prompts for the picker
    prompts: RwSignal<LookupCache>,
    /// Disable all inputs and hide the submit action
    view_only: bool,
    /// Whether a mutation is in flight
    #[prop(into)]
    saving: Signal<bool>,
    /// Receives the assembled record
    on_submit: Callback<CameraPrompt>,
    /// Close/cancel
    on_close: Callback<()>,
) -> impl IntoView {
    let id = link.id;
    let camera_id = RwSignal::new(id_text(link.camera_id));
    let prompt_id = RwSignal::new(id_text(link.prompt_id));
    let status = RwSignal::new(link.status);

    let title = if view_only {
        "Assignment Details"
    } else if id.is_some() {
        "Edit Assignment"
    } else {
        "Assign Prompt to Camera"
    };

    let camera_options = move || {
        cameras
            .get()
            .entries()
            .iter()
            .map(|entry| (entry.id.to_string(), entry.label.clone()))
            .collect::<Vec<_>>()
    };
    let prompt_options = move || {
        prompts
            .get()
            .entries()
            .iter()
            .map(|entry| (entry.id.to_string(), entry.label.clone()))
            .collect::<Vec<_>>()
    };

    let submit = move |_| {
        let record = CameraPrompt {
            id,
            camera_id: opt_i64(&camera_id.get()),
            prompt_id: opt_i64(&prompt_id.get()),
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
                            label="Camera"
                            value=camera_id
                            options=camera_options()
                            disabled=view_only
                        />
                    }
                }}
                {move || {
                    view! {
                        <SelectField
                            label="Prompt"
                            value=prompt_id
                            options=prompt_options()
                            disabled=view_only
                        />
                    }
                }}
                <ToggleField label="Assignment active" value=status disabled=view_only />
            </div>
            <div class="modal-footer">
                <button class="btn" on:click=move |_| on_close.run(())>
                    {if view_only { "Close" } else { "Cancel" }}
                </button>
                <Show when=move || !view_only>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                        {if id.is_some() { "Update Assignment" } else { "Assign" }}
                    </button>
                </Show>
            </div>
        </ModalShell>
    }
}
