//! Prompt (AI analysis instruction) management screen

use std::sync::Arc;

use aivision_client::{ManageApi, ManageClient};
use aivision_controller::{DialogMode, LookupCache};
use aivision_core::resources::{Camera, Prompt};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::bridge::use_controller;
use crate::components::{
    DeleteConfirm, ExpiryGuard, Loading, ModalShell, NoticeBar, Pagination, SearchBox, SelectField,
    StatusBadge, TextAreaField, TextField, ToggleField,
    form::{id_text, opt_i32, opt_i64, opt_text},
};
use crate::context::use_app_context;

fn reload_cameras(client: ManageClient, into: RwSignal<LookupCache>) {
    spawn_local(async move {
        let api: &dyn ManageApi<Camera> = &client;
        match LookupCache::load(api).await {
            Ok(cache) => into.set(cache),
            Err(err) => warn!(error = %err, "failed to load camera reference list"),
        }
    });
}

/// Prompt management page component
#[component]
pub fn PromptsPage() -> impl IntoView {
    let context = use_app_context();
    let api: Arc<dyn ManageApi<Prompt>> = Arc::new(context.client.clone());
    let (state, controller) = use_controller(api);

    let cameras = RwSignal::new(LookupCache::default());
    reload_cameras(context.client.clone(), cameras);

    let dialog = Memo::new(move |_| state.get().dialog);
    {
        let client = context.client.clone();
        Effect::new(move |_| {
            if matches!(dialog.get(), DialogMode::Create | DialogMode::Edit(_)) {
                reload_cameras(client.clone(), cameras);
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
                    <h2>"Prompt Management"</h2>
                    <p class="page-subtitle">"Analysis instructions run against camera frames"</p>
                </div>
                <div class="page-actions">
                    <SearchBox placeholder="Search prompts..." on_change=on_search />
                    <button class="btn" on:click=move |_| refresh.refresh()>
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| add.open_create()>
                        "Add Prompt"
                    </button>
                </div>
            </header>

            <NoticeBar notice=Signal::derive(move || state.get().notice) on_dismiss=on_dismiss />

            <Show when=move || state.get().loading>
                <Loading />
            </Show>

            <Show when=move || state.get().is_empty()>
                <div class="empty-state">
                    <h3>"No Prompts Found"</h3>
                    <p>"Write your first analysis instruction to put cameras to work."</p>
                </div>
            </Show>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Prompt"</th>
                        <th>"Camera"</th>
                        <th>"Interval"</th>
                        <th>"Loop"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let snapshot = state.get();
                        let page_view = snapshot.page;
                        let camera_lookup = cameras.get();
                        snapshot
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(index, prompt)| {
                                let view_record = prompt.clone();
                                let edit_record = prompt.clone();
                                let delete_record = prompt.clone();
                                let view_ctl = rows_controller.clone();
                                let edit_ctl = rows_controller.clone();
                                let delete_ctl = rows_controller.clone();
                                let camera_label = camera_lookup.display(prompt.camera_id);
                                let interval = prompt
                                    .timer
                                    .map_or_else(|| "-".to_string(), |t| format!("{t}s"));
                                view! {
                                    <tr>
                                        <td>{page_view.row_number(index)}</td>
                                        <td>
                                            <div class="cell-title">{prompt.name.clone()}</div>
                                            <div class="cell-sub">{prompt.prompt.clone()}</div>
                                        </td>
                                        <td>{camera_label}</td>
                                        <td>{interval}</td>
                                        <td>{if prompt.loop_enabled { "Yes" } else { "No" }}</td>
                                        <td>
                                            <StatusBadge active=prompt.status />
                                        </td>
                                        <td class="cell-actions">
                                            <button
                                                class="btn btn-sm"
                                                on:click=move |_| view_ctl.open_view(view_record.clone())
                                            >
                                                "View"
                                            </button>
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
                        <PromptFormModal
                            prompt=Prompt::default()
                            cameras=cameras
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::Edit(prompt) => {
                    view! {
                        <PromptFormModal
                            prompt=prompt
                            cameras=cameras
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::View(prompt) => {
                    view! {
                        <PromptFormModal
                            prompt=prompt
                            cameras=cameras
                            view_only=true
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::ConfirmDelete(prompt) => {
                    view! {
                        <DeleteConfirm
                            message=format!("Delete prompt \"{}\"?", prompt.name)
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

/// Create/edit/view dialog for a prompt
#[component]
fn PromptFormModal(
    /// Record backing the form; a default draft for create
    prompt: Prompt,
    /// Active cameras for the optional pre-assignment picker
    cameras: RwSignal<LookupCache>,
    /// Disable all inputs and hide the submit action
    view_only: bool,
    /// Whether a mutation is in flight
    #[prop(into)]
    saving: Signal<bool>,
    /// Receives the assembled record
    on_submit: Callback<Prompt>,
    /// Close/cancel
    on_close: Callback<()>,
) -> impl IntoView {
    let id = prompt.id;
    let name = RwSignal::new(prompt.name.clone());
    let text = RwSignal::new(prompt.prompt.clone());
    let camera_id = RwSignal::new(id_text(prompt.camera_id));
    let timer = RwSignal::new(prompt.timer.map(|t| t.to_string()).unwrap_or_default());
    let loop_enabled = RwSignal::new(prompt.loop_enabled);
    let result = RwSignal::new(prompt.result.clone().unwrap_or_default());
    let status = RwSignal::new(prompt.status);

    let title = if view_only {
        "Prompt Details"
    } else if id.is_some() {
        "Edit Prompt"
    } else {
        "Add New Prompt"
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
        let record = Prompt {
            id,
            name: name.get().trim().to_string(),
            prompt: text.get().trim().to_string(),
            camera_id: opt_i64(&camera_id.get()),
            timer: opt_i32(&timer.get()),
            loop_enabled: loop_enabled.get(),
            result: opt_text(&result.get()),
            status: status.get(),
        };
        on_submit.run(record);
    };

    view! {
        <ModalShell title=title on_close=on_close>
            <div class="form-grid">
                <TextField label="Prompt Name" value=name disabled=view_only />
                <TextAreaField label="Instruction" value=text disabled=view_only />
                {move || {
                    view! {
                        <SelectField
                            label="Camera (optional)"
                            value=camera_id
                            options=camera_options()
                            disabled=view_only
                        />
                    }
                }}
                <TextField
                    label="Interval (seconds)"
                    value=timer
                    disabled=view_only
                    placeholder="e.g. 120"
                />
                <ToggleField label="Run continuously" value=loop_enabled disabled=view_only />
                <TextAreaField label="Expected result" value=result disabled=view_only />
                <ToggleField label="Prompt active" value=status disabled=view_only />
            </div>
            <div class="modal-footer">
                <button class="btn" on:click=move |_| on_close.run(())>
                    {if view_only { "Close" } else { "Cancel" }}
                </button>
                <Show when=move || !view_only>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                        {if id.is_some() { "Update Prompt" } else { "Add Prompt" }}
                    </button>
                </Show>
            </div>
        </ModalShell>
    }
}
