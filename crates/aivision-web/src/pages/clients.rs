//! Client (alert recipient) management screen

use std::sync::Arc;

use aivision_client::{ManageApi, ManageClient};
use aivision_controller::{DialogMode, LookupCache};
use aivision_core::resources::{Camera, Client};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::bridge::use_controller;
use crate::components::{
    DeleteConfirm, ExpiryGuard, Loading, ModalShell, NoticeBar, Pagination, SearchBox, SelectField,
    StatusBadge, TextField, ToggleField,
    form::{id_text, opt_i64},
};
use crate::context::use_app_context;

/// Fetch the active-camera reference list into a signal
fn reload_cameras(client: ManageClient, into: RwSignal<LookupCache>) {
    spawn_local(async move {
        let api: &dyn ManageApi<Camera> = &client;
        match LookupCache::load(api).await {
            Ok(cache) => into.set(cache),
            Err(err) => warn!(error = %err, "failed to load camera reference list"),
        }
    });
}

/// Client management page component
#[component]
pub fn ClientsPage() -> impl IntoView {
    let context = use_app_context();
    let api: Arc<dyn ManageApi<Client>> = Arc::new(context.client.clone());
    let (state, controller) = use_controller(api);

    // Active cameras for the picker; refreshed whenever a form opens.
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
                    <h2>"Client Management"</h2>
                    <p class="page-subtitle">"Alert recipients and their delivery channels"</p>
                </div>
                <div class="page-actions">
                    <SearchBox placeholder="Search clients..." on_change=on_search />
                    <button class="btn" on:click=move |_| refresh.refresh()>
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| add.open_create()>
                        "Add Client"
                    </button>
                </div>
            </header>

            <NoticeBar notice=Signal::derive(move || state.get().notice) on_dismiss=on_dismiss />

            <Show when=move || state.get().loading>
                <Loading />
            </Show>

            <Show when=move || state.get().is_empty()>
                <div class="empty-state">
                    <h3>"No Clients Found"</h3>
                    <p>"Add a client to start delivering camera alerts."</p>
                </div>
            </Show>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Contact"</th>
                        <th>"Camera"</th>
                        <th>"Channels"</th>
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
                            .map(|(index, client)| {
                                let view_record = client.clone();
                                let edit_record = client.clone();
                                let delete_record = client.clone();
                                let view_ctl = rows_controller.clone();
                                let edit_ctl = rows_controller.clone();
                                let delete_ctl = rows_controller.clone();
                                let camera_label = camera_lookup.display(client.camera_id);
                                let channels = delivery_channels(&client);
                                view! {
                                    <tr>
                                        <td>{page_view.row_number(index)}</td>
                                        <td>
                                            <div class="cell-title">{client.name.clone()}</div>
                                        </td>
                                        <td>
                                            <div>{client.email.clone()}</div>
                                            <div class="cell-sub">{client.mobile.clone()}</div>
                                        </td>
                                        <td>{camera_label}</td>
                                        <td>{channels}</td>
                                        <td>
                                            <StatusBadge active=client.status />
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
                        <ClientFormModal
                            client=Client::default()
                            cameras=cameras
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::Edit(client) => {
                    view! {
                        <ClientFormModal
                            client=client
                            cameras=cameras
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::View(client) => {
                    view! {
                        <ClientFormModal
                            client=client
                            cameras=cameras
                            view_only=true
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::ConfirmDelete(client) => {
                    view! {
                        <DeleteConfirm
                            message=format!("Delete client \"{}\"?", client.name)
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

/// Comma-separated list of enabled delivery channels
fn delivery_channels(client: &Client) -> String {
    let mut channels = Vec::new();
    if client.send_email {
        channels.push("Email");
    }
    if client.send_sms {
        channels.push("SMS");
    }
    if client.send_whatsapp {
        channels.push("WhatsApp");
    }
    if channels.is_empty() {
        "-".to_string()
    } else {
        channels.join(", ")
    }
}

/// Create/edit/view dialog for a client
#[component]
fn ClientFormModal(
    /// Record backing the form; a default draft for create
    client: Client,
    /// Active cameras for the picker
    cameras: RwSignal<LookupCache>,
    /// Disable all inputs and hide the submit action
    view_only: bool,
    /// Whether a mutation is in flight
    #[prop(into)]
    saving: Signal<bool>,
    /// Receives the assembled record
    on_submit: Callback<Client>,
    /// Close/cancel
    on_close: Callback<()>,
) -> impl IntoView {
    let id = client.id;
    let name = RwSignal::new(client.name.clone());
    let email = RwSignal::new(client.email.clone());
    let mobile = RwSignal::new(client.mobile.clone());
    let camera_id = RwSignal::new(id_text(client.camera_id));
    let send_email = RwSignal::new(client.send_email);
    let send_sms = RwSignal::new(client.send_sms);
    let send_whatsapp = RwSignal::new(client.send_whatsapp);
    let status = RwSignal::new(client.status);

    let title = if view_only {
        "Client Details"
    } else if id.is_some() {
        "Edit Client"
    } else {
        "Add New Client"
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
        let record = Client {
            id,
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            mobile: mobile.get().trim().to_string(),
            camera_id: opt_i64(&camera_id.get()),
            send_email: send_email.get(),
            send_sms: send_sms.get(),
            send_whatsapp: send_whatsapp.get(),
            status: status.get(),
        };
        on_submit.run(record);
    };

    view! {
        <ModalShell title=title on_close=on_close>
            <div class="form-grid">
                <TextField label="Client Name" value=name disabled=view_only />
                <TextField label="Email" value=email disabled=view_only input_type="email" />
                <TextField label="Mobile" value=mobile disabled=view_only />
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
                <ToggleField label="Send email alerts" value=send_email disabled=view_only />
                <ToggleField label="Send SMS alerts" value=send_sms disabled=view_only />
                <ToggleField label="Send WhatsApp alerts" value=send_whatsapp disabled=view_only />
                <ToggleField label="Client active" value=status disabled=view_only />
            </div>
            <div class="modal-footer">
                <button class="btn" on:click=move |_| on_close.run(())>
                    {if view_only { "Close" } else { "Cancel" }}
                </button>
                <Show when=move || !view_only>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                        {if id.is_some() { "Update Client" } else { "Add Client" }}
                    </button>
                </Show>
            </div>
        </ModalShell>
    }
}
