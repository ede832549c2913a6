//! Camera management screen

use std::sync::Arc;

use aivision_client::ManageApi;
use aivision_controller::DialogMode;
use aivision_core::resources::Camera;
use leptos::prelude::*;

use crate::bridge::use_controller;
use crate::components::{
    DeleteConfirm, ExpiryGuard, Loading, ModalShell, NoticeBar, Pagination, SearchBox, StatusBadge,
    TextAreaField, TextField, ToggleField,
    form::{id_text, opt_f64, opt_i32, opt_i64, opt_text},
};
use crate::context::use_app_context;

/// Camera management page component
#[component]
pub fn CamerasPage() -> impl IntoView {
    let context = use_app_context();
    let api: Arc<dyn ManageApi<Camera>> = Arc::new(context.client.clone());
    let (state, controller) = use_controller(api);

    let dialog = Memo::new(move |_| state.get().dialog);
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
                    <h2>"Camera Management"</h2>
                    <p class="page-subtitle">"Configure and monitor camera feeds for AI analysis"</p>
                </div>
                <div class="page-actions">
                    <SearchBox placeholder="Search cameras..." on_change=on_search />
                    <button class="btn" on:click=move |_| refresh.refresh()>
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| add.open_create()>
                        "Add Camera"
                    </button>
                </div>
            </header>

            <NoticeBar notice=Signal::derive(move || state.get().notice) on_dismiss=on_dismiss />

            <Show when=move || state.get().loading>
                <Loading />
            </Show>

            <Show when=move || state.get().is_empty()>
                <div class="empty-state">
                    <h3>"No Cameras Found"</h3>
                    <p>"Add your first camera to start monitoring video feeds."</p>
                </div>
            </Show>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Camera"</th>
                        <th>"Location"</th>
                        <th>"Order"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let snapshot = state.get();
                        let page_view = snapshot.page;
                        snapshot
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(index, camera)| {
                                let view_record = camera.clone();
                                let edit_record = camera.clone();
                                let delete_record = camera.clone();
                                let view_ctl = rows_controller.clone();
                                let edit_ctl = rows_controller.clone();
                                let delete_ctl = rows_controller.clone();
                                let location = camera
                                    .city
                                    .clone()
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr>
                                        <td>{page_view.row_number(index)}</td>
                                        <td>
                                            <div class="cell-title">{camera.name.clone()}</div>
                                            <div class="cell-sub">
                                                {if camera.rtsp_link.is_empty() {
                                                    "No RTSP link configured".to_string()
                                                } else {
                                                    camera.rtsp_link.clone()
                                                }}
                                            </div>
                                        </td>
                                        <td>{location}</td>
                                        <td>{camera.view_order.unwrap_or_default()}</td>
                                        <td>
                                            <StatusBadge active=camera.is_online() />
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
                        <CameraFormModal
                            camera=Camera::default()
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::Edit(camera) => {
                    view! {
                        <CameraFormModal
                            camera=camera
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::View(camera) => {
                    view! {
                        <CameraFormModal
                            camera=camera
                            view_only=true
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::ConfirmDelete(camera) => {
                    view! {
                        <DeleteConfirm
                            message=format!("Delete camera \"{}\"?", camera.name)
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

/// Create/edit/view dialog for a camera
#[component]
fn CameraFormModal(
    /// Record backing the form; a default draft for create
    camera: Camera,
    /// Disable all inputs and hide the submit action
    view_only: bool,
    /// Whether a mutation is in flight
    #[prop(into)]
    saving: Signal<bool>,
    /// Receives the assembled record
    on_submit: Callback<Camera>,
    /// Close/cancel
    on_close: Callback<()>,
) -> impl IntoView {
    let id = camera.id;
    let name = RwSignal::new(camera.name.clone());
    let rtsp_link = RwSignal::new(camera.rtsp_link.clone());
    let about = RwSignal::new(camera.about.clone().unwrap_or_default());
    let address = RwSignal::new(camera.address.clone().unwrap_or_default());
    let landmark = RwSignal::new(camera.landmark.clone().unwrap_or_default());
    let city = RwSignal::new(camera.city.clone().unwrap_or_default());
    let state_field = RwSignal::new(camera.state.clone().unwrap_or_default());
    let pincode = RwSignal::new(id_text(camera.pincode));
    let latitude = RwSignal::new(
        camera.latitude.map(|v| v.to_string()).unwrap_or_default(),
    );
    let longitude = RwSignal::new(
        camera.longitude.map(|v| v.to_string()).unwrap_or_default(),
    );
    let view_order = RwSignal::new(
        camera.view_order.map(|v| v.to_string()).unwrap_or_default(),
    );
    let status = RwSignal::new(camera.status);

    let title = if view_only {
        "Camera Details"
    } else if id.is_some() {
        "Edit Camera"
    } else {
        "Add New Camera"
    };

    let submit = move |_| {
        let record = Camera {
            id,
            name: name.get().trim().to_string(),
            rtsp_link: rtsp_link.get().trim().to_string(),
            about: opt_text(&about.get()),
            address: opt_text(&address.get()),
            landmark: opt_text(&landmark.get()),
            city: opt_text(&city.get()),
            state: opt_text(&state_field.get()),
            pincode: opt_i64(&pincode.get()),
            latitude: opt_f64(&latitude.get()),
            longitude: opt_f64(&longitude.get()),
            view_order: opt_i32(&view_order.get()).or(Some(0)),
            status: status.get(),
        };
        on_submit.run(record);
    };

    view! {
        <ModalShell title=title on_close=on_close>
            <div class="form-grid">
                <TextField
                    label="Camera Name"
                    value=name
                    disabled=view_only
                    placeholder="Enter camera name"
                />
                <TextField
                    label="RTSP Link"
                    value=rtsp_link
                    disabled=view_only
                    placeholder="rtsp://username:password@ip:port/path"
                />
                <TextAreaField label="Description" value=about disabled=view_only />
                <TextAreaField label="Address" value=address disabled=view_only />
                <TextField label="Landmark" value=landmark disabled=view_only />
                <TextField label="City" value=city disabled=view_only />
                <TextField label="State" value=state_field disabled=view_only />
                <TextField label="Pincode" value=pincode disabled=view_only />
                <TextField label="Latitude" value=latitude disabled=view_only />
                <TextField label="Longitude" value=longitude disabled=view_only />
                <TextField label="Display Order" value=view_order disabled=view_only />
                <ToggleField label="Camera active" value=status disabled=view_only />
            </div>
            <div class="modal-footer">
                <button class="btn" on:click=move |_| on_close.run(())>
                    {if view_only { "Close" } else { "Cancel" }}
                </button>
                <Show when=move || !view_only>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                        {if id.is_some() { "Update Camera" } else { "Add Camera" }}
                    </button>
                </Show>
            </div>
        </ModalShell>
    }
}
