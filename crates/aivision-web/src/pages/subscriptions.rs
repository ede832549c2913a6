//! Subscription plan management screen

use std::sync::Arc;

use aivision_client::ManageApi;
use aivision_controller::DialogMode;
use aivision_core::resources::Subscription;
use leptos::prelude::*;

use crate::bridge::use_controller;
use crate::components::{
    DeleteConfirm, ExpiryGuard, Loading, ModalShell, NoticeBar, Pagination, SearchBox, StatusBadge,
    TextAreaField, TextField, ToggleField,
    form::{opt_i32, opt_text},
};
use crate::context::use_app_context;

/// Subscription plan page component
#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let context = use_app_context();
    let api: Arc<dyn ManageApi<Subscription>> = Arc::new(context.client.clone());
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
                    <h2>"Subscription Plans"</h2>
                    <p class="page-subtitle">"Usage limits offered to platform customers"</p>
                </div>
                <div class="page-actions">
                    <SearchBox placeholder="Search plans..." on_change=on_search />
                    <button class="btn" on:click=move |_| refresh.refresh()>
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| add.open_create()>
                        "Add Plan"
                    </button>
                </div>
            </header>

            <NoticeBar notice=Signal::derive(move || state.get().notice) on_dismiss=on_dismiss />

            <Show when=move || state.get().loading>
                <Loading />
            </Show>

            <Show when=move || state.get().is_empty()>
                <div class="empty-state">
                    <h3>"No Plans Found"</h3>
                    <p>"Create a subscription plan to offer to customers."</p>
                </div>
            </Show>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Plan"</th>
                        <th>"Cameras"</th>
                        <th>"Days"</th>
                        <th>"Alerts / day"</th>
                        <th>"Prompts / camera"</th>
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
                            .map(|(index, plan)| {
                                let view_record = plan.clone();
                                let edit_record = plan.clone();
                                let delete_record = plan.clone();
                                let view_ctl = rows_controller.clone();
                                let edit_ctl = rows_controller.clone();
                                let delete_ctl = rows_controller.clone();
                                view! {
                                    <tr>
                                        <td>{page_view.row_number(index)}</td>
                                        <td>
                                            <div class="cell-title">{plan.name.clone()}</div>
                                            <div class="cell-sub">
                                                {plan.about.clone().unwrap_or_default()}
                                            </div>
                                        </td>
                                        <td>{plan.camera.unwrap_or_default()}</td>
                                        <td>{plan.days.unwrap_or_default()}</td>
                                        <td>{plan.alert_per_day.unwrap_or_default()}</td>
                                        <td>{plan.prompt_per_camera.unwrap_or_default()}</td>
                                        <td>
                                            <StatusBadge active=plan.status />
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
                        <SubscriptionFormModal
                            plan=Subscription::default()
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::Edit(plan) => {
                    view! {
                        <SubscriptionFormModal
                            plan=plan
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::View(plan) => {
                    view! {
                        <SubscriptionFormModal
                            plan=plan
                            view_only=true
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::ConfirmDelete(plan) => {
                    view! {
                        <DeleteConfirm
                            message=format!("Delete plan \"{}\"?", plan.name)
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

/// Create/edit/view dialog for a subscription plan
#[component]
fn SubscriptionFormModal(
    /// Record backing the form; a default draft for create
    plan: Subscription,
    /// Disable all inputs and hide the submit action
    view_only: bool,
    /// Whether a mutation is in flight
    #[prop(into)]
    saving: Signal<bool>,
    /// Receives the assembled record
    on_submit: Callback<Subscription>,
    /// Close/cancel
    on_close: Callback<()>,
) -> impl IntoView {
    let id = plan.id;
    let name = RwSignal::new(plan.name.clone());
    let about = RwSignal::new(plan.about.clone().unwrap_or_default());
    let camera = RwSignal::new(plan.camera.map(|v| v.to_string()).unwrap_or_default());
    let days = RwSignal::new(plan.days.map(|v| v.to_string()).unwrap_or_default());
    let alert_per_day = RwSignal::new(
        plan.alert_per_day.map(|v| v.to_string()).unwrap_or_default(),
    );
    let prompt_per_camera = RwSignal::new(
        plan.prompt_per_camera
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let status = RwSignal::new(plan.status);

    let title = if view_only {
        "Plan Details"
    } else if id.is_some() {
        "Edit Plan"
    } else {
        "Add New Plan"
    };

    let submit = move |_| {
        let record = Subscription {
            id,
            name: name.get().trim().to_string(),
            about: opt_text(&about.get()),
            camera: opt_i32(&camera.get()),
            days: opt_i32(&days.get()),
            alert_per_day: opt_i32(&alert_per_day.get()),
            prompt_per_camera: opt_i32(&prompt_per_camera.get()),
            status: status.get(),
        };
        on_submit.run(record);
    };

    view! {
        <ModalShell title=title on_close=on_close>
            <div class="form-grid">
                <TextField label="Plan Name" value=name disabled=view_only />
                <TextAreaField label="Description" value=about disabled=view_only />
                <TextField label="Cameras included" value=camera disabled=view_only />
                <TextField label="Duration (days)" value=days disabled=view_only />
                <TextField label="Alerts per day" value=alert_per_day disabled=view_only />
                <TextField label="Prompts per camera" value=prompt_per_camera disabled=view_only />
                <ToggleField label="Plan active" value=status disabled=view_only />
            </div>
            <div class="modal-footer">
                <button class="btn" on:click=move |_| on_close.run(())>
                    {if view_only { "Close" } else { "Cancel" }}
                </button>
                <Show when=move || !view_only>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                        {if id.is_some() { "Update Plan" } else { "Add Plan" }}
                    </button>
                </Show>
            </div>
        </ModalShell>
    }
}
