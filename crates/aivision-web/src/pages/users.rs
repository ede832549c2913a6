//! User management screen

use std::sync::Arc;

use aivision_client::ManageApi;
use aivision_controller::DialogMode;
use aivision_core::resources::User;
use leptos::prelude::*;

use crate::bridge::use_controller;
use crate::components::{
    DeleteConfirm, ExpiryGuard, Loading, ModalShell, NoticeBar, Pagination, SearchBox, SelectField,
    StatusBadge, TextField, ToggleField,
    form::{id_text, opt_i64, opt_text},
};
use crate::context::use_app_context;

const ROLES: [&str; 3] = ["admin", "operator", "viewer"];

/// User management page component
#[component]
pub fn UsersPage() -> impl IntoView {
    let context = use_app_context();
    let api: Arc<dyn ManageApi<User>> = Arc::new(context.client.clone());
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
                    <h2>"User Management"</h2>
                    <p class="page-subtitle">"Operator accounts and their roles"</p>
                </div>
                <div class="page-actions">
                    <SearchBox placeholder="Search users..." on_change=on_search />
                    <button class="btn" on:click=move |_| refresh.refresh()>
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| add.open_create()>
                        "Add User"
                    </button>
                </div>
            </header>

            <NoticeBar notice=Signal::derive(move || state.get().notice) on_dismiss=on_dismiss />

            <Show when=move || state.get().loading>
                <Loading />
            </Show>

            <Show when=move || state.get().is_empty()>
                <div class="empty-state">
                    <h3>"No Users Found"</h3>
                    <p>"Add an operator account to get started."</p>
                </div>
            </Show>

            <table class="record-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Mobile"</th>
                        <th>"Role"</th>
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
                            .map(|(index, user)| {
                                let view_record = user.clone();
                                let edit_record = user.clone();
                                let delete_record = user.clone();
                                let view_ctl = rows_controller.clone();
                                let edit_ctl = rows_controller.clone();
                                let delete_ctl = rows_controller.clone();
                                view! {
                                    <tr>
                                        <td>{page_view.row_number(index)}</td>
                                        <td>
                                            <div class="cell-title">{user.name.clone()}</div>
                                            <div class="cell-sub">{user.user_name.clone()}</div>
                                        </td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.mobile.clone()}</td>
                                        <td>{user.role.clone()}</td>
                                        <td>
                                            <StatusBadge active=user.status />
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
                        <UserFormModal
                            user=User::default()
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::Edit(user) => {
                    view! {
                        <UserFormModal
                            user=user
                            view_only=false
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::View(user) => {
                    view! {
                        <UserFormModal
                            user=user
                            view_only=true
                            saving=saving
                            on_submit=on_submit
                            on_close=on_close
                        />
                    }
                        .into_any()
                }
                DialogMode::ConfirmDelete(user) => {
                    view! {
                        <DeleteConfirm
                            message=format!("Delete user \"{}\"?", user.name)
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

/// Create/edit/view dialog for a user
#[component]
fn UserFormModal(
    /// Record backing the form; a default draft for create
    user: User,
    /// Disable all inputs and hide the submit action
    view_only: bool,
    /// Whether a mutation is in flight
    #[prop(into)]
    saving: Signal<bool>,
    /// Receives the assembled record
    on_submit: Callback<User>,
    /// Close/cancel
    on_close: Callback<()>,
) -> impl IntoView {
    let id = user.id;
    let name = RwSignal::new(user.name.clone());
    let user_name = RwSignal::new(user.user_name.clone());
    let email = RwSignal::new(user.email.clone());
    let mobile = RwSignal::new(user.mobile.clone());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(user.role.clone());
    let address_type = RwSignal::new(user.address_type.clone().unwrap_or_default());
    let street = RwSignal::new(user.street.clone().unwrap_or_default());
    let landmark = RwSignal::new(user.landmark.clone().unwrap_or_default());
    let city = RwSignal::new(user.city.clone().unwrap_or_default());
    let state_field = RwSignal::new(user.state.clone().unwrap_or_default());
    let pin_code = RwSignal::new(id_text(user.pin_code));
    let status = RwSignal::new(user.status);

    let title = if view_only {
        "User Details"
    } else if id.is_some() {
        "Edit User"
    } else {
        "Add New User"
    };

    let role_options: Vec<(String, String)> = ROLES
        .iter()
        .map(|role| ((*role).to_string(), (*role).to_string()))
        .collect();

    let submit = move |_| {
        let record = User {
            id,
            name: name.get().trim().to_string(),
            user_name: user_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            mobile: mobile.get().trim().to_string(),
            password: opt_text(&password.get()),
            role: role.get().trim().to_string(),
            address_type: opt_text(&address_type.get()),
            street: opt_text(&street.get()),
            landmark: opt_text(&landmark.get()),
            city: opt_text(&city.get()),
            state: opt_text(&state_field.get()),
            pin_code: opt_i64(&pin_code.get()),
            status: status.get(),
        };
        on_submit.run(record);
    };

    view! {
        <ModalShell title=title on_close=on_close>
            <div class="form-grid">
                <TextField label="Full Name" value=name disabled=view_only />
                <TextField label="User Name" value=user_name disabled=view_only />
                <TextField
                    label="Email"
                    value=email
                    disabled=view_only
                    input_type="email"
                />
                <TextField label="Mobile" value=mobile disabled=view_only />
                <TextField
                    label="Password"
                    value=password
                    disabled=view_only
                    input_type="password"
                    placeholder={if id.is_some() { "Leave blank to keep current" } else { "" }}
                />
                <SelectField
                    label="Role"
                    value=role
                    options=role_options
                    disabled=view_only
                />
                <TextField label="Address Type" value=address_type disabled=view_only />
                <TextField label="Street" value=street disabled=view_only />
                <TextField label="Landmark" value=landmark disabled=view_only />
                <TextField label="City" value=city disabled=view_only />
                <TextField label="State" value=state_field disabled=view_only />
                <TextField label="Pin Code" value=pin_code disabled=view_only />
                <ToggleField label="User active" value=status disabled=view_only />
            </div>
            <div class="modal-footer">
                <button class="btn" on:click=move |_| on_close.run(())>
                    {if view_only { "Close" } else { "Cancel" }}
                </button>
                <Show when=move || !view_only>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                        {if id.is_some() { "Update User" } else { "Add User" }}
                    </button>
                </Show>
            </div>
        </ModalShell>
    }
}
