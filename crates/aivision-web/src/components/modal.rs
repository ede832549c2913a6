//! Modal dialog shells

use leptos::prelude::*;

/// Generic modal frame used by every resource form
#[component]
pub fn ModalShell(
    /// Dialog title
    #[prop(into)]
    title: String,
    /// Invoked when the user closes the dialog
    on_close: Callback<()>,
    /// Dialog body
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// Delete confirmation dialog carrying the record it would remove
#[component]
pub fn DeleteConfirm(
    /// Confirmation question naming the record
    #[prop(into)]
    message: String,
    /// Whether the deletion request is in flight
    #[prop(into)]
    saving: Signal<bool>,
    /// Invoked when the user confirms
    on_confirm: Callback<()>,
    /// Invoked when the user cancels
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalShell title="Confirm Deletion" on_close=on_cancel>
            <p class="confirm-message">{message}</p>
            <p class="confirm-warning">"This cannot be undone."</p>
            <div class="modal-footer">
                <button class="btn" disabled=move || saving.get() on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    class="btn btn-danger"
                    disabled=move || saving.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {move || if saving.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </ModalShell>
    }
}
