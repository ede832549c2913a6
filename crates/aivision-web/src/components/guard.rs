//! Session-expiry guard

use crate::context::use_app_context;
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// Watches a controller's session-expired flag; on expiry, syncs the
/// shell's auth state and bounces to the login screen with no notice
#[component]
pub fn ExpiryGuard(
    /// The controller's `session_expired` flag
    #[prop(into)]
    expired: Signal<bool>,
) -> impl IntoView {
    let context = use_app_context();
    Effect::new(move |_| {
        if expired.get() {
            context.note_session_expired();
        }
    });

    view! {
        <Show when=move || expired.get()>
            <Redirect path="/login" />
        </Show>
    }
}
