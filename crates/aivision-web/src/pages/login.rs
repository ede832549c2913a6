//! Login page
//!
//! Real credential verification happens in the identity service; this
//! screen stores the issued operator id and access token in the injected
//! session store and routes to the dashboard.

use crate::components::TextField;
use crate::context::use_app_context;
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let context = use_app_context();

    let operator_id = RwSignal::new(String::new());
    let token = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let done = RwSignal::new(false);

    let submit = move |_| {
        let token_value = token.get();
        let token_value = token_value.trim();
        match operator_id.get().trim().parse::<i64>() {
            Ok(puid) if !token_value.is_empty() => {
                context.login(token_value, puid);
                done.set(true);
            }
            _ => {
                error.set(Some(
                    "Enter the operator id and access token issued for this console.".to_string(),
                ));
            }
        }
    };

    view! {
        <Show when=move || done.get()>
            <Redirect path="/" />
        </Show>
        <div class="login">
            <h2>"Sign in to AI Vision Admin"</h2>
            {move || {
                error.get().map(|message| view! { <p class="notice notice-error">{message}</p> })
            }}
            <div class="login-form">
                <TextField label="Operator id" value=operator_id placeholder="e.g. 42" />
                <TextField label="Access token" value=token placeholder="Paste your token" />
                <button class="btn btn-primary" on:click=submit>
                    "Sign in"
                </button>
            </div>
        </div>
    }
}
