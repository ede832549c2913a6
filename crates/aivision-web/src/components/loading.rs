//! Loading indicator

use leptos::prelude::*;

/// Loading spinner shown while a list fetch is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
