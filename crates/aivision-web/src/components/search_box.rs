//! Debounce-friendly search input
//!
//! The input reports every keystroke; the controller owns the debounce, so
//! typing bursts still produce a single request.

use leptos::prelude::*;

/// Free-text search input
#[component]
pub fn SearchBox(
    /// Placeholder text
    #[prop(into)]
    placeholder: String,
    /// Invoked on every keystroke with the full current text
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="search-input"
            placeholder=placeholder
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}
