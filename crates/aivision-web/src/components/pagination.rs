//! Pagination controls
//!
//! Previous/next navigation, a "from-to of total" readout, and the page
//! size choices. All math lives in [`PageView`]; this component only
//! renders it.

use aivision_core::{PAGE_SIZE_OPTIONS, PageView};
use leptos::prelude::*;

/// Pagination footer for a record table
#[component]
pub fn Pagination(
    /// Current pagination state
    #[prop(into)]
    page: Signal<PageView>,
    /// Called with the new page number (1-based)
    on_page_change: Callback<u32>,
    /// Called with the new page size (one of the UI choices)
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let readout = move || {
        let view = page.get();
        view.range().map_or_else(
            || "0 of 0".to_string(),
            |(from, to)| format!("{from}-{to} of {}", view.total),
        )
    };

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                disabled=move || !page.get().has_prev()
                on:click=move |_| {
                    let view = page.get();
                    if view.has_prev() {
                        on_page_change.run(view.page - 1);
                    }
                }
            >
                "Previous"
            </button>

            <span class="pagination-info">
                {readout} " (page " {move || page.get().page} " of "
                {move || page.get().total_pages()} ")"
            </span>

            <button
                class="pagination-btn"
                disabled=move || !page.get().has_next()
                on:click=move |_| {
                    let view = page.get();
                    if view.has_next() {
                        on_page_change.run(view.page + 1);
                    }
                }
            >
                "Next"
            </button>

            <select
                class="pagination-size"
                prop:value=move || page.get().page_size.to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|size| {
                        let size = *size;
                        view! { <option value=size.to_string()>{size} " / page"</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
