//! 404 page

use leptos::prelude::*;
use leptos_router::components::A;

/// Not-found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page Not Found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to the dashboard"</A>
        </div>
    }
}
