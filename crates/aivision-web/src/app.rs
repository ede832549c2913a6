//! Main Leptos application component with routing

use crate::context::{AppContext, use_app_context};
use crate::pages::{
    camera_prompts::CameraPromptsPage, cameras::CamerasPage, clients::ClientsPage,
    dashboard::Dashboard, login::Login, not_found::NotFound, prompts::PromptsPage,
    subscriptions::SubscriptionsPage, user_cameras::UserCamerasPage, users::UsersPage,
};
use aivision_core::Config;
use leptos::prelude::*;
use leptos_router::components::{A, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = Config::load().unwrap_or_else(|_| Config::default());

    match AppContext::new(&config) {
        Ok(context) => {
            provide_context(context);
            view! {
                <Router>
                    <main class="app">
                        <Header />
                        <div class="content">
                            <Routes fallback=|| view! { <NotFound /> }>
                                <Route path=path!("/login") view=Login />
                                <Route path=path!("/") view=|| protected(Dashboard) />
                                <Route path=path!("/cameras") view=|| protected(CamerasPage) />
                                <Route path=path!("/users") view=|| protected(UsersPage) />
                                <Route path=path!("/clients") view=|| protected(ClientsPage) />
                                <Route path=path!("/prompts") view=|| protected(PromptsPage) />
                                <Route
                                    path=path!("/camera-prompts")
                                    view=|| protected(CameraPromptsPage)
                                />
                                <Route
                                    path=path!("/user-cameras")
                                    view=|| protected(UserCamerasPage)
                                />
                                <Route
                                    path=path!("/subscriptions")
                                    view=|| protected(SubscriptionsPage)
                                />
                            </Routes>
                        </div>
                    </main>
                </Router>
            }
            .into_any()
        }
        Err(err) => view! {
            <div class="startup-error">
                <h1>"AI Vision Admin"</h1>
                <p>{err.to_string()}</p>
            </div>
        }
        .into_any(),
    }
}

/// Render a page only with a live session; otherwise bounce to login
fn protected<F, V>(page: F) -> AnyView
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let context = use_app_context();
    if context.authenticated.get_untracked() {
        page().into_any()
    } else {
        view! { <Redirect path="/login" /> }.into_any()
    }
}

/// Application header with navigation
#[component]
fn Header() -> impl IntoView {
    let context = use_app_context();
    let logout_context = context.clone();

    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">
                    <A href="/">"AI Vision Admin"</A>
                </h1>
                <Show when=move || context.authenticated.get()>
                    <nav class="nav">
                        <A href="/">"Dashboard"</A>
                        <A href="/cameras">"Cameras"</A>
                        <A href="/users">"Users"</A>
                        <A href="/clients">"Clients"</A>
                        <A href="/prompts">"Prompts"</A>
                        <A href="/camera-prompts">"Camera Prompts"</A>
                        <A href="/user-cameras">"User Cameras"</A>
                        <A href="/subscriptions">"Subscriptions"</A>
                        <button
                            class="btn btn-link"
                            on:click={
                                let context = logout_context.clone();
                                move |_| context.logout()
                            }
                        >
                            "Log out"
                        </button>
                    </nav>
                </Show>
            </div>
        </header>
    }
}
