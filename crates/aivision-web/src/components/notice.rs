//! Transient notice bar

use aivision_controller::{Notice, NoticeKind};
use leptos::prelude::*;

/// Renders the controller's transient notice, if any
#[component]
pub fn NoticeBar(
    /// Current notice
    #[prop(into)]
    notice: Signal<Option<Notice>>,
    /// Invoked when the user dismisses the notice
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            notice
                .get()
                .map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Error => "notice notice-error",
                        NoticeKind::Success => "notice notice-success",
                    };
                    view! {
                        <div class=class role="status">
                            <span>{notice.message}</span>
                            <button class="notice-dismiss" on:click=move |_| on_dismiss.run(())>
                                "Dismiss"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
