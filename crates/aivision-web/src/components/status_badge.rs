//! Active/Inactive status badge

use leptos::prelude::*;

/// Text shown for a status flag
#[must_use]
pub const fn badge_text(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

/// Badge rendering the resource's soft status flag
#[component]
pub fn StatusBadge(
    /// The record's status flag
    active: bool,
) -> impl IntoView {
    let class = if active {
        "badge badge-active"
    } else {
        "badge badge-inactive"
    };

    view! { <span class=class>{badge_text(active)}</span> }
}

#[cfg(test)]
mod tests {
    use super::badge_text;

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(true), "Active");
        assert_eq!(badge_text(false), "Inactive");
    }
}
