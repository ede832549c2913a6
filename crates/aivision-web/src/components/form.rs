//! Form field components and input parsing helpers
//!
//! Form state lives in per-field string signals; records are assembled and
//! validated once, at submit. View-only dialogs reuse the same fields with
//! inputs disabled.

use leptos::prelude::*;

/// Single-line text input
#[component]
pub fn TextField(
    /// Field label
    #[prop(into)]
    label: String,
    /// Backing signal
    value: RwSignal<String>,
    /// Render read-only (view dialog)
    #[prop(optional)]
    disabled: bool,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Input type attribute; defaults to `text`
    #[prop(default = String::from("text"), into)]
    input_type: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Multi-line text input
#[component]
pub fn TextAreaField(
    /// Field label
    #[prop(into)]
    label: String,
    /// Backing signal
    value: RwSignal<String>,
    /// Render read-only (view dialog)
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Checkbox bound to a boolean signal
#[component]
pub fn ToggleField(
    /// Field label
    #[prop(into)]
    label: String,
    /// Backing signal
    value: RwSignal<bool>,
    /// Render read-only (view dialog)
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <label class="field field-toggle">
            <input
                type="checkbox"
                disabled=disabled
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            <span class="field-label">{label}</span>
        </label>
    }
}

/// Dropdown over (value, label) pairs with an empty placeholder entry
#[component]
pub fn SelectField(
    /// Field label
    #[prop(into)]
    label: String,
    /// Backing signal holding the selected value
    value: RwSignal<String>,
    /// Choices as (value, label) pairs
    options: Vec<(String, String)>,
    /// Render read-only (view dialog)
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                disabled=disabled
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        view! { <option value=option_value>{option_label}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Trimmed text, `None` when empty
#[must_use]
pub fn opt_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parsed integer, `None` when empty or unparseable
#[must_use]
pub fn opt_i64(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parsed 32-bit integer, `None` when empty or unparseable
#[must_use]
pub fn opt_i32(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Parsed float, `None` when empty or unparseable
#[must_use]
pub fn opt_f64(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Render an optional id as its initial form value
#[must_use]
pub fn id_text(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}
