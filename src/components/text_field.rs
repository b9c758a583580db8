//! Text Field Component
//!
//! Plain value + change-callback binding for one search field.

use leptos::prelude::*;

use crate::form::ValidationError;
use crate::models::Category;

/// Labelled text input reporting its validity
///
/// # Arguments
/// * `value` - Current text, owned by the form
/// * `required` - Whether the field currently carries the required rule
/// * `errors` - Validation errors to show under the input
/// * `on_input` - Called with the new text on every keystroke
#[component]
pub fn TextField(
    category: Category,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] required: Signal<bool>,
    #[prop(into)] errors: Signal<Vec<ValidationError>>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let id = format!("field-{}", category.as_str());
    let invalid = move || !errors.get().is_empty();

    view! {
        <div class=move || if invalid() { "text-field invalid" } else { "text-field" }>
            <label for=id.clone()>
                {category.label()}
                <Show when=move || required.get()>
                    <span class="required-mark">"*"</span>
                </Show>
            </label>
            <input
                id=id
                type="text"
                name=category.as_str()
                placeholder=format!("Search by {}...", category.as_str())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <ul class="field-errors">
                {move || errors.get().into_iter().map(|err| view! {
                    <li>{err.to_string()}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}
