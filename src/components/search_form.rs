//! Search Form Component
//!
//! One exclusive text field per category plus the submit action.

use leptos::prelude::*;

use crate::context::SearchContext;
use crate::models::Category;
use crate::store::{use_search_store, SearchStateStoreFields, SearchStatus};

use super::TextField;

#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_context::<SearchContext>().expect("SearchContext should be provided");
    let store = use_search_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let busy = move || matches!(store.status().get(), SearchStatus::Loading | SearchStatus::Searching);

    view! {
        <form
            class=move || if ctx.form.with(|form| form.is_valid()) { "search-form" } else { "search-form invalid" }
            on:submit=on_submit
        >
            {Category::ALL.into_iter().map(|category| {
                let field = move || ctx.form.with(|form| form.field(category).clone());
                // errors stay hidden until the user typed into the field
                let errors = Signal::derive(move || {
                    if field().is_dirty() {
                        ctx.form.with(|form| form.errors(category))
                    } else {
                        Vec::new()
                    }
                });
                view! {
                    <TextField
                        category=category
                        value=Signal::derive(move || field().value().to_string())
                        required=Signal::derive(move || field().is_required())
                        errors=errors
                        on_input=move |value: String| ctx.edit(category, value)
                    />
                }
            }).collect_view()}
            <button type="submit" disabled=busy>"Search"</button>
        </form>
    }
}
