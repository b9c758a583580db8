//! Film Finder App
//!
//! Root component: fetches the film feed on mount, provides shared state
//! and releases form listeners on cleanup.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ClientConfig, HttpFilmClient};
use crate::components::{FilmList, SearchForm};
use crate::context::SearchContext;
use crate::store::SearchState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(SearchState::default());
    let ctx = SearchContext::new(HttpFilmClient::new(ClientConfig::default()), store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    on_cleanup(move || ctx.teardown());

    // Load the result set on mount
    ctx.load();

    view! {
        <main class="app-layout">
            <h1>"Film Finder"</h1>
            <SearchForm />
            <FilmList />
        </main>
    }
}
