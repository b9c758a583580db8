//! Film List Component
//!
//! Renders the result set with its marked indicator and request status.

use leptos::prelude::*;

use crate::context::SearchContext;
use crate::store::{use_search_store, SearchStateStoreFields, SearchStatus};

#[component]
pub fn FilmList() -> impl IntoView {
    let ctx = use_context::<SearchContext>().expect("SearchContext should be provided");
    let store = use_search_store();
    let needs_reload = move || store.with(|state| state.needs_reload());

    let status_line = move || match store.status().get() {
        SearchStatus::Loading => Some("Loading films...".to_string()),
        SearchStatus::Searching => Some("Searching...".to_string()),
        SearchStatus::Failed(msg) => Some(format!("Error: {}", msg)),
        SearchStatus::Idle => None,
    };

    view! {
        <section class="film-list">
            {move || status_line().map(|line| view! { <p class="status">{line}</p> })}
            <Show when=needs_reload>
                <button class="retry-btn" on:click=move |_| ctx.load()>"Retry"</button>
            </Show>
            <ul>
                <For
                    each=move || store.films().get()
                    key=|film| (film.url.clone(), film.marked)
                    children=move |film| {
                        let (class, marker) = if film.marked { ("film marked", "★") } else { ("film", "") };
                        view! {
                            <li class=class>
                                <span class="marker">{marker}</span>
                                <span class="film-title">
                                    "Episode " {film.episode_id} ": " {film.title.clone()}
                                </span>
                                <span class="film-meta">
                                    {film.director.clone()} " · " {film.release_date.clone()}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
            <p class="film-count">
                {move || {
                    let films = store.films().get();
                    let marked = films.iter().filter(|f| f.marked).count();
                    format!("{} films, {} marked", films.len(), marked)
                }}
            </p>
        </section>
    }
}
