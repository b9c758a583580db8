//! Search State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the film
//! result set and the request status.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Film;
use crate::search::mark_films;

/// Where the last request stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchStatus {
    /// Initial film fetch in flight
    #[default]
    Loading,
    Idle,
    Searching,
    Failed(String),
}

/// Result set and status, published as snapshots
#[derive(Clone, Debug, Default, Store)]
pub struct SearchState {
    /// Fetched once at startup; only `marked` changes afterwards
    pub films: Vec<Film>,
    pub status: SearchStatus,
}

impl SearchState {
    /// The initial fetch failed and nothing was loaded
    pub fn needs_reload(&self) -> bool {
        self.films.is_empty() && matches!(self.status, SearchStatus::Failed(_))
    }
}

pub type SearchStore = Store<SearchState>;

/// Get the search store from context
pub fn use_search_store() -> SearchStore {
    expect_context::<SearchStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the result set with a freshly fetched one
pub fn store_set_films(store: &SearchStore, films: Vec<Film>) {
    *store.films().write() = films;
}

/// Publish a new marking derived from the current result set
pub fn store_apply_marks(store: &SearchStore, urls: &HashSet<String>) {
    let marked = mark_films(&store.films().read_untracked(), urls);
    *store.films().write() = marked;
}

pub fn store_set_status(store: &SearchStore, status: SearchStatus) {
    *store.status().write() = status;
}
