//! Search Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{FilmApi, HttpFilmClient};
use crate::form::FormState;
use crate::models::Category;
use crate::search;
use crate::session::FormSession;
use crate::store::{store_apply_marks, store_set_films, store_set_status, SearchStatus, SearchStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct SearchContext {
    /// Last settled form state - read
    pub form: ReadSignal<FormState>,
    /// Owns the form state and its listeners
    session: StoredValue<FormSession, LocalStorage>,
    client: StoredValue<HttpFilmClient, LocalStorage>,
    store: SearchStore,
}

impl SearchContext {
    pub fn new(client: HttpFilmClient, store: SearchStore) -> Self {
        let (form, set_form) = signal(FormState::new());
        let mut session = FormSession::new();
        session.subscribe(move |state| set_form.set(state.clone()));

        Self {
            form,
            session: StoredValue::new_local(session),
            client: StoredValue::new_local(client),
            store,
        }
    }

    pub fn client(&self) -> HttpFilmClient {
        self.client.get_value()
    }

    /// Fetch the result set; also the retry path after a failed first load
    pub fn load(&self) {
        let client = self.client();
        let store = self.store;
        store_set_status(&store, SearchStatus::Loading);

        spawn_local(async move {
            match client.list_all().await {
                Ok(films) => {
                    log::info!("[APP] Loaded {} films", films.len());
                    store_set_films(&store, films);
                    store_set_status(&store, SearchStatus::Idle);
                }
                Err(e) => {
                    log::error!("[APP] Failed to load films: {}", e);
                    store_set_status(&store, SearchStatus::Failed(e.to_string()));
                }
            }
        });
    }

    /// Forward a keystroke to the form session
    pub fn edit(&self, category: Category, value: String) {
        self.session.update_value(|session| {
            session.edit(category, value);
        });
    }

    /// Search the populated field and publish the new marks
    pub fn submit(&self) {
        let form = self.form.get_untracked();
        let client = self.client();
        let store = self.store;
        store_set_status(&store, SearchStatus::Searching);

        spawn_local(async move {
            let result = search::submit(&client, &form, |urls| store_apply_marks(&store, urls)).await;
            match result {
                Ok(searches) => {
                    log::info!("[SEARCH] done, {} searches", searches);
                    store_set_status(&store, SearchStatus::Idle);
                }
                Err(e) => {
                    log::error!("[SEARCH] failed: {}", e);
                    store_set_status(&store, SearchStatus::Failed(e.to_string()));
                }
            }
        });
    }

    /// Release form listeners; runs when the root component is cleaned up
    pub fn teardown(&self) {
        self.session.try_update_value(|session| session.teardown());
    }
}
