//! Form Session
//!
//! Owns the live `FormState` for the lifetime of the UI and notifies
//! subscribers after every settled edit. Tearing the session down drops
//! all subscribers; later edits are ignored.

use crate::form::FormState;
use crate::models::Category;

type Listener = Box<dyn FnMut(&FormState)>;

#[derive(Default)]
pub struct FormSession {
    state: FormState,
    listeners: Vec<Listener>,
    closed: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Register a change listener. Returns false once torn down.
    pub fn subscribe(&mut self, listener: impl FnMut(&FormState) + 'static) -> bool {
        if self.is_closed() {
            return false;
        }
        self.listeners.push(Box::new(listener));
        true
    }

    /// Apply a user edit and publish the settled state
    pub fn edit(&mut self, category: Category, value: impl Into<String>) -> bool {
        if self.is_closed() {
            log::debug!("[FORM] edit of {} after teardown ignored", category);
            return false;
        }
        self.state = self.state.apply_edit(category, value);
        for listener in self.listeners.iter_mut() {
            listener(&self.state);
        }
        true
    }

    pub fn teardown(&mut self) {
        if self.is_closed() {
            return;
        }
        log::debug!("[FORM] teardown, releasing {} listeners", self.listeners.len());
        self.listeners.clear();
        self.closed = true;
    }
}
