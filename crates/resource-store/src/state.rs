//! # Collection State & Reducer
//!
//! `CollectionState<T>` is the single piece of state a store owns:
//! `{is_loading, error, items, selected, extra}`. It is only ever changed by
//! [`CollectionState::reduce`], a pure fold over [`StoreAction`]s, which makes the
//! state transitions easy to test without spawning anything.
//!
//! ## Transition rules
//!
//! | Action | Effect |
//! |--------|--------|
//! | `Requested(_)` | `is_loading = true`, `error = None` |
//! | `Succeeded(Fetched)` | replace `items` (and `extra` if the listing carries it) |
//! | `Succeeded(Added)` | append to `items` |
//! | `Succeeded(Edited)` | replace the item with the same id, in place |
//! | `Succeeded(Deleted(id))` | remove the item with the requested id |
//! | `Succeeded(Loaded)` | set `selected` |
//! | `Succeeded(Performed)` | entity hook [`Resource::on_action_success`] |
//! | `Failed { message }` | `is_loading = false`, `error = Some(message)` |
//!
//! Every success also sets `is_loading = false` and clears `error`. `is_loading` is
//! shared by all operation kinds, so it only approximates "something is in flight".

use crate::entity::Resource;
use crate::message::{StoreAction, Success};

/// Items returned by a fetch, plus optional side data.
#[derive(Debug, Clone)]
pub struct Listing<T: Resource> {
    pub items: Vec<T>,
    pub extra: Option<T::Extra>,
}

impl<T: Resource> Listing<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, extra: None }
    }

    pub fn with_extra(mut self, extra: T::Extra) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// The state of one remotely-synchronised collection.
#[derive(Debug, Clone)]
pub struct CollectionState<T: Resource> {
    pub is_loading: bool,
    pub error: Option<String>,
    /// Server order; never re-sorted locally.
    pub items: Vec<T>,
    pub selected: Option<T>,
    pub extra: T::Extra,
}

impl<T: Resource> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error: None,
            items: Vec::new(),
            selected: None,
            extra: T::Extra::default(),
        }
    }
}

impl<T: Resource> CollectionState<T> {
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    pub fn find_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| &item.id() == id)
    }

    /// Folds one action into the state.
    pub fn reduce(&mut self, action: StoreAction<T>) {
        match action {
            StoreAction::Requested(_) => {
                self.is_loading = true;
                self.error = None;
            }
            StoreAction::Succeeded(success) => {
                self.is_loading = false;
                self.error = None;
                self.apply_success(success);
            }
            StoreAction::Failed { message, .. } => {
                self.is_loading = false;
                self.error = Some(message);
            }
        }
    }

    fn apply_success(&mut self, success: Success<T>) {
        match success {
            Success::Fetched(listing) => {
                self.items = listing.items;
                if let Some(extra) = listing.extra {
                    self.extra = extra;
                }
            }
            Success::Added(item) => self.items.push(item),
            Success::Edited(item) => {
                let id = item.id();
                if let Some(slot) = self.find_mut(&id) {
                    *slot = item;
                }
            }
            Success::Deleted(id) => self.items.retain(|item| item.id() != id),
            Success::Loaded(item) => self.selected = Some(item),
            Success::Performed(result) => T::on_action_success(self, &result),
        }
    }
}
