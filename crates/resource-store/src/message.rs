//! # Store Messages
//!
//! This module defines the closed set of messages that flow through a store:
//!
//! - [`Request`]: what a caller asks for (one variant per operation).
//! - [`StoreAction`]: what the reducer folds (`Requested | Succeeded | Failed`).
//! - [`StoreMessage`]: the envelope sent from [`ResourceClient`](crate::ResourceClient)
//!   to [`StoreActor`](crate::StoreActor).
//!
//! Every operation has an [`Operation`] kind. Requests of the same kind supersede
//! each other; requests of different kinds run side by side.

use crate::entity::Resource;
use crate::error::StoreError;
use crate::state::Listing;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<Success<T>, StoreError>>;

/// Callback run once after a successful request has been applied (e.g. redirect to a list page).
pub type Navigate = Box<dyn FnOnce() + Send + 'static>;

/// Operation kind. The unit of "latest-wins" supersession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fetch,
    Add,
    Edit,
    Delete,
    GetById,
    /// A custom action, named by [`Resource::action_kind`].
    Action(&'static str),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Fetch => f.write_str("fetch"),
            Operation::Add => f.write_str("add"),
            Operation::Edit => f.write_str("edit"),
            Operation::Delete => f.write_str("delete"),
            Operation::GetById => f.write_str("get_by_id"),
            Operation::Action(name) => f.write_str(name),
        }
    }
}

/// A caller's request, typed by the entity's associated payloads.
#[derive(Debug)]
pub enum Request<T: Resource> {
    Fetch,
    Add(T::Create),
    Edit(T::Id, T::Update),
    Delete(T::Id),
    GetById(T::Id),
    Action(T::Action),
}

impl<T: Resource> Request<T> {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Fetch => Operation::Fetch,
            Request::Add(_) => Operation::Add,
            Request::Edit(..) => Operation::Edit,
            Request::Delete(_) => Operation::Delete,
            Request::GetById(_) => Operation::GetById,
            Request::Action(action) => Operation::Action(T::action_kind(action)),
        }
    }
}

/// Payload of a successful operation.
#[derive(Debug, Clone)]
pub enum Success<T: Resource> {
    Fetched(Listing<T>),
    Added(T),
    Edited(T),
    /// Carries the *requested* id; delete endpoints return no body.
    Deleted(T::Id),
    Loaded(T),
    Performed(T::ActionResult),
}

/// The actions folded by [`CollectionState::reduce`](crate::CollectionState::reduce).
#[derive(Debug, Clone)]
pub enum StoreAction<T: Resource> {
    Requested(Operation),
    Succeeded(Success<T>),
    Failed { operation: Operation, message: String },
}

/// Envelope sent from the client to the store.
///
/// `respond_to` is optional: fire-and-forget dispatches only observe the outcome
/// through the published state.
pub struct StoreMessage<T: Resource> {
    pub request: Request<T>,
    pub on_success: Option<Navigate>,
    pub respond_to: Option<Response<T>>,
}

impl<T: Resource> fmt::Debug for StoreMessage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreMessage")
            .field("request", &self.request)
            .field("on_success", &self.on_success.is_some())
            .field("respond_to", &self.respond_to.is_some())
            .finish()
    }
}
