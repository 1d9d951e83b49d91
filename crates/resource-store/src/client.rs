//! # Generic Client
//!
//! This module defines the generic client for communicating with stores.

use crate::entity::Resource;
use crate::error::StoreError;
use crate::message::{Navigate, Operation, Request, StoreMessage, Success};
use crate::state::CollectionState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## ResourceClient
///
/// The `ResourceClient<T>` is the *client* half of a store. It forwards requests over a
/// Tokio mpsc channel and can either await the outcome (via a oneshot channel) or fire and
/// forget. It also holds a `watch` receiver onto the store's published state.
///
/// * **Cloneable**: holds a sender and a watch receiver, so cloning is inexpensive.
/// * **Two ways to observe**: awaited methods return the outcome; `state()`/`subscribe()`
///   expose the collection as the reducer left it.
#[derive(Clone)]
pub struct ResourceClient<T: Resource> {
    sender: mpsc::Sender<StoreMessage<T>>,
    state: watch::Receiver<CollectionState<T>>,
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(
        sender: mpsc::Sender<StoreMessage<T>>,
        state: watch::Receiver<CollectionState<T>>,
    ) -> Self {
        Self { sender, state }
    }

    /// Snapshot of the current collection state.
    pub fn state(&self) -> CollectionState<T> {
        self.state.borrow().clone()
    }

    /// A receiver that is notified after every reducer step.
    pub fn subscribe(&self) -> watch::Receiver<CollectionState<T>> {
        self.state.clone()
    }

    /// Sends a request without waiting for its outcome.
    pub async fn dispatch(&self, request: Request<T>) -> Result<(), StoreError> {
        self.sender
            .send(StoreMessage {
                request,
                on_success: None,
                respond_to: None,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)
    }

    /// Sends a request and waits until it succeeds, fails or is superseded.
    pub async fn request(
        &self,
        request: Request<T>,
        on_success: Option<Navigate>,
    ) -> Result<Success<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreMessage {
                request,
                on_success,
                respond_to: Some(respond_to),
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn fetch(&self) -> Result<Vec<T>, StoreError> {
        match self.request(Request::Fetch, None).await? {
            Success::Fetched(listing) => Ok(listing.items),
            _ => Err(StoreError::UnexpectedOutcome(Operation::Fetch)),
        }
    }

    pub async fn add(
        &self,
        params: T::Create,
        on_success: Option<Navigate>,
    ) -> Result<T, StoreError> {
        match self.request(Request::Add(params), on_success).await? {
            Success::Added(item) => Ok(item),
            _ => Err(StoreError::UnexpectedOutcome(Operation::Add)),
        }
    }

    pub async fn edit(
        &self,
        id: T::Id,
        params: T::Update,
        on_success: Option<Navigate>,
    ) -> Result<T, StoreError> {
        match self.request(Request::Edit(id, params), on_success).await? {
            Success::Edited(item) => Ok(item),
            _ => Err(StoreError::UnexpectedOutcome(Operation::Edit)),
        }
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        match self.request(Request::Delete(id), None).await? {
            Success::Deleted(_) => Ok(()),
            _ => Err(StoreError::UnexpectedOutcome(Operation::Delete)),
        }
    }

    pub async fn get_by_id(&self, id: T::Id) -> Result<T, StoreError> {
        match self.request(Request::GetById(id), None).await? {
            Success::Loaded(item) => Ok(item),
            _ => Err(StoreError::UnexpectedOutcome(Operation::GetById)),
        }
    }

    pub async fn perform(&self, action: T::Action) -> Result<T::ActionResult, StoreError> {
        let operation = Operation::Action(T::action_kind(&action));
        match self.request(Request::Action(action), None).await? {
            Success::Performed(result) => Ok(result),
            _ => Err(StoreError::UnexpectedOutcome(operation)),
        }
    }
}
