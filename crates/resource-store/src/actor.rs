//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the component that owns one collection's state
//! and runs its effects. It implements the "Server" side of the Actor Model: requests are
//! processed sequentially, so the collection has exactly one writer.

use crate::client::ResourceClient;
use crate::entity::Resource;
use crate::error::StoreError;
use crate::message::{Navigate, Operation, Request, Response, StoreAction, StoreMessage, Success};
use crate::state::CollectionState;
use crate::transport::{ApiRequest, Transport, TransportError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// The generic actor that synchronises a collection with a remote API.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state (published through a
/// `watch` channel) and the receiving ends of two channels:
///
/// - **requests** from [`ResourceClient`]s, bounded;
/// - **completions** from its own effect tasks, unbounded.
///
/// **Concurrency Model**:
/// Effects (HTTP calls) run on spawned tasks, so a slow call never blocks the loop. Their
/// results come back as messages and are folded into the state by the loop itself. The
/// state therefore needs no `Mutex`: only this task ever writes it.
///
/// ## Latest-wins
///
/// Every request is tagged with a sequence number from a monotonic counter. For each
/// [`Operation`] kind at most one request is in flight:
///
/// 1. A new request of the same kind aborts the previous effect task and answers the
///    previous caller with [`StoreError::Superseded`].
/// 2. A completion whose sequence number is not the latest for its kind is discarded.
///    This covers the window where the old task finished before it could be aborted.
///
/// Requests of *different* kinds run side by side and share `is_loading`.
///
/// # Usage Pattern
///
/// ```rust,ignore
/// // 1. Create
/// let (actor, client) = StoreActor::<Country>::new(32);
///
/// // 2. Wire & Run: the transport is injected at run time
/// tokio::spawn(actor.run(transport.clone()));
///
/// // 3. Use
/// let countries = client.fetch().await?;
/// assert!(!client.state().is_loading);
/// ```
///
/// # Operations
///
/// * **Request**: folds `Requested(op)`, builds the [`ApiRequest`] through the entity's
///   request builder, spawns the effect.
/// * **Completion (success)**: folds `Succeeded(payload)`, runs the navigation callback if
///   one was supplied, answers the caller.
/// * **Completion (failure)**: folds `Failed { message }`, answers the caller with
///   [`StoreError::Failed`]. Nothing is retried.
pub struct StoreActor<T: Resource> {
    receiver: mpsc::Receiver<StoreMessage<T>>,
    completions: mpsc::UnboundedReceiver<Completion<T>>,
    completion_tx: mpsc::UnboundedSender<Completion<T>>,
    state: watch::Sender<CollectionState<T>>,
    in_flight: HashMap<Operation, InFlight<T>>,
    next_seq: u64,
}

struct InFlight<T: Resource> {
    seq: u64,
    task: JoinHandle<()>,
    on_success: Option<Navigate>,
    respond_to: Option<Response<T>>,
}

struct Completion<T: Resource> {
    operation: Operation,
    seq: u64,
    outcome: Result<Success<T>, TransportError>,
}

impl<T: Resource> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_tx, completions) = mpsc::unbounded_channel();
        let (state, state_rx) = watch::channel(CollectionState::default());
        let actor = Self {
            receiver,
            completions,
            completion_tx,
            state,
            in_flight: HashMap::new(),
            next_seq: 1,
        };
        let client = ResourceClient::new(sender, state_rx);
        (actor, client)
    }

    /// Runs the store's event loop until every client has been dropped.
    ///
    /// # Transport Injection
    /// The `transport` is handed to every effect task. Injecting it here rather than in
    /// `new()` lets the lifecycle layer build all stores first and decide on the transport
    /// (HTTP or mock) afterwards.
    pub async fn run(mut self, transport: Arc<dyn Transport>) {
        // Extract just the type name (e.g., "Product" instead of "compliance_console::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(msg) => self.start(entity_type, msg, &transport),
                    None => break,
                },
                Some(done) = self.completions.recv() => self.finish(entity_type, done),
            }
        }

        for (_, flight) in self.in_flight.drain() {
            flight.task.abort();
        }
        info!(
            entity_type,
            size = self.state.borrow().items.len(),
            "Shutdown"
        );
    }

    fn start(
        &mut self,
        entity_type: &str,
        msg: StoreMessage<T>,
        transport: &Arc<dyn Transport>,
    ) {
        let StoreMessage {
            request,
            on_success,
            respond_to,
        } = msg;
        let operation = request.operation();
        let seq = self.next_seq;
        self.next_seq += 1;
        debug!(entity_type, %operation, seq, ?request, "Request");

        if let Some(previous) = self.in_flight.remove(&operation) {
            previous.task.abort();
            debug!(entity_type, %operation, seq = previous.seq, "Superseded");
            if let Some(tx) = previous.respond_to {
                let _ = tx.send(Err(StoreError::Superseded(operation)));
            }
        }

        self.apply(StoreAction::Requested(operation));

        let api_request = match build_request(&request) {
            Ok(api_request) => api_request,
            Err(e) => {
                self.fail(entity_type, operation, &e, respond_to);
                return;
            }
        };

        let completions = self.completion_tx.clone();
        let transport = Arc::clone(transport);
        let task = tokio::spawn(async move {
            let outcome = match transport.send(api_request).await {
                Ok(body) => decode_success(request, body),
                Err(e) => Err(e),
            };
            let _ = completions.send(Completion {
                operation,
                seq,
                outcome,
            });
        });

        self.in_flight.insert(
            operation,
            InFlight {
                seq,
                task,
                on_success,
                respond_to,
            },
        );
    }

    fn finish(&mut self, entity_type: &str, done: Completion<T>) {
        let Completion {
            operation,
            seq,
            outcome,
        } = done;

        let is_latest = self
            .in_flight
            .get(&operation)
            .is_some_and(|flight| flight.seq == seq);
        if !is_latest {
            debug!(entity_type, %operation, seq, "Discarded stale response");
            return;
        }
        let Some(flight) = self.in_flight.remove(&operation) else {
            return;
        };

        match outcome {
            Ok(success) => {
                let reply = flight.respond_to.map(|tx| (tx, success.clone()));
                self.apply(StoreAction::Succeeded(success));
                info!(
                    entity_type,
                    %operation,
                    seq,
                    size = self.state.borrow().items.len(),
                    "Succeeded"
                );
                if let Some(navigate) = flight.on_success {
                    navigate();
                }
                if let Some((tx, success)) = reply {
                    let _ = tx.send(Ok(success));
                }
            }
            Err(e) => self.fail(entity_type, operation, &e, flight.respond_to),
        }
    }

    fn fail(
        &mut self,
        entity_type: &str,
        operation: Operation,
        error: &TransportError,
        respond_to: Option<Response<T>>,
    ) {
        let message = error.failure_message();
        warn!(entity_type, %operation, error = %message, "Failed");
        self.apply(StoreAction::Failed {
            operation,
            message: message.clone(),
        });
        if let Some(tx) = respond_to {
            let _ = tx.send(Err(StoreError::Failed(message)));
        }
    }

    fn apply(&mut self, action: StoreAction<T>) {
        self.state.send_modify(|state| state.reduce(action));
    }
}

fn build_request<T: Resource>(request: &Request<T>) -> Result<ApiRequest, TransportError> {
    match request {
        Request::Fetch => Ok(T::fetch_request()),
        Request::Add(params) => T::add_request(params),
        Request::Edit(id, params) => T::edit_request(id, params),
        Request::Delete(id) => Ok(T::delete_request(id)),
        Request::GetById(id) => Ok(T::get_request(id)),
        Request::Action(action) => T::action_request(action),
    }
}

fn decode_success<T: Resource>(
    request: Request<T>,
    body: Value,
) -> Result<Success<T>, TransportError> {
    match request {
        Request::Fetch => T::decode_listing(body).map(Success::Fetched),
        Request::Add(_) => T::decode_item(body).map(Success::Added),
        Request::Edit(..) => T::decode_item(body).map(Success::Edited),
        Request::Delete(id) => Ok(Success::Deleted(id)),
        Request::GetById(_) => T::decode_item(body).map(Success::Loaded),
        Request::Action(action) => T::decode_action(action, body).map(Success::Performed),
    }
}
