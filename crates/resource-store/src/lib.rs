//! # Resource Store
//!
//! This crate provides the building blocks for keeping typed, remotely-backed collections
//! in sync with an HTTP API. It applies the **Actor Model** to the classic
//! request/success/failure state container: each collection is owned by one actor, every
//! change goes through one reducer, and every network call is an effect that reports back
//! as a message.
//!
//! ## Why an actor per collection?
//!
//! - Isolated state (no shared memory, no locks): one writer per collection.
//! - Message-passing concurrency: slow calls never block unrelated collections.
//! - Sequential processing makes "latest-wins" easy to get right: the actor is the single
//!   place that knows which request of each kind is current.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`Resource`]): identity, endpoints and decoding for one entity.
//! 2. **State Layer** ([`CollectionState`], [`StoreAction`]): a pure reducer.
//! 3. **Runtime Layer** ([`StoreActor`]): request loop, effects, sequence numbers.
//! 4. **Interface Layer** ([`ResourceClient`]): awaited requests, fire-and-forget
//!    dispatch, state snapshots and subscriptions.
//!
//! The network itself sits behind the [`Transport`] trait and is injected at `run()` time.
//!
//! ## Request Lifecycle
//!
//! ```text
//! client.add(params) ──► StoreActor ── Requested(Add) ──► reducer (is_loading = true)
//!                            │
//!                            └─ spawn effect ── Transport::send ──┐
//!                                                                  │
//!            reducer ◄── Succeeded(Added(item)) / Failed{message} ◄┘
//!               │
//!               └─► watch channel ──► subscribers, client.state()
//! ```
//!
//! ## Implementing a Resource
//!
//! ```rust
//! use resource_store::{ApiRequest, Resource, TransportError};
//! use serde::{Deserialize, Serialize};
//! use serde_json::Value;
//!
//! #[derive(Debug, Clone, Deserialize)]
//! struct Country {
//!     country_id: u64,
//!     country_name: String,
//! }
//!
//! #[derive(Debug, Serialize)]
//! struct CountryForm {
//!     country_name: String,
//! }
//!
//! #[derive(Debug)]
//! enum NoAction {}
//!
//! impl Resource for Country {
//!     type Id = u64;
//!     type Create = CountryForm;
//!     type Update = CountryForm;
//!     type Action = NoAction;
//!     type ActionResult = ();
//!     type Extra = ();
//!
//!     const COLLECTION: &'static str = "/countries";
//!
//!     fn id(&self) -> u64 {
//!         self.country_id
//!     }
//!
//!     fn action_request(action: &NoAction) -> Result<ApiRequest, TransportError> {
//!         match *action {}
//!     }
//!
//!     fn action_kind(action: &NoAction) -> &'static str {
//!         match *action {}
//!     }
//!
//!     fn decode_action(action: NoAction, _body: Value) -> Result<(), TransportError> {
//!         match action {}
//!     }
//! }
//!
//! assert_eq!(Country::get_request(&7).to_string(), "GET /countries/7");
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for [`MockTransport`](mock::MockTransport) and the client
//! helpers.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod transport;

pub use actor::StoreActor;
pub use client::ResourceClient;
pub use entity::Resource;
pub use error::StoreError;
pub use message::{Navigate, Operation, Request, Response, StoreAction, StoreMessage, Success};
pub use state::{CollectionState, Listing};
pub use transport::{ApiRequest, Method, Transport, TransportError, UNKNOWN_ERROR};
