//! # Resource Trait
//!
//! The `Resource` trait is the contract every remotely-synchronised collection
//! (Product, Country, HsnCode, …) implements to be managed by the generic
//! [`StoreActor`](crate::StoreActor).
//!
//! # Architecture Note
//! The store's reducer and effect loop are written *once*. Everything that differs
//! between entities is pushed into this trait:
//!
//! - **Identity**: the `Id` type and how to read it off an item.
//! - **Endpoints**: which [`ApiRequest`] each operation becomes. The provided methods
//!   follow the common REST shape (`GET /c`, `GET /c/{id}`, `POST /c`, `PATCH /c/{id}`,
//!   `DELETE /c/{id}`); entities override only where their API deviates.
//! - **Decoding**: how a response payload becomes items. Defaults deserialize directly.
//! - **Custom actions**: operations outside CRUD (e.g. a product status transition),
//!   with their own request builder, decoder and state hook.
//!
//! Associated types keep the payloads apart: a `CountryCreate` can never be sent to the
//! product store.

use crate::state::{CollectionState, Listing};
use crate::transport::{ApiRequest, TransportError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any remote collection item must implement to be managed by `StoreActor`.
pub trait Resource: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Primary key, unique within the collection.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// Body sent by `add`.
    type Create: Serialize + Send + Sync + Debug + 'static;

    /// Body sent by `edit`.
    type Update: Serialize + Send + Sync + Debug + 'static;

    /// Entity-specific operations beyond CRUD. Use an empty enum when there are none.
    type Action: Send + Sync + Debug + 'static;

    /// Decoded outcome of a custom action.
    type ActionResult: Clone + Send + Sync + Debug + 'static;

    /// Side data kept next to `items` (e.g. selectable document types). Use `()` when unused.
    type Extra: Clone + Default + Send + Sync + Debug + 'static;

    /// Collection path, e.g. `/products`.
    const COLLECTION: &'static str;

    /// Reads the primary key of an item.
    fn id(&self) -> Self::Id;

    fn member_path(id: &Self::Id) -> String {
        format!("{}/{}", Self::COLLECTION, id)
    }

    // --- Request builders ---

    fn fetch_request() -> ApiRequest {
        ApiRequest::get(Self::COLLECTION)
    }

    fn get_request(id: &Self::Id) -> ApiRequest {
        ApiRequest::get(Self::member_path(id))
    }

    fn add_request(params: &Self::Create) -> Result<ApiRequest, TransportError> {
        ApiRequest::post(Self::COLLECTION).json(params)
    }

    fn edit_request(id: &Self::Id, params: &Self::Update) -> Result<ApiRequest, TransportError> {
        ApiRequest::patch(Self::member_path(id)).json(params)
    }

    fn delete_request(id: &Self::Id) -> ApiRequest {
        ApiRequest::delete(Self::member_path(id))
    }

    /// Builds the request for a custom action.
    fn action_request(action: &Self::Action) -> Result<ApiRequest, TransportError>;

    /// Stable name of an action variant. Actions with the same name supersede each other.
    fn action_kind(action: &Self::Action) -> &'static str;

    // --- Response decoders ---

    fn decode_listing(body: Value) -> Result<Listing<Self>, TransportError> {
        serde_json::from_value(body)
            .map(Listing::new)
            .map_err(TransportError::decode)
    }

    fn decode_item(body: Value) -> Result<Self, TransportError> {
        serde_json::from_value(body).map_err(TransportError::decode)
    }

    /// Decodes a custom action's response. The action itself is handed back so that
    /// endpoints without a response body can echo the request.
    fn decode_action(
        action: Self::Action,
        body: Value,
    ) -> Result<Self::ActionResult, TransportError>;

    // --- State hook ---

    /// Applies a successful custom action to the collection. Runs inside the reducer.
    fn on_action_success(_state: &mut CollectionState<Self>, _result: &Self::ActionResult) {}
}
