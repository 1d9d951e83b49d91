//! # Catalog Stores
//!
//! Reference data the product workflow depends on: countries, HSN codes, product
//! categories and product document types. All four are plain CRUD collections; their
//! [`Resource`](resource_store::Resource) implementations only differ in paths, payloads
//! and listing shapes.
//!
//! HSN code and category listings may arrive wrapped together with the selectable
//! document types (`{"hsnCodes": [...], "documentTypes": [...]}`). Those land in the
//! collection's `extra`.

pub mod category;
pub mod country;
pub mod document_type;
pub mod error;
pub mod hsn_code;

pub use error::*;

use crate::clients::{CategoryClient, CountryClient, DocumentTypeClient, HsnCodeClient};
use crate::model::{Country, HsnCode, HsnDocumentType, ProductCategory, ProductDocumentType};
use resource_store::{Listing, Resource, StoreActor, TransportError};
use serde::Deserialize;
use serde_json::Value;

/// Action type of collections without custom actions. It has no values.
#[derive(Debug, Clone, Copy)]
pub enum NoAction {}

/// Decodes a listing that is either a bare array or `{<key>: [...], "documentTypes": [...]}`.
pub(crate) fn decode_with_document_types<T>(
    body: Value,
    key: &str,
) -> Result<Listing<T>, TransportError>
where
    T: Resource<Extra = Vec<HsnDocumentType>>,
{
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Wrapped {
        #[serde(default)]
        document_types: Vec<HsnDocumentType>,
    }

    match body {
        Value::Array(_) => serde_json::from_value(body)
            .map(Listing::new)
            .map_err(TransportError::decode),
        Value::Object(mut fields) => {
            let items = fields
                .remove(key)
                .ok_or_else(|| TransportError::Decode(format!("missing field `{key}`")))?;
            let items: Vec<T> = serde_json::from_value(items).map_err(TransportError::decode)?;
            let wrapped: Wrapped =
                serde_json::from_value(Value::Object(fields)).map_err(TransportError::decode)?;
            Ok(Listing::new(items).with_extra(wrapped.document_types))
        }
        other => Err(TransportError::Decode(format!(
            "expected a list or an object, got {other}"
        ))),
    }
}

/// Creates a new Country store and its client.
pub fn countries() -> (StoreActor<Country>, CountryClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, CountryClient::new(generic_client))
}

/// Creates a new HSN code store and its client.
pub fn hsn_codes() -> (StoreActor<HsnCode>, HsnCodeClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, HsnCodeClient::new(generic_client))
}

/// Creates a new product category store and its client.
pub fn categories() -> (StoreActor<ProductCategory>, CategoryClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, CategoryClient::new(generic_client))
}

/// Creates a new product document type store and its client.
pub fn document_types() -> (StoreActor<ProductDocumentType>, DocumentTypeClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, DocumentTypeClient::new(generic_client))
}
