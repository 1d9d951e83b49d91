//! Product-specific resource logic, including status transitions and import-status detail.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_store::StoreActor;

/// Creates a new Product store and its client.
pub fn new() -> (StoreActor<Product>, ProductClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
