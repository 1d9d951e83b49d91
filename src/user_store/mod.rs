//! User-specific resource logic: registered users and the documents they upload.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{UserClient, UserDocumentClient};
use crate::model::{User, UserDocument};
use resource_store::StoreActor;

/// Creates a new User store and its client.
pub fn users() -> (StoreActor<User>, UserClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, UserClient::new(generic_client))
}

/// Creates a new UserDocument store and its client.
pub fn user_documents() -> (StoreActor<UserDocument>, UserDocumentClient) {
    let (actor, generic_client) = StoreActor::new(32);
    (actor, UserDocumentClient::new(generic_client))
}
