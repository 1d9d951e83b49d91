//! Error types for the User and UserDocument stores.

use resource_store::StoreError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The remote call failed; the same message is recorded in the store's `error`.
    #[error("{0}")]
    RequestFailed(String),

    #[error("Request superseded")]
    Superseded,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::StoreCommunicationError(msg)
    }
}

impl From<StoreError> for UserError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Failed(message) => UserError::RequestFailed(message),
            StoreError::Superseded(_) => UserError::Superseded,
            other => UserError::StoreCommunicationError(other.to_string()),
        }
    }
}
