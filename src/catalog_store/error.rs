//! Error types shared by the catalog stores.

use resource_store::StoreError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The remote call failed; the same message is recorded in the store's `error`.
    #[error("{0}")]
    RequestFailed(String),

    #[error("Request superseded")]
    Superseded,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::StoreCommunicationError(msg)
    }
}

impl From<StoreError> for CatalogError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Failed(message) => CatalogError::RequestFailed(message),
            StoreError::Superseded(_) => CatalogError::Superseded,
            other => CatalogError::StoreCommunicationError(other.to_string()),
        }
    }
}
