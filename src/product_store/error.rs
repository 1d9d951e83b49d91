//! Error types for the Product store.

use crate::workflow::WorkflowError;
use resource_store::StoreError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The remote call failed; the same message is recorded in the store's `error`.
    #[error("{0}")]
    RequestFailed(String),

    /// The requested transition is not open to this role at the product's status.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// A newer request of the same kind replaced this one.
    #[error("Request superseded")]
    Superseded,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::StoreCommunicationError(msg)
    }
}

impl From<StoreError> for ProductError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Failed(message) => ProductError::RequestFailed(message),
            StoreError::Superseded(_) => ProductError::Superseded,
            other => ProductError::StoreCommunicationError(other.to_string()),
        }
    }
}
