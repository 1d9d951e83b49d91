//! # Store Errors
//!
//! Errors returned to callers of [`ResourceClient`](crate::ResourceClient). Failures of the
//! remote call itself are *also* recorded in the collection state; the error returned
//! here is a convenience for callers that await the outcome.

use crate::message::Operation;

/// Errors that can occur while talking to a store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    /// A newer request of the same kind replaced this one before it completed.
    #[error("Superseded by a newer {0} request")]
    Superseded(Operation),
    /// The remote call failed; carries the same message stored in `error`.
    #[error("{0}")]
    Failed(String),
    #[error("Unexpected outcome for {0}")]
    UnexpectedOutcome(Operation),
}
