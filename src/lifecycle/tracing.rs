//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: `Store started` and `Shutdown` with the final collection size
//! - **Operations**: one `Request` debug line per call, then `Succeeded` or `Failed`
//!   with the operation and the message recorded in the store's `error`
//! - **Supersession**: `Superseded` when a newer call of the same kind replaces one in
//!   flight, and `Discarded stale response` when its response arrives anyway
//! - **Transport**: each HTTP call at debug level, failures to reach the API at warn
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Request payloads and HTTP calls
//! RUST_LOG=debug cargo run
//!
//! # Only the store engine
//! RUST_LOG=resource_store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a product listing followed by a status change reads:
//!
//! ```text
//! INFO Store started entity_type="Product"
//! INFO Succeeded entity_type="Product" operation=fetch seq=1 size=12
//! INFO transition: Transition planned status=UNDER_EXPORT_APPROVAL product_id=42
//! INFO Succeeded entity_type="Product" operation=update_status seq=2 size=12
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the store
        .compact()
        .init();
}
