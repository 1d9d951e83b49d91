//! # Compliance Console
//!
//! Client-side state and workflow for a product export/import compliance console:
//! manufacturers register products, an admin verifies them, export and import officers
//! approve them per destination country.
//!
//! ## Design
//!
//! Every remote collection (products, countries, HSN codes, categories, document types,
//! users, user documents) is held by its own store, a
//! [`StoreActor`](resource_store::StoreActor) from the `resource-store` crate. A store
//! owns its [`CollectionState`](resource_store::CollectionState), runs each request as
//! an effect over a shared [`Transport`](resource_store::Transport), and publishes every
//! change. A newer request of the same kind supersedes one still in flight.
//!
//! The status workflow is pure and lives apart from the stores: [`workflow`] decides
//! what a role may do, [`ProductClient::transition`](clients::ProductClient::transition)
//! checks that decision before anything is sent.
//!
//! ## Module Tour
//!
//! ### 1. Data ([`model`], [`routes`])
//! Wire types for every collection, and the API and console paths.
//!
//! ### 2. Stores ([`product_store`], [`catalog_store`], [`user_store`])
//! [`Resource`](resource_store::Resource) implementations: endpoints, decoding and the
//! state hooks of custom actions.
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific wrappers around the generic `ResourceClient`.
//!
//! ### 4. Rules ([`workflow`])
//! The role × status transition table.
//!
//! ### 5. Runtime ([`config`], [`session`], [`http`], [`lifecycle`])
//! Configuration from the environment, the signed-in session, the `reqwest` transport
//! and [`ConsoleSystem`](lifecycle::ConsoleSystem), which starts and stops the stores.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog_store;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_store;
pub mod routes;
pub mod session;
pub mod user_store;
pub mod workflow;
