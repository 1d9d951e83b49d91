//! Type-safe wrappers around [`ResourceClient`](resource_store::ResourceClient).

pub mod catalog_client;
pub mod entity_client;
pub mod product_client;
pub mod user_client;

pub use catalog_client::*;
pub use entity_client::*;
pub use product_client::*;
pub use user_client::*;
