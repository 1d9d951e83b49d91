//! Custom actions for the Product store.
//!
//! Beyond CRUD, a product moves through the compliance workflow by status updates and
//! exposes a per-country import detail page. Both are modelled as actions so that they
//! share the store's latest-wins bookkeeping and error handling.
//!
//! See the [`Resource`](resource_store::Resource) implementation on
//! [`Product`](crate::model::Product) for how each action maps to an API call.

use crate::model::{CountryId, ImportStatusDetail, ProductId, StatusChange};

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// `PATCH /products`. With a `country_id` the change applies to that country's
    /// import entry rather than to the product's own status.
    UpdateStatus(StatusChange),
    /// `GET /products/{product_id}/import-status/{country_id}`.
    FetchImportStatus {
        product_id: ProductId,
        country_id: CountryId,
    },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Echo of the applied change; the endpoint answers with a bare acknowledgement.
    StatusUpdated(StatusChange),
    ImportStatus(ImportStatusDetail),
}
