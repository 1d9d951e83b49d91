//! Resource trait implementation for the Product domain type.
//!
//! This module contains the [`Resource`] trait implementation
//! that enables [`Product`] to be managed by the generic [`resource_store::StoreActor`].
//!
//! The product API deviates from the common REST shape in two places: edits go to
//! `PUT /products` with the id inside the body, and status updates go to
//! `PATCH /products`. Both are expressed here; the store itself stays generic.

use super::actions::{ProductAction, ProductActionResult};
use crate::model::{
    patch_import_status, ImportStatusDetail, Product, ProductForm, ProductId, StatusChange,
};
use crate::routes::api;
use resource_store::{ApiRequest, CollectionState, Resource, TransportError};
use serde_json::Value;
use tracing::debug;

impl Resource for Product {
    type Id = ProductId;
    type Create = ProductForm;
    type Update = ProductForm;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    /// Detail of the last import-status page fetched.
    type Extra = Option<ImportStatusDetail>;

    const COLLECTION: &'static str = api::PRODUCTS;

    fn id(&self) -> ProductId {
        self.product_id
    }

    /// `PUT /products`, with `productId` taken from the edited id.
    fn edit_request(id: &ProductId, params: &ProductForm) -> Result<ApiRequest, TransportError> {
        let form = ProductForm {
            product_id: Some(*id),
            ..params.clone()
        };
        ApiRequest::put(Self::COLLECTION).json(&form)
    }

    fn action_request(action: &ProductAction) -> Result<ApiRequest, TransportError> {
        match action {
            ProductAction::UpdateStatus(change) => ApiRequest::patch(Self::COLLECTION).json(change),
            ProductAction::FetchImportStatus {
                product_id,
                country_id,
            } => Ok(ApiRequest::get(api::import_status(*product_id, *country_id))),
        }
    }

    fn action_kind(action: &ProductAction) -> &'static str {
        match action {
            ProductAction::UpdateStatus(_) => "update_status",
            ProductAction::FetchImportStatus { .. } => "fetch_import_status",
        }
    }

    fn decode_action(
        action: ProductAction,
        body: Value,
    ) -> Result<ProductActionResult, TransportError> {
        match action {
            ProductAction::UpdateStatus(change) => Ok(ProductActionResult::StatusUpdated(change)),
            ProductAction::FetchImportStatus { .. } => serde_json::from_value(body)
                .map(ProductActionResult::ImportStatus)
                .map_err(TransportError::decode),
        }
    }

    /// Applies a status change in place, or stores a fetched import detail.
    ///
    /// # State Changes
    /// - `StatusUpdated` without a country: `status` and `comments` of the matching item
    ///   (and of `selected`, when it is the same product).
    /// - `StatusUpdated` with a country: that country's entry in `import_status`, inserted
    ///   if the product had none for it. The product's own status is untouched.
    /// - `ImportStatus`: replaces `extra`.
    fn on_action_success(state: &mut CollectionState<Self>, result: &ProductActionResult) {
        match result {
            ProductActionResult::StatusUpdated(change) => {
                if let Some(product) = state.find_mut(&change.product_id) {
                    apply_status_change(product, change);
                }
                if let Some(selected) = state.selected.as_mut() {
                    if selected.product_id == change.product_id {
                        apply_status_change(selected, change);
                    }
                }
            }
            ProductActionResult::ImportStatus(detail) => {
                state.extra = Some(detail.clone());
            }
        }
    }
}

fn apply_status_change(product: &mut Product, change: &StatusChange) {
    match change.country_id {
        None => {
            product.status = change.status;
            product.comments = Some(change.comments.clone());
        }
        Some(country_id) => {
            debug!(product_id = product.product_id, country_id, status = %change.status, "Patched import entry");
            product.import_status = Some(patch_import_status(
                product.import_status.as_deref(),
                country_id,
                change.status,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductStatus, Role};
    use resource_store::{Method, StoreAction, Success};
    use serde_json::json;

    fn product(id: ProductId, status: ProductStatus) -> Product {
        serde_json::from_value(json!({
            "product_id": id,
            "product_displayname": format!("Product {id}"),
            "status": status,
        }))
        .unwrap()
    }

    fn status_change(id: ProductId, status: ProductStatus, country: Option<u64>) -> StatusChange {
        StatusChange {
            product_id: id,
            status,
            comments: "ok".into(),
            comment_for: None,
            country_id: country,
        }
    }

    fn loaded(items: Vec<Product>) -> CollectionState<Product> {
        CollectionState {
            items,
            ..Default::default()
        }
    }

    #[test]
    fn test_edit_is_put_with_product_id_in_body() {
        let form = ProductForm {
            product_display_name: "Shirt".into(),
            ..Default::default()
        };

        let request = Product::edit_request(&12, &form).unwrap();

        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/products");
        let body = request.body.unwrap();
        assert_eq!(body["productId"], json!(12));
        assert_eq!(body["productDisplayName"], json!("Shirt"));
    }

    #[test]
    fn test_action_endpoints() {
        let update =
            Product::action_request(&ProductAction::UpdateStatus(status_change(
                3,
                ProductStatus::Verified,
                None,
            )))
            .unwrap();
        let detail = Product::action_request(&ProductAction::FetchImportStatus {
            product_id: 3,
            country_id: 9,
        })
        .unwrap();

        assert_eq!(update.to_string(), "PATCH /products");
        assert_eq!(detail.to_string(), "GET /products/3/import-status/9");
    }

    #[test]
    fn test_status_update_patches_only_matching_product() {
        let mut state = loaded(vec![
            product(1, ProductStatus::UnderVerification),
            product(2, ProductStatus::UnderVerification),
        ]);

        state.reduce(StoreAction::Succeeded(Success::Performed(
            ProductActionResult::StatusUpdated(status_change(2, ProductStatus::Verified, None)),
        )));

        assert_eq!(state.items[0].status, ProductStatus::UnderVerification);
        assert_eq!(state.items[1].status, ProductStatus::Verified);
        assert_eq!(state.items[1].comments.as_deref(), Some("ok"));
        assert_eq!(state.items[0].product_displayname, "Product 1");
    }

    #[test]
    fn test_status_update_for_unknown_product_changes_nothing() {
        let mut state = loaded(vec![product(1, ProductStatus::Pending)]);
        let before = state.items.clone();

        state.reduce(StoreAction::Succeeded(Success::Performed(
            ProductActionResult::StatusUpdated(status_change(7, ProductStatus::Verified, None)),
        )));

        assert_eq!(state.items, before);
    }

    #[test]
    fn test_country_scoped_update_patches_import_entry() {
        let mut with_import = product(5, ProductStatus::ExportApproved);
        with_import.import_status = Some(
            r#"[{"country_id":4,"country_name":"Kenya","import_status":"UNDER_IMPORT_APPROVAL"}]"#
                .into(),
        );
        let mut state = loaded(vec![with_import.clone()]);
        state.selected = Some(with_import);

        state.reduce(StoreAction::Succeeded(Success::Performed(
            ProductActionResult::StatusUpdated(StatusChange {
                comment_for: Some(Role::ImportOfficer),
                ..status_change(5, ProductStatus::ImportInfoNeeded, Some(4))
            }),
        )));
        state.reduce(StoreAction::Succeeded(Success::Performed(
            ProductActionResult::StatusUpdated(status_change(
                5,
                ProductStatus::UnderImportApproval,
                Some(8),
            )),
        )));

        let entries = state.items[0].import_statuses();
        assert_eq!(state.items[0].status, ProductStatus::ExportApproved);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].country_name, "Kenya");
        assert_eq!(entries[0].import_status, ProductStatus::ImportInfoNeeded);
        assert_eq!(entries[1].country_id, 8);
        assert_eq!(entries[1].import_status, ProductStatus::UnderImportApproval);
        assert_eq!(
            state.selected.map(|p| p.import_statuses()),
            Some(entries)
        );
    }

    #[test]
    fn test_country_scoped_update_keeps_unmodelled_entry_data() {
        let mut with_import = product(5, ProductStatus::ExportApproved);
        with_import.import_status = Some(
            r#"[{"country_id":7,"country_name":"Oman","import_status":"IMPORT_PENDING","notes":[1]},{"country_id":4,"country_name":"Kenya","import_status":"UNDER_IMPORT_APPROVAL"}]"#
                .into(),
        );
        let mut state = loaded(vec![with_import]);

        state.reduce(StoreAction::Succeeded(Success::Performed(
            ProductActionResult::StatusUpdated(status_change(
                5,
                ProductStatus::ImportApproved,
                Some(4),
            )),
        )));

        let raw: Vec<Value> =
            serde_json::from_str(state.items[0].import_status.as_deref().unwrap()).unwrap();
        assert_eq!(raw[0]["import_status"], json!("IMPORT_PENDING"));
        assert_eq!(raw[0]["notes"], json!([1]));
        assert_eq!(raw[1]["import_status"], json!("IMPORT_APPROVED"));
        assert_eq!(raw[1]["country_name"], json!("Kenya"));
    }

    #[test]
    fn test_import_detail_lands_in_extra() {
        let mut state = loaded(vec![]);
        let detail: ImportStatusDetail = serde_json::from_value(json!({
            "product_id": 5,
            "product_displayname": "Shirt",
            "origin_hsn_code": "6205",
            "country_id": 4,
            "country_name": "Kenya",
            "import_status": "UNDER_IMPORT_APPROVAL"
        }))
        .unwrap();

        state.reduce(StoreAction::Succeeded(Success::Performed(
            ProductActionResult::ImportStatus(detail.clone()),
        )));

        assert_eq!(state.extra, Some(detail));
        assert!(!state.is_loading);
    }
}
