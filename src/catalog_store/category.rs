use super::{decode_with_document_types, NoAction};
use crate::model::{CategoryForm, CategoryId, HsnDocumentType, ProductCategory};
use crate::routes::api;
use resource_store::{ApiRequest, Listing, Resource, TransportError};
use serde_json::Value;

impl Resource for ProductCategory {
    type Id = CategoryId;
    type Create = CategoryForm;
    type Update = CategoryForm;
    type Action = NoAction;
    type ActionResult = ();
    type Extra = Vec<HsnDocumentType>;

    const COLLECTION: &'static str = api::CATEGORIES;

    fn id(&self) -> CategoryId {
        self.category_id
    }

    fn decode_listing(body: Value) -> Result<Listing<Self>, TransportError> {
        decode_with_document_types(body, "categories")
    }

    fn action_request(action: &NoAction) -> Result<ApiRequest, TransportError> {
        match *action {}
    }

    fn action_kind(action: &NoAction) -> &'static str {
        match *action {}
    }

    fn decode_action(action: NoAction, _body: Value) -> Result<(), TransportError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_both_listing_shapes_decode() {
        let bare = ProductCategory::decode_listing(json!([
            {"category_id": 1, "category_name": "Apparel", "category_description": ""}
        ]))
        .unwrap();
        let wrapped = ProductCategory::decode_listing(json!({
            "categories": [{"category_id": 1, "category_name": "Apparel"}],
            "documentTypes": [{"document_type_id": 9, "document_type_name": "Certificate"}]
        }))
        .unwrap();

        assert_eq!(bare.items, wrapped.items);
        assert_eq!(wrapped.extra.map(|d| d.len()), Some(1));
    }
}
