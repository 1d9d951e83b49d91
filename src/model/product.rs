use super::{
    flexible_id, flexible_opt_id, parse_import_status, CategoryId, CountryId, ImportStatusEntry,
    Note, ProductId, ProductStatus,
};
use serde::{Deserialize, Serialize};

/// A product as listed by `GET /products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "flexible_id")]
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub product_displayname: String,
    #[serde(default)]
    pub customer_product_description: String,
    #[serde(default)]
    pub origin_hsn_code: String,
    #[serde(default)]
    pub product_feature: String,
    /// JSON-encoded list of `{FieldName, FieldValue}` pairs.
    #[serde(default)]
    pub product_custom_fields: Option<String>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub country_id: Option<CountryId>,
    /// A record without a status offers no transitions, so it reads as `Unknown`.
    #[serde(default = "unknown_status")]
    pub status: ProductStatus,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub notes: Option<Vec<Note>>,
    #[serde(default)]
    pub product_documents: Option<Vec<ProductDocument>>,
    /// Per-country progress, JSON-encoded. See [`Product::import_statuses`].
    #[serde(default)]
    pub import_status: Option<String>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub audit_timestamp: Option<String>,
}

fn unknown_status() -> ProductStatus {
    ProductStatus::Unknown
}

impl Product {
    /// Parsed per-country import entries. Missing or malformed data reads as none.
    pub fn import_statuses(&self) -> Vec<ImportStatusEntry> {
        self.import_status
            .as_deref()
            .map(parse_import_status)
            .unwrap_or_default()
    }

    /// Custom fields decoded from `product_custom_fields`; malformed data reads as none.
    pub fn custom_fields(&self) -> Vec<CustomField> {
        self.product_custom_fields
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }
}

/// A document attached to a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDocument {
    #[serde(deserialize_with = "flexible_id")]
    pub document_id: u64,
    #[serde(default)]
    pub document_name: String,
    #[serde(default)]
    pub filetype: String,
    #[serde(default)]
    pub contentpath: String,
    #[serde(default)]
    pub audit_timestamp: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomField {
    pub field_name: String,
    pub field_value: String,
}

/// A document uploaded with a product form. `document_data` is base64.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload {
    pub document_type: String,
    pub document_name: String,
    pub document_data: String,
}

/// Body of `POST /products` and `PUT /products`.
///
/// `product_id` stays `None` when adding; the product store fills it in on edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub product_display_name: String,
    pub origin_hsn_code: String,
    pub product_category_id: Option<CategoryId>,
    pub customer_product_description: String,
    pub product_feature: String,
    pub product_custom_fields: Vec<CustomField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_documents: Vec<DocumentUpload>,
}

/// Body of `PATCH /products`, moving a product (or one of its import entries) to a new status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub product_id: ProductId,
    pub status: ProductStatus,
    pub comments: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_for: Option<super::Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<CountryId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use serde_json::json;

    #[test]
    fn test_product_reads_sparse_record() {
        let product: Product = serde_json::from_value(json!({
            "product_id": "12",
            "product_displayname": "Cotton shirt",
            "status": "VERIFIED",
            "country_id": null,
            "import_status": "[{\"country_id\":3,\"country_name\":\"Oman\",\"import_status\":\"UNDER_IMPORT_APPROVAL\"}]"
        }))
        .unwrap();

        assert_eq!(product.product_id, 12);
        assert_eq!(product.status, ProductStatus::Verified);
        assert_eq!(product.country_id, None);
        assert_eq!(product.import_statuses()[0].country_name, "Oman");
    }

    #[test]
    fn test_missing_status_offers_no_actions() {
        let product: Product = serde_json::from_value(json!({
            "product_id": 3,
            "product_displayname": "Cotton shirt"
        }))
        .unwrap();

        assert_eq!(product.status, ProductStatus::Unknown);
        for role in Role::ALL {
            assert!(crate::workflow::compute_actions(role, product.status, &[]).is_empty());
        }
    }

    #[test]
    fn test_custom_fields_decode_from_string() {
        let product: Product = serde_json::from_value(json!({
            "product_id": 1,
            "product_custom_fields": "[{\"FieldName\":\"Color\",\"FieldValue\":\"Red\"}]"
        }))
        .unwrap();

        assert_eq!(
            product.custom_fields(),
            vec![CustomField {
                field_name: "Color".into(),
                field_value: "Red".into()
            }]
        );
    }

    #[test]
    fn test_form_serializes_camel_case() {
        let form = ProductForm {
            product_display_name: "Shirt".into(),
            origin_hsn_code: "6205".into(),
            product_category_id: Some(2),
            ..Default::default()
        };

        let body = serde_json::to_value(&form).unwrap();

        assert_eq!(body["productDisplayName"], json!("Shirt"));
        assert_eq!(body["originHsnCode"], json!("6205"));
        assert_eq!(body["productCategoryId"], json!(2));
        assert!(body.get("productId").is_none());
        assert!(body.get("productDocuments").is_none());
    }

    #[test]
    fn test_status_change_omits_absent_fields() {
        let change = StatusChange {
            product_id: 4,
            status: ProductStatus::InfoNeeded,
            comments: "Missing label".into(),
            comment_for: Some(Role::Manufacturer),
            country_id: None,
        };

        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({
                "productId": 4,
                "status": "INFO_NEEDED",
                "comments": "Missing label",
                "commentFor": "MANUFACTURER"
            })
        );
    }
}
