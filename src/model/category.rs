use super::{flexible_id, CategoryId, HsnDocumentType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductCategory {
    #[serde(deserialize_with = "flexible_id")]
    pub category_id: CategoryId,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub category_description: String,
    /// Document types a product in this category must carry, when the API includes them.
    #[serde(default)]
    pub documents: Vec<HsnDocumentType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    pub category_name: String,
    pub category_description: String,
}
