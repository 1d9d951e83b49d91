use super::{flexible_id, flexible_opt_id, CategoryId, DocumentTypeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDocumentType {
    #[serde(deserialize_with = "flexible_id")]
    pub document_type_id: DocumentTypeId,
    #[serde(default)]
    pub document_type_name: String,
    #[serde(default)]
    pub document_type_description: String,
    #[serde(default)]
    pub document_type_format: String,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub mandatory: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeForm {
    pub document_type_name: String,
    pub document_type_description: String,
    pub document_type_format: String,
    pub document_category_id: CategoryId,
}
