use super::{flexible_id, DocumentTypeId, HsnId};
use serde::{Deserialize, Serialize};

/// A document type required (or accepted) for products under an HSN code or category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HsnDocumentType {
    #[serde(deserialize_with = "flexible_id")]
    pub document_type_id: DocumentTypeId,
    #[serde(default)]
    pub document_type_name: String,
    #[serde(default)]
    pub document_type_description: String,
    #[serde(default)]
    pub document_type_format: String,
    #[serde(default)]
    pub mandatory: bool,
}

/// Harmonized System Nomenclature code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HsnCode {
    #[serde(deserialize_with = "flexible_id")]
    pub hsn_id: HsnId,
    #[serde(default)]
    pub hsn_code: String,
    #[serde(default)]
    pub hsn_description: String,
    #[serde(default)]
    pub documents: Vec<HsnDocumentType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequirement {
    pub document_type_id: DocumentTypeId,
    pub mandatory: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HsnForm {
    pub hsn_code: String,
    pub hsn_description: String,
    pub document_types: Vec<DocumentRequirement>,
}

impl HsnForm {
    /// Form pre-filled from an existing code, as an edit dialog starts out.
    pub fn from_code(code: &HsnCode) -> Self {
        Self {
            hsn_code: code.hsn_code.clone(),
            hsn_description: code.hsn_description.clone(),
            document_types: code
                .documents
                .iter()
                .map(|doc| DocumentRequirement {
                    document_type_id: doc.document_type_id,
                    mandatory: doc.mandatory,
                })
                .collect(),
        }
    }
}
