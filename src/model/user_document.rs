use super::{flexible_id, flexible_opt_id, UserDocumentId, UserId};
use serde::{Deserialize, Serialize};

/// A document uploaded by a user (trade licence, identity proof, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserDocument {
    #[serde(deserialize_with = "flexible_id")]
    pub userdocument_id: UserDocumentId,
    #[serde(default)]
    pub document_name: String,
    #[serde(default)]
    pub filetype: String,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub contentpath: String,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub userprofile_id: Option<UserId>,
    #[serde(default)]
    pub audit_timestamp: String,
    #[serde(default)]
    pub role: String,
}

/// Body of `POST /userdocuments` and `PATCH /userdocuments/{id}`. `document_data` is base64.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocumentForm {
    pub document_type: String,
    pub document_name: String,
    pub document_data: String,
}
