//! Per-country import status.
//!
//! A product record carries its import progress as a JSON array *encoded in a string*,
//! e.g. `"[{\"country_id\":4,\"country_name\":\"Kenya\",\"import_status\":\"UNDER_IMPORT_APPROVAL\"}]"`.
//! Parsing fails soft: a garbled blob must not break a product page, so it reads as
//! "no import entries".

use super::{flexible_id, CountryId, ProductId, ProductStatus};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatusEntry {
    #[serde(deserialize_with = "flexible_id")]
    pub country_id: CountryId,
    #[serde(default)]
    pub country_name: String,
    pub import_status: ProductStatus,
}

/// Parses the encoded import-status list. Empty or malformed input yields an empty list.
pub fn parse_import_status(raw: &str) -> Vec<ImportStatusEntry> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<ImportStatusEntry>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed import_status");
            Vec::new()
        }
    }
}

/// Sets one country's `import_status` inside the encoded list and returns the new string.
///
/// Only the matching element is touched; every other element, and any field or status
/// this console does not model, is written back exactly as it was read. A country with
/// no element gets one appended. Malformed input is replaced by a list holding only
/// the patched country.
pub fn patch_import_status(
    raw: Option<&str>,
    country_id: CountryId,
    status: ProductStatus,
) -> String {
    let mut elements = raw.map(raw_elements).unwrap_or_default();
    match elements
        .iter_mut()
        .find(|element| element_country(element) == Some(country_id))
        .and_then(Value::as_object_mut)
    {
        Some(fields) => {
            fields.insert("import_status".into(), json!(status));
        }
        None => elements.push(json!({
            "country_id": country_id,
            "country_name": "",
            "import_status": status,
        })),
    }
    Value::Array(elements).to_string()
}

fn raw_elements(raw: &str) -> Vec<Value> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(elements) => elements,
        Err(e) => {
            warn!(error = %e, "Replacing malformed import_status");
            Vec::new()
        }
    }
}

/// `country_id` of a raw element, whether sent as a number or a numeric string.
fn element_country(element: &Value) -> Option<CountryId> {
    match element.get("country_id")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A note left on a product or an import decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(deserialize_with = "flexible_id")]
    pub note_id: u64,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub note_created_at: String,
    #[serde(default)]
    pub note_description: String,
    #[serde(default)]
    pub user_role: String,
}

/// Import progress of one product in one destination country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportStatusDetail {
    #[serde(deserialize_with = "flexible_id")]
    pub product_id: ProductId,
    #[serde(default)]
    pub product_displayname: String,
    #[serde(default)]
    pub origin_hsn_code: String,
    #[serde(deserialize_with = "flexible_id")]
    pub country_id: CountryId,
    #[serde(default)]
    pub country_name: String,
    pub import_status: ProductStatus,
    #[serde(default)]
    pub notes: Option<Vec<Note>>,
}
