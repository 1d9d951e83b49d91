//! Pure data structures (records and form payloads) implementing the
//! [`Resource`](resource_store::Resource) trait.
//!
//! Records deserialize from the API's snake_case field names; form payloads serialize to
//! the camelCase bodies the API expects. Ids arrive either as numbers or as numeric
//! strings, so every id field goes through [`flexible_id`].

pub mod category;
pub mod country;
pub mod document_type;
pub mod hsn_code;
pub mod import_status;
pub mod product;
pub mod status;
pub mod user;
pub mod user_document;

pub use category::*;
pub use country::*;
pub use document_type::*;
pub use hsn_code::*;
pub use import_status::*;
pub use product::*;
pub use status::*;
pub use user::*;
pub use user_document::*;

use serde::{Deserialize, Deserializer};

pub type ProductId = u64;
pub type CategoryId = u64;
pub type CountryId = u64;
pub type HsnId = u64;
pub type DocumentTypeId = u64;
pub type UserDocumentId = u64;
pub type UserId = u64;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

/// Accepts `42` as well as `"42"`.
pub fn flexible_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Like [`flexible_id`], for optional fields. `null` and `""` both read as `None`.
pub fn flexible_opt_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
