use super::{flexible_id, CountryId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    #[serde(deserialize_with = "flexible_id")]
    pub country_id: CountryId,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryForm {
    pub country_code: String,
    pub country_name: String,
}
