use super::{flexible_id, flexible_opt_id, Role, UserDocument, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "flexible_id")]
    pub userprofile_id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub status: UserStatus,
    /// Only populated by `GET /users/{id}`.
    #[serde(default)]
    pub documents: Vec<UserDocument>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Account review state of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// Body of `PATCH /users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusChange {
    pub user_id: UserId,
    pub status: UserStatus,
}

/// The signed-in user, as kept in the session. Read-only for this crate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "flexible_id")]
    pub userprofile_id: UserId,
    pub role_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "flexible_opt_id")]
    pub role_id: Option<u64>,
}

impl UserProfile {
    /// The profile's role, if it names one the console knows.
    pub fn role(&self) -> Option<Role> {
        Role::from_name(&self.role_name)
    }
}

/// User update payloads are not supported by the API; this stands in as `Create`/`Update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoPayload {}
