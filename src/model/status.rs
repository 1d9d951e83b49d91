use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a product, and of each per-country import entry.
///
/// Values the console does not know deserialize as [`ProductStatus::Unknown`] so that
/// one odd record never fails a whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Pending,
    UnderVerification,
    InfoNeeded,
    Verified,
    ExportInfoNeeded,
    UnderExportApproval,
    ExportApproved,
    SentForExportApproval,
    SentForImportApproval,
    UnderImportApproval,
    ImportInfoNeeded,
    ImportApproved,
    ImportRejected,
    #[serde(other)]
    Unknown,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "PENDING",
            ProductStatus::UnderVerification => "UNDER_VERIFICATION",
            ProductStatus::InfoNeeded => "INFO_NEEDED",
            ProductStatus::Verified => "VERIFIED",
            ProductStatus::ExportInfoNeeded => "EXPORT_INFO_NEEDED",
            ProductStatus::UnderExportApproval => "UNDER_EXPORT_APPROVAL",
            ProductStatus::ExportApproved => "EXPORT_APPROVED",
            ProductStatus::SentForExportApproval => "SENT_FOR_EXPORT_APPROVAL",
            ProductStatus::SentForImportApproval => "SENT_FOR_IMPORT_APPROVAL",
            ProductStatus::UnderImportApproval => "UNDER_IMPORT_APPROVAL",
            ProductStatus::ImportInfoNeeded => "IMPORT_INFO_NEEDED",
            ProductStatus::ImportApproved => "IMPORT_APPROVED",
            ProductStatus::ImportRejected => "IMPORT_REJECTED",
            ProductStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of the signed-in user, as stored in the session profile's `role_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manufacturer,
    ExportOfficer,
    ImportOfficer,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::Manufacturer,
        Role::ExportOfficer,
        Role::ImportOfficer,
    ];

    /// Parses a `role_name`. Case and surrounding whitespace are ignored.
    pub fn from_name(name: &str) -> Option<Role> {
        match name.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "MANUFACTURER" => Some(Role::Manufacturer),
            "EXPORT_OFFICER" => Some(Role::ExportOfficer),
            "IMPORT_OFFICER" => Some(Role::ImportOfficer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manufacturer => "MANUFACTURER",
            Role::ExportOfficer => "EXPORT_OFFICER",
            Role::ImportOfficer => "IMPORT_OFFICER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
