//! Three-role transition rules (ADMIN, OFFICER, MANUFACTURER).
//!
//! **Superseded** by the five-role table in the parent module, which splits the officer
//! into export and import officers and adds the per-country import stage. Kept so that
//! records produced under the old rules can still be explained; nothing in the console
//! dispatches through it.

use crate::model::ProductStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyRole {
    Admin,
    Officer,
    Manufacturer,
}

impl LegacyRole {
    pub fn from_name(name: &str) -> Option<LegacyRole> {
        match name.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(LegacyRole::Admin),
            "OFFICER" => Some(LegacyRole::Officer),
            "MANUFACTURER" => Some(LegacyRole::Manufacturer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyTransition {
    AskInfo,
    Verify,
    Approve,
    SendForVerification,
    SendForExportApproval,
}

pub fn legacy_transitions(role: LegacyRole, status: ProductStatus) -> Vec<LegacyTransition> {
    use ProductStatus::*;
    match (role, status) {
        (LegacyRole::Admin, UnderVerification) => {
            vec![LegacyTransition::AskInfo, LegacyTransition::Verify]
        }
        (LegacyRole::Officer, UnderExportApproval) => {
            vec![LegacyTransition::AskInfo, LegacyTransition::Approve]
        }
        (LegacyRole::Manufacturer, Pending | InfoNeeded) => {
            vec![LegacyTransition::SendForVerification]
        }
        (LegacyRole::Manufacturer, Verified | ExportInfoNeeded) => {
            vec![LegacyTransition::SendForExportApproval]
        }
        _ => Vec::new(),
    }
}

/// Target of a legacy transition. "Ask info" is decided by who asks, not by the stage.
pub fn legacy_target(role: LegacyRole, transition: LegacyTransition) -> Option<ProductStatus> {
    match (transition, role) {
        (LegacyTransition::AskInfo, LegacyRole::Admin) => Some(ProductStatus::InfoNeeded),
        (LegacyTransition::AskInfo, LegacyRole::Officer) => Some(ProductStatus::ExportInfoNeeded),
        (LegacyTransition::AskInfo, LegacyRole::Manufacturer) => None,
        (LegacyTransition::Verify, _) => Some(ProductStatus::Verified),
        (LegacyTransition::Approve, _) => Some(ProductStatus::ExportApproved),
        (LegacyTransition::SendForVerification, _) => Some(ProductStatus::UnderVerification),
        (LegacyTransition::SendForExportApproval, _) => Some(ProductStatus::UnderExportApproval),
    }
}

/// Role addressed by a comment accompanying a change to `target`.
pub fn legacy_comment_target(target: ProductStatus) -> Option<LegacyRole> {
    use ProductStatus::*;
    match target {
        UnderVerification | InfoNeeded => Some(LegacyRole::Manufacturer),
        UnderExportApproval | ExportInfoNeeded => Some(LegacyRole::Officer),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_officer_reviews_export_stage() {
        let transitions = legacy_transitions(LegacyRole::Officer, ProductStatus::UnderExportApproval);
        assert_eq!(
            transitions,
            vec![LegacyTransition::AskInfo, LegacyTransition::Approve]
        );
        assert_eq!(
            legacy_target(LegacyRole::Officer, LegacyTransition::AskInfo),
            Some(ProductStatus::ExportInfoNeeded)
        );
    }

    #[test]
    fn test_manufacturer_drives_export_submission() {
        assert_eq!(
            legacy_transitions(LegacyRole::Manufacturer, ProductStatus::Verified),
            vec![LegacyTransition::SendForExportApproval]
        );
        assert!(legacy_transitions(LegacyRole::Manufacturer, ProductStatus::UnderVerification).is_empty());
        assert_eq!(LegacyRole::from_name("officer"), Some(LegacyRole::Officer));
        assert_eq!(
            legacy_comment_target(ProductStatus::InfoNeeded),
            Some(LegacyRole::Manufacturer)
        );
    }
}
