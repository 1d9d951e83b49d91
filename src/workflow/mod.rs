//! # Product Status Workflow
//!
//! Decides which status transitions the signed-in user may invoke on a product, where
//! each one leads, and who is told when more information is requested. Everything here
//! is pure: the session role is passed in, and the result is a [`StatusChange`] payload
//! that the [`ProductClient`](crate::clients::ProductClient) sends to the API.
//!
//! ## Transition table
//!
//! | Current status | Role | Transition | Target |
//! |---|---|---|---|
//! | UNDER_VERIFICATION | ADMIN | Verify | VERIFIED |
//! | UNDER_VERIFICATION | ADMIN | Ask info | INFO_NEEDED |
//! | VERIFIED, EXPORT_INFO_NEEDED | ADMIN | Send for export approval | UNDER_EXPORT_APPROVAL |
//! | UNDER_EXPORT_APPROVAL | EXPORT_OFFICER | Approve | EXPORT_APPROVED |
//! | UNDER_EXPORT_APPROVAL | EXPORT_OFFICER | Ask info | EXPORT_INFO_NEEDED |
//! | EXPORT_APPROVED, IMPORT_INFO_NEEDED | ADMIN | Send for import approval (per country) | UNDER_IMPORT_APPROVAL |
//! | UNDER_IMPORT_APPROVAL | IMPORT_OFFICER | Import approve | IMPORT_APPROVED |
//! | UNDER_IMPORT_APPROVAL | IMPORT_OFFICER | Ask info | IMPORT_INFO_NEEDED |
//! | PENDING, INFO_NEEDED | MANUFACTURER | Send for verification | UNDER_VERIFICATION |
//!
//! Editing the product is open to MANUFACTURER and ADMIN at EXPORT_INFO_NEEDED, VERIFIED
//! and EXPORT_APPROVED, and changes no status.
//!
//! Import rows are evaluated twice: against the product's own status, and against each
//! country entry parsed from `import_status`. A product without entries has no import
//! rows at all.
//!
//! The three-role rule set that preceded this table lives in [`legacy`].

pub mod legacy;

use crate::model::{CountryId, ImportStatusEntry, Product, ProductStatus, Role, StatusChange};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A status transition a user can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Verify,
    /// Send the product back for more information. The target depends on the stage.
    AskInfo,
    SendForExportApproval,
    ApproveExport,
    /// Country-scoped.
    SendForImportApproval,
    ApproveImport,
    SendForVerification,
}

impl Transition {
    pub fn label(&self) -> &'static str {
        match self {
            Transition::Verify => "Verify",
            Transition::AskInfo => "Ask info",
            Transition::SendForExportApproval => "Send for export approval",
            Transition::ApproveExport => "Approve",
            Transition::SendForImportApproval => "Send for import approval",
            Transition::ApproveImport => "Import approve",
            Transition::SendForVerification => "Send for verification",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("{transition} is not available to {role} at {status}")]
    NotAllowed {
        role: Role,
        status: ProductStatus,
        transition: Transition,
    },
    #[error("{0} requires a destination country")]
    CountryRequired(Transition),
}

/// Transitions available on one country's import entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryActions {
    pub country_id: CountryId,
    pub country_name: String,
    pub import_status: ProductStatus,
    pub transitions: Vec<Transition>,
}

/// Everything a viewer may do with a product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowedActions {
    /// Transitions on the product's own status.
    pub transitions: Vec<Transition>,
    pub can_edit: bool,
    /// Whether the product may be sent for import approval to a country it has no entry for.
    pub can_send_to_new_country: bool,
    /// One row per parsed import entry, in entry order.
    pub import_rows: Vec<CountryActions>,
}

impl AllowedActions {
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
            && !self.can_edit
            && !self.can_send_to_new_country
            && self.import_rows.iter().all(|row| row.transitions.is_empty())
    }

    pub fn country(&self, country_id: CountryId) -> Option<&CountryActions> {
        self.import_rows
            .iter()
            .find(|row| row.country_id == country_id)
    }
}

/// Computes what `role` may do with a product at `status` with the given import entries.
pub fn compute_actions(
    role: Role,
    status: ProductStatus,
    import_statuses: &[ImportStatusEntry],
) -> AllowedActions {
    AllowedActions {
        transitions: product_transitions(role, status),
        can_edit: can_edit(role, status),
        can_send_to_new_country: opens_import(role, status),
        import_rows: import_statuses
            .iter()
            .map(|entry| CountryActions {
                country_id: entry.country_id,
                country_name: entry.country_name.clone(),
                import_status: entry.import_status,
                transitions: import_transitions(role, entry.import_status),
            })
            .collect(),
    }
}

/// Transitions on the product's own status. Import approval is country-scoped and
/// therefore reported through [`AllowedActions::can_send_to_new_country`] instead.
pub fn product_transitions(role: Role, status: ProductStatus) -> Vec<Transition> {
    use ProductStatus::*;
    match (role, status) {
        (Role::Admin, UnderVerification) => vec![Transition::Verify, Transition::AskInfo],
        (Role::Admin, Verified | ExportInfoNeeded) => vec![Transition::SendForExportApproval],
        (Role::ExportOfficer, UnderExportApproval) => {
            vec![Transition::ApproveExport, Transition::AskInfo]
        }
        (Role::ImportOfficer, UnderImportApproval) => {
            vec![Transition::ApproveImport, Transition::AskInfo]
        }
        (Role::Manufacturer, Pending | InfoNeeded) => vec![Transition::SendForVerification],
        _ => Vec::new(),
    }
}

/// Transitions on one country's import entry.
pub fn import_transitions(role: Role, import_status: ProductStatus) -> Vec<Transition> {
    if opens_import(role, import_status) {
        return vec![Transition::SendForImportApproval];
    }
    match (role, import_status) {
        (Role::ImportOfficer, ProductStatus::UnderImportApproval) => {
            vec![Transition::ApproveImport, Transition::AskInfo]
        }
        _ => Vec::new(),
    }
}

fn opens_import(role: Role, status: ProductStatus) -> bool {
    role == Role::Admin
        && matches!(
            status,
            ProductStatus::ExportApproved | ProductStatus::ImportInfoNeeded
        )
}

/// Whether the "Edit product" action is enabled.
pub fn can_edit(role: Role, status: ProductStatus) -> bool {
    matches!(role, Role::Manufacturer | Role::Admin)
        && matches!(
            status,
            ProductStatus::ExportInfoNeeded | ProductStatus::Verified | ProductStatus::ExportApproved
        )
}

/// Where `transition` leads from `current`. `None` when "Ask info" is invoked outside a
/// review stage.
pub fn target_status(transition: Transition, current: ProductStatus) -> Option<ProductStatus> {
    use ProductStatus::*;
    match transition {
        Transition::Verify => Some(Verified),
        Transition::SendForExportApproval => Some(UnderExportApproval),
        Transition::ApproveExport => Some(ExportApproved),
        Transition::SendForImportApproval => Some(UnderImportApproval),
        Transition::ApproveImport => Some(ImportApproved),
        Transition::SendForVerification => Some(UnderVerification),
        Transition::AskInfo => match current {
            UnderVerification => Some(InfoNeeded),
            UnderExportApproval => Some(ExportInfoNeeded),
            UnderImportApproval => Some(ImportInfoNeeded),
            _ => None,
        },
    }
}

/// The role a comment is addressed to when a product sits at `status`.
pub fn comment_target(status: ProductStatus) -> Option<Role> {
    use ProductStatus::*;
    match status {
        UnderVerification | InfoNeeded => Some(Role::Manufacturer),
        UnderExportApproval | ExportInfoNeeded => Some(Role::ExportOfficer),
        UnderImportApproval | ImportInfoNeeded => Some(Role::ImportOfficer),
        _ => None,
    }
}

/// Whether a product at `status` has no outgoing transition left.
pub fn is_terminal(status: ProductStatus, import_required: bool) -> bool {
    match status {
        ProductStatus::ImportApproved => true,
        ProductStatus::ExportApproved => !import_required,
        _ => false,
    }
}

/// Validates `transition` for `role` on `product` and builds the status update payload.
///
/// With a `country`, the transition is checked against that country's import entry (or,
/// for a country without one, against the product's eligibility to enter import
/// approval). Only "Ask info" addresses its comment to a role.
pub fn plan_transition(
    role: Role,
    product: &Product,
    transition: Transition,
    comments: impl Into<String>,
    country: Option<CountryId>,
) -> Result<StatusChange, WorkflowError> {
    let current = match country {
        None => {
            if transition == Transition::SendForImportApproval {
                return Err(WorkflowError::CountryRequired(transition));
            }
            ensure(
                product_transitions(role, product.status).contains(&transition),
                role,
                product.status,
                transition,
            )?;
            product.status
        }
        Some(country_id) => {
            let entry = product
                .import_statuses()
                .into_iter()
                .find(|e| e.country_id == country_id);
            match entry {
                Some(entry) => {
                    ensure(
                        import_transitions(role, entry.import_status).contains(&transition),
                        role,
                        entry.import_status,
                        transition,
                    )?;
                    entry.import_status
                }
                None => {
                    ensure(
                        transition == Transition::SendForImportApproval
                            && opens_import(role, product.status),
                        role,
                        product.status,
                        transition,
                    )?;
                    product.status
                }
            }
        }
    };

    let status = target_status(transition, current).ok_or(WorkflowError::NotAllowed {
        role,
        status: current,
        transition,
    })?;
    let comment_for = match transition {
        Transition::AskInfo => comment_target(current),
        _ => None,
    };

    debug!(product_id = product.product_id, %transition, from = %current, to = %status, "Planned transition");
    Ok(StatusChange {
        product_id: product.product_id,
        status,
        comments: comments.into(),
        comment_for,
        country_id: country,
    })
}

fn ensure(
    allowed: bool,
    role: Role,
    status: ProductStatus,
    transition: Transition,
) -> Result<(), WorkflowError> {
    if allowed {
        Ok(())
    } else {
        Err(WorkflowError::NotAllowed {
            role,
            status,
            transition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(status: ProductStatus, import_status: Option<&str>) -> Product {
        serde_json::from_value(json!({
            "product_id": 10,
            "status": status,
            "import_status": import_status,
        }))
        .unwrap()
    }

    fn entry(country_id: CountryId, status: ProductStatus) -> ImportStatusEntry {
        ImportStatusEntry {
            country_id,
            country_name: format!("C{country_id}"),
            import_status: status,
        }
    }

    #[test]
    fn test_manufacturer_only_sends_for_verification() {
        for status in [ProductStatus::Pending, ProductStatus::InfoNeeded] {
            let actions = compute_actions(Role::Manufacturer, status, &[]);
            assert_eq!(actions.transitions, vec![Transition::SendForVerification]);
            assert!(!actions.can_edit);

            let change = plan_transition(
                Role::Manufacturer,
                &product(status, None),
                Transition::SendForVerification,
                "",
                None,
            )
            .unwrap();
            assert_eq!(change.status, ProductStatus::UnderVerification);
            assert_ne!(change.comment_for, Some(Role::Manufacturer));
        }
    }

    #[test]
    fn test_admin_verifies_or_asks_manufacturer() {
        let under_review = product(ProductStatus::UnderVerification, None);

        let verify =
            plan_transition(Role::Admin, &under_review, Transition::Verify, "", None).unwrap();
        let ask = plan_transition(
            Role::Admin,
            &under_review,
            Transition::AskInfo,
            "Need invoice",
            None,
        )
        .unwrap();

        assert_eq!(verify.status, ProductStatus::Verified);
        assert_eq!(verify.comment_for, None);
        assert_eq!(ask.status, ProductStatus::InfoNeeded);
        assert_eq!(ask.comment_for, Some(Role::Manufacturer));
        assert_eq!(ask.comments, "Need invoice");
    }

    #[test]
    fn test_export_stage() {
        assert_eq!(
            product_transitions(Role::Admin, ProductStatus::ExportInfoNeeded),
            vec![Transition::SendForExportApproval]
        );
        assert_eq!(
            target_status(Transition::AskInfo, ProductStatus::UnderExportApproval),
            Some(ProductStatus::ExportInfoNeeded)
        );
        assert_eq!(
            product_transitions(Role::ExportOfficer, ProductStatus::UnderExportApproval),
            vec![Transition::ApproveExport, Transition::AskInfo]
        );
        assert!(product_transitions(Role::ExportOfficer, ProductStatus::UnderVerification).is_empty());
    }

    #[test]
    fn test_wrong_role_is_rejected() {
        let result = plan_transition(
            Role::Manufacturer,
            &product(ProductStatus::UnderVerification, None),
            Transition::Verify,
            "",
            None,
        );

        assert_eq!(
            result,
            Err(WorkflowError::NotAllowed {
                role: Role::Manufacturer,
                status: ProductStatus::UnderVerification,
                transition: Transition::Verify,
            })
        );
    }

    #[test]
    fn test_edit_is_role_and_status_gated() {
        let editable = [
            ProductStatus::ExportInfoNeeded,
            ProductStatus::Verified,
            ProductStatus::ExportApproved,
        ];
        for role in Role::ALL {
            for status in [
                ProductStatus::Pending,
                ProductStatus::InfoNeeded,
                ProductStatus::UnderVerification,
                ProductStatus::Verified,
                ProductStatus::ExportInfoNeeded,
                ProductStatus::UnderExportApproval,
                ProductStatus::ExportApproved,
                ProductStatus::ImportApproved,
            ] {
                let expected = matches!(role, Role::Admin | Role::Manufacturer)
                    && editable.contains(&status);
                assert_eq!(can_edit(role, status), expected, "{role} at {status}");
            }
        }
    }

    #[test]
    fn test_import_rows_follow_each_entry() {
        let entries = [
            entry(1, ProductStatus::UnderImportApproval),
            entry(2, ProductStatus::ImportInfoNeeded),
            entry(3, ProductStatus::ImportApproved),
        ];

        let officer = compute_actions(Role::ImportOfficer, ProductStatus::ExportApproved, &entries);
        let admin = compute_actions(Role::Admin, ProductStatus::ExportApproved, &entries);

        assert_eq!(
            officer.country(1).map(|r| r.transitions.clone()),
            Some(vec![Transition::ApproveImport, Transition::AskInfo])
        );
        assert!(officer.country(2).unwrap().transitions.is_empty());
        assert!(!officer.can_send_to_new_country);
        assert_eq!(
            admin.country(2).map(|r| r.transitions.clone()),
            Some(vec![Transition::SendForImportApproval])
        );
        assert!(admin.country(3).unwrap().transitions.is_empty());
        assert!(admin.can_send_to_new_country);
    }

    #[test]
    fn test_no_entries_means_no_import_rows() {
        let actions = compute_actions(Role::ImportOfficer, ProductStatus::ExportApproved, &[]);
        assert!(actions.import_rows.is_empty());
        assert!(actions.is_empty());
    }

    #[test]
    fn test_country_scoped_plans() {
        let raw = r#"[{"country_id":4,"country_name":"Kenya","import_status":"UNDER_IMPORT_APPROVAL"}]"#;
        let shipped = product(ProductStatus::ExportApproved, Some(raw));

        let ask = plan_transition(
            Role::ImportOfficer,
            &shipped,
            Transition::AskInfo,
            "Need permit",
            Some(4),
        )
        .unwrap();
        let new_country = plan_transition(
            Role::Admin,
            &shipped,
            Transition::SendForImportApproval,
            "",
            Some(9),
        )
        .unwrap();
        let without_country = plan_transition(
            Role::Admin,
            &shipped,
            Transition::SendForImportApproval,
            "",
            None,
        );

        assert_eq!(ask.status, ProductStatus::ImportInfoNeeded);
        assert_eq!(ask.comment_for, Some(Role::ImportOfficer));
        assert_eq!(ask.country_id, Some(4));
        assert_eq!(new_country.status, ProductStatus::UnderImportApproval);
        assert_eq!(new_country.country_id, Some(9));
        assert_eq!(
            without_country,
            Err(WorkflowError::CountryRequired(Transition::SendForImportApproval))
        );
    }

    #[test]
    fn test_comment_targets() {
        assert_eq!(comment_target(ProductStatus::InfoNeeded), Some(Role::Manufacturer));
        assert_eq!(
            comment_target(ProductStatus::UnderExportApproval),
            Some(Role::ExportOfficer)
        );
        assert_eq!(
            comment_target(ProductStatus::ImportInfoNeeded),
            Some(Role::ImportOfficer)
        );
        assert_eq!(comment_target(ProductStatus::Verified), None);
        assert_eq!(comment_target(ProductStatus::Pending), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(is_terminal(ProductStatus::ImportApproved, true));
        assert!(is_terminal(ProductStatus::ExportApproved, false));
        assert!(!is_terminal(ProductStatus::ExportApproved, true));
        assert!(!is_terminal(ProductStatus::Verified, false));
    }
}
