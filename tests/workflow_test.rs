use compliance_console::model::{Product, ProductStatus, Role};
use compliance_console::workflow::{self, Transition, WorkflowError};
use serde_json::json;

const STATUSES: [ProductStatus; 13] = [
    ProductStatus::Pending,
    ProductStatus::UnderVerification,
    ProductStatus::InfoNeeded,
    ProductStatus::Verified,
    ProductStatus::ExportInfoNeeded,
    ProductStatus::UnderExportApproval,
    ProductStatus::ExportApproved,
    ProductStatus::SentForExportApproval,
    ProductStatus::SentForImportApproval,
    ProductStatus::UnderImportApproval,
    ProductStatus::ImportInfoNeeded,
    ProductStatus::ImportApproved,
    ProductStatus::ImportRejected,
];

const TRANSITIONS: [Transition; 7] = [
    Transition::Verify,
    Transition::AskInfo,
    Transition::SendForExportApproval,
    Transition::ApproveExport,
    Transition::SendForImportApproval,
    Transition::ApproveImport,
    Transition::SendForVerification,
];

fn product(status: ProductStatus) -> Product {
    serde_json::from_value(json!({"product_id": 1, "status": status})).unwrap()
}

/// Whatever the table offers can be planned, and nothing else can.
#[test]
fn test_offered_transitions_are_exactly_the_plannable_ones() {
    for role in Role::ALL {
        for status in STATUSES {
            let offered = workflow::product_transitions(role, status);
            for transition in TRANSITIONS {
                if transition == Transition::SendForImportApproval {
                    continue;
                }
                let planned =
                    workflow::plan_transition(role, &product(status), transition, "", None);
                if offered.contains(&transition) {
                    let change = planned.unwrap_or_else(|e| {
                        panic!("{role} could not plan offered {transition} at {status}: {e}")
                    });
                    assert_eq!(
                        Some(change.status),
                        workflow::target_status(transition, status)
                    );
                } else {
                    assert!(
                        matches!(planned, Err(WorkflowError::NotAllowed { .. })),
                        "{role} planned {transition} at {status}"
                    );
                }
            }
        }
    }
}

/// Only "Ask info" addresses a comment, so sending a product back for review never
/// notifies the manufacturer who sent it.
#[test]
fn test_only_ask_info_addresses_a_comment() {
    for role in Role::ALL {
        for status in STATUSES {
            for transition in workflow::product_transitions(role, status) {
                let change =
                    workflow::plan_transition(role, &product(status), transition, "", None)
                        .unwrap();
                if transition == Transition::AskInfo {
                    assert!(change.comment_for.is_some());
                } else {
                    assert_eq!(change.comment_for, None, "{role} {transition} at {status}");
                }
            }
        }
    }

    let change = workflow::plan_transition(
        Role::Manufacturer,
        &product(ProductStatus::InfoNeeded),
        Transition::SendForVerification,
        "Fixed the label",
        None,
    )
    .unwrap();
    assert_eq!(change.status, ProductStatus::UnderVerification);
    assert_ne!(change.comment_for, Some(Role::Manufacturer));
}

/// Import approval can only be planned for a destination country.
#[test]
fn test_import_approval_needs_a_country() {
    let exported = product(ProductStatus::ExportApproved);

    assert_eq!(
        workflow::plan_transition(
            Role::Admin,
            &exported,
            Transition::SendForImportApproval,
            "",
            None
        ),
        Err(WorkflowError::CountryRequired(
            Transition::SendForImportApproval
        ))
    );

    let change = workflow::plan_transition(
        Role::Admin,
        &exported,
        Transition::SendForImportApproval,
        "",
        Some(3),
    )
    .unwrap();
    assert_eq!(change.country_id, Some(3));
    assert_eq!(change.status, ProductStatus::UnderImportApproval);
}

/// Terminal statuses offer nothing to anyone.
#[test]
fn test_terminal_statuses_offer_no_product_transitions() {
    for role in Role::ALL {
        assert!(workflow::product_transitions(role, ProductStatus::ImportApproved).is_empty());
        assert!(workflow::compute_actions(role, ProductStatus::ImportApproved, &[]).is_empty());
    }
    assert!(workflow::is_terminal(ProductStatus::ImportApproved, true));
    assert!(workflow::is_terminal(ProductStatus::ExportApproved, false));
    assert!(!workflow::is_terminal(ProductStatus::ExportApproved, true));
}
