use super::NoAction;
use crate::model::{DocumentTypeForm, DocumentTypeId, ProductDocumentType};
use crate::routes::api;
use resource_store::{ApiRequest, Resource, TransportError};
use serde_json::Value;

impl Resource for ProductDocumentType {
    type Id = DocumentTypeId;
    type Create = DocumentTypeForm;
    type Update = DocumentTypeForm;
    type Action = NoAction;
    type ActionResult = ();
    type Extra = ();

    const COLLECTION: &'static str = api::DOCUMENT_TYPES;

    fn id(&self) -> DocumentTypeId {
        self.document_type_id
    }

    fn action_request(action: &NoAction) -> Result<ApiRequest, TransportError> {
        match *action {}
    }

    fn action_kind(action: &NoAction) -> &'static str {
        match *action {}
    }

    fn decode_action(action: NoAction, _body: Value) -> Result<(), TransportError> {
        match action {}
    }
}
