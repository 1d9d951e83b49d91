use super::{decode_with_document_types, NoAction};
use crate::model::{HsnCode, HsnDocumentType, HsnForm, HsnId};
use crate::routes::api;
use resource_store::{ApiRequest, Listing, Resource, TransportError};
use serde_json::Value;

impl Resource for HsnCode {
    type Id = HsnId;
    type Create = HsnForm;
    type Update = HsnForm;
    type Action = NoAction;
    type ActionResult = ();
    /// Document types selectable when composing an HSN code.
    type Extra = Vec<HsnDocumentType>;

    const COLLECTION: &'static str = api::HSN_CODES;

    fn id(&self) -> HsnId {
        self.hsn_id
    }

    fn decode_listing(body: Value) -> Result<Listing<Self>, TransportError> {
        decode_with_document_types(body, "hsnCodes")
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
