use super::NoAction;
use crate::model::{Country, CountryForm, CountryId};
use crate::routes::api;
use resource_store::{ApiRequest, Resource, TransportError};
use serde_json::Value;

impl Resource for Country {
    type Id = CountryId;
    type Create = CountryForm;
    type Update = CountryForm;
    type Action = NoAction;
    type ActionResult = ();
    type Extra = ();

    const COLLECTION: &'static str = api::COUNTRIES;

    fn id(&self) -> CountryId {
        self.country_id
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
