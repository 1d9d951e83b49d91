//! Resource trait implementations for [`User`] and [`UserDocument`].
//!
//! Both APIs wrap single items: `GET /users/{id}` answers `{user, documents}` and the
//! document add/edit endpoints answer `{document}`. The decoders below unwrap them.

use super::actions::{UserAction, UserDocumentAction, UserDocumentActionResult};
use crate::model::{
    NoPayload, User, UserDocument, UserDocumentForm, UserDocumentId, UserId, UserStatusChange,
};
use crate::routes::api;
use resource_store::{ApiRequest, CollectionState, Resource, TransportError};
use serde_json::Value;

impl Resource for User {
    type Id = UserId;
    type Create = NoPayload;
    type Update = NoPayload;
    type Action = UserAction;
    type ActionResult = UserStatusChange;
    type Extra = ();

    const COLLECTION: &'static str = api::USERS;

    fn id(&self) -> UserId {
        self.userprofile_id
    }

    fn decode_item(body: Value) -> Result<Self, TransportError> {
        match body {
            Value::Object(mut fields) if fields.contains_key("user") => {
                let user = fields.remove("user").unwrap_or(Value::Null);
                let mut user: User = serde_json::from_value(user).map_err(TransportError::decode)?;
                if let Some(documents) = fields.remove("documents").filter(|d| !d.is_null()) {
                    user.documents =
                        serde_json::from_value(documents).map_err(TransportError::decode)?;
                }
                Ok(user)
            }
            other => serde_json::from_value(other).map_err(TransportError::decode),
        }
    }

    fn action_request(action: &UserAction) -> Result<ApiRequest, TransportError> {
        match action {
            UserAction::UpdateStatus(change) => ApiRequest::patch(Self::COLLECTION).json(change),
        }
    }

    fn action_kind(action: &UserAction) -> &'static str {
        match action {
            UserAction::UpdateStatus(_) => "update_status",
        }
    }

    fn decode_action(action: UserAction, _body: Value) -> Result<UserStatusChange, TransportError> {
        match action {
            UserAction::UpdateStatus(change) => Ok(change),
        }
    }

    fn on_action_success(state: &mut CollectionState<Self>, change: &UserStatusChange) {
        if let Some(user) = state.find_mut(&change.user_id) {
            user.status = change.status;
        }
        if let Some(selected) = state.selected.as_mut() {
            if selected.userprofile_id == change.user_id {
                selected.status = change.status;
            }
        }
    }
}

impl Resource for UserDocument {
    type Id = UserDocumentId;
    type Create = UserDocumentForm;
    type Update = UserDocumentForm;
    type Action = UserDocumentAction;
    type ActionResult = UserDocumentActionResult;
    type Extra = ();

    const COLLECTION: &'static str = api::USER_DOCUMENTS;

    fn id(&self) -> UserDocumentId {
        self.userdocument_id
    }

    fn decode_item(body: Value) -> Result<Self, TransportError> {
        let item = match body {
            Value::Object(mut fields) if fields.contains_key("document") => {
                fields.remove("document").unwrap_or(Value::Null)
            }
            other => other,
        };
        serde_json::from_value(item).map_err(TransportError::decode)
    }

    fn action_request(action: &UserDocumentAction) -> Result<ApiRequest, TransportError> {
        match action {
            UserDocumentAction::FetchForUser(user_id) => {
                Ok(ApiRequest::get(format!("{}/{}", Self::COLLECTION, user_id)))
            }
        }
    }

    fn action_kind(action: &UserDocumentAction) -> &'static str {
        match action {
            UserDocumentAction::FetchForUser(_) => "fetch_for_user",
        }
    }

    fn decode_action(
        action: UserDocumentAction,
        body: Value,
    ) -> Result<UserDocumentActionResult, TransportError> {
        match action {
            UserDocumentAction::FetchForUser(_) => {
                let documents = if body.is_null() {
                    Vec::new()
                } else {
                    serde_json::from_value(body).map_err(TransportError::decode)?
                };
                Ok(UserDocumentActionResult::FetchedForUser(documents))
            }
        }
    }

    fn on_action_success(state: &mut CollectionState<Self>, result: &UserDocumentActionResult) {
        match result {
            UserDocumentActionResult::FetchedForUser(documents) => {
                state.items = documents.clone();
            }
        }
    }
}
