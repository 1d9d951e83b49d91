use crate::clients::entity_client::EntityClient;
use crate::model::{
    User, UserDocument, UserDocumentForm, UserDocumentId, UserId, UserStatus, UserStatusChange,
};
use crate::user_store::{UserAction, UserDocumentAction, UserDocumentActionResult, UserError};
use async_trait::async_trait;
use resource_store::ResourceClient;
use tracing::{debug, instrument};

/// Client for interacting with the User store.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }
}

impl UserClient {
    /// Accept or reject a registration. The listed user and `selected` are patched in place.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        user_id: UserId,
        status: UserStatus,
    ) -> Result<UserStatusChange, UserError> {
        debug!("Sending request");
        self.inner
            .perform(UserAction::UpdateStatus(UserStatusChange { user_id, status }))
            .await
            .map_err(UserError::from)
    }
}

/// Client for the document collection of users.
#[derive(Clone)]
pub struct UserDocumentClient {
    inner: ResourceClient<UserDocument>,
}

impl UserDocumentClient {
    pub fn new(inner: ResourceClient<UserDocument>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<UserDocument> for UserDocumentClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<UserDocument> {
        &self.inner
    }
}

impl UserDocumentClient {
    #[instrument(skip(self, form), fields(document_name = %form.document_name))]
    pub async fn add_document(&self, form: UserDocumentForm) -> Result<UserDocument, UserError> {
        debug!("Sending request");
        self.inner.add(form, None).await.map_err(UserError::from)
    }

    #[instrument(skip(self, form))]
    pub async fn edit_document(
        &self,
        id: UserDocumentId,
        form: UserDocumentForm,
    ) -> Result<UserDocument, UserError> {
        debug!("Sending request");
        self.inner.edit(id, form, None).await.map_err(UserError::from)
    }

    /// Replace the collection with the documents one user uploaded.
    #[instrument(skip(self))]
    pub async fn fetch_for_user(&self, user_id: UserId) -> Result<Vec<UserDocument>, UserError> {
        debug!("Sending request");
        match self
            .inner
            .perform(UserDocumentAction::FetchForUser(user_id))
            .await?
        {
            UserDocumentActionResult::FetchedForUser(documents) => Ok(documents),
        }
    }
}
