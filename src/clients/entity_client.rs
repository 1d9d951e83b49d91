use async_trait::async_trait;
use resource_store::{CollectionState, Resource, ResourceClient, StoreError};

/// Trait for entity-specific clients to inherit the operations every collection shares.
///
/// This trait reduces boilerplate by providing default implementations for
/// `fetch_all`, `get_by_id` and `delete`; wrappers only add what is specific to them.
#[async_trait]
pub trait EntityClient<T: Resource>: Send + Sync {
    /// The entity-specific error type.
    type Error: From<StoreError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Snapshot of the collection as the store last published it.
    fn state(&self) -> CollectionState<T> {
        self.inner().state()
    }

    /// Fetch the whole collection, replacing the stored items.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().fetch().await.map_err(Self::Error::from)
    }

    /// Fetch one item into `selected`.
    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_by_id(id).await.map_err(Self::Error::from)
    }

    /// Delete an item by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::Error::from)
    }
}
