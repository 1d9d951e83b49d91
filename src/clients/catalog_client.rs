//! Clients for the reference-data collections: countries, HSN codes, categories and
//! product document types. They share one shape, so one generic wrapper serves all four.
use crate::catalog_store::{CatalogError, NoAction};
use crate::clients::entity_client::EntityClient;
use crate::model::{Country, HsnCode, HsnDocumentType, ProductCategory, ProductDocumentType};
use async_trait::async_trait;
use resource_store::{Resource, ResourceClient};
use tracing::{debug, instrument};

pub type CountryClient = CatalogClient<Country>;
pub type HsnCodeClient = CatalogClient<HsnCode>;
pub type CategoryClient = CatalogClient<ProductCategory>;
pub type DocumentTypeClient = CatalogClient<ProductDocumentType>;

/// Client for a catalog store. Catalog entities have no custom actions.
pub struct CatalogClient<T: Resource<Action = NoAction>> {
    inner: ResourceClient<T>,
}

impl<T: Resource<Action = NoAction>> Clone for CatalogClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Resource<Action = NoAction>> CatalogClient<T> {
    pub fn new(inner: ResourceClient<T>) -> Self {
        Self { inner }
    }

    /// Create an item; it is appended to the collection.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn add(&self, params: T::Create) -> Result<T, CatalogError> {
        debug!("Sending request");
        self.inner.add(params, None).await.map_err(CatalogError::from)
    }

    /// Replace an item in place with what the server returns.
    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    pub async fn edit(&self, id: T::Id, params: T::Update) -> Result<T, CatalogError> {
        debug!("Sending request");
        self.inner
            .edit(id, params, None)
            .await
            .map_err(CatalogError::from)
    }
}

#[async_trait]
impl<T: Resource<Action = NoAction>> EntityClient<T> for CatalogClient<T> {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<T> {
        &self.inner
    }
}

impl<T> CatalogClient<T>
where
    T: Resource<Action = NoAction, Extra = Vec<HsnDocumentType>>,
{
    /// Document types offered alongside the last listing (HSN codes and categories).
    pub fn document_types(&self) -> Vec<HsnDocumentType> {
        self.inner.state().extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CountryForm, HsnForm};
    use resource_store::mock::{create_mock_client, expect_request};
    use resource_store::{Listing, Request, StoreError, Success};

    #[tokio::test]
    async fn test_country_edit_forwards_id_and_form() {
        let (client, mut receiver) = create_mock_client::<Country>(10);
        let countries = CountryClient::new(client);

        let task = tokio::spawn(async move {
            countries
                .edit(
                    3,
                    CountryForm {
                        country_code: "GH".into(),
                        country_name: "Ghana".into(),
                    },
                )
                .await
        });

        let (request, responder) = expect_request(&mut receiver).await.unwrap();
        match request {
            Request::Edit(id, form) => {
                assert_eq!(id, 3);
                assert_eq!(form.country_code, "GH");
            }
            other => panic!("Expected Edit, got {other:?}"),
        }
        responder
            .unwrap()
            .send(Ok(Success::Edited(Country {
                country_id: 3,
                country_code: "GH".into(),
                country_name: "Ghana".into(),
            })))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap().country_name, "Ghana");
    }

    #[tokio::test]
    async fn test_fetch_all_uses_trait_default() {
        let (client, mut receiver) = create_mock_client::<HsnCode>(10);
        let codes = HsnCodeClient::new(client);

        let task = tokio::spawn(async move { codes.fetch_all().await });

        let (request, responder) = expect_request(&mut receiver).await.unwrap();
        assert!(matches!(request, Request::Fetch));
        responder
            .unwrap()
            .send(Ok(Success::Fetched(Listing::new(vec![HsnCode {
                hsn_id: 1,
                hsn_code: "1001".into(),
                hsn_description: String::new(),
                documents: vec![],
            }]))))
            .unwrap();

        let codes = task.await.unwrap().unwrap();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].hsn_code, "1001");
    }

    #[tokio::test]
    async fn test_add_failure_surfaces_server_message() {
        let (client, mut receiver) = create_mock_client::<HsnCode>(10);
        let codes = HsnCodeClient::new(client);

        let task = tokio::spawn(async move {
            codes
                .add(HsnForm {
                    hsn_code: "1001".into(),
                    hsn_description: "Wheat".into(),
                    document_types: vec![],
                })
                .await
        });

        let (_, responder) = expect_request(&mut receiver).await.unwrap();
        responder
            .unwrap()
            .send(Err(StoreError::Failed("HSN code already exists".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(CatalogError::RequestFailed("HSN code already exists".into()))
        );
    }

    #[tokio::test]
    async fn test_closed_store_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Country>(10);
        drop(receiver);

        let result = CountryClient::new(client).delete(5).await;
        assert!(matches!(
            result,
            Err(CatalogError::StoreCommunicationError(_))
        ));
    }
}
