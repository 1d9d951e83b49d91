//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` store.
//! It wraps a `ResourceClient<Product>` and exposes domain-specific methods:
//! form submission with redirects, status transitions checked against the workflow,
//! and the per-country import detail.
use crate::clients::entity_client::EntityClient;
use crate::model::{
    CountryId, ImportStatusDetail, Product, ProductForm, ProductId, Role, StatusChange,
};
use crate::product_store::{ProductAction, ProductActionResult, ProductError};
use crate::routes::console;
use crate::workflow::{self, Transition};
use async_trait::async_trait;
use resource_store::{Navigate, ResourceClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the Product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }
}

fn redirect(navigate: impl FnOnce(&str) + Send + 'static, route: &'static str) -> Navigate {
    Box::new(move || navigate(route))
}

impl ProductClient {
    /// Submit a new product. On success `navigate` receives the product list route.
    #[instrument(skip(self, form, navigate))]
    pub async fn add_product(
        &self,
        form: ProductForm,
        navigate: impl FnOnce(&str) + Send + 'static,
    ) -> Result<Product, ProductError> {
        debug!(?form, "add_product called");
        self.inner
            .add(form, Some(redirect(navigate, console::PRODUCT_LIST)))
            .await
            .map_err(ProductError::from)
    }

    /// Submit an edited product. On success `navigate` receives the products route.
    #[instrument(skip(self, form, navigate))]
    pub async fn edit_product(
        &self,
        id: ProductId,
        form: ProductForm,
        navigate: impl FnOnce(&str) + Send + 'static,
    ) -> Result<Product, ProductError> {
        debug!(?form, "edit_product called");
        self.inner
            .edit(id, form, Some(redirect(navigate, console::PRODUCTS)))
            .await
            .map_err(ProductError::from)
    }

    /// Send a status change as is. Prefer [`ProductClient::transition`], which checks it first.
    #[instrument(skip(self))]
    pub async fn update_status(&self, change: StatusChange) -> Result<StatusChange, ProductError> {
        debug!("Sending request");
        match self.inner.perform(ProductAction::UpdateStatus(change)).await? {
            ProductActionResult::StatusUpdated(applied) => Ok(applied),
            ProductActionResult::ImportStatus(_) => Err(unexpected("update_status")),
        }
    }

    /// Check `transition` against the workflow for `role`, then send it.
    ///
    /// A transition the role may not take at the product's (or the country entry's)
    /// status is rejected before anything reaches the store.
    #[instrument(skip(self, product, comments), fields(product_id = product.product_id))]
    pub async fn transition(
        &self,
        role: Role,
        product: &Product,
        transition: Transition,
        comments: impl Into<String> + Send,
        country: Option<CountryId>,
    ) -> Result<StatusChange, ProductError> {
        let change = workflow::plan_transition(role, product, transition, comments, country)?;
        info!(status = %change.status, "Transition planned");
        self.update_status(change).await
    }

    /// Fetch the import detail of one product in one country into the store's `extra`.
    #[instrument(skip(self))]
    pub async fn fetch_import_status(
        &self,
        product_id: ProductId,
        country_id: CountryId,
    ) -> Result<ImportStatusDetail, ProductError> {
        debug!("Sending request");
        let action = ProductAction::FetchImportStatus {
            product_id,
            country_id,
        };
        match self.inner.perform(action).await? {
            ProductActionResult::ImportStatus(detail) => Ok(detail),
            ProductActionResult::StatusUpdated(_) => Err(unexpected("fetch_import_status")),
        }
    }
}

fn unexpected(action: &'static str) -> ProductError {
    ProductError::from(StoreError::UnexpectedOutcome(
        resource_store::Operation::Action(action),
    ))
}
