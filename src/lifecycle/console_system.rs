use crate::clients::{
    CategoryClient, CountryClient, DocumentTypeClient, HsnCodeClient, ProductClient, UserClient,
    UserDocumentClient,
};
use resource_store::Transport;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime that owns every store of the compliance console.
///
/// `ConsoleSystem` is responsible for:
/// - **Lifecycle Management**: starting the seven stores and stopping them together
/// - **Transport Sharing**: every store sends its effects through the same [`Transport`]
///
/// Stores are independent of each other. A product transition never waits on the
/// country store, and a slow category listing does not hold up users.
///
/// # Example
///
/// ```ignore
/// let transport = Arc::new(HttpTransport::new(&config, session)?);
/// let system = ConsoleSystem::new(transport);
///
/// let products = system.products.fetch_all().await?;
/// system.countries.delete(5).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ConsoleSystem {
    pub products: ProductClient,
    pub countries: CountryClient,
    pub hsn_codes: HsnCodeClient,
    pub categories: CategoryClient,
    pub document_types: DocumentTypeClient,
    pub users: UserClient,
    pub user_documents: UserDocumentClient,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ConsoleSystem {
    /// Spawns every store on the current Tokio runtime.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let (product_store, products) = crate::product_store::new();
        let (country_store, countries) = crate::catalog_store::countries();
        let (hsn_store, hsn_codes) = crate::catalog_store::hsn_codes();
        let (category_store, categories) = crate::catalog_store::categories();
        let (document_type_store, document_types) = crate::catalog_store::document_types();
        let (user_store, users) = crate::user_store::users();
        let (user_document_store, user_documents) = crate::user_store::user_documents();

        let handles = vec![
            tokio::spawn(product_store.run(transport.clone())),
            tokio::spawn(country_store.run(transport.clone())),
            tokio::spawn(hsn_store.run(transport.clone())),
            tokio::spawn(category_store.run(transport.clone())),
            tokio::spawn(document_type_store.run(transport.clone())),
            tokio::spawn(user_store.run(transport.clone())),
            tokio::spawn(user_document_store.run(transport)),
        ];
        info!(stores = handles.len(), "Console system started");

        Self {
            products,
            countries,
            hsn_codes,
            categories,
            document_types,
            users,
            user_documents,
            handles,
        }
    }

    /// Gracefully shuts down every store.
    ///
    /// Dropping the clients closes the store channels; each store finishes what it has
    /// in flight and exits. Clones of a client held elsewhere keep their store alive,
    /// so drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all stores shut down cleanly
    /// - `Err(String)` if any store task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.products);
        drop(self.countries);
        drop(self.hsn_codes);
        drop(self.categories);
        drop(self.document_types);
        drop(self.users);
        drop(self.user_documents);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
