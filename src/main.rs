//! # Compliance Console
//!
//! Starts the console's stores against the configured API, loads the product list and
//! reports what the signed-in role may do with each product.
//!
//! Configuration comes from the environment (see [`ConsoleConfig::from_env`]). Without
//! `CONSOLE_SESSION_FILE` the console runs unauthenticated and reports for every role.

use compliance_console::clients::EntityClient;
use compliance_console::config::ConsoleConfig;
use compliance_console::http::HttpTransport;
use compliance_console::lifecycle::{setup_tracing, ConsoleSystem};
use compliance_console::model::{Product, Role};
use compliance_console::session::{FileSession, SessionStore, StaticSession};
use compliance_console::workflow;
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ConsoleConfig::from_env().map_err(|e| e.to_string())?;
    info!(api_url = %config.api_url, "Starting compliance console");

    let session: Arc<dyn SessionStore> = match &config.session_file {
        Some(path) => Arc::new(FileSession::open(path).map_err(|e| e.to_string())?),
        None => {
            warn!("No session file configured, running unauthenticated");
            Arc::new(StaticSession::anonymous())
        }
    };
    let roles = match session.role() {
        Ok(role) => vec![role],
        Err(e) => {
            warn!(error = %e, "No usable role in session, reporting for every role");
            Role::ALL.to_vec()
        }
    };

    let transport = HttpTransport::new(&config, session).map_err(|e| e.to_string())?;
    let system = ConsoleSystem::new(Arc::new(transport));

    let span = tracing::info_span!("product_listing");
    let listing = async {
        info!("Fetching products");
        system.products.fetch_all().await
    }
    .instrument(span)
    .await;

    match listing {
        Ok(products) => {
            info!(count = products.len(), "Products loaded");
            for product in &products {
                for role in &roles {
                    report(*role, product);
                }
            }
        }
        Err(e) => error!(error = %e, "Product listing failed"),
    }

    system.shutdown().await?;

    info!("Console completed successfully");
    Ok(())
}

fn report(role: Role, product: &Product) {
    let actions = workflow::compute_actions(role, product.status, &product.import_statuses());
    if actions.is_empty() {
        return;
    }
    let transitions: Vec<&str> = actions.transitions.iter().map(|t| t.label()).collect();
    info!(
        product_id = product.product_id,
        name = %product.product_displayname,
        %role,
        status = %product.status,
        ?transitions,
        can_edit = actions.can_edit,
        "Available actions"
    );
    for row in &actions.import_rows {
        if !row.transitions.is_empty() {
            info!(
                product_id = product.product_id,
                country_id = row.country_id,
                import_status = %row.import_status,
                transitions = ?row.transitions,
                "Available import actions"
            );
        }
    }
}
