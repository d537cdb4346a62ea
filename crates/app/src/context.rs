//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    connector::{OdooConnector, PgProcedureStore},
    database,
    domain::{
        bookings::{BookingsService, ErpBookingsService},
        purchases::{ErpPurchasesService, PurchasesService},
    },
    erp::{ErpConfig, ErpRpcError, OdooClient},
    purchase_logs::PgPurchaseLogRepository,
    storefront::{HttpStorefrontNotifier, StorefrontConfig, StorefrontError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to log in to the ERP")]
    Erp(#[source] ErpRpcError),

    #[error("failed to configure storefront client")]
    Storefront(#[source] StorefrontError),
}

/// Everything needed to reach the adapter's collaborators.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database holding the purchase log.
    pub database_url: String,

    /// ERP database exposing the stored procedures; defaults to `database_url`.
    pub erp_database_url: Option<String>,

    pub erp: ErpConfig,

    pub storefront: StorefrontConfig,
}

#[derive(Clone)]
pub struct AppContext {
    pub purchases: Arc<dyn PurchasesService>,
    pub bookings: Arc<dyn BookingsService>,
}

impl AppContext {
    /// Connect to the databases, log in to the ERP and build the services.
    ///
    /// # Errors
    ///
    /// Returns an error when a database connection, the ERP login or the
    /// storefront client setup fails.
    pub async fn connect(config: AppConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(&config.database_url)
            .await
            .map_err(AppInitError::Database)?;

        let erp_pool = match &config.erp_database_url {
            Some(url) => database::connect(url)
                .await
                .map_err(AppInitError::Database)?,
            None => pool.clone(),
        };

        let rpc = OdooClient::login(config.erp)
            .await
            .map_err(AppInitError::Erp)?;

        let storefront =
            HttpStorefrontNotifier::new(config.storefront).map_err(AppInitError::Storefront)?;

        info!(uid = rpc.uid(), "app context ready");

        let connector = Arc::new(OdooConnector::new(
            Arc::new(PgProcedureStore::new(erp_pool)),
            Arc::new(rpc),
        ));

        Ok(Self {
            purchases: Arc::new(ErpPurchasesService::new(
                connector.clone(),
                connector.clone(),
                connector.clone(),
                Arc::new(PgPurchaseLogRepository::new(pool)),
                Arc::new(storefront),
            )),
            bookings: Arc::new(ErpBookingsService::new(connector)),
        })
    }
}
