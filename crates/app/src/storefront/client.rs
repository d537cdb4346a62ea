//! HTTP client for storefront webhooks.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::storefront::{
    StorefrontError,
    models::{NotificationReply, OrderStatusNotification, PlateStatusNotification},
};

const ORDER_STATUS_PATH: &str = "webhooks/order-status";
const PLATE_STATUS_PATH: &str = "webhooks/plate-status";

#[automock]
#[async_trait]
/// Forwards ERP events to the storefront.
pub trait StorefrontNotifier: Send + Sync {
    async fn send_order_status(
        &self,
        notification: OrderStatusNotification,
    ) -> Result<NotificationReply, StorefrontError>;

    async fn send_plate_status(
        &self,
        notification: PlateStatusNotification,
    ) -> Result<NotificationReply, StorefrontError>;
}

/// Configuration for reaching the storefront.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Storefront base address, e.g. `"https://shop.example.com"`.
    pub url: String,

    /// Bearer token accepted by the storefront webhooks.
    pub token: String,

    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct HttpStorefrontNotifier {
    config: StorefrontConfig,
    http: Client,
}

impl HttpStorefrontNotifier {
    /// Create a notifier from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<NotificationReply, StorefrontError> {
        let url = format!("{}/{path}", self.config.url.trim_end_matches('/'));

        debug!(%url, "notifying storefront");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StorefrontError::UnexpectedResponse(format!(
                "{path} failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StorefrontNotifier for HttpStorefrontNotifier {
    async fn send_order_status(
        &self,
        notification: OrderStatusNotification,
    ) -> Result<NotificationReply, StorefrontError> {
        self.post(ORDER_STATUS_PATH, &notification).await
    }

    async fn send_plate_status(
        &self,
        notification: PlateStatusNotification,
    ) -> Result<NotificationReply, StorefrontError> {
        self.post(PLATE_STATUS_PATH, &notification).await
    }
}
