//! Order Status Webhook Handler

use std::sync::Arc;

use salvo::prelude::*;

use showroom_app::storefront::models::OrderStatusNotification;

use crate::{
    extensions::*, purchases::errors::into_status_error, state::State,
    webhooks::models::NotificationResponse,
};

/// Order Status Webhook Handler
///
/// Accepts an order status change from the ERP and forwards it, including
/// any fields not named here, to the storefront.
#[endpoint(
    tags("webhooks"),
    summary = "Order Status Webhook",
    responses(
        (status_code = StatusCode::OK, description = "Storefront acknowledgement"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Storefront notification failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<NotificationResponse>, StatusError> {
    let notification = req
        .parse_json::<OrderStatusNotification>()
        .await
        .or_400("invalid order status payload")?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reply = state
        .app
        .purchases
        .order_status_webhook(notification)
        .await
        .map_err(into_status_error)?;

    Ok(Json(reply.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showroom_app::{
        domain::purchases::{MockPurchasesService, PurchasesServiceError},
        storefront::{StorefrontError, models::NotificationReply},
    };

    use crate::test_helpers::purchases_service;

    use super::*;

    fn make_service(purchases: MockPurchasesService) -> Service {
        purchases_service(purchases, Router::with_path("webhooks/order-status").post(handler))
    }

    #[tokio::test]
    async fn test_order_status_is_forwarded_with_unknown_fields() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_order_status_webhook()
            .once()
            .withf(|notification| {
                notification.invoice_number == "INV/2022/0301"
                    && notification.status == "delivered"
                    && notification.extra.get("courier") == Some(&json!("JNE"))
            })
            .return_once(|_| {
                Ok(NotificationReply {
                    success: true,
                    message: "Order updated".to_string(),
                })
            });

        let mut res = TestClient::post("http://example.com/webhooks/order-status")
            .json(&json!({
                "invoice_number": "INV/2022/0301",
                "status": "delivered",
                "courier": "JNE",
            }))
            .send(&make_service(purchases))
            .await;

        let body: NotificationResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            NotificationResponse {
                success: true,
                message: "Order updated".to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_payload_returns_400() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases.expect_order_status_webhook().never();

        let res = TestClient::post("http://example.com/webhooks/order-status")
            .raw_json("{\"invoice_number\": ")
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_storefront_failure_returns_502() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases.expect_order_status_webhook().once().return_once(|_| {
            Err(PurchasesServiceError::Storefront(
                StorefrontError::UnexpectedResponse("503 Service Unavailable".to_string()),
            ))
        });

        let res = TestClient::post("http://example.com/webhooks/order-status")
            .json(&json!({ "invoice_number": "INV/2022/0301", "status": "delivered" }))
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));

        Ok(())
    }
}
