//! Licence Status Webhook Handler

use std::sync::Arc;

use salvo::prelude::*;

use showroom_app::storefront::models::PlateStatusNotification;

use crate::{
    extensions::*, purchases::errors::into_status_error, state::State,
    webhooks::models::NotificationResponse,
};

/// Licence Status Webhook Handler
///
/// Accepts a licence plate registration update from the ERP and forwards it
/// to the storefront.
#[endpoint(
    tags("webhooks"),
    summary = "Licence Status Webhook",
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
        .parse_json::<PlateStatusNotification>()
        .await
        .or_400("invalid licence status payload")?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reply = state
        .app
        .purchases
        .licence_status_webhook(notification)
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
        domain::purchases::MockPurchasesService, storefront::models::NotificationReply,
    };

    use crate::test_helpers::purchases_service;

    use super::*;

    #[tokio::test]
    async fn test_licence_status_relays_storefront_reply() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_licence_status_webhook()
            .once()
            .withf(|notification| {
                notification.invoice_number == "INV/2022/0301"
                    && notification.license_plate == "B 1234 EV"
                    && notification.status == "registered"
            })
            .return_once(|_| {
                Ok(NotificationReply {
                    success: false,
                    message: "Unknown invoice".to_string(),
                })
            });

        let mut res = TestClient::post("http://example.com/webhooks/licence-status")
            .json(&json!({
                "invoice_number": "INV/2022/0301",
                "license_plate": "B 1234 EV",
                "status": "registered",
            }))
            .send(&purchases_service(
                purchases,
                Router::with_path("webhooks/licence-status").post(handler),
            ))
            .await;

        let body: NotificationResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.success);
        assert_eq!(body.message, "Unknown invoice");

        Ok(())
    }
}
