//! Pre-order Payment Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    purchases::{
        errors::into_status_error,
        models::{PaymentRequest, PurchaseDetailResponse},
    },
    state::State,
};

/// Pre-order Payment Status Handler
///
/// Records the payment-gateway outcome of a booking fee invoice.
#[endpoint(
    tags("pre-orders"),
    summary = "Pre-order Payment Status",
    responses(
        (status_code = StatusCode::OK, description = "Status recorded"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<PurchaseDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = state
        .app
        .purchases
        .pre_order_payment_status(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(status.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showroom_app::domain::purchases::{
        MockPurchasesService,
        models::{self as domain, Status},
    };

    use crate::test_helpers::purchases_service;

    use super::*;

    #[tokio::test]
    async fn test_rejected_status_is_reported_in_body() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_pre_order_payment_status()
            .once()
            .withf(|payment| payment.invoice_number == "BF/2022/0041" && payment.status == "expire")
            .return_once(|_| {
                Ok(domain::PurchaseDetailResponse {
                    status: Status::new(false, "Invoice already paid"),
                    ..domain::PurchaseDetailResponse::default()
                })
            });

        let mut res = TestClient::post("http://example.com/pre-orders/payment-status")
            .json(&json!({
                "invoice_number": "BF/2022/0041",
                "status": "expire",
                "transaction_id": "trx-90",
            }))
            .send(&purchases_service(
                purchases,
                Router::with_path("pre-orders/payment-status").post(handler),
            ))
            .await;

        let body: PurchaseDetailResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.status.success);
        assert_eq!(body.status.message, "Invoice already paid");

        Ok(())
    }
}
