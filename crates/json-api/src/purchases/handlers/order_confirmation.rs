//! Order Confirmation Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    purchases::{
        errors::into_status_error,
        models::{PurchaseDetailResponse, PurchaseRequest},
    },
    state::State,
};

/// Order Confirmation Handler
///
/// Applies the chosen voucher and payment method to a sales order and
/// returns its priced breakdown.
#[endpoint(
    tags("purchases"),
    summary = "Confirm Order",
    responses(
        (status_code = StatusCode::OK, description = "Priced order breakdown"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PurchaseRequest>,
    depot: &mut Depot,
) -> Result<Json<PurchaseDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let confirmation = state
        .app
        .purchases
        .order_confirmation(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(confirmation.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showroom_app::{
        connector::{ConnectorError, models::PurchaseParams},
        domain::purchases::{
            MockPurchasesService, PurchasesServiceError,
            models::{self as domain, Order, OrderComponent, OrderItem, Status},
        },
    };

    use crate::test_helpers::purchases_service;

    use super::*;

    fn make_service(purchases: MockPurchasesService) -> Service {
        purchases_service(
            purchases,
            Router::with_path("purchases/order-confirmation").post(handler),
        )
    }

    #[tokio::test]
    async fn test_order_confirmation_returns_breakdown() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_order_confirmation()
            .once()
            .withf(|purchase| {
                *purchase
                    == PurchaseParams {
                        customer_id: "1083".to_string(),
                        sales_order_id: "88".to_string(),
                        voucher_id: "5".to_string(),
                        payment_type_id: "3".to_string(),
                        ..PurchaseParams::default()
                    }
            })
            .return_once(|_| {
                Ok(domain::PurchaseDetailResponse {
                    status: Status::new(true, "Success"),
                    order: Some(Order {
                        purchase: OrderComponent {
                            items: vec![OrderItem {
                                name: "EV One".to_string(),
                                value: 33_000_000,
                                label: "33.000.000".to_string(),
                                attributes: Vec::new(),
                            }],
                            total: 33_000_000,
                            ..OrderComponent::default()
                        },
                        reduction: OrderComponent {
                            vouchers: vec![OrderItem {
                                name: "Launch Voucher".to_string(),
                                value: 1_500_000,
                                label: "1.500.000".to_string(),
                                attributes: Vec::new(),
                            }],
                            total: 1_500_000,
                            ..OrderComponent::default()
                        },
                        total: 31_500_000,
                        sales_order_id: "88".to_string(),
                        sales_order_number: "SO/0088".to_string(),
                        ..Order::default()
                    }),
                    product: None,
                })
            });

        let mut res = TestClient::post("http://example.com/purchases/order-confirmation")
            .json(&json!({
                "customer_id": "1083",
                "sales_order_id": "88",
                "voucher_id": "5",
                "payment_type_id": "3",
            }))
            .send(&make_service(purchases))
            .await;

        let body: PurchaseDetailResponse = res.take_json().await?;
        let order = body.order.ok_or("missing order")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.status.success);
        assert_eq!(order.total, 31_500_000);
        assert_eq!(order.reduction.total, 1_500_000);
        assert_eq!(order.reduction.vouchers.len(), 1);
        assert_eq!(order.sales_order_number, "SO/0088");

        Ok(())
    }

    #[tokio::test]
    async fn test_order_confirmation_invalid_input_returns_400() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases.expect_order_confirmation().once().return_once(|_| {
            Err(PurchasesServiceError::Connector(ConnectorError::InvalidInput(
                "sales_order_id is required".to_string(),
            )))
        });

        let res = TestClient::post("http://example.com/purchases/order-confirmation")
            .json(&json!({ "customer_id": "1083" }))
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
