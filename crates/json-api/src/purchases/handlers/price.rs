//! Product Price Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    purchases::{
        errors::into_status_error,
        models::{PriceRequest, PurchaseDetailResponse},
    },
    state::State,
};

/// Product Price Handler
///
/// Returns the minimum price, booking fee and attributes of a product
/// template at a dealer.
#[endpoint(
    tags("purchases"),
    summary = "Get Product Price",
    responses(
        (status_code = StatusCode::OK, description = "Product price"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PriceRequest>,
    depot: &mut Depot,
) -> Result<Json<PurchaseDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let price = state
        .app
        .purchases
        .product_price(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(price.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showroom_app::{
        connector::models::{Attribute, PriceQuery},
        domain::purchases::{
            MockPurchasesService,
            models::{self as domain, ProductVariant, Status},
        },
    };

    use crate::test_helpers::purchases_service;

    use super::*;

    #[tokio::test]
    async fn test_product_price_success() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_product_price()
            .once()
            .withf(|query| {
                *query
                    == PriceQuery {
                        dealer_id: "12".to_string(),
                        product_code: "EV-1".to_string(),
                    }
            })
            .return_once(|_| {
                Ok(domain::PurchaseDetailResponse {
                    status: Status::new(true, "Success"),
                    order: None,
                    product: Some(ProductVariant {
                        code: "EV-1".to_string(),
                        name: "EV One".to_string(),
                        min_price: 33_000_000,
                        booking_fee_amount: 500_000,
                        attributes: vec![Attribute {
                            attribute_name: "Color".to_string(),
                            variant_name: "Pearl White".to_string(),
                            ..Attribute::default()
                        }],
                    }),
                })
            });

        let mut res = TestClient::post("http://example.com/purchases/price")
            .json(&json!({ "dealer_id": "12", "product_code": "EV-1" }))
            .send(&purchases_service(
                purchases,
                Router::with_path("purchases/price").post(handler),
            ))
            .await;

        let body: PurchaseDetailResponse = res.take_json().await?;
        let product = body.product.ok_or("missing product")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(product.min_price, 33_000_000);
        assert_eq!(product.booking_fee_amount, 500_000);
        assert_eq!(
            product
                .attributes
                .first()
                .map(|attribute| attribute.variant_name.as_str()),
            Some("Pearl White")
        );
        assert!(body.order.is_none());

        Ok(())
    }
}
