//! Voucher List Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    purchases::{
        errors::into_status_error,
        models::{PurchaseListResponse, SalesOrderRequest},
    },
    state::State,
};

/// Voucher List Handler
///
/// Lists vouchers applicable to a sales order.
#[endpoint(
    tags("purchases"),
    summary = "List Vouchers",
    responses(
        (status_code = StatusCode::OK, description = "Applicable vouchers"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SalesOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<PurchaseListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let vouchers = state
        .app
        .purchases
        .voucher_list(json.into_inner().sales_order_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(vouchers.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showroom_app::domain::purchases::{
        MockPurchasesService,
        models::{PurchaseListResponse as VoucherList, Status, VoucherData},
    };

    use crate::test_helpers::purchases_service;

    use super::*;

    #[tokio::test]
    async fn test_voucher_list_success() -> TestResult {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_voucher_list()
            .once()
            .withf(|sales_order_id| sales_order_id == "88")
            .return_once(|_| {
                Ok(VoucherList {
                    status: Status::new(true, "Success"),
                    dealers: Vec::new(),
                    vouchers: vec![VoucherData {
                        id: "5".to_string(),
                        voucher_code: "LAUNCH22".to_string(),
                        terms: vec!["One per customer".to_string(), "Until March".to_string()],
                        available: true,
                        ..VoucherData::default()
                    }],
                })
            });

        let mut res = TestClient::post("http://example.com/purchases/vouchers")
            .json(&json!({ "sales_order_id": "88" }))
            .send(&purchases_service(
                purchases,
                Router::with_path("purchases/vouchers").post(handler),
            ))
            .await;

        let body: PurchaseListResponse = res.take_json().await?;
        let voucher = body.vouchers.first().ok_or("missing voucher")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(voucher.voucher_code, "LAUNCH22");
        assert_eq!(voucher.terms.len(), 2);
        assert!(voucher.available);

        Ok(())
    }
}
