//! Pre-order Payment Confirm Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    purchases::{
        errors::into_status_error,
        models::{PurchaseDetailResponse, SalesOrderRequest},
    },
    state::State,
};

/// Pre-order Payment Confirm Handler
///
/// Confirms a booking fee; `sales_order_id` names the booking fee.
#[endpoint(
    tags("pre-orders"),
    summary = "Confirm Pre-order Payment",
    responses(
        (status_code = StatusCode::OK, description = "Booking fee invoice"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SalesOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<PurchaseDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let confirmation = state
        .app
        .purchases
        .pre_order_payment_confirm(json.into_inner().sales_order_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(confirmation.into()))
}
