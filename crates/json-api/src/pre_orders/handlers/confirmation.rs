//! Pre-order Confirmation Handler

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

/// Pre-order Confirmation Handler
///
/// Creates a booking fee when `sales_order_id` is empty or `0`, otherwise
/// returns the existing one.
#[endpoint(
    tags("pre-orders"),
    summary = "Confirm Pre-order",
    responses(
        (status_code = StatusCode::OK, description = "Booking fee breakdown"),
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

    let pre_order = state
        .app
        .purchases
        .pre_order_confirmation(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(pre_order.into()))
}
