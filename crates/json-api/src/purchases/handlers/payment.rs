//! Payment Handler

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

/// Payment Handler
///
/// Raises the invoice for a sales order and records it in the purchase log.
#[endpoint(
    tags("purchases"),
    summary = "Create Payment",
    responses(
        (status_code = StatusCode::OK, description = "Invoice raised"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<PurchaseDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let payment = state
        .app
        .purchases
        .payment(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(payment.into()))
}
