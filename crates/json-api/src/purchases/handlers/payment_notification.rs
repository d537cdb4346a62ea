//! Payment Notification Handler

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

/// Payment Notification Handler
///
/// Forwards a payment-gateway callback to the ERP. A rejected callback is
/// reported in the response status rather than as an error.
#[endpoint(
    tags("purchases"),
    summary = "Payment Notification",
    responses(
        (status_code = StatusCode::OK, description = "Callback forwarded"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<PurchaseDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let notification = state
        .app
        .purchases
        .payment_notification(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(notification.into()))
}
