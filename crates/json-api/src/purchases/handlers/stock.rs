//! Purchase Stock Handler

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

/// Purchase Stock Handler
///
/// Checks stock for the requested product lines at a dealer.
#[endpoint(
    tags("purchases"),
    summary = "Check Stock",
    responses(
        (status_code = StatusCode::OK, description = "Stock check outcome"),
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

    let stock = state
        .app
        .purchases
        .purchase_stock(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(stock.into()))
}
