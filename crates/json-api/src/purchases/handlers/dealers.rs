//! Dealer List Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    purchases::{
        errors::into_status_error,
        models::{DealerListRequest, PurchaseListResponse},
    },
    state::State,
};

/// Dealer List Handler
///
/// Lists dealers nearest to a coordinate, flagging the customer's default.
#[endpoint(
    tags("purchases"),
    summary = "List Dealers",
    responses(
        (status_code = StatusCode::OK, description = "Dealers ordered by distance"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<DealerListRequest>,
    depot: &mut Depot,
) -> Result<Json<PurchaseListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let dealers = state
        .app
        .purchases
        .dealer_list(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(dealers.into()))
}
