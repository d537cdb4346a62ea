//! Service Bookings Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    bookings::{errors::into_status_error, models::ServiceBookingResponse},
    extensions::*,
    state::State,
};

/// Service Bookings Handler
///
/// Lists after-sales service bookings of a customer.
#[endpoint(
    tags("bookings"),
    summary = "List Service Bookings",
    responses(
        (status_code = StatusCode::OK, description = "Service bookings"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uid: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ServiceBookingResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let bookings = state
        .app
        .bookings
        .service_bookings(uid.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}
