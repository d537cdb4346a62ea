//! Cancel Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    bookings::{
        errors::into_status_error,
        models::{BookingOutcomeResponse, CancelBookingRequest},
    },
    extensions::*,
    state::State,
};

/// Cancel Booking Handler
#[endpoint(
    tags("bookings"),
    summary = "Cancel Booking",
    responses(
        (status_code = StatusCode::OK, description = "Booking outcome"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CancelBookingRequest>,
    depot: &mut Depot,
) -> Result<Json<BookingOutcomeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let outcome = state
        .app
        .bookings
        .cancel_booking(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(outcome.into()))
}
