//! Create Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    bookings::{
        errors::into_status_error,
        models::{BookingOutcomeResponse, BookingRequest},
    },
    extensions::*,
    state::State,
};

/// Create Booking Handler
///
/// Books a test drive at a showroom or at the customer's address.
#[endpoint(
    tags("bookings"),
    summary = "Create Booking",
    responses(
        (status_code = StatusCode::OK, description = "Booking outcome"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<BookingRequest>,
    depot: &mut Depot,
) -> Result<Json<BookingOutcomeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let outcome = state
        .app
        .bookings
        .create_booking(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(outcome.into()))
}
