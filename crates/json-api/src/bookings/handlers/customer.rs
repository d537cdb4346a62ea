//! Customer Bookings Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    bookings::{errors::into_status_error, models::BookingDetailResponse},
    extensions::*,
    state::State,
};

/// Customer Bookings Handler
///
/// Lists the test drives booked by a customer.
#[endpoint(
    tags("bookings"),
    summary = "List Customer Bookings",
    responses(
        (status_code = StatusCode::OK, description = "Customer bookings"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uid: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<Vec<BookingDetailResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let bookings = state
        .app
        .bookings
        .bookings_by_customer(uid.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}
