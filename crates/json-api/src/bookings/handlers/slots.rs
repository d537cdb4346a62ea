//! Slot Availability Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    bookings::{
        errors::into_status_error,
        models::{SlotDayResponse, SlotRequest},
    },
    extensions::*,
    state::State,
};

/// Slot Availability Handler
///
/// Lists bookable slots per day for a product and location over an
/// inclusive date range.
#[endpoint(
    tags("bookings"),
    summary = "List Time Slots",
    responses(
        (status_code = StatusCode::OK, description = "Slots grouped by day"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SlotRequest>,
    depot: &mut Depot,
) -> Result<Json<Vec<SlotDayResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let slots = state
        .app
        .bookings
        .time_slots(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(slots.into_iter().map(Into::into).collect()))
}
