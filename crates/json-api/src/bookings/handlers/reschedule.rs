//! Reschedule Booking Handler

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

/// Reschedule Booking Handler
///
/// Moves an existing booking to another slot.
#[endpoint(
    tags("bookings"),
    summary = "Reschedule Booking",
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
        .reschedule_booking(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use showroom_app::{
        connector::models::BookingResponse,
        domain::bookings::{BookingOutcome, MockBookingsService},
    };

    use crate::test_helpers::bookings_service;

    use super::*;

    #[tokio::test]
    async fn test_full_slot_is_reported_in_status() -> TestResult {
        let mut bookings = MockBookingsService::new();

        bookings
            .expect_reschedule_booking()
            .once()
            .withf(|booking| booking.booking_id == 733 && booking.slot_date == "2022-03-08")
            .return_once(|_| Ok(BookingOutcome::from(BookingResponse::outcome("1", "Slot is full"))));

        let mut res = TestClient::post("http://example.com/bookings/reschedule")
            .json(&json!({
                "booking_id": 733,
                "slot_date": "2022-03-08",
                "slot_start_time": "13:00",
            }))
            .send(&bookings_service(
                bookings,
                Router::with_path("bookings/reschedule").post(handler),
            ))
            .await;

        let body: BookingOutcomeResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.status.success);
        assert_eq!(body.status.message, "Slot is full");

        Ok(())
    }
}
