//! Bookings service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;

use crate::{
    connector::{
        BookingConnector,
        models::{
            BookingParams, BookingResponse, CancelBookingParams, EvAvailable, ServiceBooking,
            SlotQuery, SlotTimeResponse,
        },
    },
    domain::{bookings::BookingsServiceError, purchases::models::Status},
};

/// Result of a booking change together with its outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingOutcome {
    pub status: Status,
    pub booking: BookingResponse,
}

impl From<BookingResponse> for BookingOutcome {
    fn from(booking: BookingResponse) -> Self {
        Self {
            status: Status::from_code(&booking.code, &booking.message),
            booking,
        }
    }
}

#[automock]
#[async_trait]
/// Booking use cases.
pub trait BookingsService: Send + Sync {
    async fn create_booking(
        &self,
        booking: BookingParams,
    ) -> Result<BookingOutcome, BookingsServiceError>;

    async fn reschedule_booking(
        &self,
        booking: BookingParams,
    ) -> Result<BookingOutcome, BookingsServiceError>;

    async fn cancel_booking(
        &self,
        cancel: CancelBookingParams,
    ) -> Result<BookingOutcome, BookingsServiceError>;

    /// Test drives booked by a customer.
    async fn bookings_by_customer(
        &self,
        uid: i32,
    ) -> Result<Vec<BookingResponse>, BookingsServiceError>;

    async fn time_slots(
        &self,
        query: SlotQuery,
    ) -> Result<Vec<SlotTimeResponse>, BookingsServiceError>;

    /// Locations with EV test drives on offer.
    async fn ev_available(&self) -> Result<Vec<EvAvailable>, BookingsServiceError>;

    async fn service_bookings(
        &self,
        uid: String,
    ) -> Result<Vec<ServiceBooking>, BookingsServiceError>;
}

#[derive(Clone)]
pub struct ErpBookingsService {
    bookings: Arc<dyn BookingConnector>,
}

impl ErpBookingsService {
    #[must_use]
    pub fn new(bookings: Arc<dyn BookingConnector>) -> Self {
        Self { bookings }
    }
}

impl fmt::Debug for ErpBookingsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErpBookingsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl BookingsService for ErpBookingsService {
    async fn create_booking(
        &self,
        booking: BookingParams,
    ) -> Result<BookingOutcome, BookingsServiceError> {
        Ok(self.bookings.create_booking(booking).await?.into())
    }

    async fn reschedule_booking(
        &self,
        booking: BookingParams,
    ) -> Result<BookingOutcome, BookingsServiceError> {
        Ok(self.bookings.reschedule_booking(booking).await?.into())
    }

    async fn cancel_booking(
        &self,
        cancel: CancelBookingParams,
    ) -> Result<BookingOutcome, BookingsServiceError> {
        Ok(self.bookings.cancel_booking(cancel).await?.into())
    }

    async fn bookings_by_customer(
        &self,
        uid: i32,
    ) -> Result<Vec<BookingResponse>, BookingsServiceError> {
        self.bookings
            .bookings_by_customer(uid)
            .await
            .map_err(Into::into)
    }

    async fn time_slots(
        &self,
        query: SlotQuery,
    ) -> Result<Vec<SlotTimeResponse>, BookingsServiceError> {
        self.bookings.time_slots(query).await.map_err(Into::into)
    }

    async fn ev_available(&self) -> Result<Vec<EvAvailable>, BookingsServiceError> {
        self.bookings.ev_available().await.map_err(Into::into)
    }

    async fn service_bookings(
        &self,
        uid: String,
    ) -> Result<Vec<ServiceBooking>, BookingsServiceError> {
        self.bookings.service_bookings(uid).await.map_err(Into::into)
    }
}
