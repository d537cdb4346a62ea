//! Booking Models

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::erp::coerce::lenient;

/// Booking type served at a showroom; every other type is on-wheels.
pub const STANDARD_BOOKING_TYPE: i32 = 1;

/// Appointment type whose slots come from the on-wheels schedule.
pub const ON_WHEELS_APPOINTMENT_TYPE: i32 = 2;

/// Where a test drive takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingKind {
    /// At a showroom location.
    Standard,

    /// At the customer's address.
    OnWheels,
}

impl BookingKind {
    #[must_use]
    pub fn from_type_id(booking_type_id: i32) -> Self {
        if booking_type_id == STANDARD_BOOKING_TYPE {
            Self::Standard
        } else {
            Self::OnWheels
        }
    }
}

/// Test-drive booking request, used for create and reschedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingParams {
    /// Existing booking; only read when rescheduling.
    pub booking_id: i32,
    pub location_id: i32,
    pub product_id: i32,
    pub booking_type_id: i32,
    pub slot_date: String,
    pub slot_start_time: String,
    pub uid: i32,
    pub address: String,
    pub city: String,
    pub notes: String,
    pub latitude: String,
    pub longitude: String,
}

impl BookingParams {
    #[must_use]
    pub fn kind(&self) -> BookingKind {
        BookingKind::from_type_id(self.booking_type_id)
    }
}

/// Booking cancellation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CancelBookingParams {
    pub booking_id: i32,
    pub category_id: i32,
    pub comment: String,
    pub updated_by: String,
}

/// A booking as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingResponse {
    pub code: String,
    pub message: String,
    pub booking_id: String,
    pub booking_code: String,
    pub product_id: String,
    pub product_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location_id: String,
    pub location_name: String,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
    pub operating_hours: String,
    pub notes: String,
    pub booking_status: String,
    pub cancel_category_id: String,
    pub cancel_category_text: String,
    pub cancel_date: String,
    pub comment: String,
    pub appointment_type_id: String,
}

impl BookingResponse {
    /// A response carrying only an outcome.
    #[must_use]
    pub fn outcome(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            ..Self::default()
        }
    }
}

/// Slot availability request as received from callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotQuery {
    pub product_id: i32,
    pub location_id: i32,
    /// Inclusive start, `YYYY-MM-DD`.
    pub start_date: String,
    /// Inclusive end, `YYYY-MM-DD`.
    pub end_date: String,
    pub appointment_type_id: i32,
}

/// Validated slot availability range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    pub product_id: i32,
    pub location_id: i32,
    pub start: Date,
    pub end: Date,
    pub appointment_type_id: i32,
}

/// One bookable slot as stored, one row per (location, product, date, slot).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotRow {
    pub location_id: i32,
    pub location_name: String,
    pub product_id: i32,
    pub product_name: String,
    pub appointment_type_id: i32,
    pub appointment_type_name: String,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub iso_start_time: String,
    pub iso_end_time: String,
    pub available: i64,
}

/// Slots for one (product, location, date, appointment type).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotTimeResponse {
    pub location_id: i32,
    pub location_name: String,
    pub product_id: i32,
    pub product_name: String,
    pub appointment_type_id: i32,
    pub appointment_type_name: String,
    pub date: String,
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub iso_start_time: String,
    pub iso_end_time: String,
    pub available: String,
}

/// One (location, product) pair with a test-drive unit available.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvAvailableRow {
    pub location_id: i32,
    pub street: String,
    pub street2: String,
    pub city_id: i32,
    pub city: String,
    pub state: String,
    pub longitude: String,
    pub latitude: String,
    pub company_name: String,
    pub product_id: i32,
    pub product_code: String,
    pub product_name: String,
}

/// A location with every product available for test drives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvAvailable {
    pub location_id: i32,
    pub street: String,
    pub street2: String,
    pub city_id: i32,
    pub city: String,
    pub state: String,
    pub longitude: String,
    pub latitude: String,
    pub company_name: String,
    pub products: Vec<EvProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvProduct {
    pub product_id: i32,
    pub product_code: String,
    pub product_name: String,
}

/// After-sales service booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceBooking {
    #[serde(deserialize_with = "lenient::string")]
    pub booking_id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub booking_code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub service_type: String,

    #[serde(deserialize_with = "lenient::string")]
    pub vehicle_name: String,

    #[serde(deserialize_with = "lenient::string")]
    pub license_plate: String,

    #[serde(deserialize_with = "lenient::string")]
    pub date: String,

    #[serde(deserialize_with = "lenient::string")]
    pub start_time: String,

    #[serde(deserialize_with = "lenient::string")]
    pub end_time: String,

    #[serde(deserialize_with = "lenient::string")]
    pub location_id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub location_name: String,

    #[serde(deserialize_with = "lenient::string")]
    pub status: String,

    #[serde(deserialize_with = "lenient::string")]
    pub notes: String,
}
