//! Booking request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use showroom_app::{
    connector::models::{
        BookingParams, BookingResponse, CancelBookingParams, EvAvailable, EvProduct,
        ServiceBooking, SlotQuery, SlotTimeResponse, TimeSlot,
    },
    domain::bookings::BookingOutcome,
};

use crate::purchases::models::StatusResponse;

/// Booking Request
///
/// Used for both new bookings and reschedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct BookingRequest {
    /// Booking to move; ignored when creating
    pub booking_id: i32,

    pub location_id: i32,
    pub product_id: i32,

    /// `1` for a showroom visit, anything else for a test drive at home
    pub booking_type_id: i32,

    /// `YYYY-MM-DD`
    pub slot_date: String,

    pub slot_start_time: String,
    pub uid: i32,
    pub address: String,
    pub city: String,
    pub notes: String,
    pub latitude: String,
    pub longitude: String,
}

impl From<BookingRequest> for BookingParams {
    fn from(request: BookingRequest) -> Self {
        BookingParams {
            booking_id: request.booking_id,
            location_id: request.location_id,
            product_id: request.product_id,
            booking_type_id: request.booking_type_id,
            slot_date: request.slot_date,
            slot_start_time: request.slot_start_time,
            uid: request.uid,
            address: request.address,
            city: request.city,
            notes: request.notes,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

/// Cancel Booking Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct CancelBookingRequest {
    pub booking_id: i32,
    pub category_id: i32,
    pub comment: String,
    pub updated_by: String,
}

impl From<CancelBookingRequest> for CancelBookingParams {
    fn from(request: CancelBookingRequest) -> Self {
        CancelBookingParams {
            booking_id: request.booking_id,
            category_id: request.category_id,
            comment: request.comment,
            updated_by: request.updated_by,
        }
    }
}

/// Slot Availability Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct SlotRequest {
    pub product_id: i32,
    pub location_id: i32,

    /// Inclusive, `YYYY-MM-DD`
    pub start_date: String,

    /// Inclusive, `YYYY-MM-DD`
    pub end_date: String,

    pub appointment_type_id: i32,
}

impl From<SlotRequest> for SlotQuery {
    fn from(request: SlotRequest) -> Self {
        SlotQuery {
            product_id: request.product_id,
            location_id: request.location_id,
            start_date: request.start_date,
            end_date: request.end_date,
            appointment_type_id: request.appointment_type_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingDetailResponse {
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

impl From<BookingResponse> for BookingDetailResponse {
    fn from(booking: BookingResponse) -> Self {
        BookingDetailResponse {
            booking_id: booking.booking_id,
            booking_code: booking.booking_code,
            product_id: booking.product_id,
            product_name: booking.product_name,
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            location_id: booking.location_id,
            location_name: booking.location_name,
            address: booking.address,
            address2: booking.address2,
            city: booking.city,
            state: booking.state,
            country: booking.country,
            latitude: booking.latitude,
            longitude: booking.longitude,
            operating_hours: booking.operating_hours,
            notes: booking.notes,
            booking_status: booking.booking_status,
            cancel_category_id: booking.cancel_category_id,
            cancel_category_text: booking.cancel_category_text,
            cancel_date: booking.cancel_date,
            comment: booking.comment,
            appointment_type_id: booking.appointment_type_id,
        }
    }
}

/// Booking Response
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingOutcomeResponse {
    pub status: StatusResponse,
    pub booking: BookingDetailResponse,
}

impl From<BookingOutcome> for BookingOutcomeResponse {
    fn from(outcome: BookingOutcome) -> Self {
        BookingOutcomeResponse {
            status: outcome.status.into(),
            booking: outcome.booking.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct TimeSlotResponse {
    pub start_time: String,
    pub end_time: String,
    pub iso_start_time: String,
    pub iso_end_time: String,
    pub available: String,
}

impl From<TimeSlot> for TimeSlotResponse {
    fn from(slot: TimeSlot) -> Self {
        TimeSlotResponse {
            start_time: slot.start_time,
            end_time: slot.end_time,
            iso_start_time: slot.iso_start_time,
            iso_end_time: slot.iso_end_time,
            available: slot.available,
        }
    }
}

/// Slots for one day at one location
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct SlotDayResponse {
    pub location_id: i32,
    pub location_name: String,
    pub product_id: i32,
    pub product_name: String,
    pub appointment_type_id: i32,
    pub appointment_type_name: String,
    pub date: String,
    pub time_slots: Vec<TimeSlotResponse>,
}

impl From<SlotTimeResponse> for SlotDayResponse {
    fn from(day: SlotTimeResponse) -> Self {
        SlotDayResponse {
            location_id: day.location_id,
            location_name: day.location_name,
            product_id: day.product_id,
            product_name: day.product_name,
            appointment_type_id: day.appointment_type_id,
            appointment_type_name: day.appointment_type_name,
            date: day.date,
            time_slots: day.time_slots.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct EvProductResponse {
    pub product_id: i32,
    pub product_code: String,
    pub product_name: String,
}

impl From<EvProduct> for EvProductResponse {
    fn from(product: EvProduct) -> Self {
        EvProductResponse {
            product_id: product.product_id,
            product_code: product.product_code,
            product_name: product.product_name,
        }
    }
}

/// Location offering test drives, with its available products
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct EvLocationResponse {
    pub location_id: i32,
    pub street: String,
    pub street2: String,
    pub city_id: i32,
    pub city: String,
    pub state: String,
    pub longitude: String,
    pub latitude: String,
    pub company_name: String,
    pub products: Vec<EvProductResponse>,
}

impl From<EvAvailable> for EvLocationResponse {
    fn from(location: EvAvailable) -> Self {
        EvLocationResponse {
            location_id: location.location_id,
            street: location.street,
            street2: location.street2,
            city_id: location.city_id,
            city: location.city,
            state: location.state,
            longitude: location.longitude,
            latitude: location.latitude,
            company_name: location.company_name,
            products: location.products.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceBookingResponse {
    pub booking_id: String,
    pub booking_code: String,
    pub service_type: String,
    pub vehicle_name: String,
    pub license_plate: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location_id: String,
    pub location_name: String,
    pub status: String,
    pub notes: String,
}

impl From<ServiceBooking> for ServiceBookingResponse {
    fn from(booking: ServiceBooking) -> Self {
        ServiceBookingResponse {
            booking_id: booking.booking_id,
            booking_code: booking.booking_code,
            service_type: booking.service_type,
            vehicle_name: booking.vehicle_name,
            license_plate: booking.license_plate,
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            location_id: booking.location_id,
            location_name: booking.location_name,
            status: booking.status,
            notes: booking.notes,
        }
    }
}
