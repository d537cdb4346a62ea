//! Bookings
//!
//! Test-drive bookings, slot availability and service bookings.

mod errors;
mod service;

pub use errors::BookingsServiceError;
pub use service::*;
