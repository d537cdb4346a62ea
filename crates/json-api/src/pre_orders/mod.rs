//! Pre-orders
//!
//! Booking-fee flow reusing the purchase request and response bodies.

mod handlers;

pub(crate) use handlers::*;
