//! Connector Models

mod bookings;
mod orders;
mod payments;
mod pre_orders;

pub use bookings::*;
pub use orders::*;
pub use payments::*;
pub use pre_orders::*;

/// Parse an id received as text; anything unparsable or out of range is `0`.
#[must_use]
pub fn parse_id(value: &str) -> i32 {
    i32::try_from(crate::erp::parse_int(value)).unwrap_or_default()
}
