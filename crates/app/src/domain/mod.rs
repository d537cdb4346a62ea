//! Showroom Use Cases

pub mod bookings;
pub mod purchases;
