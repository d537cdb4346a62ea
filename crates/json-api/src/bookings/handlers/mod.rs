//! Booking Handlers

pub(crate) mod cancel;
pub(crate) mod create;
pub(crate) mod customer;
pub(crate) mod ev_available;
pub(crate) mod reschedule;
pub(crate) mod services;
pub(crate) mod slots;
