//! Purchase Handlers

pub(crate) mod dealers;
pub(crate) mod order_confirmation;
pub(crate) mod payment;
pub(crate) mod payment_notification;
pub(crate) mod price;
pub(crate) mod stock;
pub(crate) mod vouchers;
