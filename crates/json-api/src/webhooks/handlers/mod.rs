//! Webhook Handlers

pub(crate) mod licence_status;
pub(crate) mod order_status;
