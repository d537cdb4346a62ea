//! Pre-order Handlers

pub(crate) mod confirmation;
pub(crate) mod payment_confirm;
pub(crate) mod payment_status;
