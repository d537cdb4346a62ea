//! Purchases
//!
//! Dealer and voucher listings, pricing, order confirmation, payment and
//! pre-order flows, and the ERP webhooks.

pub mod assembly;
mod errors;
pub mod models;
mod service;

pub use errors::PurchasesServiceError;
pub use service::*;
