//! Purchase Logs
//!
//! Audit trail of payment attempts, keyed by invoice id. Writes here are
//! never on the critical path of a purchase; callers wrap them in
//! [`crate::side_effects::best_effort`].

mod errors;
pub mod models;
mod repository;

pub use errors::PurchaseLogError;
pub use repository::*;
