//! Showroom ERP adapter.
//!
//! Translates storefront purchase and booking requests into stored-procedure
//! and object-model calls against the ERP, and reshapes the replies.

pub mod connector;
pub mod context;
pub mod database;
pub mod domain;
pub mod erp;
pub mod purchase_logs;
pub mod side_effects;
pub mod storefront;

#[cfg(test)]
mod test;
