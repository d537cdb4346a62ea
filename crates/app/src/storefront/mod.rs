//! Storefront
//!
//! Downstream notification of ERP events to the e-commerce storefront.

mod client;
mod errors;
pub mod models;

pub use client::*;
pub use errors::StorefrontError;
