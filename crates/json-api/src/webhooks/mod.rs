//! Webhooks
//!
//! ERP status callbacks relayed to the storefront.

mod handlers;
pub(crate) mod models;

pub(crate) use handlers::*;
