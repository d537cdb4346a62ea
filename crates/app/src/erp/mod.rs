//! ERP access: JSON-RPC client, delimited reply decoding and reply coercion.

mod client;
pub mod coerce;
mod errors;
pub mod fields;
mod reply;

pub use client::*;
pub use errors::*;
pub use reply::*;
