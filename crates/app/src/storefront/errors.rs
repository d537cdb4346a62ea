//! Storefront errors.

use thiserror::Error;

/// Errors that can occur when notifying the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The storefront returned a non-2xx response.
    #[error("unexpected response from storefront: {0}")]
    UnexpectedResponse(String),
}
