//! Purchases service errors.

use thiserror::Error;

use crate::{connector::ConnectorError, storefront::StorefrontError};

/// Purchases service error variants.
#[derive(Debug, Error)]
pub enum PurchasesServiceError {
    /// The ERP call failed or answered with an unusable reply.
    #[error(transparent)]
    Connector(#[from] ConnectorError),

    /// The storefront could not be notified.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),
}
