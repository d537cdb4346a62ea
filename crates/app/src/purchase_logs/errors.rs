//! Purchase log errors.

use thiserror::Error;

/// Purchase log error variants.
#[derive(Debug, Error)]
pub enum PurchaseLogError {
    /// Payload could not be encoded for storage.
    #[error("invalid purchase log payload")]
    Payload(#[from] serde_json::Error),

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
