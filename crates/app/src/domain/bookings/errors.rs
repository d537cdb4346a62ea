//! Bookings service errors.

use thiserror::Error;

use crate::connector::ConnectorError;

/// Bookings service error variants.
#[derive(Debug, Error)]
pub enum BookingsServiceError {
    /// The request could not be turned into an ERP call.
    #[error("invalid booking request: {0}")]
    InvalidInput(String),

    /// The ERP call failed or answered with an unusable reply.
    #[error(transparent)]
    Connector(ConnectorError),
}

impl From<ConnectorError> for BookingsServiceError {
    fn from(error: ConnectorError) -> Self {
        match error {
            ConnectorError::InvalidInput(message) => Self::InvalidInput(message),
            other => Self::Connector(other),
        }
    }
}
