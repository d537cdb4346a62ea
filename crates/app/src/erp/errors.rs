//! ERP errors.

use thiserror::Error;

/// Errors that can occur when calling the ERP object model.
#[derive(Debug, Error)]
pub enum ErpRpcError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The ERP answered with a non-2xx status or an unreadable envelope.
    #[error("unexpected response from ERP: {0}")]
    UnexpectedResponse(String),

    /// The ERP raised an error while executing the method.
    #[error("{0}")]
    Fault(String),

    /// The configured credentials were not accepted.
    #[error("ERP refused login for user {0}")]
    LoginRefused(String),
}

/// A delimited reply did not carry the field the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    /// Positional access past the end of the reply.
    #[error("reply has {len} fields, field {index} requested")]
    MissingField {
        /// Requested position.
        index: usize,
        /// Number of fields actually present.
        len: usize,
    },
}

/// A reply value could not be shaped into the requested structure.
#[derive(Debug, Error)]
#[error("could not coerce ERP reply: {0}")]
pub struct CoerceError(#[from] serde_json::Error);
