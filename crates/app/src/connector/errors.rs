//! Connector errors.

use thiserror::Error;

use crate::erp::{CoerceError, ErpRpcError, ReplyError};

/// Errors raised by connector operations.
///
/// A procedure answering with a failure code is not an error; it is reported
/// through the operation's response.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("storage error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("ERP call failed: {0}")]
    Rpc(#[from] ErpRpcError),

    #[error("malformed procedure reply: {0}")]
    Reply(#[from] ReplyError),

    #[error(transparent)]
    Coerce(#[from] CoerceError),

    #[error("unexpected ERP reply: {0}")]
    UnexpectedReply(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
