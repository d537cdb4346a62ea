//! Purchase Log Models

use jiff::Timestamp;
use serde_json::Value;

/// A payment attempt to record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchaseLog {
    /// Invoice the payment was raised against.
    pub invoice_id: String,

    /// Raw payment reply as returned by the ERP.
    pub payload: Value,
}

/// New state for every log row of an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseLogStateUpdate {
    pub invoice_id: String,
    pub state: String,
    pub updated_at: Timestamp,
}
