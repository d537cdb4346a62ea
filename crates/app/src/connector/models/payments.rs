//! Payment Models

use serde::{Deserialize, Serialize};

use crate::{connector::models::OrderConfirmation, erp::coerce::lenient};

/// Payment request or payment-gateway callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentParams {
    pub sales_order_id: String,
    pub payment_type_id: String,
    pub invoice_number: String,
    pub transaction_id: String,
    pub status: String,
    pub amount: String,
}

/// Order confirmation plus the invoice the payment was raised against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentResponse {
    #[serde(flatten)]
    pub order: OrderConfirmation,

    #[serde(deserialize_with = "lenient::string")]
    pub invoice_id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub invoice_number: String,

    #[serde(deserialize_with = "lenient::string")]
    pub expired_time: String,
}

/// Bare outcome of an ERP call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusReply {
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub message: String,
}
