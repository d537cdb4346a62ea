//! Pre-order Models

use serde::{Deserialize, Serialize};

use crate::{
    connector::models::{Attribute, OrderConfirmation, PurchaseParams, parse_id},
    erp::coerce::lenient,
};

/// Booking-fee creation payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreOrderParams {
    pub partner_id: i32,
    pub company_id: i32,
    pub orders: Vec<PreOrderLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreOrderLine {
    pub product_code: String,
    pub qty: i32,
    pub attributes: Vec<Attribute>,
}

impl From<&PurchaseParams> for PreOrderParams {
    fn from(purchase: &PurchaseParams) -> Self {
        Self {
            partner_id: parse_id(&purchase.customer_id),
            company_id: parse_id(&purchase.dealer_id),
            orders: purchase
                .orders
                .iter()
                .map(|order| PreOrderLine {
                    product_code: order.product_code.clone(),
                    qty: order.qty,
                    attributes: order.attributes.clone(),
                })
                .collect(),
        }
    }
}

/// Booking-fee state as reported by the ERP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreOrderResponse {
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub message: String,

    pub response_detail: PreOrderDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreOrderDetail {
    #[serde(flatten)]
    pub order: OrderConfirmation,

    #[serde(deserialize_with = "lenient::string")]
    pub remaining_amount: String,

    #[serde(deserialize_with = "lenient::string")]
    pub booking_fee_amount: String,

    #[serde(deserialize_with = "lenient::string")]
    pub invoice_id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub invoice_number: String,

    #[serde(deserialize_with = "lenient::string")]
    pub expired_time: String,
}
