//! Purchase Models

use crate::connector::models::Attribute;

/// Outcome reported alongside every purchase response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub success: bool,
    pub message: String,
}

impl Status {
    #[must_use]
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }

    /// Status of an ERP reply whose code is `"0"` on success.
    #[must_use]
    pub fn from_code(code: &str, message: &str) -> Self {
        Self::new(code == "0", message)
    }
}

/// A priced line of an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderItem {
    pub name: String,

    /// Always a positive magnitude.
    pub value: i64,

    pub label: String,
    pub attributes: Vec<Attribute>,
}

/// One section of an order breakdown.
///
/// Purchase and administration sections fill `items`; the reduction section
/// splits its lines into `vouchers` and `discounts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderComponent {
    pub items: Vec<OrderItem>,
    pub vouchers: Vec<OrderItem>,
    pub discounts: Vec<OrderItem>,
    pub total: i64,
}

/// Priced order breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub purchase: OrderComponent,
    pub administration: OrderComponent,
    pub reduction: OrderComponent,
    pub total: i64,
    pub sales_order_id: String,
    pub sales_order_number: String,
    pub invoice_id: String,
    pub invoice_number: String,
    pub expired_time: String,
    pub remaining_amount: i64,
}

/// Product template or variant summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductVariant {
    pub code: String,
    pub name: String,
    pub min_price: i64,
    pub booking_fee_amount: i64,
    pub attributes: Vec<Attribute>,
}

/// Response shared by the single-purchase operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseDetailResponse {
    pub status: Status,
    pub order: Option<Order>,
    pub product: Option<ProductVariant>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealerData {
    pub id: i64,
    pub location: String,
    pub code: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: i64,
    pub latitude: String,
    pub longitude: String,
    pub operating_hours: String,
    pub distance: String,
    pub distance_label: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoucherData {
    pub id: String,
    pub name: String,
    pub quota: i64,
    pub dealer_id: String,
    pub dealer_code: String,
    pub dealer_name: String,
    pub voucher_code: String,
    pub valid_until: String,
    pub label: String,
    pub title: String,
    pub minimum: i64,
    /// Terms and conditions, one entry per clause.
    pub terms: Vec<String>,
    pub available: bool,
}

/// Response shared by the listing operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseListResponse {
    pub status: Status,
    pub dealers: Vec<DealerData>,
    pub vouchers: Vec<VoucherData>,
}
