//! Order Models

use serde::{Deserialize, Serialize};

use crate::{connector::models::parse_id, erp::coerce::lenient};

/// Reduction type of a discount line; every other line is regular.
pub const DISCOUNT_REDUCTION: &str = "discount";

/// Product attribute ids used to pick a vehicle variant.
pub mod attribute_ids {
    pub const MIRROR: &str = "4";
    pub const WHEEL: &str = "5";
    pub const COLOR: &str = "10";
    pub const BATTERY: &str = "11";
}

/// A selected product attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[serde(deserialize_with = "lenient::string")]
    pub attribute_id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub attribute_name: String,

    #[serde(deserialize_with = "lenient::string")]
    pub variant_id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub variant_name: String,

    #[serde(deserialize_with = "lenient::string")]
    pub label: String,

    #[serde(deserialize_with = "lenient::string")]
    pub product_code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub stock: String,
}

/// A requested product with its attribute choices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderLine {
    pub product_code: String,
    pub qty: i32,
    pub attributes: Vec<Attribute>,
}

/// Purchase request shared by order confirmation, stock and pre-orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseParams {
    /// `""` or `"0"` for a guest.
    pub customer_id: String,
    pub dealer_id: String,
    /// Existing sales order or booking fee; empty for a new one.
    pub sales_order_id: String,
    pub voucher_id: String,
    pub payment_type_id: String,
    pub product_code: String,
    pub orders: Vec<OrderLine>,
}

impl PurchaseParams {
    #[must_use]
    pub fn is_guest(&self) -> bool {
        matches!(self.customer_id.trim(), "" | "0")
    }
}

/// Vehicle variant picked by the last requested order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSelection {
    pub vehicle_code: String,
    pub color: String,
    pub battery: String,
    pub mirror: String,
    pub wheel: String,
}

impl Default for VariantSelection {
    fn default() -> Self {
        Self {
            vehicle_code: String::new(),
            color: "0".to_string(),
            battery: "0".to_string(),
            mirror: "0".to_string(),
            wheel: "0".to_string(),
        }
    }
}

impl VariantSelection {
    /// Later lines override earlier ones.
    #[must_use]
    pub fn from_orders(orders: &[OrderLine]) -> Self {
        let mut selection = Self::default();

        for order in orders {
            selection.vehicle_code.clone_from(&order.product_code);

            for attribute in &order.attributes {
                let slot = match attribute.attribute_id.as_str() {
                    attribute_ids::MIRROR => &mut selection.mirror,
                    attribute_ids::WHEEL => &mut selection.wheel,
                    attribute_ids::COLOR => &mut selection.color,
                    attribute_ids::BATTERY => &mut selection.battery,
                    _ => continue,
                };

                slot.clone_from(&attribute.variant_id);
            }
        }

        selection
    }
}

/// Arguments for the priced product lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLookup {
    pub dealer_id: i32,
    pub customer_id: i32,
    pub variants: VariantSelection,
}

impl ProductLookup {
    #[must_use]
    pub fn for_purchase(purchase: &PurchaseParams) -> Self {
        Self {
            dealer_id: parse_id(&purchase.dealer_id),
            customer_id: parse_id(&purchase.customer_id),
            variants: VariantSelection::from_orders(&purchase.orders),
        }
    }
}

/// Sales order summary as reported by the ERP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfirmation {
    #[serde(deserialize_with = "lenient::string")]
    pub code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub message: String,

    #[serde(deserialize_with = "lenient::string")]
    pub so_id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub so_number: String,

    #[serde(deserialize_with = "lenient::string")]
    pub amount_untaxed: String,

    #[serde(deserialize_with = "lenient::string")]
    pub tax: String,

    #[serde(deserialize_with = "lenient::int")]
    pub total: i64,

    #[serde(deserialize_with = "lenient::string")]
    pub grand_total: String,

    pub purchase: LineGroup,
    pub administrations: LineGroup,
    pub reductions: LineGroup,
}

impl OrderConfirmation {
    /// A confirmation carrying only an outcome.
    #[must_use]
    pub fn outcome(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            ..Self::default()
        }
    }
}

/// A group of order lines with the ERP's running total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineGroup {
    #[serde(deserialize_with = "lenient::string")]
    pub total: String,

    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    #[serde(alias = "odoo_name", deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(alias = "odoo_value", deserialize_with = "lenient::string")]
    pub value: String,

    #[serde(deserialize_with = "lenient::string")]
    pub label: String,

    #[serde(deserialize_with = "lenient::string")]
    pub reduction_type: String,

    pub attributes: Vec<Attribute>,
}

impl LineItem {
    #[must_use]
    pub fn is_discount(&self) -> bool {
        self.reduction_type == DISCOUNT_REDUCTION
    }
}

/// Stock availability for the selected variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseStock {
    pub code: String,
    pub message: String,
    pub product_code: String,
    pub qty: String,
    pub product_price: String,
}

/// Product template price listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductTemplate {
    #[serde(deserialize_with = "lenient::string")]
    pub product_template_code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub product_template_name: String,

    #[serde(deserialize_with = "lenient::string")]
    pub min_unit_price: String,

    #[serde(deserialize_with = "lenient::string")]
    pub booking_fee_amount: String,

    pub attributes: Vec<Attribute>,
}

/// Price lookup for a product template at a dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceQuery {
    pub dealer_id: String,
    pub product_code: String,
}

/// A voucher applicable to a sales order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoucherEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(deserialize_with = "lenient::int")]
    pub quota: i64,

    #[serde(deserialize_with = "lenient::string")]
    pub dealer_id: String,

    #[serde(deserialize_with = "lenient::string")]
    pub dealer_code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub dealer_name: String,

    #[serde(deserialize_with = "lenient::string")]
    pub voucher_code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub valid_until: String,

    #[serde(deserialize_with = "lenient::string")]
    pub label: String,

    #[serde(deserialize_with = "lenient::string")]
    pub title: String,

    #[serde(deserialize_with = "lenient::int")]
    pub minimum: i64,

    pub tnc: Vec<VoucherTerm>,

    #[serde(deserialize_with = "lenient::bool")]
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoucherTerm {
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

/// Dealer lookup around a coordinate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealerQuery {
    /// ERP partner id of the customer; `0` for a guest.
    pub erp_partner_id: i32,
    pub longitude: String,
    pub latitude: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dealer {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i64,

    #[serde(deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(deserialize_with = "lenient::string")]
    pub code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub address1: String,

    #[serde(deserialize_with = "lenient::string")]
    pub address2: String,

    #[serde(deserialize_with = "lenient::string")]
    pub city: String,

    #[serde(deserialize_with = "lenient::string")]
    pub province: String,

    #[serde(deserialize_with = "lenient::string")]
    pub country: String,

    #[serde(deserialize_with = "lenient::string")]
    pub zip_code: String,

    #[serde(deserialize_with = "lenient::string")]
    pub latitude: String,

    #[serde(deserialize_with = "lenient::string")]
    pub longitude: String,

    #[serde(deserialize_with = "lenient::string")]
    pub operating_hours: String,

    #[serde(deserialize_with = "lenient::string")]
    pub distance: String,

    #[serde(deserialize_with = "lenient::string")]
    pub distance_unit: String,

    #[serde(deserialize_with = "lenient::bool")]
    pub is_default: bool,
}
