//! Purchase request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use showroom_app::{
    connector::models::{
        Attribute, DealerQuery, OrderLine, PaymentParams, PriceQuery, PurchaseParams,
    },
    domain::purchases::models as domain,
};

/// Product attribute and the variant chosen for it
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct ProductAttribute {
    pub attribute_id: String,
    pub attribute_name: String,
    pub variant_id: String,
    pub variant_name: String,
    pub label: String,
    pub product_code: String,
    pub stock: String,
}

impl From<ProductAttribute> for Attribute {
    fn from(attribute: ProductAttribute) -> Self {
        Attribute {
            attribute_id: attribute.attribute_id,
            attribute_name: attribute.attribute_name,
            variant_id: attribute.variant_id,
            variant_name: attribute.variant_name,
            label: attribute.label,
            product_code: attribute.product_code,
            stock: attribute.stock,
        }
    }
}

impl From<Attribute> for ProductAttribute {
    fn from(attribute: Attribute) -> Self {
        ProductAttribute {
            attribute_id: attribute.attribute_id,
            attribute_name: attribute.attribute_name,
            variant_id: attribute.variant_id,
            variant_name: attribute.variant_name,
            label: attribute.label,
            product_code: attribute.product_code,
            stock: attribute.stock,
        }
    }
}

/// Requested product line
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct OrderLineRequest {
    pub product_code: String,
    pub qty: i32,
    pub attributes: Vec<ProductAttribute>,
}

impl From<OrderLineRequest> for OrderLine {
    fn from(line: OrderLineRequest) -> Self {
        OrderLine {
            product_code: line.product_code,
            qty: line.qty,
            attributes: line.attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Purchase Request
///
/// Shared by stock checks, order confirmation and pre-order confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct PurchaseRequest {
    /// ERP partner id of the customer
    pub customer_id: String,

    pub dealer_id: String,

    /// Existing sales order (or booking fee); empty or `0` for a new one
    pub sales_order_id: String,

    pub voucher_id: String,
    pub payment_type_id: String,
    pub product_code: String,
    pub orders: Vec<OrderLineRequest>,
}

impl From<PurchaseRequest> for PurchaseParams {
    fn from(request: PurchaseRequest) -> Self {
        PurchaseParams {
            customer_id: request.customer_id,
            dealer_id: request.dealer_id,
            sales_order_id: request.sales_order_id,
            voucher_id: request.voucher_id,
            payment_type_id: request.payment_type_id,
            product_code: request.product_code,
            orders: request.orders.into_iter().map(Into::into).collect(),
        }
    }
}

/// Dealer List Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct DealerListRequest {
    /// Dealer marked as the customer's default, if any
    pub erp_partner_id: i32,
    pub longitude: String,
    pub latitude: String,
}

impl From<DealerListRequest> for DealerQuery {
    fn from(request: DealerListRequest) -> Self {
        DealerQuery {
            erp_partner_id: request.erp_partner_id,
            longitude: request.longitude,
            latitude: request.latitude,
        }
    }
}

/// Product Price Request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct PriceRequest {
    pub dealer_id: String,
    pub product_code: String,
}

impl From<PriceRequest> for PriceQuery {
    fn from(request: PriceRequest) -> Self {
        PriceQuery {
            dealer_id: request.dealer_id,
            product_code: request.product_code,
        }
    }
}

/// Request naming a sales order or booking fee
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct SalesOrderRequest {
    pub sales_order_id: String,
}

/// Payment Request
///
/// Used for raising payments and for payment-gateway callbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct PaymentRequest {
    pub sales_order_id: String,
    pub payment_type_id: String,
    pub invoice_number: String,
    pub transaction_id: String,
    pub status: String,
    pub amount: String,
}

impl From<PaymentRequest> for PaymentParams {
    fn from(request: PaymentRequest) -> Self {
        PaymentParams {
            sales_order_id: request.sales_order_id,
            payment_type_id: request.payment_type_id,
            invoice_number: request.invoice_number,
            transaction_id: request.transaction_id,
            status: request.status,
            amount: request.amount,
        }
    }
}

/// Outcome of the backend call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl From<domain::Status> for StatusResponse {
    fn from(status: domain::Status) -> Self {
        StatusResponse {
            success: status.success,
            message: status.message,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub name: String,

    /// Positive amount in whole currency units
    pub value: i64,

    pub label: String,
    pub attributes: Vec<ProductAttribute>,
}

impl From<domain::OrderItem> for OrderItemResponse {
    fn from(item: domain::OrderItem) -> Self {
        OrderItemResponse {
            name: item.name,
            value: item.value,
            label: item.label,
            attributes: item.attributes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderComponentResponse {
    pub items: Vec<OrderItemResponse>,
    pub vouchers: Vec<OrderItemResponse>,
    pub discounts: Vec<OrderItemResponse>,
    pub total: i64,
}

impl From<domain::OrderComponent> for OrderComponentResponse {
    fn from(component: domain::OrderComponent) -> Self {
        OrderComponentResponse {
            items: component.items.into_iter().map(Into::into).collect(),
            vouchers: component.vouchers.into_iter().map(Into::into).collect(),
            discounts: component.discounts.into_iter().map(Into::into).collect(),
            total: component.total,
        }
    }
}

/// Priced order breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub purchase: OrderComponentResponse,
    pub administration: OrderComponentResponse,
    pub reduction: OrderComponentResponse,
    pub total: i64,
    pub sales_order_id: String,
    pub sales_order_number: String,
    pub invoice_id: String,
    pub invoice_number: String,
    pub expired_time: String,
    pub remaining_amount: i64,
}

impl From<domain::Order> for OrderResponse {
    fn from(order: domain::Order) -> Self {
        OrderResponse {
            purchase: order.purchase.into(),
            administration: order.administration.into(),
            reduction: order.reduction.into(),
            total: order.total,
            sales_order_id: order.sales_order_id,
            sales_order_number: order.sales_order_number,
            invoice_id: order.invoice_id,
            invoice_number: order.invoice_number,
            expired_time: order.expired_time,
            remaining_amount: order.remaining_amount,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductVariantResponse {
    pub code: String,
    pub name: String,
    pub min_price: i64,
    pub booking_fee_amount: i64,
    pub attributes: Vec<ProductAttribute>,
}

impl From<domain::ProductVariant> for ProductVariantResponse {
    fn from(product: domain::ProductVariant) -> Self {
        ProductVariantResponse {
            code: product.code,
            name: product.name,
            min_price: product.min_price,
            booking_fee_amount: product.booking_fee_amount,
            attributes: product.attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Purchase Detail Response
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PurchaseDetailResponse {
    pub status: StatusResponse,
    pub order: Option<OrderResponse>,
    pub product: Option<ProductVariantResponse>,
}

impl From<domain::PurchaseDetailResponse> for PurchaseDetailResponse {
    fn from(detail: domain::PurchaseDetailResponse) -> Self {
        PurchaseDetailResponse {
            status: detail.status.into(),
            order: detail.order.map(Into::into),
            product: detail.product.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct DealerResponse {
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

    /// Distance with its unit, e.g. `2.5 km`
    pub distance_label: String,

    pub is_default: bool,
}

impl From<domain::DealerData> for DealerResponse {
    fn from(dealer: domain::DealerData) -> Self {
        DealerResponse {
            id: dealer.id,
            location: dealer.location,
            code: dealer.code,
            address1: dealer.address1,
            address2: dealer.address2,
            city: dealer.city,
            state: dealer.state,
            country: dealer.country,
            zip_code: dealer.zip_code,
            latitude: dealer.latitude,
            longitude: dealer.longitude,
            operating_hours: dealer.operating_hours,
            distance: dealer.distance,
            distance_label: dealer.distance_label,
            is_default: dealer.is_default,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct VoucherResponse {
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
    pub terms: Vec<String>,
    pub available: bool,
}

impl From<domain::VoucherData> for VoucherResponse {
    fn from(voucher: domain::VoucherData) -> Self {
        VoucherResponse {
            id: voucher.id,
            name: voucher.name,
            quota: voucher.quota,
            dealer_id: voucher.dealer_id,
            dealer_code: voucher.dealer_code,
            dealer_name: voucher.dealer_name,
            voucher_code: voucher.voucher_code,
            valid_until: voucher.valid_until,
            label: voucher.label,
            title: voucher.title,
            minimum: voucher.minimum,
            terms: voucher.terms,
            available: voucher.available,
        }
    }
}

/// Purchase List Response
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PurchaseListResponse {
    pub status: StatusResponse,
    pub dealers: Vec<DealerResponse>,
    pub vouchers: Vec<VoucherResponse>,
}

impl From<domain::PurchaseListResponse> for PurchaseListResponse {
    fn from(list: domain::PurchaseListResponse) -> Self {
        PurchaseListResponse {
            status: list.status.into(),
            dealers: list.dealers.into_iter().map(Into::into).collect(),
            vouchers: list.vouchers.into_iter().map(Into::into).collect(),
        }
    }
}
