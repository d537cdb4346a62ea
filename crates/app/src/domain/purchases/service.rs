//! Purchases service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, instrument, warn};

use crate::{
    connector::{
        OrderConnector, PaymentConnector, PreOrderConnector,
        models::{
            Attribute, Dealer, DealerQuery, PaymentParams, PreOrderResponse, PriceQuery,
            PurchaseParams, VoucherEntry, parse_id,
        },
    },
    domain::purchases::{
        PurchasesServiceError,
        assembly::build_order,
        models::{
            DealerData, Order, ProductVariant, PurchaseDetailResponse, PurchaseListResponse,
            Status, VoucherData,
        },
    },
    erp::parse_int,
    purchase_logs::{
        PurchaseLogRepository,
        models::{NewPurchaseLog, PurchaseLogStateUpdate},
    },
    side_effects::best_effort,
    storefront::{
        StorefrontNotifier,
        models::{NotificationReply, OrderStatusNotification, PlateStatusNotification},
    },
};

/// Reply code of an ERP call that explicitly failed.
const FAILURE_CODE: &str = "1";

#[automock]
#[async_trait]
/// Purchase use cases.
pub trait PurchasesService: Send + Sync {
    /// Dealers around a coordinate.
    async fn dealer_list(
        &self,
        query: DealerQuery,
    ) -> Result<PurchaseListResponse, PurchasesServiceError>;

    /// Price and attributes of a product template at a dealer.
    async fn product_price(
        &self,
        query: PriceQuery,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError>;

    /// Apply voucher and payment method choices, then report the order.
    async fn order_confirmation(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError>;

    async fn purchase_stock(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError>;

    /// Raise a payment and record it in the purchase log.
    async fn payment(
        &self,
        payment: PaymentParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError>;

    /// Forward a payment-gateway callback and update the purchase log.
    async fn payment_notification(
        &self,
        payment: PaymentParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError>;

    async fn voucher_list(
        &self,
        sales_order_id: String,
    ) -> Result<PurchaseListResponse, PurchasesServiceError>;

    async fn order_status_webhook(
        &self,
        notification: OrderStatusNotification,
    ) -> Result<NotificationReply, PurchasesServiceError>;

    async fn licence_status_webhook(
        &self,
        notification: PlateStatusNotification,
    ) -> Result<NotificationReply, PurchasesServiceError>;

    async fn pre_order_confirmation(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError>;

    async fn pre_order_payment_confirm(
        &self,
        booking_fee_id: String,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError>;

    async fn pre_order_payment_status(
        &self,
        payment: PaymentParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError>;
}

/// Purchases backed by the ERP connector.
#[derive(Clone)]
pub struct ErpPurchasesService {
    orders: Arc<dyn OrderConnector>,
    pre_orders: Arc<dyn PreOrderConnector>,
    payments: Arc<dyn PaymentConnector>,
    purchase_logs: Arc<dyn PurchaseLogRepository>,
    storefront: Arc<dyn StorefrontNotifier>,
}

impl ErpPurchasesService {
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrderConnector>,
        pre_orders: Arc<dyn PreOrderConnector>,
        payments: Arc<dyn PaymentConnector>,
        purchase_logs: Arc<dyn PurchaseLogRepository>,
        storefront: Arc<dyn StorefrontNotifier>,
    ) -> Self {
        Self {
            orders,
            pre_orders,
            payments,
            purchase_logs,
            storefront,
        }
    }

    async fn update_log_state(&self, invoice_id: &str, state: &str) {
        best_effort(
            "update purchase log state",
            self.purchase_logs.update_state(PurchaseLogStateUpdate {
                invoice_id: invoice_id.to_string(),
                state: state.to_string(),
                updated_at: Timestamp::now(),
            }),
        )
        .await;
    }
}

impl fmt::Debug for ErpPurchasesService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErpPurchasesService").finish_non_exhaustive()
    }
}

#[async_trait]
impl PurchasesService for ErpPurchasesService {
    async fn dealer_list(
        &self,
        query: DealerQuery,
    ) -> Result<PurchaseListResponse, PurchasesServiceError> {
        let dealers = self.orders.dealers(query).await?;

        Ok(PurchaseListResponse {
            status: Status::new(true, ""),
            dealers: dealers.into_iter().map(dealer_data).collect(),
            vouchers: Vec::new(),
        })
    }

    async fn product_price(
        &self,
        query: PriceQuery,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError> {
        let templates = self
            .orders
            .product_template_price(parse_id(&query.dealer_id), query.product_code)
            .await?;

        let product = templates
            .into_iter()
            .last()
            .map(|template| ProductVariant {
                code: template.product_template_code,
                name: template.product_template_name,
                min_price: whole_amount(&template.min_unit_price),
                booking_fee_amount: whole_amount(&template.booking_fee_amount),
                attributes: template.attributes,
            })
            .unwrap_or_default();

        Ok(PurchaseDetailResponse {
            status: Status::new(true, ""),
            order: None,
            product: Some(product),
        })
    }

    #[instrument(skip_all, fields(sales_order_id = %purchase.sales_order_id))]
    async fn order_confirmation(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError> {
        if !purchase.sales_order_id.is_empty() {
            let sales_order_id = parse_id(&purchase.sales_order_id);

            if !purchase.voucher_id.is_empty() {
                self.orders
                    .voucher_redeem(sales_order_id, parse_id(&purchase.voucher_id))
                    .await?;
            }

            if purchase.payment_type_id.is_empty() {
                best_effort("reset payment method", async {
                    self.orders
                        .reset_payment_method(sales_order_id)
                        .await
                        .map(|_detail| ())
                })
                .await;
            } else {
                self.orders
                    .set_payment_method(sales_order_id, purchase.payment_type_id.clone())
                    .await?;
            }
        }

        let confirmation = self.orders.order_confirmation(purchase).await?;
        let status = Status::from_code(&confirmation.code, &confirmation.message);

        Ok(PurchaseDetailResponse {
            status,
            order: Some(build_order(confirmation)),
            product: None,
        })
    }

    async fn purchase_stock(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError> {
        let stock = self.orders.product_stock(purchase).await?;

        Ok(PurchaseDetailResponse {
            status: Status::from_code(&stock.code, &stock.message),
            order: None,
            product: Some(ProductVariant {
                attributes: vec![Attribute {
                    product_code: stock.product_code,
                    stock: stock.qty,
                    ..Attribute::default()
                }],
                ..ProductVariant::default()
            }),
        })
    }

    #[instrument(skip_all, fields(sales_order_id = %payment.sales_order_id))]
    async fn payment(
        &self,
        payment: PaymentParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError> {
        let response = self.payments.payment(payment).await?;

        if response.order.code == FAILURE_CODE {
            info!(message = %response.order.message, "payment rejected");
        } else {
            best_effort("insert purchase log", async {
                self.purchase_logs
                    .insert(NewPurchaseLog {
                        invoice_id: response.invoice_number.clone(),
                        payload: serde_json::to_value(&response)?,
                    })
                    .await
            })
            .await;
        }

        let status = Status::from_code(&response.order.code, &response.order.message);

        Ok(PurchaseDetailResponse {
            status,
            order: Some(Order {
                invoice_id: response.invoice_id,
                invoice_number: response.invoice_number,
                expired_time: response.expired_time,
                ..build_order(response.order)
            }),
            product: None,
        })
    }

    #[instrument(skip_all, fields(invoice_number = %payment.invoice_number))]
    async fn payment_notification(
        &self,
        payment: PaymentParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError> {
        let status = match self.payments.payment_notification(payment.clone()).await {
            Ok(reply) => {
                if reply.code == FAILURE_CODE {
                    info!(message = %reply.message, "payment notification rejected");
                }

                Status::new(true, reply.message)
            }
            Err(error) => {
                warn!(%error, "payment notification failed");

                Status::new(false, error.to_string())
            }
        };

        self.update_log_state(&payment.invoice_number, &payment.status)
            .await;

        Ok(PurchaseDetailResponse {
            status,
            ..PurchaseDetailResponse::default()
        })
    }

    async fn voucher_list(
        &self,
        sales_order_id: String,
    ) -> Result<PurchaseListResponse, PurchasesServiceError> {
        let vouchers = match self.orders.voucher_list(parse_id(&sales_order_id)).await {
            Ok(vouchers) => vouchers,
            Err(error) => {
                warn!(%error, "voucher list unavailable");

                return Ok(PurchaseListResponse {
                    status: Status::new(false, error.to_string()),
                    ..PurchaseListResponse::default()
                });
            }
        };

        Ok(PurchaseListResponse {
            status: Status::new(true, ""),
            dealers: Vec::new(),
            vouchers: vouchers.into_iter().map(voucher_data).collect(),
        })
    }

    async fn order_status_webhook(
        &self,
        notification: OrderStatusNotification,
    ) -> Result<NotificationReply, PurchasesServiceError> {
        self.update_log_state(&notification.invoice_number, &notification.status)
            .await;

        Ok(self.storefront.send_order_status(notification).await?)
    }

    async fn licence_status_webhook(
        &self,
        notification: PlateStatusNotification,
    ) -> Result<NotificationReply, PurchasesServiceError> {
        self.update_log_state(&notification.invoice_number, &notification.status)
            .await;

        Ok(self.storefront.send_plate_status(notification).await?)
    }

    #[instrument(skip_all, fields(booking_fee_id = %purchase.sales_order_id))]
    async fn pre_order_confirmation(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError> {
        if !purchase.sales_order_id.is_empty() {
            let booking_fee_id = parse_id(&purchase.sales_order_id);

            if purchase.payment_type_id.is_empty() {
                best_effort("reset pre-order payment method", async {
                    self.pre_orders
                        .reset_pre_order_payment_method(booking_fee_id)
                        .await
                        .map(|_detail| ())
                })
                .await;
            } else {
                self.pre_orders
                    .set_pre_order_payment_method(booking_fee_id, purchase.payment_type_id.clone())
                    .await?;
            }
        }

        let response = self.pre_orders.pre_order_confirmation(purchase).await?;

        Ok(pre_order_detail(response))
    }

    async fn pre_order_payment_confirm(
        &self,
        booking_fee_id: String,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError> {
        let response = self
            .pre_orders
            .pre_order_payment_confirm(parse_id(&booking_fee_id))
            .await?;

        Ok(pre_order_detail(response))
    }

    async fn pre_order_payment_status(
        &self,
        payment: PaymentParams,
    ) -> Result<PurchaseDetailResponse, PurchasesServiceError> {
        let status = match self.pre_orders.pre_order_payment_status(payment).await {
            Ok(reply) => {
                if reply.code == FAILURE_CODE {
                    info!(message = %reply.message, "pre-order payment status rejected");
                }

                Status::new(true, reply.message)
            }
            Err(error) => {
                warn!(%error, "pre-order payment status failed");

                Status::new(false, error.to_string())
            }
        };

        Ok(PurchaseDetailResponse {
            status,
            ..PurchaseDetailResponse::default()
        })
    }
}

fn pre_order_detail(response: PreOrderResponse) -> PurchaseDetailResponse {
    let detail = response.response_detail;

    PurchaseDetailResponse {
        status: Status::from_code(&response.code, &response.message),
        order: Some(Order {
            remaining_amount: parse_int(&detail.remaining_amount),
            invoice_id: detail.invoice_id,
            invoice_number: detail.invoice_number,
            expired_time: detail.expired_time,
            ..build_order(detail.order)
        }),
        product: Some(ProductVariant {
            booking_fee_amount: parse_int(&detail.booking_fee_amount),
            ..ProductVariant::default()
        }),
    }
}

/// Whole currency units of a decimal amount such as `"33000000.0"`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "prices are whole currency units; fractions are dropped"
)]
fn whole_amount(raw: &str) -> i64 {
    raw.trim().parse::<f64>().unwrap_or_default() as i64
}

fn dealer_data(dealer: Dealer) -> DealerData {
    DealerData {
        id: dealer.id,
        location: dealer.name,
        code: dealer.code,
        address1: dealer.address1,
        address2: dealer.address2,
        city: dealer.city,
        state: dealer.province,
        country: dealer.country,
        zip_code: parse_int(&dealer.zip_code),
        latitude: dealer.latitude,
        longitude: dealer.longitude,
        operating_hours: dealer.operating_hours,
        distance: dealer.distance,
        distance_label: dealer.distance_unit,
        is_default: dealer.is_default,
    }
}

fn voucher_data(voucher: VoucherEntry) -> VoucherData {
    VoucherData {
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
        terms: voucher
            .tnc
            .into_iter()
            .map(|term| term.description)
            .collect(),
        available: voucher.available,
    }
}
