//! Sales order, pricing and voucher operations.

use async_trait::async_trait;
use mockall::automock;
use serde_json::{Value, json};
use tracing::{debug, info, instrument};

use crate::{
    connector::{
        ConnectorError, OdooConnector, erp_models,
        models::{
            Attribute, DISCOUNT_REDUCTION, Dealer, DealerQuery, LineGroup, LineItem,
            OrderConfirmation, ProductLookup, ProductTemplate, PurchaseParams, PurchaseStock,
            VoucherEntry, parse_id,
        },
    },
    erp::{
        DelimitedReply, ReplyError,
        coerce::decode_json,
        fields::{MESSAGE, guest_product, product, stock, voucher_code, voucher_line},
    },
};

/// Label attached to the variant included in a guest quote.
const INCLUDED_LABEL: &str = "Included";

/// Sales order type used for orders placed online.
const ONLINE_SALE_ORDER_TYPE: i64 = 2;

#[automock]
#[async_trait]
/// Sales order operations.
pub trait OrderConnector: Send + Sync {
    /// Dealers around a coordinate, with the customer's default dealer flagged.
    async fn dealers(&self, query: DealerQuery) -> Result<Vec<Dealer>, ConnectorError>;

    /// Price list of a product template at a dealer.
    async fn product_template_price(
        &self,
        dealer_id: i32,
        product_code: String,
    ) -> Result<Vec<ProductTemplate>, ConnectorError>;

    /// Quote for a guest, or create and report a sales order for a customer.
    async fn order_confirmation(
        &self,
        purchase: PurchaseParams,
    ) -> Result<OrderConfirmation, ConnectorError>;

    /// Stock of the variant selected by the purchase's attributes.
    async fn product_stock(&self, purchase: PurchaseParams)
    -> Result<PurchaseStock, ConnectorError>;

    /// Apply a voucher to a sales order unless it is already applied.
    async fn voucher_redeem(
        &self,
        sales_order_id: i32,
        voucher_id: i32,
    ) -> Result<OrderConfirmation, ConnectorError>;

    /// Vouchers offered for a sales order.
    async fn voucher_list(&self, sales_order_id: i32) -> Result<Vec<VoucherEntry>, ConnectorError>;

    /// Attach a payment method and report the updated order.
    async fn set_payment_method(
        &self,
        sales_order_id: i32,
        payment_method_code: String,
    ) -> Result<OrderConfirmation, ConnectorError>;

    /// Clear the payment method and report the updated order.
    async fn reset_payment_method(
        &self,
        sales_order_id: i32,
    ) -> Result<OrderConfirmation, ConnectorError>;

    /// Current summary of a sales order.
    async fn sales_order_detail(
        &self,
        sales_order_id: i32,
    ) -> Result<OrderConfirmation, ConnectorError>;
}

#[async_trait]
impl OrderConnector for OdooConnector {
    async fn dealers(&self, query: DealerQuery) -> Result<Vec<Dealer>, ConnectorError> {
        let raw = self.procedures.dealers(&query).await?;

        Ok(decode_json(&raw)?)
    }

    async fn product_template_price(
        &self,
        dealer_id: i32,
        product_code: String,
    ) -> Result<Vec<ProductTemplate>, ConnectorError> {
        let raw = self
            .procedures
            .product_template_price(dealer_id, &product_code)
            .await?;

        Ok(decode_json(&raw)?)
    }

    #[instrument(skip_all, fields(guest = purchase.is_guest()))]
    async fn order_confirmation(
        &self,
        purchase: PurchaseParams,
    ) -> Result<OrderConfirmation, ConnectorError> {
        let lookup = ProductLookup::for_purchase(&purchase);

        if purchase.is_guest() {
            let reply = DelimitedReply::parse(&self.procedures.guest_product(&lookup).await?);

            if !reply.is_success() {
                let message = reply.message()?;

                info!(message, "guest quote rejected");

                return Ok(OrderConfirmation::outcome(reply.code(), message));
            }

            return Ok(guest_confirmation(&reply)?);
        }

        let mut sales_order_id = parse_id(&purchase.sales_order_id);

        if sales_order_id == 0 {
            let reply = DelimitedReply::parse(&self.procedures.product(&lookup).await?);

            if !reply.is_success() {
                let message = reply.message()?;

                info!(message, "product lookup rejected");

                return Ok(OrderConfirmation::outcome(reply.code(), message));
            }

            sales_order_id = self.create_sales_order(&lookup, &reply).await?;
        }

        self.sales_order_detail(sales_order_id).await
    }

    async fn product_stock(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PurchaseStock, ConnectorError> {
        let lookup = ProductLookup {
            customer_id: 0,
            ..ProductLookup::for_purchase(&purchase)
        };

        let reply = DelimitedReply::parse(&self.procedures.product_stock(&lookup).await?);

        if !reply.is_success() {
            return Ok(PurchaseStock {
                code: reply.code().to_string(),
                message: reply.text(MESSAGE)?,
                ..PurchaseStock::default()
            });
        }

        Ok(PurchaseStock {
            code: reply.code().to_string(),
            message: reply.text(MESSAGE)?,
            product_code: reply.text(stock::PRODUCT_CODE)?,
            qty: reply.text(stock::QTY)?,
            product_price: reply.text(stock::PRICE)?,
        })
    }

    #[instrument(skip(self))]
    async fn voucher_redeem(
        &self,
        sales_order_id: i32,
        voucher_id: i32,
    ) -> Result<OrderConfirmation, ConnectorError> {
        if sales_order_id == 0 || voucher_id == 0 {
            return Ok(OrderConfirmation::default());
        }

        let lookup = DelimitedReply::parse(
            &self
                .procedures
                .voucher_code(sales_order_id, voucher_id)
                .await?,
        );

        if lookup.field(voucher_code::APPLIED)? == voucher_code::NOT_APPLIED {
            let coupon_code = lookup.field(voucher_code::COUPON_CODE)?;

            info!(coupon_code, "applying voucher");

            self.rpc
                .execute_kw(
                    erp_models::COUPON_APPLY_CODE,
                    "process_coupon_so",
                    vec![json!({ "order_id": sales_order_id, "coupon_code": coupon_code })],
                    None,
                )
                .await?;

            let line = DelimitedReply::parse(&self.procedures.voucher_line(sales_order_id).await?);
            let line_id = line.int(voucher_line::LINE_ID)?;

            self.rpc
                .execute_kw(
                    erp_models::SALES_ORDER_LINE,
                    "compute_amount",
                    vec![json!([line_id])],
                    None,
                )
                .await?;
        }

        self.sales_order_detail(sales_order_id).await
    }

    async fn voucher_list(&self, sales_order_id: i32) -> Result<Vec<VoucherEntry>, ConnectorError> {
        let raw = self.procedures.voucher_list(sales_order_id).await?;

        Ok(decode_json(&raw)?)
    }

    async fn set_payment_method(
        &self,
        sales_order_id: i32,
        payment_method_code: String,
    ) -> Result<OrderConfirmation, ConnectorError> {
        self.rpc
            .execute_kw(
                erp_models::SALES_ORDER,
                "set_payment_method",
                vec![json!({ "order_id": sales_order_id, "product_code": payment_method_code })],
                None,
            )
            .await?;

        self.sales_order_detail(sales_order_id).await
    }

    async fn reset_payment_method(
        &self,
        sales_order_id: i32,
    ) -> Result<OrderConfirmation, ConnectorError> {
        self.rpc
            .execute_kw(
                erp_models::SALES_ORDER,
                "reset_payment_method",
                vec![json!({ "order_id": sales_order_id })],
                None,
            )
            .await?;

        self.sales_order_detail(sales_order_id).await
    }

    async fn sales_order_detail(
        &self,
        sales_order_id: i32,
    ) -> Result<OrderConfirmation, ConnectorError> {
        let raw = self.procedures.sales_order_detail(sales_order_id).await?;

        Ok(decode_json(&raw)?)
    }
}

impl OdooConnector {
    /// Create a draft sales order with one line for the looked-up product.
    ///
    /// Each step is a separate ERP call; a failure part-way leaves the
    /// earlier records in place.
    async fn create_sales_order(
        &self,
        lookup: &ProductLookup,
        found: &DelimitedReply,
    ) -> Result<i32, ConnectorError> {
        let order = json!({
            "partner_id": lookup.customer_id,
            "sale_order_type": ONLINE_SALE_ORDER_TYPE,
            "company_id": lookup.dealer_id,
            "pricelist_id": found.int(product::PRICELIST_ID)?,
            "show_update_pricelist": true,
            "state": "draft",
        });

        let created = self
            .rpc
            .execute_kw(erp_models::SALES_ORDER, "create", vec![json!([order])], None)
            .await?;

        let sales_order_id = created_id(&created)?;
        let unit_price = found.float(product::UNIT_PRICE)?;

        debug!(sales_order_id, "sales order created");

        let line = json!({
            "order_id": sales_order_id,
            "product_id": found.int(product::PRODUCT_ID)?,
            "name": found.field(product::PRODUCT_NAME)?,
            "product_uom": found.int(product::UOM_ID)?,
            "product_uom_qty": 1,
            "price_unit": unit_price,
            "price_total": unit_price,
        });

        self.rpc
            .execute_kw(erp_models::SALES_ORDER_LINE, "create", vec![json!([line])], None)
            .await?;

        self.rpc
            .execute_kw(
                erp_models::SALES_ORDER,
                "recompute_coupon_lines",
                vec![json!([sales_order_id])],
                None,
            )
            .await?;

        Ok(sales_order_id)
    }
}

/// Record id returned by `create`, either bare or as a one-element list.
fn created_id(value: &Value) -> Result<i32, ConnectorError> {
    let id = match value {
        Value::Array(ids) => ids.first().and_then(Value::as_i64),
        other => other.as_i64(),
    };

    id.and_then(|id| i32::try_from(id).ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| ConnectorError::UnexpectedReply(format!("no record id in {value}")))
}

/// Quote assembled from a successful guest product lookup.
fn guest_confirmation(reply: &DelimitedReply) -> Result<OrderConfirmation, ReplyError> {
    let included = Attribute {
        attribute_id: reply.text(guest_product::ATTRIBUTE_ID)?,
        attribute_name: reply.text(guest_product::ATTRIBUTE_NAME)?,
        variant_id: reply.text(guest_product::VARIANT_ID)?,
        variant_name: reply.text(guest_product::VARIANT_NAME)?,
        label: INCLUDED_LABEL.to_string(),
        ..Attribute::default()
    };

    let mut confirmation = OrderConfirmation {
        code: reply.code().to_string(),
        message: reply.message()?.to_string(),
        so_id: "0".to_string(),
        so_number: String::new(),
        amount_untaxed: reply.text(guest_product::AMOUNT_UNTAXED)?,
        tax: reply.text(guest_product::TAX)?,
        total: reply.int(guest_product::GRAND_TOTAL)?,
        grand_total: reply.text(guest_product::GRAND_TOTAL)?,
        purchase: LineGroup {
            total: reply.text(guest_product::PURCHASE_TOTAL)?,
            items: vec![LineItem {
                name: reply.text(guest_product::PRODUCT_NAME)?,
                value: reply.text(guest_product::PRICE)?,
                label: reply.text(guest_product::PRICE_LABEL)?,
                attributes: vec![included],
                ..LineItem::default()
            }],
        },
        administrations: LineGroup {
            total: "0".to_string(),
            items: Vec::new(),
        },
        reductions: LineGroup::default(),
    };

    if reply.field(guest_product::REDUCTION_VALUE)? != "0" {
        let reduction = reply.int(guest_product::REDUCTION_VALUE)?;

        confirmation.reductions = LineGroup {
            total: format!("-{}", reduction.abs()),
            items: vec![LineItem {
                name: reply.text(guest_product::REDUCTION_NAME)?,
                value: (-reduction).to_string(),
                label: reply.text(guest_product::REDUCTION_LABEL)?,
                reduction_type: DISCOUNT_REDUCTION.to_string(),
                attributes: Vec::new(),
            }],
        };
    }

    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};
    use testresult::TestResult;

    use super::*;
    use crate::{
        connector::{MockProcedureStore, models::OrderLine, test_support::connector},
        erp::MockErpRpc,
    };

    const GUEST_QUOTE: &str = "0|Searching Product Succesfully A11113|104|33000000|1|EV-V Sporty Single Battery|4|A11113|29|Grey|10|Color|Rp 33.000.000|Voucher Launch|3000000|30000000||- Rp 3.000.000|2700000|27300000|33000000";
    const PRODUCT: &str = "0|Searching Product Succesfully A11113|104|33000000.5|1|EV-V Sporty Single Battery|4";
    const SO_DETAIL: &str = r#"{"code":"0","message":"ok","so_id":88,"so_number":"SO/0088","tax":"2700000","total":30000000,"grand_total":"30000000","purchase":{"total":"33.000.000","items":[]}}"#;

    fn purchase(customer_id: &str, sales_order_id: &str) -> PurchaseParams {
        PurchaseParams {
            customer_id: customer_id.to_string(),
            dealer_id: "3".to_string(),
            sales_order_id: sales_order_id.to_string(),
            orders: vec![OrderLine {
                product_code: "A11113".to_string(),
                qty: 1,
                attributes: vec![Attribute {
                    attribute_id: "10".to_string(),
                    variant_id: "29".to_string(),
                    ..Attribute::default()
                }],
            }],
            ..PurchaseParams::default()
        }
    }

    #[tokio::test]
    async fn guest_quote_is_built_from_product_reply() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();

        procedures
            .expect_guest_product()
            .once()
            .withf(|lookup| {
                lookup.dealer_id == 3 && lookup.customer_id == 0 && lookup.variants.color == "29"
            })
            .return_once(|_| Ok(GUEST_QUOTE.to_string()));

        procedures.expect_product().never();
        rpc.expect_execute_kw().never();

        let quote = connector(procedures, rpc)
            .order_confirmation(purchase("", ""))
            .await?;

        assert_eq!(quote.code, "0");
        assert_eq!(quote.so_id, "0");
        assert_eq!(quote.tax, "2700000");
        assert_eq!(quote.total, 30_000_000);
        assert_eq!(quote.amount_untaxed, "27300000");
        assert_eq!(quote.purchase.total, "33000000");

        let item = quote.purchase.items.first().ok_or("missing purchase item")?;
        assert_eq!(item.name, "EV-V Sporty Single Battery");
        assert_eq!(item.value, "33000000");
        assert_eq!(
            item.attributes.first().map(|attribute| attribute.label.as_str()),
            Some("Included")
        );

        let reduction = quote.reductions.items.first().ok_or("missing reduction")?;
        assert_eq!(reduction.value, "-3000000");
        assert!(reduction.is_discount());
        assert_eq!(quote.reductions.total, "-3000000");

        Ok(())
    }

    #[tokio::test]
    async fn guest_quote_without_reduction_has_no_reduction_items() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let raw = GUEST_QUOTE.replace("|3000000|30000000|", "|0|30000000|");

        procedures
            .expect_guest_product()
            .once()
            .return_once(move |_| Ok(raw));

        let quote = connector(procedures, MockErpRpc::new())
            .order_confirmation(purchase("0", ""))
            .await?;

        assert!(quote.reductions.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn guest_rejection_is_reported_not_raised() -> TestResult {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_guest_product()
            .once()
            .return_once(|_| Ok("1|Product not found".to_string()));

        let quote = connector(procedures, MockErpRpc::new())
            .order_confirmation(purchase("", ""))
            .await?;

        assert_eq!(quote.code, "1");
        assert_eq!(quote.message, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn customer_order_creates_sales_order_then_reads_detail() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();
        let mut sequence = Sequence::new();

        procedures
            .expect_product()
            .once()
            .withf(|lookup| lookup.customer_id == 1083)
            .return_once(|_| Ok(PRODUCT.to_string()));

        rpc.expect_execute_kw()
            .once()
            .in_sequence(&mut sequence)
            .withf(|model, method, args, _| {
                model == erp_models::SALES_ORDER
                    && method == "create"
                    && *args
                        == vec![json!([{
                            "partner_id": 1083,
                            "sale_order_type": 2,
                            "company_id": 3,
                            "pricelist_id": 4,
                            "show_update_pricelist": true,
                            "state": "draft",
                        }])]
            })
            .return_once(|_, _, _, _| Ok(json!([88])));

        rpc.expect_execute_kw()
            .once()
            .in_sequence(&mut sequence)
            .withf(|model, method, args, _| {
                model == erp_models::SALES_ORDER_LINE
                    && method == "create"
                    && *args
                        == vec![json!([{
                            "order_id": 88,
                            "product_id": 104,
                            "name": "EV-V Sporty Single Battery",
                            "product_uom": 1,
                            "product_uom_qty": 1,
                            "price_unit": 33_000_000.5,
                            "price_total": 33_000_000.5,
                        }])]
            })
            .return_once(|_, _, _, _| Ok(json!(501)));

        rpc.expect_execute_kw()
            .once()
            .in_sequence(&mut sequence)
            .withf(|model, method, args, _| {
                model == erp_models::SALES_ORDER
                    && method == "recompute_coupon_lines"
                    && *args == vec![json!([88])]
            })
            .return_once(|_, _, _, _| Ok(json!(true)));

        procedures
            .expect_sales_order_detail()
            .once()
            .with(eq(88))
            .return_once(|_| Ok(SO_DETAIL.to_string()));

        let confirmation = connector(procedures, rpc)
            .order_confirmation(purchase("1083", ""))
            .await?;

        assert_eq!(confirmation.so_id, "88");
        assert_eq!(confirmation.so_number, "SO/0088");
        assert_eq!(confirmation.purchase.total, "33.000.000");

        Ok(())
    }

    #[tokio::test]
    async fn existing_sales_order_is_only_read() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();

        procedures.expect_product().never();
        rpc.expect_execute_kw().never();

        procedures
            .expect_sales_order_detail()
            .once()
            .with(eq(88))
            .return_once(|_| Ok(SO_DETAIL.to_string()));

        let confirmation = connector(procedures, rpc)
            .order_confirmation(purchase("1083", "88"))
            .await?;

        assert_eq!(confirmation.so_id, "88");

        Ok(())
    }

    #[tokio::test]
    async fn failed_order_creation_stops_the_flow() {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();

        procedures
            .expect_product()
            .once()
            .return_once(|_| Ok(PRODUCT.to_string()));

        rpc.expect_execute_kw()
            .once()
            .return_once(|_, _, _, _| {
                Err(crate::erp::ErpRpcError::Fault("Access Denied".to_string()))
            });

        procedures.expect_sales_order_detail().never();

        let result = connector(procedures, rpc)
            .order_confirmation(purchase("1083", ""))
            .await;

        assert!(matches!(result, Err(ConnectorError::Rpc(_))));
    }

    #[tokio::test]
    async fn voucher_redeem_with_zero_ids_does_nothing() -> TestResult {
        let confirmation = connector(MockProcedureStore::new(), MockErpRpc::new())
            .voucher_redeem(0, 15)
            .await?;

        assert_eq!(confirmation, OrderConfirmation::default());

        Ok(())
    }

    #[tokio::test]
    async fn unapplied_voucher_is_applied_and_recomputed() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();
        let mut sequence = Sequence::new();

        procedures
            .expect_voucher_code()
            .once()
            .with(eq(88), eq(15))
            .return_once(|_, _| Ok("0|Searching Get Succesfully|6968773680224492744|N".to_string()));

        rpc.expect_execute_kw()
            .once()
            .in_sequence(&mut sequence)
            .withf(|model, method, args, _| {
                model == erp_models::COUPON_APPLY_CODE
                    && method == "process_coupon_so"
                    && *args
                        == vec![json!({ "order_id": 88, "coupon_code": "6968773680224492744" })]
            })
            .return_once(|_, _, _, _| Ok(json!(true)));

        procedures
            .expect_voucher_line()
            .once()
            .with(eq(88))
            .return_once(|_| Ok("0|Searching Get Succesfully |10900|15".to_string()));

        rpc.expect_execute_kw()
            .once()
            .in_sequence(&mut sequence)
            .withf(|model, method, args, _| {
                model == erp_models::SALES_ORDER_LINE
                    && method == "compute_amount"
                    && *args == vec![json!([10900])]
            })
            .return_once(|_, _, _, _| Ok(json!(true)));

        procedures
            .expect_sales_order_detail()
            .once()
            .return_once(|_| Ok(SO_DETAIL.to_string()));

        let confirmation = connector(procedures, rpc).voucher_redeem(88, 15).await?;

        assert_eq!(confirmation.so_id, "88");

        Ok(())
    }

    #[tokio::test]
    async fn applied_voucher_only_reads_detail() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();

        procedures
            .expect_voucher_code()
            .once()
            .return_once(|_, _| Ok("0|Searching Get Succesfully|6968773680224492744|Y".to_string()));

        rpc.expect_execute_kw().never();
        procedures.expect_voucher_line().never();

        procedures
            .expect_sales_order_detail()
            .once()
            .return_once(|_| Ok(String::new()));

        let confirmation = connector(procedures, rpc).voucher_redeem(88, 15).await?;

        assert_eq!(confirmation, OrderConfirmation::default());

        Ok(())
    }

    #[tokio::test]
    async fn voucher_lookup_error_is_propagated() {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_voucher_code()
            .once()
            .return_once(|_, _| Err(sqlx::Error::PoolTimedOut));

        let result = connector(procedures, MockErpRpc::new())
            .voucher_redeem(88, 15)
            .await;

        assert!(matches!(result, Err(ConnectorError::Sql(_))));
    }

    #[tokio::test]
    async fn stock_lookup_ignores_customer() -> TestResult {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_product_stock()
            .once()
            .withf(|lookup| lookup.customer_id == 0 && lookup.variants.vehicle_code == "A11113")
            .return_once(|_| {
                Ok("0|ok|104|33000000|1|EV-V Sporty|4|12|A11113-GRY".to_string())
            });

        let stock = connector(procedures, MockErpRpc::new())
            .product_stock(purchase("1083", ""))
            .await?;

        assert_eq!(stock.qty, "12");
        assert_eq!(stock.product_code, "A11113-GRY");
        assert_eq!(stock.product_price, "33000000");

        Ok(())
    }

    #[test]
    fn created_id_accepts_list_or_scalar() -> TestResult {
        assert_eq!(created_id(&json!([88]))?, 88);
        assert_eq!(created_id(&json!(89))?, 89);
        assert!(created_id(&json!(false)).is_err());
        assert!(created_id(&json!([])).is_err());

        Ok(())
    }
}
