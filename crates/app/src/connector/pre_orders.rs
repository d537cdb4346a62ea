//! Pre-order (booking fee) operations.

use async_trait::async_trait;
use mockall::automock;
use serde_json::json;
use tracing::{debug, instrument};

use crate::{
    connector::{
        ConnectorError, OdooConnector, erp_models,
        models::{
            PaymentParams, PreOrderParams, PreOrderResponse, PurchaseParams, StatusReply, parse_id,
        },
    },
    erp::{CoerceError, coerce::coerce},
};

#[automock]
#[async_trait]
/// Booking fee operations.
pub trait PreOrderConnector: Send + Sync {
    /// Create a booking fee, or view an existing one when the purchase names it.
    async fn pre_order_confirmation(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PreOrderResponse, ConnectorError>;

    /// Attach a payment method to a booking fee.
    async fn set_pre_order_payment_method(
        &self,
        booking_fee_id: i32,
        payment_method_code: String,
    ) -> Result<PreOrderResponse, ConnectorError>;

    /// Clear the payment method of a booking fee.
    async fn reset_pre_order_payment_method(
        &self,
        booking_fee_id: i32,
    ) -> Result<PreOrderResponse, ConnectorError>;

    /// Confirm payment of a booking fee.
    async fn pre_order_payment_confirm(
        &self,
        booking_fee_id: i32,
    ) -> Result<PreOrderResponse, ConnectorError>;

    /// Record a payment-gateway status against a booking fee invoice.
    async fn pre_order_payment_status(
        &self,
        payment: PaymentParams,
    ) -> Result<StatusReply, ConnectorError>;
}

#[async_trait]
impl PreOrderConnector for OdooConnector {
    #[instrument(skip_all)]
    async fn pre_order_confirmation(
        &self,
        purchase: PurchaseParams,
    ) -> Result<PreOrderResponse, ConnectorError> {
        let booking_fee_id = parse_id(&purchase.sales_order_id);

        let reply = if booking_fee_id == 0 {
            let params = serde_json::to_value(PreOrderParams::from(&purchase))
                .map_err(CoerceError::from)?;

            debug!(%params, "creating booking fee");

            self.rpc
                .execute_kw(erp_models::BOOKING_FEE, "create_booking_fee", vec![params], None)
                .await?
        } else {
            debug!(booking_fee_id, "viewing booking fee");

            self.rpc
                .execute_kw(
                    erp_models::BOOKING_FEE,
                    "view_booking_fee",
                    vec![json!({ "booking_fee_id": booking_fee_id })],
                    None,
                )
                .await?
        };

        Ok(coerce(&reply)?)
    }

    async fn set_pre_order_payment_method(
        &self,
        booking_fee_id: i32,
        payment_method_code: String,
    ) -> Result<PreOrderResponse, ConnectorError> {
        let reply = self
            .rpc
            .execute_kw(
                erp_models::BOOKING_FEE,
                "set_payment_method",
                vec![json!({ "booking_fee_id": booking_fee_id, "product_code": payment_method_code })],
                None,
            )
            .await?;

        Ok(coerce(&reply)?)
    }

    async fn reset_pre_order_payment_method(
        &self,
        booking_fee_id: i32,
    ) -> Result<PreOrderResponse, ConnectorError> {
        let reply = self
            .rpc
            .execute_kw(
                erp_models::BOOKING_FEE,
                "reset_payment_method",
                vec![json!({ "booking_fee_id": booking_fee_id })],
                None,
            )
            .await?;

        Ok(coerce(&reply)?)
    }

    async fn pre_order_payment_confirm(
        &self,
        booking_fee_id: i32,
    ) -> Result<PreOrderResponse, ConnectorError> {
        let reply = self
            .rpc
            .execute_kw(
                erp_models::BOOKING_FEE,
                "confirm_booking_fee",
                vec![json!({ "booking_fee_id": booking_fee_id })],
                None,
            )
            .await?;

        Ok(coerce(&reply)?)
    }

    async fn pre_order_payment_status(
        &self,
        payment: PaymentParams,
    ) -> Result<StatusReply, ConnectorError> {
        let reply = self
            .rpc
            .execute_kw(
                erp_models::BOOKING_FEE,
                "set_payment_status",
                vec![json!({
                    "invoice_number": payment.invoice_number,
                    "status": payment.status,
                    "transaction_id": payment.transaction_id,
                })],
                None,
            )
            .await?;

        Ok(coerce(&reply)?)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        connector::{
            MockProcedureStore,
            models::{OrderLine, PreOrderDetail},
            test_support::connector,
        },
        erp::MockErpRpc,
    };

    fn purchase(sales_order_id: &str) -> PurchaseParams {
        PurchaseParams {
            customer_id: "1083".to_string(),
            dealer_id: "3".to_string(),
            sales_order_id: sales_order_id.to_string(),
            orders: vec![OrderLine {
                product_code: "A11113".to_string(),
                qty: 1,
                attributes: Vec::new(),
            }],
            ..PurchaseParams::default()
        }
    }

    #[tokio::test]
    async fn new_pre_order_creates_booking_fee() -> TestResult {
        let mut rpc = MockErpRpc::new();

        rpc.expect_execute_kw()
            .once()
            .withf(|model, method, args, _| {
                model == erp_models::BOOKING_FEE
                    && method == "create_booking_fee"
                    && *args
                        == vec![json!({
                            "partner_id": 1083,
                            "company_id": 3,
                            "orders": [{ "product_code": "A11113", "qty": 1, "attributes": [] }],
                        })]
            })
            .return_once(|_, _, _, _| {
                Ok(json!({
                    "code": "0",
                    "message": "Booking fee created",
                    "response_detail": {
                        "so_id": 12,
                        "booking_fee_amount": "5000000",
                        "remaining_amount": 28000000,
                    },
                }))
            });

        let response = connector(MockProcedureStore::new(), rpc)
            .pre_order_confirmation(purchase(""))
            .await?;

        assert_eq!(response.code, "0");
        assert_eq!(response.response_detail.order.so_id, "12");
        assert_eq!(response.response_detail.booking_fee_amount, "5000000");
        assert_eq!(response.response_detail.remaining_amount, "28000000");

        Ok(())
    }

    #[tokio::test]
    async fn existing_pre_order_is_viewed() -> TestResult {
        let mut rpc = MockErpRpc::new();

        rpc.expect_execute_kw()
            .once()
            .withf(|model, method, args, _| {
                model == erp_models::BOOKING_FEE
                    && method == "view_booking_fee"
                    && *args == vec![json!({ "booking_fee_id": 12 })]
            })
            .return_once(|_, _, _, _| Ok(json!({ "code": "0" })));

        let response = connector(MockProcedureStore::new(), rpc)
            .pre_order_confirmation(purchase("12"))
            .await?;

        assert_eq!(response.code, "0");
        assert_eq!(response.response_detail, PreOrderDetail::default());

        Ok(())
    }

    #[tokio::test]
    async fn payment_status_reports_backend_outcome() -> TestResult {
        let mut rpc = MockErpRpc::new();

        rpc.expect_execute_kw()
            .once()
            .withf(|_, method, args, _| {
                method == "set_payment_status"
                    && args.first().and_then(|params| params.get("status")) == Some(&json!("paid"))
            })
            .return_once(|_, _, _, _| Ok(json!({ "code": 1, "message": "Invoice not found" })));

        let reply = connector(MockProcedureStore::new(), rpc)
            .pre_order_payment_status(PaymentParams {
                invoice_number: "BF/0001".to_string(),
                status: "paid".to_string(),
                ..PaymentParams::default()
            })
            .await?;

        assert_eq!(reply.code, "1");
        assert_eq!(reply.message, "Invoice not found");

        Ok(())
    }
}
