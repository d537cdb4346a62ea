//! Sales order payment operations.

use async_trait::async_trait;
use mockall::automock;
use serde_json::json;
use tracing::instrument;

use crate::{
    connector::{
        ConnectorError, OdooConnector, erp_models,
        models::{PaymentParams, PaymentResponse, StatusReply, parse_id},
    },
    erp::coerce::coerce,
};

#[automock]
#[async_trait]
/// Sales order payment operations.
pub trait PaymentConnector: Send + Sync {
    /// Raise an invoice for a sales order with the chosen payment type.
    async fn payment(&self, payment: PaymentParams) -> Result<PaymentResponse, ConnectorError>;

    /// Forward a payment-gateway callback to the ERP.
    async fn payment_notification(
        &self,
        payment: PaymentParams,
    ) -> Result<StatusReply, ConnectorError>;
}

#[async_trait]
impl PaymentConnector for OdooConnector {
    #[instrument(skip_all, fields(sales_order_id = %payment.sales_order_id))]
    async fn payment(&self, payment: PaymentParams) -> Result<PaymentResponse, ConnectorError> {
        let reply = self
            .rpc
            .execute_kw(
                erp_models::SALES_ORDER,
                "action_payment",
                vec![json!({
                    "order_id": parse_id(&payment.sales_order_id),
                    "payment_type_id": payment.payment_type_id,
                })],
                None,
            )
            .await?;

        Ok(coerce(&reply)?)
    }

    #[instrument(skip_all, fields(invoice_number = %payment.invoice_number))]
    async fn payment_notification(
        &self,
        payment: PaymentParams,
    ) -> Result<StatusReply, ConnectorError> {
        let reply = self
            .rpc
            .execute_kw(
                erp_models::SALES_ORDER,
                "payment_notification",
                vec![json!({
                    "invoice_number": payment.invoice_number,
                    "status": payment.status,
                    "transaction_id": payment.transaction_id,
                    "amount": payment.amount,
                })],
                None,
            )
            .await?;

        Ok(coerce(&reply)?)
    }
}
