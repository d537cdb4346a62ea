//! Purchase Logs Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{PgPool, query};
use tracing::debug;

use crate::purchase_logs::{
    PurchaseLogError,
    models::{NewPurchaseLog, PurchaseLogStateUpdate},
};

const INSERT_PURCHASE_LOG_SQL: &str = include_str!("sql/insert_purchase_log.sql");
const UPDATE_PURCHASE_LOG_STATE_SQL: &str = include_str!("sql/update_purchase_log_state.sql");

#[automock]
#[async_trait]
/// Purchase log persistence operations.
pub trait PurchaseLogRepository: Send + Sync {
    /// Records a payment attempt.
    async fn insert(&self, log: NewPurchaseLog) -> Result<(), PurchaseLogError>;

    /// Moves every log row of an invoice to a new state.
    async fn update_state(&self, update: PurchaseLogStateUpdate) -> Result<(), PurchaseLogError>;
}

/// PostgreSQL-backed purchase log repository.
#[derive(Debug, Clone)]
pub struct PgPurchaseLogRepository {
    pool: PgPool,
}

impl PgPurchaseLogRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseLogRepository for PgPurchaseLogRepository {
    async fn insert(&self, log: NewPurchaseLog) -> Result<(), PurchaseLogError> {
        query(INSERT_PURCHASE_LOG_SQL)
            .bind(log.invoice_id)
            .bind(log.payload)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_state(&self, update: PurchaseLogStateUpdate) -> Result<(), PurchaseLogError> {
        let result = query(UPDATE_PURCHASE_LOG_STATE_SQL)
            .bind(&update.invoice_id)
            .bind(update.state)
            .bind(SqlxTimestamp::from(update.updated_at))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(invoice_id = %update.invoice_id, "no purchase log to update");
        }

        Ok(())
    }
}
