use crate::config::HarnessConfig;
use crate::core::Result;
use crate::modules::db::{CreditRequestRecord, OrderRecord, PaymentRecord};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Read-only queries and cleanup over the application's tables.
///
/// Every lookup takes the single most recent row by creation timestamp:
/// the application appends, it never updates, so "latest row" is the
/// outcome of the scenario that just ran. There is no transactional
/// isolation; concurrent runs against a shared database are unsupported.
pub struct DbVerifier {
    pool: PgPool,
}

impl DbVerifier {
    pub async fn connect(config: &HarnessConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Most recent payment row, if any.
    pub async fn latest_payment(&self) -> Result<Option<PaymentRecord>> {
        let record = sqlx::query_as::<_, PaymentRecord>(
            "SELECT transaction_id, status, amount FROM payment_entity \
             ORDER BY created DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Most recent order row, if any.
    pub async fn latest_order(&self) -> Result<Option<OrderRecord>> {
        let record = sqlx::query_as::<_, OrderRecord>(
            "SELECT payment_id, credit_id FROM order_entity \
             ORDER BY created DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Most recent credit request row, if any.
    pub async fn latest_credit_request(&self) -> Result<Option<CreditRequestRecord>> {
        let record = sqlx::query_as::<_, CreditRequestRecord>(
            "SELECT status, bank_id FROM credit_request_entity \
             ORDER BY created DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Delete every row from the three tables.
    ///
    /// Runs in test setup rather than teardown: a failed test leaves its
    /// rows behind for diagnosis but never poisons the next run.
    pub async fn clean(&self) -> Result<()> {
        sqlx::query("DELETE FROM payment_entity").execute(&self.pool).await?;
        sqlx::query("DELETE FROM order_entity").execute(&self.pool).await?;
        sqlx::query("DELETE FROM credit_request_entity")
            .execute(&self.pool)
            .await?;
        tracing::debug!("payment, order and credit tables cleared");
        Ok(())
    }

    /// Assert the latest payment has the expected status.
    pub async fn assert_payment_status(&self, expected: &str) -> Result<()> {
        let payment = self.expect_payment().await?;
        assert_eq!(
            payment.status, expected,
            "Payment status mismatch: expected {expected:?}, got {:?}",
            payment.status
        );
        Ok(())
    }

    /// Assert the latest payment has the expected amount.
    pub async fn assert_payment_amount(&self, expected: i32) -> Result<()> {
        let payment = self.expect_payment().await?;
        assert_eq!(
            payment.amount, expected,
            "Payment amount mismatch: expected {expected}, got {}",
            payment.amount
        );
        Ok(())
    }

    /// Assert the latest order points at the latest payment.
    pub async fn assert_order_linked_to_payment(&self) -> Result<()> {
        let payment = self.expect_payment().await?;
        let order = self
            .latest_order()
            .await?
            .unwrap_or_else(|| panic!("Expected an order row, found none"));
        assert_eq!(
            order.payment_id, payment.transaction_id,
            "Order is not linked to the latest payment: order.payment_id = {:?}, \
             payment.transaction_id = {:?}",
            order.payment_id, payment.transaction_id
        );
        Ok(())
    }

    /// Assert the latest order points at the latest credit request.
    pub async fn assert_order_linked_to_credit_request(&self) -> Result<()> {
        let order = self
            .latest_order()
            .await?
            .unwrap_or_else(|| panic!("Expected an order row, found none"));
        assert!(
            order.credit_id.is_some(),
            "Expected the order to reference a credit request, credit_id is NULL"
        );
        Ok(())
    }

    /// Assert no payment rows exist.
    pub async fn assert_no_payments(&self) -> Result<()> {
        let payment = self.latest_payment().await?;
        assert!(
            payment.is_none(),
            "Expected no rows in payment_entity, found: {payment:?}"
        );
        Ok(())
    }

    /// Assert no order rows exist.
    pub async fn assert_no_orders(&self) -> Result<()> {
        let order = self.latest_order().await?;
        assert!(
            order.is_none(),
            "Expected no rows in order_entity, found: {order:?}"
        );
        Ok(())
    }

    /// Assert no credit request rows exist.
    pub async fn assert_no_credit_requests(&self) -> Result<()> {
        let credit = self.latest_credit_request().await?;
        assert!(
            credit.is_none(),
            "Expected no rows in credit_request_entity, found: {credit:?}"
        );
        Ok(())
    }

    async fn expect_payment(&self) -> Result<PaymentRecord> {
        Ok(self
            .latest_payment()
            .await?
            .unwrap_or_else(|| panic!("Expected a payment row, found none")))
    }
}
