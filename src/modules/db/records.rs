use sqlx::FromRow;

/// Row of `payment_entity`, written by the application when a card
/// payment is processed. Read-only from the harness side.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentRecord {
    pub transaction_id: String,
    pub status: String,
    pub amount: i32,
}

/// Row of `order_entity`, linking a purchase to its payment and,
/// for the credit path, to a credit request.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRecord {
    pub payment_id: String,
    pub credit_id: Option<String>,
}

/// Row of `credit_request_entity`.
#[derive(Debug, Clone, FromRow)]
pub struct CreditRequestRecord {
    pub status: String,
    pub bank_id: String,
}
