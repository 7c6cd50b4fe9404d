//! Database-level post-conditions for payment scenarios.

pub mod records;
pub mod verifier;

pub use records::{CreditRequestRecord, OrderRecord, PaymentRecord};
pub use verifier::DbVerifier;
