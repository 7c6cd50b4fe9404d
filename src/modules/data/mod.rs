//! Test data: shared constants, seedable value generators and the card
//! payload builder.

pub mod card;
pub mod generators;

pub use card::CardPayload;
pub use generators::{Calendar, ValueGen};

/// Price of the tour in minor currency units, as recorded by the
/// application in `payment_entity.amount`.
pub const TOUR_PRICE_MINOR: i32 = 4_500_000;

/// Payment status recorded for the approved test card.
pub const STATUS_APPROVED: &str = "APPROVED";

/// Payment status recorded for the declined test card.
pub const STATUS_DECLINED: &str = "DECLINED";
