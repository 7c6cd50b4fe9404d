//! Browser-level access to the checkout form.

pub mod pages;

pub use pages::{CardPaymentPage, CreditCardPaymentPage, PaymentMethodPage};

use crate::config::HarnessConfig;
use crate::core::Result;
use thirtyfour::{DesiredCapabilities, WebDriver};

/// The five labeled inputs of the card form.
///
/// Call sites address fields through this enum; the label text is an
/// implementation detail of the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CardNumber,
    Month,
    Year,
    Holder,
    Cvc,
}

impl Field {
    /// The on-screen label above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::CardNumber => "Номер карты",
            Field::Month => "Месяц",
            Field::Year => "Год",
            Field::Holder => "Владелец",
            Field::Cvc => "CVC/CVV",
        }
    }
}

/// Inline message for a malformed value.
pub const ERROR_INVALID_FORMAT: &str = "Неверный формат";

/// Inline message for an empty required field.
pub const ERROR_REQUIRED_FIELD: &str = "Поле обязательно для заполнения";

/// Inline message for a card already past its expiry.
pub const ERROR_CARD_EXPIRED: &str = "Истёк срок действия карты";

/// Inline message for an expiry too far in the future or out of range.
pub const ERROR_EXPIRY_INVALID: &str = "Неверно указан срок действия карты";

/// Open a WebDriver session against the configured endpoint.
pub async fn connect(config: &HarnessConfig) -> Result<WebDriver> {
    let caps = DesiredCapabilities::chrome();
    let driver = WebDriver::new(&config.webdriver_url, caps).await?;
    Ok(driver)
}
