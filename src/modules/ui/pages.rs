//! Page objects for the checkout flow.
//!
//! Assertions poll the DOM until the expected state appears or the
//! configured wait runs out; a timeout panics with the last observed
//! state, which surfaces as the test failure.

use crate::config::HarnessConfig;
use crate::core::{HarnessError, Result};
use crate::modules::data::CardPayload;
use crate::modules::ui::Field;
use std::ops::Deref;
use std::time::{Duration, Instant};
use thirtyfour::{By, WebDriver, WebElement};

const PAY_HEADING: &str = "Оплата по карте";
const CREDIT_HEADING: &str = "Кредит по данным карты";
const BUY_BUTTON: &str = "Купить";
const BUY_CREDIT_BUTTON: &str = "Купить в кредит";
const CONTINUE_BUTTON: &str = "Продолжить";
const BANK_REQUEST_BUTTON: &str = "Отправляем запрос в Банк...";
const SUCCESS_TITLE: &str = "Успешно";
const SUCCESS_TEXT: &str = "Операция одобрена Банком.";
const ERROR_TITLE: &str = "Ошибка";
const ERROR_TEXT: &str = "Ошибка! Банк отказал в проведении операции.";

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Landing page with the two purchase buttons.
pub struct PaymentMethodPage {
    driver: WebDriver,
    timeout: Duration,
}

impl PaymentMethodPage {
    /// Navigate to the application and wait for the purchase buttons.
    pub async fn open(driver: WebDriver, config: &HarnessConfig) -> Result<Self> {
        driver.goto(&config.base_url).await?;
        let page = Self {
            driver,
            timeout: config.wait_timeout,
        };
        wait_for_button(&page.driver, page.timeout, BUY_BUTTON).await?;
        Ok(page)
    }

    /// Select the direct card payment path.
    pub async fn buy(&self) -> Result<CardPaymentPage> {
        click_button(&self.driver, self.timeout, BUY_BUTTON).await?;
        CardPaymentPage::attach(self.driver.clone(), self.timeout).await
    }

    /// Select the credit path.
    pub async fn buy_on_credit(&self) -> Result<CreditCardPaymentPage> {
        click_button(&self.driver, self.timeout, BUY_CREDIT_BUTTON).await?;
        CreditCardPaymentPage::attach(self.driver.clone(), self.timeout).await
    }
}

/// The card form: five labeled inputs, a submit button, inline validation
/// messages and the result notifications. Shared by both payment paths.
pub struct CardForm {
    driver: WebDriver,
    timeout: Duration,
}

impl CardForm {
    /// Raw text entry into one field. Masking and trimming are the
    /// application's client-side behavior, not the harness's.
    pub async fn fill_field(&self, field: Field, value: &str) -> Result<()> {
        let input = self.labeled_input(field).await?;
        input.clear().await?;
        input.send_keys(value).await?;
        Ok(())
    }

    /// Fill all five fields from a payload.
    pub async fn fill_form(&self, card: &CardPayload) -> Result<()> {
        self.fill_field(Field::CardNumber, &card.number).await?;
        self.fill_field(Field::Month, &card.month).await?;
        self.fill_field(Field::Year, &card.year).await?;
        self.fill_field(Field::Holder, &card.holder).await?;
        self.fill_field(Field::Cvc, &card.cvc).await?;
        Ok(())
    }

    /// Click the submit button.
    pub async fn submit(&self) -> Result<()> {
        click_button(&self.driver, self.timeout, CONTINUE_BUTTON).await
    }

    /// Wait for the submit button to enter its disabled "sending request
    /// to the bank" state. Only reached when client-side validation
    /// passed, so scenarios with field errors must not call this.
    pub async fn wait_for_bank_request(&self) -> Result<()> {
        let button = wait_for_button(&self.driver, self.timeout, BANK_REQUEST_BUTTON).await?;
        let enabled = button.is_enabled().await?;
        assert!(
            !enabled,
            "Expected the bank-request button to be disabled while in flight"
        );
        Ok(())
    }

    /// Assert the current value of a field, polling until it matches or
    /// the wait runs out.
    pub async fn assert_field_value(&self, field: Field, expected: &str) -> Result<()> {
        let input = self.labeled_input(field).await?;
        let deadline = Instant::now() + self.timeout;
        let mut observed = input.prop("value").await?.unwrap_or_default();
        while observed != expected && Instant::now() < deadline {
            tokio::time::sleep(POLL_INTERVAL).await;
            observed = input.prop("value").await?.unwrap_or_default();
        }
        assert_eq!(
            observed,
            expected,
            "Field {:?} value mismatch: expected {expected:?}, got {observed:?}",
            field.label()
        );
        Ok(())
    }

    /// Assert the inline validation message under a field.
    pub async fn assert_validation_error(&self, field: Field, text: &str) -> Result<()> {
        let container = self.labeled_container(field).await?;
        let deadline = Instant::now() + self.timeout;
        let mut observed = String::new();
        loop {
            if let Ok(sub) = container.find(By::Css(".input__sub")).await {
                if sub.is_displayed().await.unwrap_or(false) {
                    observed = sub.text().await?;
                    if observed == text {
                        return Ok(());
                    }
                }
            }
            if Instant::now() >= deadline {
                panic!(
                    "No validation error {text:?} under field {:?} within {:?}; \
                     last observed: {observed:?}",
                    field.label(),
                    self.timeout
                );
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait for the success banner; the error banner must stay absent.
    pub async fn assert_success_notification(&self) -> Result<()> {
        self.wait_for_notification(SUCCESS_TITLE, SUCCESS_TEXT).await?;
        let decline_shown = self.notification_visible(ERROR_TITLE, ERROR_TEXT).await?;
        assert!(
            !decline_shown,
            "Decline notification shown alongside the success one"
        );
        Ok(())
    }

    /// Wait for the decline banner; the success banner must stay absent.
    pub async fn assert_error_notification(&self) -> Result<()> {
        self.wait_for_notification(ERROR_TITLE, ERROR_TEXT).await?;
        let success_shown = self.notification_visible(SUCCESS_TITLE, SUCCESS_TEXT).await?;
        assert!(
            !success_shown,
            "Success notification shown alongside the decline one"
        );
        Ok(())
    }

    /// Approved happy path: fill, submit, success banner.
    pub async fn pay_and_expect_success(&self, card: &CardPayload) -> Result<()> {
        self.fill_form(card).await?;
        self.submit().await?;
        self.wait_for_bank_request().await?;
        self.assert_success_notification().await
    }

    /// Declined path: fill, submit, decline banner.
    pub async fn pay_and_expect_decline(&self, card: &CardPayload) -> Result<()> {
        self.fill_form(card).await?;
        self.submit().await?;
        self.wait_for_bank_request().await?;
        self.assert_error_notification().await
    }

    async fn labeled_container(&self, field: Field) -> Result<WebElement> {
        let deadline = Instant::now() + self.timeout;
        loop {
            for container in self.driver.find_all(By::Css(".input__inner")).await? {
                if let Ok(label) = container.find(By::Css(".input__top")).await {
                    if label.text().await?.trim() == field.label() {
                        return Ok(container);
                    }
                }
            }
            if Instant::now() >= deadline {
                return Err(HarnessError::element_not_found(format!(
                    "no form field labeled {:?}",
                    field.label()
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn labeled_input(&self, field: Field) -> Result<WebElement> {
        let container = self.labeled_container(field).await?;
        Ok(container.find(By::Css("input")).await?)
    }

    async fn notification_visible(&self, title: &str, text: &str) -> Result<bool> {
        for notification in self.driver.find_all(By::Css(".notification")).await? {
            if !notification.is_displayed().await.unwrap_or(false) {
                continue;
            }
            let content = notification.text().await?;
            if content.contains(title) && content.contains(text) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn wait_for_notification(&self, title: &str, text: &str) -> Result<()> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if self.notification_visible(title, text).await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                panic!(
                    "Notification {title:?} / {text:?} did not appear within {:?}",
                    self.timeout
                );
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

/// Card payment form, reached via the "buy" button.
pub struct CardPaymentPage {
    form: CardForm,
}

impl CardPaymentPage {
    pub(crate) async fn attach(driver: WebDriver, timeout: Duration) -> Result<Self> {
        wait_for_heading(&driver, timeout, PAY_HEADING).await?;
        Ok(Self {
            form: CardForm { driver, timeout },
        })
    }
}

impl Deref for CardPaymentPage {
    type Target = CardForm;

    fn deref(&self) -> &CardForm {
        &self.form
    }
}

/// Credit form, reached via the "buy on credit" button. Same form
/// component under a different heading.
pub struct CreditCardPaymentPage {
    form: CardForm,
}

impl CreditCardPaymentPage {
    pub(crate) async fn attach(driver: WebDriver, timeout: Duration) -> Result<Self> {
        wait_for_heading(&driver, timeout, CREDIT_HEADING).await?;
        Ok(Self {
            form: CardForm { driver, timeout },
        })
    }
}

impl Deref for CreditCardPaymentPage {
    type Target = CardForm;

    fn deref(&self) -> &CardForm {
        &self.form
    }
}

async fn wait_for_heading(driver: &WebDriver, timeout: Duration, text: &str) -> Result<()> {
    let deadline = Instant::now() + timeout;
    loop {
        for heading in driver.find_all(By::Tag("h3")).await? {
            if heading.text().await?.trim() == text && heading.is_displayed().await? {
                return Ok(());
            }
        }
        if Instant::now() >= deadline {
            return Err(HarnessError::element_not_found(format!(
                "heading {text:?} not visible within {timeout:?}"
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

async fn wait_for_button(
    driver: &WebDriver,
    timeout: Duration,
    text: &str,
) -> Result<WebElement> {
    let deadline = Instant::now() + timeout;
    loop {
        for button in driver.find_all(By::Tag("button")).await? {
            if button.text().await?.trim() == text {
                return Ok(button);
            }
        }
        if Instant::now() >= deadline {
            return Err(HarnessError::element_not_found(format!(
                "button {text:?} not present within {timeout:?}"
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

async fn click_button(driver: &WebDriver, timeout: Duration, text: &str) -> Result<()> {
    let button = wait_for_button(driver, timeout, text).await?;
    button.click().await?;
    Ok(())
}
