//! The checkout workflow: a state machine from a non-empty cart to a
//! completed or cancelled order, including the information form and its
//! fixed-order validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::driver::DriverHandle;
use crate::error::{Error, Result, ValidationError};
use crate::expect::{expect, expect_page};
use crate::pages::{CheckoutPage, cart};

/// Case-insensitive pattern the order confirmation must match.
pub const CONFIRMATION_PATTERN: &str = "(?i)thank you for your order";

const CHECKOUT_INFO_URL_PATTERN: &str = r"/checkout-step-one\.html";
const OVERVIEW_URL_PATTERN: &str = r"/checkout-step-two\.html";

/// The buyer information the checkout form collects. All three fields are
/// required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub postal_code: String,
}

impl CheckoutForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            postal_code: postal_code.into(),
        }
    }

    /// The outcome the form must produce when submitted.
    ///
    /// Fields are evaluated in a fixed order - first name, last name,
    /// postal code - and the first empty one short-circuits with its
    /// specific error. There is no partial-success state.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let rules = [
            (self.first_name.as_str(), ValidationError::FirstNameRequired),
            (self.last_name.as_str(), ValidationError::LastNameRequired),
            (self.postal_code.as_str(), ValidationError::PostalCodeRequired),
        ];
        for (value, error) in rules {
            if value.is_empty() {
                return Err(error);
            }
        }
        Ok(())
    }
}

/// The steps the checkout workflow moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckoutState {
    /// On the cart view, checkout not yet started.
    Cart,
    /// On the information form.
    Info,
    /// On the order overview.
    Overview,
    /// Order confirmed. Terminal.
    Complete,
}

impl CheckoutState {
    fn name(self) -> &'static str {
        match self {
            CheckoutState::Cart => "Cart",
            CheckoutState::Info => "Info",
            CheckoutState::Overview => "Overview",
            CheckoutState::Complete => "Complete",
        }
    }
}

impl fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terminal outcome of one checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderResult {
    /// The order went through and the store confirmed it.
    Completed,
    /// Checkout was abandoned from the information step; the cart is
    /// untouched.
    Cancelled,
    /// The form was rejected; the workflow stayed at the information step.
    Rejected(ValidationError),
}

fn ensure(current: CheckoutState, required: CheckoutState, action: &'static str) -> Result<()> {
    if current == required {
        Ok(())
    } else {
        Err(Error::InvalidTransition {
            from: current.name(),
            action,
        })
    }
}

/// Drives the checkout state machine and verifies every transition's
/// postcondition.
///
/// ```text
/// Cart --start--> Info --submit(valid)--> Overview --finish--> Complete
///                  | ^
///        cancel    | | submit(invalid), recoverable
///  (back to Cart)  v |
/// ```
pub struct CheckoutWorkflow {
    driver: DriverHandle,
    config: Config,
    page: CheckoutPage,
    state: CheckoutState,
}

impl CheckoutWorkflow {
    /// Starts a workflow positioned on the cart view.
    ///
    /// The cart is expected to be non-empty; what the store would do for an
    /// empty cart is not modeled.
    pub fn new(driver: DriverHandle, config: Config) -> Self {
        Self {
            page: CheckoutPage::new(driver.clone()),
            driver,
            config,
            state: CheckoutState::Cart,
        }
    }

    /// Where the workflow currently stands.
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Cart -> Info: activates the checkout control and verifies the
    /// context landed on the information form.
    pub async fn start(&mut self) -> Result<()> {
        ensure(self.state, CheckoutState::Cart, "start")?;
        self.driver.click(cart::CHECKOUT_BUTTON).await?;
        expect_page(&self.driver)
            .to_match_url(CHECKOUT_INFO_URL_PATTERN)
            .await?;
        self.state = CheckoutState::Info;
        tracing::debug!("checkout started");
        Ok(())
    }

    /// Submits the information form.
    ///
    /// Returns `Ok(None)` when the form was accepted and the workflow
    /// advanced to the overview. Returns `Ok(Some(Rejected(..)))` when the
    /// form was rejected with the expected banner; the workflow stays at
    /// the information step and the form may be resubmitted.
    pub async fn submit(&mut self, form: &CheckoutForm) -> Result<Option<OrderResult>> {
        ensure(self.state, CheckoutState::Info, "submit")?;
        self.page.submit_details(form).await?;

        match form.validate() {
            Ok(()) => {
                expect_page(&self.driver)
                    .to_match_url(OVERVIEW_URL_PATTERN)
                    .await?;
                self.state = CheckoutState::Overview;
                tracing::debug!("information accepted, on overview");
                Ok(None)
            }
            Err(rejection) => {
                expect(self.page.error_banner())
                    .to_have_text(&rejection.to_string())
                    .await?;
                tracing::debug!(banner = %rejection, "form rejected as expected");
                Ok(Some(OrderResult::Rejected(rejection)))
            }
        }
    }

    /// Overview -> Complete: finishes the order and verifies the
    /// confirmation. Terminal; no further transitions are modeled.
    pub async fn finish(&mut self) -> Result<OrderResult> {
        ensure(self.state, CheckoutState::Overview, "finish")?;
        self.page.finish().await?;
        expect(self.page.confirmation())
            .to_match_text(CONFIRMATION_PATTERN)
            .await?;
        self.state = CheckoutState::Complete;
        tracing::info!("order completed");
        Ok(OrderResult::Completed)
    }

    /// Info -> Cart: abandons checkout and verifies the context returned
    /// to the cart view. Non-destructive; the cart keeps its contents.
    pub async fn cancel(&mut self) -> Result<OrderResult> {
        ensure(self.state, CheckoutState::Info, "cancel")?;
        self.page.cancel().await?;
        expect_page(&self.driver)
            .to_have_url(&self.config.cart_url())
            .await?;
        self.state = CheckoutState::Cart;
        tracing::info!("checkout cancelled");
        Ok(OrderResult::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_present_passes_validation() {
        assert_eq!(CheckoutForm::new("John", "Doe", "12345").validate(), Ok(()));
    }

    #[test]
    fn first_blank_field_short_circuits() {
        // Everything blank: first name is evaluated first and wins.
        assert_eq!(
            CheckoutForm::new("", "", "").validate(),
            Err(ValidationError::FirstNameRequired)
        );
        // First name present: last name is the next to fail.
        assert_eq!(
            CheckoutForm::new("John", "", "").validate(),
            Err(ValidationError::LastNameRequired)
        );
        assert_eq!(
            CheckoutForm::new("John", "Doe", "").validate(),
            Err(ValidationError::PostalCodeRequired)
        );
    }

    #[test]
    fn blank_field_reports_its_own_error_even_with_later_fields_filled() {
        assert_eq!(
            CheckoutForm::new("", "Doe", "12345").validate(),
            Err(ValidationError::FirstNameRequired)
        );
        assert_eq!(
            CheckoutForm::new("John", "", "12345").validate(),
            Err(ValidationError::LastNameRequired)
        );
    }

    #[test]
    fn transitions_are_guarded_by_state() {
        assert!(ensure(CheckoutState::Cart, CheckoutState::Cart, "start").is_ok());
        let err = ensure(CheckoutState::Cart, CheckoutState::Overview, "finish").unwrap_err();
        match err {
            Error::InvalidTransition { from, action } => {
                assert_eq!(from, "Cart");
                assert_eq!(action, "finish");
            }
            other => panic!("expected InvalidTransition, got {other:?}"),
        }
    }
}
