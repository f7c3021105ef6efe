//! The checkout screens: information form, overview, and confirmation.

use crate::driver::{DriverHandle, Element};
use crate::error::Result;
use crate::workflow::CheckoutForm;

pub const FIRST_NAME_INPUT: &str = "#first-name";
pub const LAST_NAME_INPUT: &str = "#last-name";
pub const POSTAL_CODE_INPUT: &str = "#postal-code";
pub const CONTINUE_BUTTON: &str = ".cart_button";
pub const FINISH_BUTTON: &str = r#"a.btn_action.cart_button:has-text("FINISH")"#;
pub const CANCEL_LINK: &str = ".cart_cancel_link";
pub const ERROR_BANNER: &str = r#"[data-test="error"]"#;
pub const COMPLETE_HEADER: &str = ".complete-header";

/// Page object for the checkout screens.
///
/// Only primitive interactions live here; which transition is legal when is
/// the job of [`crate::workflow::CheckoutWorkflow`].
pub struct CheckoutPage {
    driver: DriverHandle,
}

impl CheckoutPage {
    pub fn new(driver: DriverHandle) -> Self {
        Self { driver }
    }

    /// Fills the three information fields and submits the form.
    ///
    /// Blank fields are filled too: submitting an empty value is exactly
    /// how the validation scenarios provoke the form.
    pub async fn submit_details(&self, form: &CheckoutForm) -> Result<()> {
        self.driver.fill(FIRST_NAME_INPUT, &form.first_name).await?;
        self.driver.fill(LAST_NAME_INPUT, &form.last_name).await?;
        self.driver.fill(POSTAL_CODE_INPUT, &form.postal_code).await?;
        self.driver.click(CONTINUE_BUTTON).await
    }

    /// Activates the finish control on the overview screen.
    pub async fn finish(&self) -> Result<()> {
        self.driver.click(FINISH_BUTTON).await
    }

    /// Activates the cancel control on the information screen.
    pub async fn cancel(&self) -> Result<()> {
        self.driver.click(CANCEL_LINK).await
    }

    /// The banner that surfaces form validation errors.
    pub fn error_banner(&self) -> Element {
        Element::new(self.driver.clone(), ERROR_BANNER)
    }

    /// The order confirmation element on the completion screen.
    pub fn confirmation(&self) -> Element {
        Element::new(self.driver.clone(), COMPLETE_HEADER)
    }
}
