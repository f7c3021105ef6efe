//! The cart view: the listed entries and the controls leading onward.

use crate::config::Config;
use crate::driver::{DriverHandle, Element};
use crate::error::Result;
use crate::expect::expect_page;

use super::inventory::CART_LINK;

pub const CART_ITEM: &str = ".cart_item";
pub const CART_ITEM_NAME: &str = ".cart_item .inventory_item_name";
pub const CART_ITEM_DESC: &str = ".cart_item .inventory_item_desc";
pub const CART_ITEM_PRICE: &str = ".cart_item .inventory_item_price";
pub const CART_QUANTITY: &str = ".cart_quantity";
pub const CHECKOUT_BUTTON: &str = ".checkout_button";
pub const CONTINUE_SHOPPING: &str = r#"a.btn_secondary:has-text("Continue Shopping")"#;

/// Page object for the cart view.
pub struct CartPage {
    driver: DriverHandle,
    config: Config,
}

impl CartPage {
    pub fn new(driver: DriverHandle, config: Config) -> Self {
        Self { driver, config }
    }

    /// Activates the cart link and verifies the context landed on the cart
    /// view; a mismatch is a [`crate::Error::Navigation`].
    pub async fn open(&self) -> Result<()> {
        self.driver.click(CART_LINK).await?;
        expect_page(&self.driver)
            .to_have_url(&self.config.cart_url())
            .await
    }

    /// Handle on the listed cart entries.
    pub fn items(&self) -> Element {
        Element::new(self.driver.clone(), CART_ITEM)
    }

    /// Handle on the entry names, in the order the view lists them.
    pub fn item_names(&self) -> Element {
        Element::new(self.driver.clone(), CART_ITEM_NAME)
    }

    /// Handle on the entry descriptions.
    pub fn item_descriptions(&self) -> Element {
        Element::new(self.driver.clone(), CART_ITEM_DESC)
    }

    /// Handle on the displayed unit prices.
    pub fn item_prices(&self) -> Element {
        Element::new(self.driver.clone(), CART_ITEM_PRICE)
    }

    /// Handle on the displayed quantities, one per entry.
    pub fn item_quantities(&self) -> Element {
        Element::new(self.driver.clone(), CART_QUANTITY)
    }

    /// Handle on the control that starts the checkout workflow.
    pub fn checkout_control(&self) -> Element {
        Element::new(self.driver.clone(), CHECKOUT_BUTTON)
    }

    /// Returns to the inventory listing.
    pub async fn continue_shopping(&self) -> Result<()> {
        self.driver.click(CONTINUE_SHOPPING).await?;
        expect_page(&self.driver)
            .to_have_url(&self.config.inventory_url())
            .await
    }
}
