//! The inventory page: product rows with their add/remove controls and the
//! shared cart indicators.

use crate::catalog::Product;
use crate::driver::{DriverHandle, Element};
use crate::error::Result;

pub const CART_LINK: &str = ".shopping_cart_link";
pub const CART_BADGE: &str = ".shopping_cart_badge";

/// Selector for one product's inventory row.
///
/// Controls are always scoped to a row; a global "first button on the page"
/// would be ambiguous as soon as two products are listed.
pub fn item_row(product: &Product) -> String {
    format!(
        r#".inventory_item:has(.inventory_item_name:has-text("{}"))"#,
        product.name
    )
}

/// Selector for the row's add/remove control.
///
/// The same physical button toggles: it reads "Add to cart" while the
/// product is out of the cart and "Remove" once it is in.
pub fn item_control(product: &Product) -> String {
    format!("{} button", item_row(product))
}

/// Selector for the row's control only once it has become a remove control.
pub fn remove_control(product: &Product) -> String {
    format!(r#"{} button:has-text("Remove")"#, item_row(product))
}

/// Page object for the inventory listing.
pub struct InventoryPage {
    driver: DriverHandle,
}

impl InventoryPage {
    pub fn new(driver: DriverHandle) -> Self {
        Self { driver }
    }

    /// Activates the add control in `product`'s row.
    pub async fn add_to_cart(&self, product: &Product) -> Result<()> {
        tracing::debug!(product = product.name, "adding to cart");
        self.driver.click(&item_control(product)).await
    }

    /// Activates the remove control in `product`'s row.
    pub async fn remove_from_cart(&self, product: &Product) -> Result<()> {
        tracing::debug!(product = product.name, "removing from cart");
        self.driver.click(&remove_control(product)).await
    }

    /// Handle on the row's control in its post-add "Remove" form.
    pub fn remove_control_for(&self, product: &Product) -> Element {
        Element::new(self.driver.clone(), remove_control(product))
    }

    /// Handle on the cart badge. Absent, not "0", when the cart is empty.
    pub fn cart_badge(&self) -> Element {
        Element::new(self.driver.clone(), CART_BADGE)
    }

    /// Current badge text, `None` when the badge is not rendered.
    pub async fn badge_text(&self) -> Result<Option<String>> {
        self.driver.inner_text(CART_BADGE).await
    }

    /// Activates the cart link. Location checking is the cart page's job.
    pub async fn open_cart(&self) -> Result<()> {
        self.driver.click(CART_LINK).await
    }
}
