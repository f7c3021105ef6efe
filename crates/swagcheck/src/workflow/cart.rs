//! The cart manager: a client-side model of the cart plus the postcondition
//! checks every mutation must leave observable on the page.

use serde::Serialize;

use crate::catalog::Product;
use crate::config::Config;
use crate::driver::DriverHandle;
use crate::error::Result;
use crate::expect::expect;
use crate::pages::{CartPage, InventoryPage};

/// Ordered model of what the cart should contain.
///
/// One entry per distinct product, quantity always 1, in the order the
/// products were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    entries: Vec<Product>,
}

impl CartState {
    /// The entries in insertion order.
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The badge text this state demands: the entry count, or `None` when
    /// the badge must not be rendered at all.
    pub fn expected_badge(&self) -> Option<String> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.len().to_string())
        }
    }

    /// Entry names in insertion order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|p| p.name).collect()
    }

    fn push(&mut self, product: Product) {
        self.entries.push(product);
    }

    fn remove(&mut self, product: &Product) {
        self.entries.retain(|p| p != product);
    }
}

/// Tracks which products are selected and verifies the page agrees after
/// every mutation.
pub struct CartManager {
    state: CartState,
    inventory: InventoryPage,
    view: CartPage,
}

impl CartManager {
    pub fn new(driver: DriverHandle, config: Config) -> Self {
        Self {
            state: CartState::default(),
            inventory: InventoryPage::new(driver.clone()),
            view: CartPage::new(driver, config),
        }
    }

    /// The model of what the cart should currently contain.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Adds `product` via its row-scoped control.
    ///
    /// Postconditions checked in place: the badge shows the new entry
    /// count and the row's control has become a remove control. Adding a
    /// product that is already in the cart is not modeled; the row control
    /// would toggle it back out.
    pub async fn add_item(&mut self, product: &Product) -> Result<&CartState> {
        self.inventory.add_to_cart(product).await?;
        self.state.push(*product);

        expect(self.inventory.cart_badge())
            .to_have_text(&self.state.len().to_string())
            .await?;
        expect(self.inventory.remove_control_for(product))
            .to_be_visible()
            .await?;
        tracing::debug!(product = product.name, entries = self.state.len(), "cart grew");
        Ok(&self.state)
    }

    /// Removes `product` via its row-scoped remove control.
    ///
    /// Postconditions checked in place: the badge shows the decreased
    /// count, or is not rendered at all once the cart is empty.
    pub async fn remove_item(&mut self, product: &Product) -> Result<&CartState> {
        self.inventory.remove_from_cart(product).await?;
        self.state.remove(product);

        match self.state.expected_badge() {
            Some(text) => expect(self.inventory.cart_badge()).to_have_text(&text).await?,
            None => expect(self.inventory.cart_badge()).to_be_absent().await?,
        }
        tracing::debug!(product = product.name, entries = self.state.len(), "cart shrank");
        Ok(&self.state)
    }

    /// Current badge text, `None` when the badge is not rendered.
    pub async fn badge_text(&self) -> Result<Option<String>> {
        self.inventory.badge_text().await
    }

    /// Transitions to the cart view; a location mismatch is a
    /// [`crate::Error::Navigation`].
    pub async fn open_cart(&self) -> Result<()> {
        self.view.open().await
    }

    /// The cart view behind this manager.
    pub fn view(&self) -> &CartPage {
        &self.view
    }

    /// Verifies the cart view agrees with the model entry by entry:
    /// insertion order, exact catalog name, description and display price,
    /// and quantity 1 per entry.
    pub async fn verify_view(&self) -> Result<()> {
        let names = self.state.names();
        expect(self.view.items()).to_have_count(self.state.len()).await?;
        expect(self.view.item_names()).to_have_texts(&names).await?;

        let descriptions: Vec<&str> = self.state.entries().iter().map(|p| p.description).collect();
        expect(self.view.item_descriptions())
            .to_have_texts(&descriptions)
            .await?;

        let prices: Vec<String> = self.state.entries().iter().map(Product::display_price).collect();
        expect(self.view.item_prices()).to_have_texts(&prices).await?;

        let quantities = vec!["1"; self.state.len()];
        expect(self.view.item_quantities())
            .to_have_texts(&quantities)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn empty_cart_demands_an_absent_badge() {
        let state = CartState::default();
        assert_eq!(state.expected_badge(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut state = CartState::default();
        state.push(catalog::BIKE_LIGHT);
        state.push(catalog::BACKPACK);
        assert_eq!(state.names(), vec!["Sauce Labs Bike Light", "Sauce Labs Backpack"]);
        assert_eq!(state.expected_badge(), Some("2".to_string()));
    }

    #[test]
    fn removal_restores_the_pre_add_state() {
        let mut state = CartState::default();
        state.push(catalog::BACKPACK);
        state.remove(&catalog::BACKPACK);
        assert_eq!(state, CartState::default());
        assert_eq!(state.expected_badge(), None);
    }
}
