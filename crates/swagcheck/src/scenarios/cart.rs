//! Cart scenarios: badge arithmetic, insertion order, catalog fidelity,
//! and the add/remove round trip.

use crate::catalog;
use crate::error::Result;
use crate::expect::expect;

use super::Store;

/// Adding one product sets the badge to "1"; the postcondition checks live
/// in the cart manager itself.
pub async fn adding_one_product_sets_badge_to_one(store: Store) -> Result<()> {
    store.sign_in().await?;
    let mut cart = store.cart();
    cart.add_item(&catalog::BACKPACK).await?;
    Ok(())
}

/// The badge counts distinct products, one per entry.
pub async fn badge_counts_distinct_products(store: Store) -> Result<()> {
    store.sign_in().await?;
    let mut cart = store.cart();
    cart.add_item(&catalog::BACKPACK).await?;
    cart.add_item(&catalog::BIKE_LIGHT).await?;
    expect(store.inventory().cart_badge()).to_have_text("2").await
}

/// Removing the only product leaves the badge unrendered, not showing "0".
pub async fn removing_only_product_hides_badge(store: Store) -> Result<()> {
    store.sign_in().await?;
    let mut cart = store.cart();
    cart.add_item(&catalog::BACKPACK).await?;
    cart.remove_item(&catalog::BACKPACK).await?;
    expect(store.inventory().cart_badge()).to_be_absent().await
}

/// The cart view lists entries in the order they were added.
pub async fn cart_lists_products_in_insertion_order(store: Store) -> Result<()> {
    store.sign_in().await?;
    let mut cart = store.cart();
    cart.add_item(&catalog::BACKPACK).await?;
    cart.add_item(&catalog::BIKE_LIGHT).await?;
    cart.open_cart().await?;
    cart.verify_view().await
}

/// A cart entry mirrors its catalog product exactly: name, description,
/// display price, and quantity 1.
pub async fn cart_entry_matches_catalog(store: Store) -> Result<()> {
    store.sign_in().await?;
    let mut cart = store.cart();
    cart.add_item(&catalog::BACKPACK).await?;
    cart.open_cart().await?;
    cart.verify_view().await
}

/// Add-then-remove returns the cart to its pre-add state: no badge, no
/// listed entries.
pub async fn add_then_remove_round_trips(store: Store) -> Result<()> {
    store.sign_in().await?;
    let mut cart = store.cart();
    cart.add_item(&catalog::BACKPACK).await?;
    cart.remove_item(&catalog::BACKPACK).await?;
    expect(store.inventory().cart_badge()).to_be_absent().await?;
    cart.open_cart().await?;
    expect(cart.view().items()).to_have_count(0).await
}

/// A session that never added anything sees an empty cart view.
pub async fn untouched_cart_is_empty(store: Store) -> Result<()> {
    store.sign_in().await?;
    let cart = store.cart_view();
    cart.open().await?;
    expect(cart.items()).to_have_count(0).await
}

/// Continue Shopping leads back to the inventory listing.
pub async fn continue_shopping_returns_to_inventory(store: Store) -> Result<()> {
    store.sign_in().await?;
    let mut cart = store.cart();
    cart.add_item(&catalog::BACKPACK).await?;
    cart.open_cart().await?;
    cart.view().continue_shopping().await
}
