//! swagcheck: end-to-end verification flows for the Swag Labs demo
//! storefront
//!
//! This crate automates the multi-step browsing flow of the demo store -
//! authenticate, browse the inventory, manage a cart, complete or abandon
//! checkout - and asserts on the observable page state after every
//! transition. The page objects and the workflow model they feed encode the
//! store's rules: which state transitions are valid, in which fixed order
//! the checkout form validates, and which exact banner each rejection must
//! surface.
//!
//! The browser-automation engine is an external collaborator behind the
//! [`Driver`] trait. The `playwright` cargo feature provides a real
//! implementation on top of `playwright-rs`; the test suite runs the same
//! scenarios against an in-memory store double.
//!
//! # Running a scenario
//!
//! ```ignore
//! use swagcheck::{Config, run_scenario, scenarios};
//! use swagcheck::PlaywrightFactory;
//!
//! #[tokio::main]
//! async fn main() -> swagcheck::Result<()> {
//!     // Fails fast if any required variable is missing.
//!     let config = Config::from_env()?;
//!     let factory = PlaywrightFactory;
//!
//!     run_scenario(
//!         &factory,
//!         &config,
//!         "valid login",
//!         scenarios::auth::valid_login_lands_on_inventory,
//!     )
//!     .await?;
//!
//!     run_scenario(
//!         &factory,
//!         &config,
//!         "complete an order",
//!         scenarios::checkout::completing_an_order_shows_confirmation,
//!     )
//!     .await
//! }
//! ```
//!
//! # Driving the components directly
//!
//! ```ignore
//! use swagcheck::{catalog, CheckoutForm, expect};
//!
//! let session = store.sign_in().await?;
//! let mut cart = store.cart();
//! cart.add_item(&catalog::BACKPACK).await?;
//! cart.open_cart().await?;
//!
//! let mut checkout = store.checkout();
//! checkout.start().await?;
//! checkout.submit(&CheckoutForm::new("John", "Doe", "12345")).await?;
//! checkout.finish().await?;
//! ```

pub mod catalog;
pub mod config;
mod driver;
#[cfg(feature = "playwright")]
mod driver_playwright;
mod error;
mod expect;
pub mod pages;
pub mod scenarios;
pub mod workflow;

// Re-export error types
pub use error::{AuthError, Error, Result, ValidationError};

// Re-export the assertions API
pub use expect::{Expectation, PageExpectation, expect, expect_page};

// Re-export the driver contract
pub use driver::{Driver, DriverHandle, Element};
#[cfg(feature = "playwright")]
pub use driver_playwright::{PlaywrightDriver, PlaywrightFactory};

// Re-export configuration
pub use config::{Config, Credentials};

// Re-export page objects
pub use pages::{CartPage, CheckoutPage, InventoryPage, LoginPage, Session};

// Re-export the workflow layer
pub use workflow::{
    CartManager, CartState, CheckoutForm, CheckoutState, CheckoutWorkflow, OrderResult,
};

// Re-export the scenario runner
pub use scenarios::{DriverFactory, Store, run_scenario};
