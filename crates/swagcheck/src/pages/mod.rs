// Page objects for the storefront under verification
//
// Each page object holds a driver handle for the scenario's exclusive
// browsing context plus the selectors of one screen. Page objects perform
// primitive interactions and in-place postcondition checks; multi-step
// rules live in the workflow layer.

pub mod cart;
pub mod checkout;
pub mod inventory;
pub mod login;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use inventory::InventoryPage;
pub use login::{LoginPage, Session};
