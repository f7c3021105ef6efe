// Workflow layer - the rules above the page objects
//
// Encodes which transitions between authentication, cart, and checkout
// states are valid, in which order the checkout form validates, and which
// postconditions each transition must leave observable.

pub mod cart;
pub mod checkout;

pub use cart::{CartManager, CartState};
pub use checkout::{CheckoutForm, CheckoutState, CheckoutWorkflow, OrderResult};
