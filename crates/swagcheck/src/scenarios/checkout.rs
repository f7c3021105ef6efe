//! Checkout scenarios: validation order and messages, the happy path to a
//! confirmed order, and non-destructive cancellation.

use crate::catalog;
use crate::error::{Result, ValidationError};
use crate::expect::expect;
use crate::workflow::{CartManager, CheckoutForm, CheckoutState, CheckoutWorkflow, OrderResult};

use super::{Store, outcome_mismatch};

fn valid_form() -> CheckoutForm {
    CheckoutForm::new("John", "Doe", "12345")
}

/// Common precondition: signed in, one product in the cart, on the cart
/// view.
async fn cart_ready(store: &Store) -> Result<(CartManager, CheckoutWorkflow)> {
    store.sign_in().await?;
    let mut cart = store.cart();
    cart.add_item(&catalog::BACKPACK).await?;
    cart.open_cart().await?;
    Ok((cart, store.checkout()))
}

async fn expect_rejection(
    workflow: &mut CheckoutWorkflow,
    form: CheckoutForm,
    rejection: ValidationError,
) -> Result<()> {
    match workflow.submit(&form).await? {
        Some(OrderResult::Rejected(actual)) if actual == rejection => {}
        outcome => return Err(outcome_mismatch(&format!("Rejected({rejection:?})"), &outcome)),
    }
    // Rejection is recoverable: the workflow must still be at the form.
    if workflow.state() != CheckoutState::Info {
        return Err(outcome_mismatch("Info state", workflow.state()));
    }
    Ok(())
}

/// The cart view exposes a visible checkout control.
pub async fn checkout_control_is_visible(store: Store) -> Result<()> {
    let (cart, _) = cart_ready(&store).await?;
    expect(cart.view().checkout_control()).to_be_visible().await
}

/// A blank first name is rejected with its exact banner.
pub async fn blank_first_name_is_rejected(store: Store) -> Result<()> {
    let (_cart, mut workflow) = cart_ready(&store).await?;
    workflow.start().await?;
    expect_rejection(
        &mut workflow,
        CheckoutForm::new("", "Doe", "12345"),
        ValidationError::FirstNameRequired,
    )
    .await
}

/// A blank last name is rejected with its exact banner.
pub async fn blank_last_name_is_rejected(store: Store) -> Result<()> {
    let (_cart, mut workflow) = cart_ready(&store).await?;
    workflow.start().await?;
    expect_rejection(
        &mut workflow,
        CheckoutForm::new("John", "", "12345"),
        ValidationError::LastNameRequired,
    )
    .await
}

/// A blank postal code is rejected with its exact banner.
pub async fn blank_postal_code_is_rejected(store: Store) -> Result<()> {
    let (_cart, mut workflow) = cart_ready(&store).await?;
    workflow.start().await?;
    expect_rejection(
        &mut workflow,
        CheckoutForm::new("John", "Doe", ""),
        ValidationError::PostalCodeRequired,
    )
    .await
}

/// With several fields blank the first one in evaluation order wins, and
/// each rejection leaves the form open for resubmission until it passes.
pub async fn first_blank_field_takes_precedence(store: Store) -> Result<()> {
    let (_cart, mut workflow) = cart_ready(&store).await?;
    workflow.start().await?;
    expect_rejection(
        &mut workflow,
        CheckoutForm::new("", "", ""),
        ValidationError::FirstNameRequired,
    )
    .await?;
    expect_rejection(
        &mut workflow,
        CheckoutForm::new("John", "", ""),
        ValidationError::LastNameRequired,
    )
    .await?;
    match workflow.submit(&valid_form()).await? {
        None => Ok(()),
        outcome => Err(outcome_mismatch("advance to Overview", &outcome)),
    }
}

/// Valid details reach the overview, and finishing from there confirms the
/// order with the thank-you banner.
pub async fn completing_an_order_shows_confirmation(store: Store) -> Result<()> {
    let (_cart, mut workflow) = cart_ready(&store).await?;
    workflow.start().await?;
    if let Some(outcome) = workflow.submit(&valid_form()).await? {
        return Err(outcome_mismatch("advance to Overview", &outcome));
    }
    match workflow.finish().await? {
        OrderResult::Completed => Ok(()),
        outcome => Err(outcome_mismatch("Completed", &outcome)),
    }
}

/// Cancelling from the information step returns to the cart view with the
/// cart contents untouched.
pub async fn cancelling_returns_to_cart_unchanged(store: Store) -> Result<()> {
    let (cart, mut workflow) = cart_ready(&store).await?;
    workflow.start().await?;
    match workflow.cancel().await? {
        OrderResult::Cancelled => {}
        outcome => return Err(outcome_mismatch("Cancelled", &outcome)),
    }
    // Cancellation is non-destructive: same entries, same order.
    cart.verify_view().await
}
