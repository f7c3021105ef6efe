// Integration tests for the checkout scenarios
//
// The double validates the form in the same fixed order the store does
// (first name, last name, postal code), so these prove the workflow model
// and the store's behavior agree on precedence, messages, and transitions.

mod common;

use fake_store::FakeStoreFactory;
use swagcheck::{run_scenario, scenarios};

#[tokio::test]
async fn test_checkout_control_is_visible() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "checkout control",
        scenarios::checkout::checkout_control_is_visible,
    )
    .await
    .expect("cart view should expose the checkout control");
}

#[tokio::test]
async fn test_blank_first_name_is_rejected() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "blank first name",
        scenarios::checkout::blank_first_name_is_rejected,
    )
    .await
    .expect("blank first name should surface its exact banner");
}

#[tokio::test]
async fn test_blank_last_name_is_rejected() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "blank last name",
        scenarios::checkout::blank_last_name_is_rejected,
    )
    .await
    .expect("blank last name should surface its exact banner");
}

#[tokio::test]
async fn test_blank_postal_code_is_rejected() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "blank postal code",
        scenarios::checkout::blank_postal_code_is_rejected,
    )
    .await
    .expect("blank postal code should surface its exact banner");
}

#[tokio::test]
async fn test_first_blank_field_takes_precedence() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "validation precedence",
        scenarios::checkout::first_blank_field_takes_precedence,
    )
    .await
    .expect("rejections should follow field order and stay recoverable");
}

#[tokio::test]
async fn test_completing_an_order_shows_confirmation() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "complete order",
        scenarios::checkout::completing_an_order_shows_confirmation,
    )
    .await
    .expect("valid details should reach the thank-you confirmation");
}

#[tokio::test]
async fn test_cancelling_returns_to_cart_unchanged() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "cancel checkout",
        scenarios::checkout::cancelling_returns_to_cart_unchanged,
    )
    .await
    .expect("cancelling should land on the cart view with contents intact");
}
