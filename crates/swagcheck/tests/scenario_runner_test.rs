// Integration tests for the scenario runner and its failure semantics
//
// Covers scoped context release on every exit path, structural isolation
// between scenarios, and the rule that every failure surfaces with the
// expected and actual values.

mod common;

use fake_store::FakeStoreFactory;
use swagcheck::{Credentials, Error, Store, run_scenario, scenarios};

#[tokio::test]
async fn test_context_is_released_after_a_passing_scenario() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "valid login",
        scenarios::auth::valid_login_lands_on_inventory,
    )
    .await
    .expect("scenario should pass");

    assert_eq!(factory.spawned(), 1);
    assert!(factory.all_released(), "context must be closed after success");
}

#[tokio::test]
async fn test_context_is_released_after_a_failing_scenario() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    let err = run_scenario(&factory, &config, "exploding", |_store: Store| async {
        Err(Error::Driver("boom".to_string()))
    })
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Driver(msg) if msg == "boom"));
    assert!(factory.all_released(), "context must be closed after failure");
}

#[tokio::test]
async fn test_scenarios_get_independent_contexts() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    // The same scenario twice: if any cart state leaked from the first
    // context into the second, the second badge check would see "2".
    for round in 0..2 {
        run_scenario(
            &factory,
            &config,
            &format!("single add, round {round}"),
            scenarios::cart::adding_one_product_sets_badge_to_one,
        )
        .await
        .expect("each round should start from an empty cart");
    }
    assert_eq!(factory.spawned(), 2);
    assert!(factory.all_released());
}

#[tokio::test]
async fn test_misconfigured_credentials_report_expected_vs_actual_location() {
    common::init_tracing();
    let config = common::test_config();
    // The store accepts a different pair than the configuration claims, so
    // the expected-success login never leaves the login screen.
    let factory = FakeStoreFactory::accepting(&config, Credentials::new("other_user", "other_pw"));

    let err = run_scenario(
        &factory,
        &config,
        "misconfigured",
        scenarios::auth::valid_login_lands_on_inventory,
    )
    .await
    .unwrap_err();

    match err {
        Error::Navigation { expected, actual } => {
            assert_eq!(expected, config.inventory_url());
            assert_eq!(actual, config.base_url());
        }
        other => panic!("expected Navigation with both locations, got {other:?}"),
    }
    assert!(factory.all_released(), "context must be closed after failure");
}

#[tokio::test]
async fn test_badge_rendered_as_zero_is_caught() {
    common::init_tracing();
    let config = common::test_config();
    // A store that renders "0" instead of omitting the badge violates the
    // absence contract; the removal scenario must report it.
    let factory = FakeStoreFactory::with_zero_badge_quirk(&config);

    let err = run_scenario(
        &factory,
        &config,
        "zero badge quirk",
        scenarios::cart::removing_only_product_hides_badge,
    )
    .await
    .unwrap_err();

    match err {
        Error::Assertion {
            selector,
            expected,
            actual,
        } => {
            assert_eq!(selector, ".shopping_cart_badge");
            assert_eq!(expected, "no rendered element");
            assert_eq!(actual, "1 rendered element(s)");
        }
        other => panic!("expected Assertion with both values, got {other:?}"),
    }
}

#[tokio::test]
async fn test_driving_checkout_out_of_order_is_rejected() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(&factory, &config, "out of order", |store: Store| async move {
        store.sign_in().await?;
        let mut workflow = store.checkout();
        match workflow.finish().await {
            Err(Error::InvalidTransition { from, action }) => {
                assert_eq!(from, "Cart");
                assert_eq!(action, "finish");
                Ok(())
            }
            outcome => Err(Error::Driver(format!(
                "finish before start should be refused, got {outcome:?}"
            ))),
        }
    })
    .await
    .expect("the guard itself should hold");
}
