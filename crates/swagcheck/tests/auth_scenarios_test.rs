// Integration tests for the session-gate scenarios
//
// Every scenario runs against the in-memory store double, which implements
// the login rules independently: empty username wins over any password
// problem, anything else unrecognized is a mismatch.

mod common;

use fake_store::FakeStoreFactory;
use swagcheck::{run_scenario, scenarios};

#[tokio::test]
async fn test_valid_login_lands_on_inventory() {
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
    .expect("the configured pair should authenticate");
}

#[tokio::test]
async fn test_empty_username_is_rejected_regardless_of_password() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "empty username",
        scenarios::auth::empty_username_is_rejected,
    )
    .await
    .expect("empty username should surface the required-username banner");
}

#[tokio::test]
async fn test_unknown_username_is_rejected() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "unknown username",
        scenarios::auth::unknown_username_is_rejected,
    )
    .await
    .expect("unknown username should surface the mismatch banner");
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    common::init_tracing();
    let config = common::test_config();
    let factory = FakeStoreFactory::new(&config);

    run_scenario(
        &factory,
        &config,
        "wrong password",
        scenarios::auth::wrong_password_is_rejected,
    )
    .await
    .expect("wrong password should surface the mismatch banner");
}
