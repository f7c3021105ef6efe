// Shared test helpers

#![allow(dead_code)]

use std::sync::Once;

use swagcheck::{Config, Credentials};

static INIT: Once = Once::new();

/// Initializes tracing once per test binary. Honors RUST_LOG.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Configuration every integration test runs with.
pub fn test_config() -> Config {
    Config::new(
        "https://store.test",
        Credentials::new("standard_user", "secret_sauce"),
        "locked_out_user",
        "wrong_sauce",
    )
    .expect("static test config is valid")
}
