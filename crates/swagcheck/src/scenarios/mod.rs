// Scenario suite - end-to-end verification cases and their runner
//
// Each scenario composes the session gate, cart manager, and checkout
// workflow against literal preconditions and postconditions. Scenarios are
// plain async functions over a Store so any Driver implementation can back
// them.

pub mod auth;
pub mod cart;
pub mod checkout;

use std::fmt;
use std::future::Future;

use async_trait::async_trait;

use crate::config::Config;
use crate::driver::DriverHandle;
use crate::error::{Error, Result};
use crate::pages::{CartPage, InventoryPage, LoginPage, Session};
use crate::workflow::{CartManager, CheckoutWorkflow};

/// Hands out one fresh, exclusive browsing context per scenario.
///
/// Isolation is structural: contexts are never shared, so no two scenarios
/// can observe or mutate the same session or cart.
#[async_trait]
pub trait DriverFactory: Send + Sync {
    async fn acquire(&self) -> Result<DriverHandle>;
}

/// One scenario's exclusive view of the store under test.
///
/// Hands out page objects and workflow components that all share the
/// scenario's single browsing context and configuration.
pub struct Store {
    driver: DriverHandle,
    config: Config,
}

impl Store {
    pub fn new(driver: DriverHandle, config: Config) -> Self {
        Self { driver, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn login(&self) -> LoginPage {
        LoginPage::new(self.driver.clone(), self.config.clone())
    }

    pub fn inventory(&self) -> InventoryPage {
        InventoryPage::new(self.driver.clone())
    }

    pub fn cart_view(&self) -> CartPage {
        CartPage::new(self.driver.clone(), self.config.clone())
    }

    pub fn cart(&self) -> CartManager {
        CartManager::new(self.driver.clone(), self.config.clone())
    }

    pub fn checkout(&self) -> CheckoutWorkflow {
        CheckoutWorkflow::new(self.driver.clone(), self.config.clone())
    }

    /// Common precondition: authenticate with the configured valid pair.
    pub async fn sign_in(&self) -> Result<Session> {
        let login = self.login();
        login.open().await?;
        let valid = self.config.credentials().clone();
        login.authenticate(&valid.username, &valid.password).await
    }
}

/// Runs one scenario in a freshly acquired browsing context.
///
/// The context is acquired at scenario start and released on every exit
/// path - success or failure - so a failing scenario never leaks its
/// context or affects a sibling. Errors stay scenario-local; the caller
/// decides what a failure means for the rest of the suite.
pub async fn run_scenario<F, Fut>(
    factory: &dyn DriverFactory,
    config: &Config,
    name: &str,
    body: F,
) -> Result<()>
where
    F: FnOnce(Store) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let driver = factory.acquire().await?;
    tracing::info!(scenario = name, "scenario starting");

    let outcome = body(Store::new(driver.clone(), config.clone())).await;
    let released = driver.close().await;

    match &outcome {
        Ok(()) => tracing::info!(scenario = name, "scenario passed"),
        Err(err) => tracing::error!(scenario = name, %err, "scenario failed"),
    }
    if let Err(err) = &released {
        tracing::warn!(scenario = name, %err, "context release failed");
    }
    // A scenario failure outranks a release failure in the report.
    outcome.and(released)
}

/// Builds the assertion failure for a scenario that observed an outcome
/// other than the one its precondition promises.
pub(crate) fn outcome_mismatch(expected: &str, actual: impl fmt::Debug) -> Error {
    Error::Assertion {
        selector: "scenario outcome".to_string(),
        expected: expected.to_string(),
        actual: format!("{actual:?}"),
    }
}
