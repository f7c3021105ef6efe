//! The session gate: the login screen and the sessions it produces.
//!
//! Credentials and locations come exclusively from the [`Config`] handed in
//! at construction; nothing here reads the environment mid-flow.

use crate::config::{Config, Credentials};
use crate::driver::{DriverHandle, Element};
use crate::error::{AuthError, Result};
use crate::expect::{expect, expect_page};

pub const USERNAME_INPUT: &str = r#"[data-test="username"]"#;
pub const PASSWORD_INPUT: &str = r#"[data-test="password"]"#;
pub const LOGIN_BUTTON: &str = "#login-button";
pub const ERROR_BANNER: &str = r#"h3[data-test="error"]"#;

/// An authenticated browsing context tied to one identity.
///
/// Produced only by a successful [`LoginPage::authenticate`]; owned by the
/// scenario that created it and discarded with the scenario's context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    /// The identity this session was established for.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// The outcome the login screen must produce for a credential pair.
///
/// Precedence is fixed: an empty username always reports
/// [`AuthError::MissingUsername`] no matter what the password holds; any
/// other pair the store does not accept reports
/// [`AuthError::CredentialMismatch`], including a present username with an
/// empty password.
pub fn expected_outcome(
    username: &str,
    password: &str,
    valid: &Credentials,
) -> std::result::Result<(), AuthError> {
    if username.is_empty() {
        return Err(AuthError::MissingUsername);
    }
    if username == valid.username && password == valid.password {
        Ok(())
    } else {
        Err(AuthError::CredentialMismatch)
    }
}

/// Page object for the login screen.
pub struct LoginPage {
    driver: DriverHandle,
    config: Config,
}

impl LoginPage {
    pub fn new(driver: DriverHandle, config: Config) -> Self {
        Self { driver, config }
    }

    /// Navigates the context to the login screen.
    pub async fn open(&self) -> Result<()> {
        self.driver.goto(&self.config.base_url()).await
    }

    /// The banner that surfaces authentication errors.
    pub fn error_banner(&self) -> Element {
        Element::new(self.driver.clone(), ERROR_BANNER)
    }

    /// Submits the credential pair and verifies the screen reacts the way
    /// the gate's rules demand.
    ///
    /// On an accepted pair the resulting location must equal the inventory
    /// page, the sole observable proof of authentication, and a [`Session`]
    /// is returned. On a rejected pair the error banner must carry the
    /// exact expected message and the corresponding [`AuthError`] is
    /// returned. Any other observed state is an assertion failure.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Session> {
        tracing::debug!(username, "submitting login form");
        self.driver.fill(USERNAME_INPUT, username).await?;
        self.driver.fill(PASSWORD_INPUT, password).await?;
        self.driver.click(LOGIN_BUTTON).await?;

        match expected_outcome(username, password, self.config.credentials()) {
            Ok(()) => {
                expect_page(&self.driver)
                    .to_have_url(&self.config.inventory_url())
                    .await?;
                tracing::info!(username, "session established");
                Ok(Session {
                    username: username.to_string(),
                })
            }
            Err(auth) => {
                expect(self.error_banner())
                    .to_have_text(&auth.to_string())
                    .await?;
                tracing::info!(username, banner = %auth, "login rejected as expected");
                Err(auth.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Credentials {
        Credentials::new("standard_user", "secret_sauce")
    }

    #[test]
    fn accepts_the_configured_pair() {
        assert_eq!(expected_outcome("standard_user", "secret_sauce", &valid()), Ok(()));
    }

    #[test]
    fn empty_username_wins_regardless_of_password() {
        assert_eq!(
            expected_outcome("", "secret_sauce", &valid()),
            Err(AuthError::MissingUsername)
        );
        assert_eq!(
            expected_outcome("", "", &valid()),
            Err(AuthError::MissingUsername)
        );
    }

    #[test]
    fn unknown_pairs_report_a_mismatch() {
        assert_eq!(
            expected_outcome("locked_out_user", "secret_sauce", &valid()),
            Err(AuthError::CredentialMismatch)
        );
        assert_eq!(
            expected_outcome("standard_user", "wrong_sauce", &valid()),
            Err(AuthError::CredentialMismatch)
        );
    }

    #[test]
    fn empty_password_with_present_username_is_a_mismatch() {
        assert_eq!(
            expected_outcome("standard_user", "", &valid()),
            Err(AuthError::CredentialMismatch)
        );
    }
}
