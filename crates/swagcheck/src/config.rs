//! Configuration for the store under verification, loaded from environment
//! variables.
//!
//! # Environment Variables
//!
//! All required; a missing one fails fast with [`Error::Config`] before any
//! scenario executes.
//!
//! - `SWAGCHECK_BASE_URL` - base URL of the target storefront
//! - `SWAGCHECK_USER` - username the store accepts
//! - `SWAGCHECK_PASSWORD` - password matching `SWAGCHECK_USER`
//! - `SWAGCHECK_INVALID_USER` - a username the store does not know
//! - `SWAGCHECK_INVALID_PASSWORD` - a password that does not match `SWAGCHECK_USER`
//!
//! Credentials travel inside the [`Config`] value object handed to the page
//! objects at construction; nothing reads the environment mid-flow.

use url::Url;

use crate::error::{Error, Result};

const BASE_URL_VAR: &str = "SWAGCHECK_BASE_URL";
const USER_VAR: &str = "SWAGCHECK_USER";
const PASSWORD_VAR: &str = "SWAGCHECK_PASSWORD";
const INVALID_USER_VAR: &str = "SWAGCHECK_INVALID_USER";
const INVALID_PASSWORD_VAR: &str = "SWAGCHECK_INVALID_PASSWORD";

/// A username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Everything a scenario needs to know about the store under test.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: Url,
    valid: Credentials,
    invalid_username: String,
    invalid_password: String,
}

impl Config {
    /// Builds a configuration from explicit values.
    ///
    /// `base_url` must be an absolute URL; page locations are derived from
    /// it by joining well-known document names.
    pub fn new(
        base_url: &str,
        valid: Credentials,
        invalid_username: impl Into<String>,
        invalid_password: impl Into<String>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("{BASE_URL_VAR} is not a valid URL: {e}")))?;
        Ok(Self {
            base_url,
            valid,
            invalid_username: invalid_username.into(),
            invalid_password: invalid_password.into(),
        })
    }

    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is honored when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an injected lookup.
    ///
    /// `from_env` delegates here; tests supply a closure over a map instead
    /// of mutating process-global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(name.to_string()))
        };

        let base_url = require(BASE_URL_VAR)?;
        let valid = Credentials::new(require(USER_VAR)?, require(PASSWORD_VAR)?);
        let invalid_username = require(INVALID_USER_VAR)?;
        let invalid_password = require(INVALID_PASSWORD_VAR)?;
        Self::new(&base_url, valid, invalid_username, invalid_password)
    }

    /// The login page location.
    pub fn base_url(&self) -> String {
        self.base_url.to_string()
    }

    /// The credential pair the store accepts.
    pub fn credentials(&self) -> &Credentials {
        &self.valid
    }

    /// A username the store does not recognize.
    pub fn invalid_username(&self) -> &str {
        &self.invalid_username
    }

    /// A password that does not match the valid username.
    pub fn invalid_password(&self) -> &str {
        &self.invalid_password
    }

    /// The authenticated landing location.
    pub fn inventory_url(&self) -> String {
        self.page_url("inventory.html")
    }

    /// The cart view location.
    pub fn cart_url(&self) -> String {
        self.page_url("cart.html")
    }

    /// The checkout information step location.
    pub fn checkout_info_url(&self) -> String {
        self.page_url("checkout-step-one.html")
    }

    /// The checkout overview step location.
    pub fn checkout_overview_url(&self) -> String {
        self.page_url("checkout-step-two.html")
    }

    /// The order confirmation location.
    pub fn checkout_complete_url(&self) -> String {
        self.page_url("checkout-complete.html")
    }

    fn page_url(&self, document: &str) -> String {
        // Base URLs are document roots; join() keeps any sub-path intact.
        self.base_url
            .join(document)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}/{document}", self.base_url))
    }
}
