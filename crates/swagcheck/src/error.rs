// Error types for swagcheck

use thiserror::Error;

/// Result type alias for swagcheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Authentication failures the login screen reports.
///
/// The `Display` text of each variant is the exact banner the UI must
/// surface, character for character. Scenarios assert on it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The username field was left empty. Takes precedence over any
    /// password problem.
    #[error("Epic sadface: Username is required")]
    MissingUsername,

    /// A username was supplied but the pair is not recognized. Also covers
    /// an empty password next to a present username.
    #[error("Epic sadface: Username and password do not match any user in this service")]
    CredentialMismatch,
}

/// Checkout form rejections, one per required field.
///
/// The `Display` text is the exact error banner the form shows. The form
/// evaluates fields in declaration order and reports only the first blank
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, serde::Serialize)]
pub enum ValidationError {
    #[error("Error: First Name is required")]
    FirstNameRequired,

    #[error("Error: Last Name is required")]
    LastNameRequired,

    #[error("Error: Postal Code is required")]
    PostalCodeRequired,
}

/// Errors that can occur while driving a verification flow
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is absent or malformed.
    ///
    /// Raised while building [`crate::Config`], before any scenario runs.
    /// The message names the offending variable.
    #[error("missing or invalid configuration: {0}")]
    Config(String),

    /// The login screen rejected the attempt with the expected banner.
    #[error("authentication rejected: {0}")]
    Auth(#[from] AuthError),

    /// The checkout form rejected the submission with the expected banner.
    ///
    /// Recoverable: the workflow remains at the information step and the
    /// form may be resubmitted.
    #[error("checkout form rejected: {0}")]
    Validation(#[from] ValidationError),

    /// A transition ended on the wrong location.
    #[error("navigation landed on '{actual}', expected '{expected}'")]
    Navigation { expected: String, actual: String },

    /// Observed UI state disagrees with the expectation.
    ///
    /// Always carries the expected and actual values; a failure is never
    /// reported without them.
    #[error("assertion failed on '{selector}': expected {expected}, got {actual}")]
    Assertion {
        selector: String,
        expected: String,
        actual: String,
    },

    /// The checkout state machine was driven out of order by the caller.
    #[error("invalid checkout transition: '{action}' is not available from the {from} state")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    /// Engine-level failure reported by the underlying browser driver.
    #[error("driver error: {0}")]
    Driver(String),
}

#[cfg(feature = "playwright")]
impl From<playwright_rs::Error> for Error {
    fn from(err: playwright_rs::Error) -> Self {
        Error::Driver(err.to_string())
    }
}
