//! Session-gate scenarios: who gets in, who is turned away, and with
//! exactly which banner.

use crate::error::{AuthError, Error, Result};

use super::{Store, outcome_mismatch};

/// The configured valid pair authenticates and lands on the inventory
/// page, the sole observable proof of an established session.
pub async fn valid_login_lands_on_inventory(store: Store) -> Result<()> {
    let session = store.sign_in().await?;
    let expected = &store.config().credentials().username;
    if session.username() != expected {
        return Err(outcome_mismatch(expected, session.username()));
    }
    Ok(())
}

/// An empty username is rejected with the exact required-username banner,
/// no matter what the password field holds.
pub async fn empty_username_is_rejected(store: Store) -> Result<()> {
    let login = store.login();
    login.open().await?;
    let password = store.config().credentials().password.clone();
    match login.authenticate("", &password).await {
        Err(Error::Auth(AuthError::MissingUsername)) => Ok(()),
        outcome => Err(outcome_mismatch("Auth(MissingUsername)", &outcome)),
    }
}

/// A username the store does not know is rejected with the exact mismatch
/// banner.
pub async fn unknown_username_is_rejected(store: Store) -> Result<()> {
    let login = store.login();
    login.open().await?;
    let username = store.config().invalid_username().to_string();
    let password = store.config().credentials().password.clone();
    match login.authenticate(&username, &password).await {
        Err(Error::Auth(AuthError::CredentialMismatch)) => Ok(()),
        outcome => Err(outcome_mismatch("Auth(CredentialMismatch)", &outcome)),
    }
}

/// A known username with the wrong password is rejected with the same
/// mismatch banner.
pub async fn wrong_password_is_rejected(store: Store) -> Result<()> {
    let login = store.login();
    login.open().await?;
    let username = store.config().credentials().username.clone();
    let password = store.config().invalid_password().to_string();
    match login.authenticate(&username, &password).await {
        Err(Error::Auth(AuthError::CredentialMismatch)) => Ok(()),
        outcome => Err(outcome_mismatch("Auth(CredentialMismatch)", &outcome)),
    }
}
