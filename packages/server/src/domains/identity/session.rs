//! Mock credential handling.
//!
//! Deliberately a stub: any password is accepted, nothing is persisted, and
//! no identity record is created. A real deployment replaces this module
//! with a genuine auth subsystem; the rest of the crate only depends on the
//! [`Identity`] it produces.

use thiserror::Error;

use crate::common::Identity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("email must have a non-empty local part")]
    InvalidEmail,

    #[error("name must not be empty")]
    EmptyName,
}

/// Derive the session identity for a login attempt.
///
/// The display name is the local part of the email; the password is ignored.
pub fn login(email: &str, _password: &str) -> Result<Identity, CredentialError> {
    let email = email.trim();
    let local_part = email.split('@').next().unwrap_or_default();
    if local_part.is_empty() {
        return Err(CredentialError::InvalidEmail);
    }

    Ok(Identity::authenticated(local_part, email))
}

/// Derive the session identity for a signup.
///
/// The university is accepted for the form's sake and not retained.
pub fn signup(
    name: &str,
    email: &str,
    _password: &str,
    _university: &str,
) -> Result<Identity, CredentialError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CredentialError::EmptyName);
    }

    let email = email.trim();
    if email.is_empty() {
        return Err(CredentialError::InvalidEmail);
    }

    Ok(Identity::authenticated(name, email))
}
