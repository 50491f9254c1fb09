//! Login form validation.
//!
//! A login attempt goes through two checks, in order:
//! 1. both fields must be non-empty
//! 2. the pair must match the configured credential exactly
//!
//! The error messages are shown to the visitor verbatim.

use thiserror::Error;

use crate::types::CredentialProvider;

/// Why a login attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Username or password (or both) left blank.
    #[error("Username and Password are required")]
    MissingFields,

    /// Fields filled in but not matching the known credential.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Validate a submitted username/password pair.
///
/// # Errors
///
/// Returns [`LoginError::MissingFields`] if either field is the empty string,
/// otherwise [`LoginError::InvalidCredentials`] if the pair does not match.
pub fn check_login<P>(credentials: &P, username: &str, password: &str) -> Result<(), LoginError>
where
    P: CredentialProvider + ?Sized,
{
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }

    if credentials.matches(username, password) {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}
