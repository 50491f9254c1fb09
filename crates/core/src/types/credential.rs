//! Login credential types.
//!
//! The shop knows a single username/password pair. It is compared by exact,
//! case-sensitive string equality - there is no hashing.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Something that can decide whether a username/password pair is valid.
///
/// The storefront holds one of these behind an `Arc`, so tests can swap in
/// their own credentials without touching configuration.
pub trait CredentialProvider: Send + Sync {
    /// Returns `true` if the pair matches a known account.
    fn matches(&self, username: &str, password: &str) -> bool;
}

/// A single static username/password pair.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credential {
    username: String,
    password: SecretString,
}

impl Credential {
    /// Create a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// The account's username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl CredentialProvider for Credential {
    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> Credential {
        Credential::new("testuser", SecretString::from("password123"))
    }

    #[test]
    fn test_exact_match() {
        assert!(credential().matches("testuser", "password123"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!credential().matches("TestUser", "password123"));
        assert!(!credential().matches("testuser", "PASSWORD123"));
    }

    #[test]
    fn test_no_trimming() {
        assert!(!credential().matches("testuser ", "password123"));
        assert!(!credential().matches("testuser", " password123"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug_output = format!("{:?}", credential());
        assert!(debug_output.contains("testuser"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("password123"));
    }
}
