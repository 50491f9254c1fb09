//! Session-related types.
//!
//! A visitor's session holds three values, stored under the same keys the
//! shop has always used:
//!
//! | Key          | Value                                   |
//! |--------------|-----------------------------------------|
//! | `cart`       | JSON array of product objects           |
//! | `isLoggedIn` | the string `"true"`, or absent          |
//! | `username`   | the logged-in username, or absent       |

use corner_shop_core::Cart;

/// Session keys for storefront data.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for the login flag. Only the exact string `"true"` counts.
    pub const IS_LOGGED_IN: &str = "isLoggedIn";

    /// Key for the logged-in username.
    pub const USERNAME: &str = "username";
}

/// Value written under [`keys::IS_LOGGED_IN`] on successful login.
pub const LOGGED_IN: &str = "true";

/// Everything the storefront keeps about a visitor, as read from the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Cart contents in insertion order.
    pub cart: Cart,
    /// Raw value of the login flag.
    pub is_logged_in: Option<String>,
    /// Username recorded at login.
    pub username: Option<String>,
}

impl SessionState {
    /// Whether the login flag is set to exactly `"true"`.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in.as_deref() == Some(LOGGED_IN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let state = SessionState::default();
        assert!(!state.is_logged_in());
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_login_flag_must_be_exact() {
        let mut state = SessionState::default();
        for value in ["True", "TRUE", "1", "yes", "", " true"] {
            state.is_logged_in = Some(value.to_string());
            assert!(!state.is_logged_in(), "{value:?} must not count as logged in");
        }

        state.is_logged_in = Some("true".to_string());
        assert!(state.is_logged_in());
    }
}
