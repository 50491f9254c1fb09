//! Login gate for the dashboard.
//!
//! The gate only looks at the session's login flag. It keeps anonymous
//! visitors off the dashboard page; it is not an access-control boundary.

use axum::response::{IntoResponse, Redirect, Response};
use corner_shop_core::Page;

use crate::services::ShopSession;

/// Proof that the visitor passed the login gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedIn {
    /// Username recorded at login, if any.
    pub username: Option<String>,
}

/// Rejection returned when the visitor is not logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// Send the visitor to the login page.
    RedirectToLogin,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(Page::Login.href()).into_response(),
        }
    }
}

/// Check the login flag of a loaded shop session.
///
/// # Errors
///
/// Returns [`AuthRejection::RedirectToLogin`] unless `isLoggedIn` is exactly `"true"`.
pub fn require_login(shop: &ShopSession) -> Result<LoggedIn, AuthRejection> {
    let state = shop.state();
    if state.is_logged_in() {
        Ok(LoggedIn {
            username: state.username.clone(),
        })
    } else {
        Err(AuthRejection::RedirectToLogin)
    }
}
