//! Authentication route handlers.
//!
//! Login is checked against the single configured credential. A successful
//! login sets the session's login flag and sends the visitor to the
//! dashboard; logout clears the flag and returns to the login form.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect, Response};
use corner_shop_core::{Page, check_login};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::require_login;
use crate::routes::Layout;
use crate::services::ShopSession;
use crate::state::AppState;

/// Shown in place of a username the session does not have.
const MISSING_USERNAME: &str = "null";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
///
/// Missing fields are treated as empty strings so they get the same
/// "required" message as blank ones.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub layout: Layout,
    /// Value to keep in the username field after a failed attempt.
    pub username: String,
    /// Text of the `error-message` element; empty when there is no error.
    pub error_message: String,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub layout: Layout,
    pub username: String,
}

// =============================================================================
// Login
// =============================================================================

/// Display the login page.
pub fn login_page(state: &AppState, shop: &ShopSession) -> LoginTemplate {
    LoginTemplate {
        layout: Layout::new(state, shop),
        username: String::new(),
        error_message: String::new(),
    }
}

/// Handle login form submission.
///
/// # Errors
///
/// Returns an error if the session cannot be written after a successful login.
#[instrument(skip(state, shop))]
pub async fn login(state: &AppState, mut shop: ShopSession, form: LoginForm) -> Result<Response> {
    match check_login(state.credentials(), &form.username, &form.password) {
        Ok(()) => {
            shop.log_in(&form.username).await?;
            tracing::info!(username = %form.username, "Login succeeded");
            add_breadcrumb("auth", "Logged in", None);
            Ok(Redirect::to(Page::Dashboard.href()).into_response())
        }
        Err(err) => {
            tracing::info!(reason = %err, "Login rejected");
            Ok(LoginTemplate {
                layout: Layout::new(state, &shop),
                username: form.username,
                error_message: err.to_string(),
            }
            .into_response())
        }
    }
}

// =============================================================================
// Dashboard & Logout
// =============================================================================

/// Display the dashboard, or redirect anonymous visitors to the login page.
pub fn dashboard(state: &AppState, shop: &ShopSession) -> Response {
    match require_login(shop) {
        Ok(user) => DashboardTemplate {
            layout: Layout::new(state, shop),
            username: user
                .username
                .unwrap_or_else(|| MISSING_USERNAME.to_string()),
        }
        .into_response(),
        Err(rejection) => {
            tracing::debug!("Dashboard requested without login");
            rejection.into_response()
        }
    }
}

/// Handle logout.
///
/// Clears the login fields (the cart survives) and returns to the login page.
#[instrument(skip(shop))]
pub async fn logout(mut shop: ShopSession) -> Result<Redirect> {
    shop.log_out().await?;
    add_breadcrumb("auth", "Logged out", None);
    Ok(Redirect::to(Page::Login.href()))
}
