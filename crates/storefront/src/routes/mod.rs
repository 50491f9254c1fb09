//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Pages (resolved from the last path segment, see `Page`)
//! GET  /  | .../index.html     - Catalog
//! GET  .../login.html          - Login form
//! POST .../login.html          - Login submission
//! GET  .../dashboard.html      - Welcome page (login-gated)
//! GET  .../cart.html           - Cart contents
//!
//! # Actions
//! POST /cart/add               - Add product, redirect to catalog
//! POST /cart/remove            - Remove product, redirect to cart
//! POST /logout                 - Clear login, redirect to login form
//! ```

pub mod auth;
pub mod cart;
pub mod home;

use axum::{
    Form, Router,
    extract::{FromRequest, Request, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use corner_shop_core::Page;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::ShopSession;
use crate::state::AppState;

/// Data every page template needs for the shared layout.
#[derive(Debug, Clone)]
pub struct Layout {
    pub shop_name: &'static str,
    pub cart_count: usize,
}

impl Layout {
    /// Build the layout from the visitor's session.
    #[must_use]
    pub fn new(state: &AppState, shop: &ShopSession) -> Self {
        Self {
            shop_name: state.catalog().kind().shop_name(),
            cart_count: shop.cart_count(),
        }
    }
}

/// Create the cart action routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/", get(show_page).post(submit_page))
        .route("/{*path}", get(show_page).post(submit_page))
        // Cart actions
        .nest("/cart", cart_routes())
        // Logout
        .route("/logout", post(auth::logout))
}

/// Resolve the page named by a request URI.
fn resolve_page(uri: &Uri) -> Result<Page> {
    Page::from_path(uri.path()).ok_or_else(|| AppError::NotFound(uri.path().to_string()))
}

/// Render whichever page the request path names.
#[instrument(skip(state, shop))]
pub async fn show_page(
    State(state): State<AppState>,
    shop: ShopSession,
    uri: Uri,
) -> Result<Response> {
    let page = resolve_page(&uri)?;

    Ok(match page {
        Page::Home => home::show(&state, &shop).into_response(),
        Page::Login => auth::login_page(&state, &shop).into_response(),
        Page::Dashboard => auth::dashboard(&state, &shop),
        Page::Cart => cart::show(&state, &shop).into_response(),
    })
}

/// Handle a form submitted to a page. Only the login page accepts one.
#[instrument(skip(state, shop, request), fields(path = %request.uri().path()))]
pub async fn submit_page(
    State(state): State<AppState>,
    shop: ShopSession,
    request: Request,
) -> Result<Response> {
    let page = resolve_page(request.uri())?;

    match page {
        Page::Login => {
            let Form(form) = Form::<auth::LoginForm>::from_request(request, &state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            auth::login(&state, shop, form).await
        }
        Page::Home | Page::Dashboard | Page::Cart => {
            Ok(StatusCode::METHOD_NOT_ALLOWED.into_response())
        }
    }
}
