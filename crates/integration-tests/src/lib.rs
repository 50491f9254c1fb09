//! End-to-end test harness for the Corner Shop storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p corner-shop-integration-tests
//! ```
//!
//! Each test starts its own storefront on an ephemeral port with a fresh
//! in-memory session store, then drives it over HTTP with a cookie-keeping
//! client, the way a browser would.
//!
//! # Test Categories
//!
//! - `storefront_auth` - login form, dashboard gate, logout
//! - `storefront_cart` - add, remove, count, totals
//! - `storefront_pages` - page routing, catalog variants, headers

#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use corner_shop_storefront::config::StorefrontConfig;
use corner_shop_storefront::state::AppState;
use reqwest::{Client, Response, redirect};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub use reqwest::StatusCode;
pub use reqwest::header::LOCATION;

/// A storefront served in-process for the duration of a test.
pub struct TestServer {
    base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a storefront with default configuration (book shop, `testuser`).
    pub async fn start() -> Self {
        Self::start_with(StorefrontConfig::default()).await
    }

    /// Start a storefront with the given configuration.
    pub async fn start_with(config: StorefrontConfig) -> Self {
        Self::start_with_state(AppState::new(config)).await
    }

    /// Start a storefront with explicit application state.
    pub async fn start_with_state(state: AppState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let app = corner_shop_storefront::app(state);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A browser-like client: keeps cookies, does not follow redirects.
    #[must_use]
    pub fn client() -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client")
    }

    /// GET a page and return its status and body.
    pub async fn get(&self, client: &Client, path: &str) -> (StatusCode, String) {
        let resp = client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        let status = resp.status();
        (status, resp.text().await.expect("Failed to read body"))
    }

    /// Submit the login form.
    pub async fn login(&self, client: &Client, username: &str, password: &str) -> Response {
        client
            .post(self.url("/login.html"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Login request failed")
    }

    /// Press "Add to Cart" for a product id.
    pub async fn add_to_cart(&self, client: &Client, product_id: &str) -> Response {
        client
            .post(self.url("/cart/add"))
            .form(&[("product_id", product_id)])
            .send()
            .await
            .expect("Add to cart request failed")
    }

    /// Press "Remove" for a product id.
    pub async fn remove_from_cart(&self, client: &Client, product_id: &str) -> Response {
        client
            .post(self.url("/cart/remove"))
            .form(&[("product_id", product_id)])
            .send()
            .await
            .expect("Remove from cart request failed")
    }

    /// Press the logout button.
    pub async fn logout(&self, client: &Client) -> Response {
        client
            .post(self.url("/logout"))
            .send()
            .await
            .expect("Logout request failed")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The `Location` header of a redirect response.
#[must_use]
pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Markup of the cart count badge for a given count.
#[must_use]
pub fn cart_count_markup(count: usize) -> String {
    format!(r#"<span id="cart-count">{count}</span>"#)
}

/// Markup of the login error element with the given text.
#[must_use]
pub fn error_message_markup(text: &str) -> String {
    format!(r#"<p id="error-message" class="error">{text}</p>"#)
}

/// Markup of the cart total element with the given amount.
#[must_use]
pub fn total_price_markup(total: &str) -> String {
    format!(r#"<span id="total-price">{total}</span>"#)
}
