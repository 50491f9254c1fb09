//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Add and remove are plain form
//! posts that redirect back to a page (post/redirect/get).

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use corner_shop_core::{CartItem, Page, Price, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::routes::Layout;
use crate::services::ShopSession;
use crate::state::AppState;

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct CartForm {
    #[serde(default)]
    pub product_id: String,
}

impl CartForm {
    /// The submitted id, if it is an integer at all.
    fn product_id(&self) -> Option<ProductId> {
        self.product_id.parse().ok()
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub layout: Layout,
    pub items: Vec<CartItem>,
    pub total: Price,
}

/// Render the cart contents and total.
pub fn show(state: &AppState, shop: &ShopSession) -> CartTemplate {
    let cart = &shop.state().cart;

    CartTemplate {
        layout: Layout::new(state, shop),
        items: cart.items().to_vec(),
        total: cart.total(),
    }
}

/// Add a product to the cart, then return to the catalog.
///
/// Unknown or non-numeric ids are ignored.
#[instrument(skip(state, shop))]
pub async fn add(
    State(state): State<AppState>,
    mut shop: ShopSession,
    Form(form): Form<CartForm>,
) -> Result<Redirect> {
    if let Some(id) = form.product_id() {
        if shop.add_to_cart(state.catalog(), id).await?.is_some() {
            let id = id.to_string();
            add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
        }
    }

    Ok(Redirect::to(Page::Home.href()))
}

/// Remove every entry of a product from the cart, then show the cart.
#[instrument(skip(shop))]
pub async fn remove(mut shop: ShopSession, Form(form): Form<CartForm>) -> Result<Redirect> {
    if let Some(id) = form.product_id() {
        shop.remove_from_cart(id).await?;
    }

    Ok(Redirect::to(Page::Cart.href()))
}
