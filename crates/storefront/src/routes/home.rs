//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use corner_shop_core::{CatalogKind, Price, Product, ProductId};

use crate::filters;
use crate::routes::Layout;
use crate::services::ShopSession;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub title: String,
    /// Secondary attribute with its label, e.g. "by Jane Austen".
    pub detail: String,
    pub price: Price,
}

impl ProductView {
    fn new(kind: CatalogKind, product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            detail: kind.describe(&product.detail),
            price: product.price,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub list_id: &'static str,
    pub item_class: &'static str,
    pub products: Vec<ProductView>,
}

/// Render the catalog with an "Add to Cart" control per product.
pub fn show(state: &AppState, shop: &ShopSession) -> HomeTemplate {
    let catalog = state.catalog();
    let kind = catalog.kind();

    HomeTemplate {
        layout: Layout::new(state, shop),
        list_id: kind.list_id(),
        item_class: kind.item_class(),
        products: catalog
            .products()
            .iter()
            .map(|product| ProductView::new(kind, product))
            .collect(),
    }
}
