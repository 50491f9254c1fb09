//! Product catalog.
//!
//! The shop sells from a fixed, read-only list of products built at startup.
//! Two built-in catalogs exist: a book shop and a coffee shop. They share the
//! same product shape; only the meaning of the secondary attribute differs
//! (author for books, roast for coffee).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// A purchasable item.
///
/// The persisted cart stores full copies of these, so the serialized form is
/// part of the session format: `{"id":1,"title":"…","detail":"…","price":10.99}`.
/// The secondary attribute is also accepted under `author` or `roast`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Author for books, roast for coffee.
    #[serde(alias = "author", alias = "roast")]
    pub detail: String,
    pub price: Price,
}

impl Product {
    /// Create a product.
    #[must_use]
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        detail: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            detail: detail.into(),
            price,
        }
    }
}

/// Read access to the shop's products.
pub trait CatalogProvider: Send + Sync {
    /// Which kind of shop this catalog belongs to.
    fn kind(&self) -> CatalogKind;

    /// All products, in display order.
    fn products(&self) -> &[Product];

    /// Look up a product by id.
    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|product| product.id == id)
    }
}

/// Error returned when a catalog name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog '{0}' (expected 'books' or 'coffee')")]
pub struct UnknownCatalogError(pub String);

/// The flavours of shop this storefront can run as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    #[default]
    Books,
    Coffee,
}

impl CatalogKind {
    /// Shop name shown in the page header.
    #[must_use]
    pub const fn shop_name(self) -> &'static str {
        match self {
            Self::Books => "Online Book Store",
            Self::Coffee => "Online Coffee Store",
        }
    }

    /// Element id of the product list on the home page.
    #[must_use]
    pub const fn list_id(self) -> &'static str {
        match self {
            Self::Books => "book-list",
            Self::Coffee => "coffee-list",
        }
    }

    /// CSS class of a single product block on the home page.
    #[must_use]
    pub const fn item_class(self) -> &'static str {
        match self {
            Self::Books => "book-item",
            Self::Coffee => "coffee-item",
        }
    }

    /// Human-readable secondary attribute, e.g. "by Harper Lee" or "Dark roast".
    #[must_use]
    pub fn describe(self, detail: &str) -> String {
        match self {
            Self::Books => format!("by {detail}"),
            Self::Coffee => format!("{detail} roast"),
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Books => f.write_str("books"),
            Self::Coffee => f.write_str("coffee"),
        }
    }
}

impl FromStr for CatalogKind {
    type Err = UnknownCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "books" | "book" => Ok(Self::Books),
            "coffee" => Ok(Self::Coffee),
            _ => Err(UnknownCatalogError(s.to_string())),
        }
    }
}

/// An in-memory catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub const fn new(kind: CatalogKind, products: Vec<Product>) -> Self {
        Self { kind, products }
    }

    /// The built-in catalog for the given kind of shop.
    #[must_use]
    pub fn builtin(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Books => Self::books(),
            CatalogKind::Coffee => Self::coffee(),
        }
    }

    /// The book shop's catalog.
    #[must_use]
    pub fn books() -> Self {
        Self::new(
            CatalogKind::Books,
            vec![
                Product::new(
                    ProductId::new(1),
                    "The Great Gatsby",
                    "F. Scott Fitzgerald",
                    Price::from_cents(1099),
                ),
                Product::new(
                    ProductId::new(2),
                    "To Kill a Mockingbird",
                    "Harper Lee",
                    Price::from_cents(1250),
                ),
                Product::new(
                    ProductId::new(3),
                    "1984",
                    "George Orwell",
                    Price::from_cents(975),
                ),
                Product::new(
                    ProductId::new(4),
                    "Pride and Prejudice",
                    "Jane Austen",
                    Price::from_cents(899),
                ),
            ],
        )
    }

    /// The coffee shop's catalog.
    #[must_use]
    pub fn coffee() -> Self {
        Self::new(
            CatalogKind::Coffee,
            vec![
                Product::new(
                    ProductId::new(1),
                    "Ethiopian Yirgacheffe",
                    "Light",
                    Price::from_cents(1450),
                ),
                Product::new(
                    ProductId::new(2),
                    "Colombian Supremo",
                    "Medium",
                    Price::from_cents(1275),
                ),
                Product::new(
                    ProductId::new(3),
                    "Sumatra Mandheling",
                    "Dark",
                    Price::from_cents(1325),
                ),
                Product::new(
                    ProductId::new(4),
                    "House Espresso Blend",
                    "Espresso",
                    Price::from_cents(1199),
                ),
            ],
        )
    }
}

impl CatalogProvider for Catalog {
    fn kind(&self) -> CatalogKind {
        self.kind
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}
