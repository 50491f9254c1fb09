//! Shopping cart.
//!
//! A cart is an ordered list of product copies. Adding the same product twice
//! yields two entries; removal drops every entry with the given id.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogProvider, Product};
use crate::types::{Price, ProductId};

/// A line in the cart. Carts store full product copies, not ids.
pub type CartItem = Product;

/// A visitor's cart, in insertion order.
///
/// Serializes as a bare JSON array of product objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of entries (duplicates counted separately).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a copy of the catalog product with this id.
    ///
    /// Returns the added item, or `None` if the catalog has no such product
    /// (in which case the cart is unchanged).
    pub fn add<C>(&mut self, catalog: &C, id: ProductId) -> Option<&CartItem>
    where
        C: CatalogProvider + ?Sized,
    {
        let product = catalog.find(id)?.clone();
        self.items.push(product);
        self.items.last()
    }

    /// Remove every entry with this id. Returns how many were removed.
    pub fn remove(&mut self, id: ProductId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }

    /// Sum of all item prices.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(|item| &item.price).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn id(n: i32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_add_known_product() {
        let catalog = Catalog::books();
        let mut cart = Cart::new();

        let added = cart.add(&catalog, id(2)).unwrap();
        assert_eq!(added.title, "To Kill a Mockingbird");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let catalog = Catalog::books();
        let mut cart = Cart::new();

        assert!(cart.add(&catalog, id(42)).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let catalog = Catalog::books();
        let mut cart = Cart::new();
        cart.add(&catalog, id(1));
        cart.add(&catalog, id(3));
        cart.add(&catalog, id(1));

        let ids: Vec<i32> = cart.items().iter().map(|i| i.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 3, 1]);
    }

    #[test]
    fn test_remove_drops_all_matching() {
        let catalog = Catalog::books();
        let mut cart = Cart::new();
        cart.add(&catalog, id(1));
        cart.add(&catalog, id(2));
        cart.add(&catalog, id(1));

        assert_eq!(cart.remove(id(1)), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].id, id(2));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let catalog = Catalog::books();
        let mut cart = Cart::new();
        cart.add(&catalog, id(4));

        assert_eq!(cart.remove(id(2)), 0);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total() {
        let catalog = Catalog::books();
        let mut cart = Cart::new();
        assert_eq!(cart.total().to_string(), "0.00");

        cart.add(&catalog, id(1));
        cart.add(&catalog, id(1));
        cart.add(&catalog, id(2));
        assert_eq!(cart.total().to_string(), "34.48");

        cart.remove(id(1));
        assert_eq!(cart.total().to_string(), "12.50");

        cart.remove(id(2));
        assert_eq!(cart.total().to_string(), "0.00");
    }

    #[test]
    fn test_json_is_product_array() {
        let catalog = Catalog::books();
        let mut cart = Cart::new();
        cart.add(&catalog, id(3));

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":3,"title":"1984","detail":"George Orwell","price":9.75}]"#
        );
        assert_eq!(serde_json::from_str::<Cart>(&json).unwrap(), cart);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(serde_json::from_str::<Cart>("{not json").is_err());
        assert!(serde_json::from_str::<Cart>(r#"{"id":1}"#).is_err());
    }
}
