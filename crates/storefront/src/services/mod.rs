//! Business logic services for storefront.

pub mod shop;

pub use shop::ShopSession;
