//! Corner Shop Core - catalog, cart and login logic.
//!
//! This crate holds everything the storefront decides on its own:
//! - which products exist ([`catalog`])
//! - what a visitor's cart contains and what it costs ([`cart`])
//! - whether a login attempt succeeds ([`auth`])
//! - which page a request path names ([`page`])
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no sessions,
//! no HTTP. The storefront binary injects a [`CatalogProvider`] and a
//! [`CredentialProvider`] and keeps the cart in the visitor's session.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod page;
pub mod types;

pub use auth::{LoginError, check_login};
pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, CatalogKind, CatalogProvider, Product, UnknownCatalogError};
pub use page::Page;
pub use types::*;
