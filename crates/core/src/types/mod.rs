//! Core types for Corner Shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;
pub mod price;

pub use credential::{Credential, CredentialProvider};
pub use id::*;
pub use price::Price;
