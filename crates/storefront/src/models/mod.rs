//! Session-stored models for the storefront.

pub mod session;

pub use session::{SessionState, keys as session_keys};
