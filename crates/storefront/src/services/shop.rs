//! Per-request shop session controller.
//!
//! [`ShopSession`] reads the visitor's cart and login state once when a
//! request starts and writes the session back after every mutation, so the
//! in-memory copy and the stored copy never disagree when a page renders.

use axum::{extract::FromRequestParts, http::request::Parts};
use corner_shop_core::{CatalogProvider, CartItem, ProductId};
use serde::de::DeserializeOwned;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session::LOGGED_IN;
use crate::models::{SessionState, session_keys};

/// The visitor's shop state bound to their session.
#[derive(Debug, Clone)]
pub struct ShopSession {
    session: Session,
    state: SessionState,
}

impl ShopSession {
    /// Load cart and login state from the session.
    ///
    /// A missing cart is an empty cart. A cart (or login flag) that cannot be
    /// decoded is logged and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store itself fails.
    pub async fn load(session: Session) -> Result<Self> {
        let cart = read_lenient(&session, session_keys::CART)
            .await?
            .unwrap_or_default();
        let is_logged_in = read_lenient(&session, session_keys::IS_LOGGED_IN).await?;
        let username = read_lenient(&session, session_keys::USERNAME).await?;

        Ok(Self {
            session,
            state: SessionState {
                cart,
                is_logged_in,
                username,
            },
        })
    }

    /// Current state as loaded (and updated by this request).
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Number of cart entries, shown in the `cart-count` badge.
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.state.cart.len()
    }

    /// Add a catalog product to the cart and persist.
    ///
    /// Unknown ids leave the cart and session untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    #[instrument(skip(self, catalog))]
    pub async fn add_to_cart(
        &mut self,
        catalog: &dyn CatalogProvider,
        id: ProductId,
    ) -> Result<Option<CartItem>> {
        let Some(item) = self.state.cart.add(catalog, id).cloned() else {
            tracing::debug!(%id, "Ignoring unknown product");
            return Ok(None);
        };

        self.persist_cart().await?;
        tracing::info!(product_id = %id, count = self.cart_count(), "{} added to cart!", item.title);
        Ok(Some(item))
    }

    /// Remove every cart entry with this id and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&mut self, id: ProductId) -> Result<usize> {
        let removed = self.state.cart.remove(id);
        self.persist_cart().await?;
        tracing::info!(product_id = %id, removed, count = self.cart_count(), "Removed from cart");
        Ok(removed)
    }

    /// Write the cart to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn persist_cart(&self) -> Result<()> {
        self.session
            .insert(session_keys::CART, &self.state.cart)
            .await?;
        Ok(())
    }

    /// Record a successful login.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn log_in(&mut self, username: &str) -> Result<()> {
        self.session
            .insert(session_keys::IS_LOGGED_IN, LOGGED_IN)
            .await?;
        self.session.insert(session_keys::USERNAME, username).await?;

        self.state.is_logged_in = Some(LOGGED_IN.to_string());
        self.state.username = Some(username.to_string());
        Ok(())
    }

    /// Clear the login fields. The cart is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn log_out(&mut self) -> Result<()> {
        self.session
            .remove::<serde_json::Value>(session_keys::IS_LOGGED_IN)
            .await?;
        self.session
            .remove::<serde_json::Value>(session_keys::USERNAME)
            .await?;

        self.state.is_logged_in = None;
        self.state.username = None;
        Ok(())
    }
}

/// Read a session value, treating undecodable data as absent.
async fn read_lenient<T>(session: &Session, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    match session.get::<T>(key).await {
        Ok(value) => Ok(value),
        Err(tower_sessions::session::Error::SerdeJson(e)) => {
            tracing::warn!(key, error = %e, "Discarding malformed session value");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

impl<S> FromRequestParts<S> for ShopSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        Self::load(session).await
    }
}
