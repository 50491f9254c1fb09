//! Application state shared across handlers.

use std::sync::Arc;

use corner_shop_core::{Catalog, CatalogProvider, CredentialProvider};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog and the credential
/// check are injected as trait objects so tests can supply their own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<dyn CatalogProvider>,
    credentials: Arc<dyn CredentialProvider>,
}

impl AppState {
    /// Create application state from configuration, using the built-in
    /// catalog and the configured credential.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Arc::new(Catalog::builtin(config.catalog));
        let credentials = Arc::new(config.credential.clone());
        Self::with_providers(config, catalog, credentials)
    }

    /// Create application state with explicit data providers.
    #[must_use]
    pub fn with_providers(
        config: StorefrontConfig,
        catalog: Arc<dyn CatalogProvider>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                credentials,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.inner.catalog.as_ref()
    }

    /// Get the login credential check.
    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialProvider {
        self.inner.credentials.as_ref()
    }
}
