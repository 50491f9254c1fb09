//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run the book shop on
//! `http://localhost:3000` with the demo account `testuser` / `password123`.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL; `https://` enables secure cookies
//!   (default: unset, served over plain HTTP)
//! - `STOREFRONT_CATALOG` - `books` or `coffee` (default: books)
//! - `STOREFRONT_DEMO_USERNAME` - Login username (default: testuser)
//! - `STOREFRONT_DEMO_PASSWORD` - Login password (default: password123)
//! - `STOREFRONT_STATIC_DIR` - Stylesheet directory (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use corner_shop_core::{CatalogKind, Credential};
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_USERNAME: &str = "testuser";
const DEFAULT_PASSWORD: &str = "password123";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront, when it sits behind one
    pub base_url: Option<Url>,
    /// Which built-in catalog to sell from
    pub catalog: CatalogKind,
    /// The single account allowed to log in
    pub credential: Credential,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            base_url: None,
            catalog: CatalogKind::default(),
            credential: Credential::new(DEFAULT_USERNAME, SecretString::from(DEFAULT_PASSWORD)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("STOREFRONT_HOST", &get_env_or_default("STOREFRONT_HOST", "127.0.0.1"))?;
        let port = parse_env(
            "STOREFRONT_PORT",
            &get_env_or_default("STOREFRONT_PORT", &DEFAULT_PORT.to_string()),
        )?;
        let base_url = get_optional_env("STOREFRONT_BASE_URL")
            .map(|raw| parse_env::<Url>("STOREFRONT_BASE_URL", &raw))
            .transpose()?;
        let catalog = parse_env(
            "STOREFRONT_CATALOG",
            &get_env_or_default("STOREFRONT_CATALOG", "books"),
        )?;

        let username = get_env_or_default("STOREFRONT_DEMO_USERNAME", DEFAULT_USERNAME);
        if username.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_DEMO_USERNAME".to_string(),
                "must not be empty".to_string(),
            ));
        }
        let password = SecretString::from(get_env_or_default(
            "STOREFRONT_DEMO_PASSWORD",
            DEFAULT_PASSWORD,
        ));

        Ok(Self {
            host,
            port,
            base_url,
            catalog,
            credential: Credential::new(username, password),
            static_dir: PathBuf::from(get_env_or_default("STOREFRONT_STATIC_DIR", DEFAULT_STATIC_DIR)),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url
            .as_ref()
            .is_some_and(|url| url.scheme() == "https")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a raw variable value, naming the variable in the error.
fn parse_env<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
