//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `API_ORIGIN` - Origin of the Larek backend (e.g., <https://larek-api.nomoreparties.co>).
//!   Not needed when both URL overrides below are set.
//!
//! ## Optional
//! - `LAREK_API_URL` - API base URL (default: `{API_ORIGIN}/api/weblarek`)
//! - `LAREK_CDN_URL` - Asset host base URL (default: `{API_ORIGIN}/content/weblarek`)
//! - `RUST_LOG` - Log filter (default: `larek_storefront=info`)

use thiserror::Error;
use url::Url;

/// Path of the API below the origin.
const API_PATH: &str = "/api/weblarek";

/// Path of the product images below the origin.
const CDN_PATH: &str = "/content/weblarek";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL that `/product` and `/order` are resolved against
    pub api_url: String,
    /// Base URL prepended to every product image path
    pub cdn_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a URL is
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`StorefrontConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let origin = lookup("API_ORIGIN").map(|o| o.trim_end_matches('/').to_string());

        let api_url = resolve_url(&lookup, "LAREK_API_URL", origin.as_deref(), API_PATH)?;
        let cdn_url = resolve_url(&lookup, "LAREK_CDN_URL", origin.as_deref(), CDN_PATH)?;

        Ok(Self { api_url, cdn_url })
    }

    /// Build configuration directly from the two base URLs.
    #[must_use]
    pub fn new(api_url: impl Into<String>, cdn_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            cdn_url: cdn_url.into(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Resolve a base URL from its override variable, falling back to
/// `origin + path`, and validate it.
fn resolve_url(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    origin: Option<&str>,
    path: &str,
) -> Result<String, ConfigError> {
    let value = match (lookup(key), origin) {
        (Some(explicit), _) => explicit,
        (None, Some(origin)) => format!("{origin}{path}"),
        (None, None) => return Err(ConfigError::MissingEnvVar("API_ORIGIN".to_string())),
    };

    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    // Paths are appended verbatim, so keep the base free of a trailing slash
    Ok(value.trim_end_matches('/').to_string())
}
