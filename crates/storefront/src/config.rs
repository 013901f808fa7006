//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LAPGALAXY_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `LAPGALAXY_HOST` - Bind address (default: 127.0.0.1)
//! - `LAPGALAXY_PORT` - Listen port (default: 3000)
//! - `PRODUCT_API_URL` - Product API base URL (default: <http://localhost:8080>)
//! - `CATALOG_CACHE_TTL_SECS` - Cache lifetime for catalog responses, 0 disables (default: 0)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_PRODUCT_API_URL: &str = "http://localhost:8080";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
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
    /// Public base URL for the storefront
    pub base_url: String,
    /// Product API configuration
    pub product_api: ProductApiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

/// Product API configuration.
#[derive(Debug, Clone)]
pub struct ProductApiConfig {
    /// Base URL, always ending in `/` so relative endpoints join below it
    pub base_url: Url,
    /// How long catalog and product responses are cached; `None` disables caching
    pub cache_ttl: Option<Duration>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("LAPGALAXY_HOST", &get_env_or_default("LAPGALAXY_HOST", "127.0.0.1"))?;
        let port = parse_env("LAPGALAXY_PORT", &get_env_or_default("LAPGALAXY_PORT", "3000"))?;
        let base_url = get_required_env("LAPGALAXY_BASE_URL")?;

        let product_api = ProductApiConfig::from_env()?;

        let sentry_sample_rate = parse_env(
            "SENTRY_SAMPLE_RATE",
            &get_env_or_default("SENTRY_SAMPLE_RATE", "1.0"),
        )?;
        let sentry_traces_sample_rate = parse_env(
            "SENTRY_TRACES_SAMPLE_RATE",
            &get_env_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0"),
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            product_api,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies must be marked `Secure`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl ProductApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_api_url(&get_env_or_default(
            "PRODUCT_API_URL",
            DEFAULT_PRODUCT_API_URL,
        ))?;
        let cache_ttl = parse_cache_ttl(&get_env_or_default("CATALOG_CACHE_TTL_SECS", "0"))?;
        Ok(Self {
            base_url,
            cache_ttl,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse the product API base URL, normalizing it to end with `/`.
fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar("PRODUCT_API_URL".to_string(), reason);

    let mut url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Parse the cache TTL in seconds; zero disables caching.
fn parse_cache_ttl(value: &str) -> Result<Option<Duration>, ConfigError> {
    let secs: u64 = parse_env("CATALOG_CACHE_TTL_SECS", value)?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            product_api: ProductApiConfig {
                base_url: parse_api_url(DEFAULT_PRODUCT_API_URL).unwrap(),
                cache_ttl: None,
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure_follows_base_url_scheme() {
        let mut config = config();
        assert!(!config.is_secure());
        config.base_url = "https://lapgalaxy.lk".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_api_url_gets_trailing_slash() {
        let url = parse_api_url("http://localhost:8080").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/");

        let url = parse_api_url("https://api.example.lk/v2").unwrap();
        assert_eq!(url.join("api/product/products").unwrap().as_str(), "https://api.example.lk/v2/api/product/products");
    }

    #[test]
    fn test_api_url_rejects_other_schemes() {
        let err = parse_api_url("ftp://files.example.lk").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "PRODUCT_API_URL"));
        assert!(parse_api_url("not a url").is_err());
    }

    #[test]
    fn test_cache_ttl_zero_disables() {
        assert_eq!(parse_cache_ttl("0").unwrap(), None);
        assert_eq!(parse_cache_ttl("300").unwrap(), Some(Duration::from_secs(300)));
        assert!(parse_cache_ttl("-5").is_err());
    }

    #[test]
    fn test_parse_env_reports_key() {
        let err = parse_env::<u16>("LAPGALAXY_PORT", "eighty").unwrap_err();
        assert!(err.to_string().starts_with("Invalid environment variable LAPGALAXY_PORT"));
    }
}
