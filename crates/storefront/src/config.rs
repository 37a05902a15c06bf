//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `MINI_STORE_HOST` - Bind address (default: 127.0.0.1)
//! - `MINI_STORE_PORT` - Listen port (default: 3000)
//! - `MINI_STORE_BASE_URL` - Public URL; `https://` enables secure cookies (default: <http://localhost:3000>)
//! - `MINI_STORE_CATALOG` - Product catalog file path or `http(s)` URL
//!   (default: crates/storefront/static/products.json)
//! - `MINI_STORE_STATIC_DIR` - Stylesheet, script and image directory (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG: &str = "crates/storefront/static/products.json";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the product catalog is retrieved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON file on local disk.
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    Http(Url),
}

impl CatalogSource {
    /// Interpret a configured location: `http://` and `https://` values are
    /// URLs, anything else is a file path.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the value looks like a URL but doesn't parse.
    pub fn parse(value: &str) -> Result<Self, url::ParseError> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Url::parse(value).map(Self::Http)
        } else {
            Ok(Self::File(PathBuf::from(value)))
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Product catalog location
    pub catalog: CatalogSource,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error event sample rate
    pub sentry_sample_rate: f32,
    /// Sentry transaction sample rate
    pub sentry_traces_sample_rate: f32,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = or_default("MINI_STORE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| invalid("MINI_STORE_HOST", &e))?;
        let port = or_default("MINI_STORE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| invalid("MINI_STORE_PORT", &e))?;
        let base_url = or_default("MINI_STORE_BASE_URL", "http://localhost:3000");
        let catalog = CatalogSource::parse(&or_default("MINI_STORE_CATALOG", DEFAULT_CATALOG))
            .map_err(|e| invalid("MINI_STORE_CATALOG", &e))?;
        let static_dir = PathBuf::from(or_default("MINI_STORE_STATIC_DIR", DEFAULT_STATIC_DIR));

        let sentry_sample_rate =
            parse_sample_rate("SENTRY_SAMPLE_RATE", lookup("SENTRY_SAMPLE_RATE"), 1.0)?;
        let sentry_traces_sample_rate = parse_sample_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            lookup("SENTRY_TRACES_SAMPLE_RATE"),
            0.0,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            catalog,
            static_dir,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn invalid(key: &str, err: &impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), err.to_string())
}

/// Parse a sample rate in `[0.0, 1.0]`, falling back to `default` when unset.
fn parse_sample_rate(key: &str, value: Option<String>, default: f32) -> Result<f32, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    let rate = value.parse::<f32>().map_err(|e| invalid(key, &e))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StoreConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(
            config.catalog,
            CatalogSource::File(PathBuf::from(DEFAULT_CATALOG))
        );
        assert!(!config.is_secure());
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
        assert!(config.sentry_traces_sample_rate.abs() < f32::EPSILON);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MINI_STORE_HOST", "0.0.0.0"),
            ("MINI_STORE_PORT", "8080"),
            ("MINI_STORE_BASE_URL", "https://shop.example.com"),
            ("MINI_STORE_CATALOG", "https://cdn.example.com/products.json"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(config.is_secure());
        assert!(matches!(config.catalog, CatalogSource::Http(_)));
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("MINI_STORE_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "MINI_STORE_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(config_from(&[("MINI_STORE_HOST", "localhost:3000")]).is_err());
    }

    #[test]
    fn test_empty_sentry_dsn_is_none() {
        let config = config_from(&[("SENTRY_DSN", "")]).unwrap();
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_sample_rate_range() {
        assert!(parse_sample_rate("X", Some("0.25".to_string()), 1.0).is_ok());
        assert!(parse_sample_rate("X", Some("1.5".to_string()), 1.0).is_err());
        assert!(parse_sample_rate("X", Some("abc".to_string()), 1.0).is_err());
        assert!((parse_sample_rate("X", None, 0.5).unwrap() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_catalog_source_parse() {
        assert_eq!(
            CatalogSource::parse("data/products.json").unwrap(),
            CatalogSource::File(PathBuf::from("data/products.json"))
        );
        assert!(matches!(
            CatalogSource::parse("http://localhost:8000/products.json").unwrap(),
            CatalogSource::Http(_)
        ));
        assert!(CatalogSource::parse("http://").is_err());
    }
}
