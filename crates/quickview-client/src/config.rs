//! Storefront endpoint configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the storefront base URL.
pub const STOREFRONT_URL_VAR: &str = "STOREFRONT_URL";

/// Base URL used when nothing is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the storefront's JSON endpoints live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL prepended to every resource path.
    pub base_url: String,
}

impl StorefrontConfig {
    /// Point at an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `STOREFRONT_URL`, falling back to the local
    /// default.
    pub fn from_env() -> Self {
        match std::env::var(STOREFRONT_URL_VAR) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url() {
        let config = StorefrontConfig::new("https://shop.example.com");
        assert_eq!(config.base_url, "https://shop.example.com");
    }

    #[test]
    fn test_default_points_local() {
        assert_eq!(StorefrontConfig::default().base_url, "http://localhost:3000");
    }
}
