//! Browser configuration
//!
//! Configuration is read from YAML. Every field has a default, so an empty
//! document (or no file at all) yields a working setup against the public
//! catalog.

use crate::catalog::DEFAULT_BASE_URL;
use crate::details::EpisodeJoin;
use crate::error::{Error, Result, ResultExt};
use crate::http::{default_user_agent, HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete browser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Root of the catalog API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,

    /// Roster loader settings
    #[serde(default)]
    pub loader: LoaderSettings,

    /// Details view settings
    #[serde(default)]
    pub details: DetailsSettings,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            http: HttpSettings::default(),
            loader: LoaderSettings::default(),
            details: DetailsSettings::default(),
        }
    }
}

impl BrowserConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Check values that parse but cannot work
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;

        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value("http.timeout_secs", "must be positive"));
        }

        if let Some(limit) = &self.http.rate_limit {
            if limit.requests_per_second == 0 {
                return Err(Error::invalid_value(
                    "http.rate_limit.requests_per_second",
                    "must be positive",
                ));
            }
        }

        if self.loader.max_pages == Some(0) {
            return Err(Error::invalid_value("loader.max_pages", "must be positive"));
        }

        Ok(())
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Client-side rate limit, `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl HttpSettings {
    /// Convert into the HTTP client's own config
    pub fn to_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(&self.user_agent);

        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()).build(),
            None => builder.no_rate_limit().build(),
        }
    }
}

// ============================================================================
// Loader / Details
// ============================================================================

/// Roster loader settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderSettings {
    /// Stop following "next" pointers after this many pages
    #[serde(default)]
    pub max_pages: Option<u32>,
}

/// Details view settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsSettings {
    /// How episode fetch failures are joined
    #[serde(default)]
    pub episode_join: EpisodeJoin,
}
