//! Client configuration
//!
//! Configuration for talking to one API endpoint, loaded from YAML:
//!
//! ```yaml
//! api_url: https://api.example.org
//! auth:
//!   type: bearer
//!   token: eyJhbGciOi...
//! http:
//!   timeout_seconds: 30
//!   rate_limit:
//!     requests_per_second: 20
//! pagination:
//!   per_page: 100
//!   max_pages: 500
//! ```
//!
//! Every section except `api_url` is optional.

use crate::error::{Error, Result};
use crate::http::{AuthConfig, HttpClientConfig, RateLimiterConfig};
use crate::pagination::AutoPager;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `api_url`
pub const ENV_API_URL: &str = "CF_API_URL";

/// Environment variable supplying a bearer token
pub const ENV_TOKEN: &str = "CF_TOKEN";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, e.g. `https://api.example.org`
    #[serde(default)]
    pub api_url: String,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfigDef,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Traversal settings
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl ClientConfig {
    /// Configuration for `api_url` with defaults everywhere else
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Parse YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Apply `CF_API_URL` and `CF_TOKEN` from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; empty values are ignored
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
            self.auth = AuthConfigDef::Bearer { token };
        }
        self
    }

    /// Check that the configuration can produce a client
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::missing_field("api_url"));
        }
        let url = url::Url::parse(&self.api_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::config(format!(
                "api_url must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.pagination.max_pages == Some(0) {
            return Err(Error::config("pagination.max_pages must be at least 1"));
        }
        Ok(())
    }

    /// Transport settings derived from this configuration
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.api_url.clone())
            .timeout(Duration::from_secs(self.http.timeout_seconds))
            .auth(self.auth.clone().into());
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        if let Some(rate_limit) = self.http.rate_limit {
            builder = builder.rate_limit(rate_limit);
        }
        for (key, value) in &self.http.headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder.build()
    }

    /// Auto-pager honoring `pagination.max_pages`
    pub fn auto_pager(&self) -> AutoPager {
        AutoPager::new().max_pages(self.pagination.max_pages)
    }
}

// ============================================================================
// Auth Config Definition (in YAML)
// ============================================================================

/// Authentication configuration from YAML
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfigDef {
    /// No authentication
    #[default]
    None,

    /// Bearer token
    Bearer {
        /// Access token
        token: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl From<AuthConfigDef> for AuthConfig {
    fn from(def: AuthConfigDef) -> Self {
        match def {
            AuthConfigDef::None => AuthConfig::None,
            AuthConfigDef::Bearer { token } => AuthConfig::Bearer { token },
            AuthConfigDef::Basic { username, password } => AuthConfig::Basic { username, password },
        }
    }
}

impl std::fmt::Debug for AuthConfigDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        AuthConfig::from(self.clone()).fmt(f)
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Rate limiting; disabled when absent
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: None,
            rate_limit: None,
            headers: HashMap::new(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Traversal settings applied to every list call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not choose one
    #[serde(default)]
    pub per_page: Option<u32>,

    /// Upper bound on pages fetched by one `*_all` call; unlimited when absent
    #[serde(default)]
    pub max_pages: Option<usize>,
}
