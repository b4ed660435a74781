//! Gallery configuration
//!
//! Loaded from an optional YAML file; every field has a default so an
//! empty file (or no file) yields a working setup against the public API.
//!
//! ```yaml
//! endpoint: https://rickandmortyapi.com/api/character/
//! title: Rick & Morty Challenge
//! http:
//!   timeout_secs: 30
//!   max_retries: 3
//!   backoff: exponential
//! server:
//!   port: 8080
//!   view_ttl_secs: 1800
//! ```

use crate::api::DEFAULT_ENDPOINT;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::render::PageText;
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete gallery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page 1 of the character listing
    pub endpoint: String,

    /// Page heading
    pub title: String,

    /// Line under the heading
    pub subtitle: String,

    /// Outbound HTTP settings
    pub http: HttpSettings,

    /// Server settings
    pub server: ServerSettings,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let text = PageText::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: text.title,
            subtitle: text.subtitle,
            http: HttpSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// Outbound HTTP client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpSettings {
    /// Request timeout in seconds (0 = wait indefinitely)
    pub timeout_secs: u64,

    /// Retries for transient failures
    pub max_retries: u32,

    pub backoff: BackoffType,

    pub initial_backoff_ms: u64,

    pub max_backoff_ms: u64,

    /// Outbound request rate (0 = unlimited)
    pub requests_per_second: u32,

    pub burst_size: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 3,
            backoff: BackoffType::Exponential,
            initial_backoff_ms: 100,
            max_backoff_ms: 10_000,
            requests_per_second: 5,
            burst_size: 5,
            user_agent: None,
        }
    }
}

// ============================================================================
// Server Settings
// ============================================================================

/// Server mode settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub port: u16,

    /// Idle time after which a view is dropped
    pub view_ttl_secs: u64,

    /// Upper bound on live views
    pub max_views: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            view_ttl_secs: 1800,
            max_views: 1024,
        }
    }
}

impl ServerSettings {
    pub fn view_ttl(&self) -> Duration {
        Duration::from_secs(self.view_ttl_secs)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<GalleryConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    load_config_from_str(&content)
}

/// Load and validate configuration from a YAML string
pub fn load_config_from_str(content: &str) -> Result<GalleryConfig> {
    // serde_yaml rejects an empty document, which should mean "all defaults"
    let config: GalleryConfig = if content.trim().is_empty() {
        GalleryConfig::default()
    } else {
        serde_yaml::from_str(content)?
    };
    config.validate()?;
    Ok(config)
}

impl GalleryConfig {
    /// Check values the type system cannot
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::invalid_value("endpoint", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.server.port == 0 {
            return Err(Error::invalid_value("server.port", "must be non-zero"));
        }
        if self.server.max_views == 0 {
            return Err(Error::invalid_value("server.max_views", "must be non-zero"));
        }
        if self.http.initial_backoff_ms > self.http.max_backoff_ms {
            return Err(Error::invalid_value(
                "http.initial_backoff_ms",
                "must not exceed http.max_backoff_ms",
            ));
        }
        Ok(())
    }

    /// Headings for rendered pages
    pub fn page_text(&self) -> PageText {
        PageText {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
        }
    }

    /// HTTP client configuration derived from these settings
    pub fn http_client_config(&self) -> HttpClientConfig {
        let http = &self.http;
        let mut builder = HttpClientConfig::builder()
            .max_retries(http.max_retries)
            .backoff(
                http.backoff,
                Duration::from_millis(http.initial_backoff_ms),
                Duration::from_millis(http.max_backoff_ms),
            )
            .header("Accept", "application/json");

        builder = if http.timeout_secs == 0 {
            builder.no_timeout()
        } else {
            builder.timeout(Duration::from_secs(http.timeout_secs))
        };

        builder = if http.requests_per_second == 0 {
            builder.no_rate_limit()
        } else {
            builder.rate_limit(RateLimiterConfig::new(
                http.requests_per_second,
                http.burst_size.max(1),
            ))
        };

        if let Some(agent) = &http.user_agent {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}
