//! # Catalog configuration DTO
//!
//! Pure data: maps TOML onto [`CatalogConfig`] without validation. Missing
//! keys become empty values; choosing fallbacks is the bootstrap's job.

use std::time::Duration;

/// Endpoint base used when neither a config file nor an override names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Catalog configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL of the listings service (may be empty - a fact, not an error)
    pub endpoint: String,

    /// Request timeout in seconds; `None` (or a non-positive value in the
    /// file) means wait indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl CatalogConfig {
    /// Create CatalogConfig from TOML value
    ///
    /// Must not contain validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let server = toml_value.get("server");
        Ok(Self {
            endpoint: server
                .and_then(|s| s.get("endpoint"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: server
                .and_then(|s| s.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .and_then(|secs| u64::try_from(secs).ok())
                .filter(|secs| *secs > 0),
        })
    }

    /// Create empty CatalogConfig
    pub fn empty() -> Self {
        Self {
            endpoint: String::new(),
            request_timeout_secs: None,
        }
    }

    /// Configuration used when no file is present.
    pub fn with_defaults() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
