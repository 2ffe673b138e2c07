//! Configuration types for the Ashby SDK.

use std::time::Duration;
use url::Url;

/// Production Ashby API root.
pub const DEFAULT_BASE_URL: &str = "https://api.ashbyhq.com";

/// Environment variable holding the Ashby API key.
pub const API_KEY_ENV: &str = "ASHBY_API_KEY";

/// Environment variable overriding the API root (read by the server binary).
pub const BASE_URL_ENV: &str = "ASHBY_BASE_URL";

/// Configuration for the Ashby client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Ashby API; endpoint paths are appended verbatim.
    pub base_url: Url,
    /// API key used as the Basic-Auth username.
    pub api_key: Option<String>,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and no credentials.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: None,
        }
    }

    /// The API key, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Whether requests can be authenticated at all.
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
