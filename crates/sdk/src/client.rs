//! Main client for the Ashby SDK.

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::envelope::{Envelope, Outcome};
use crate::error::{AshbyError, AshbyResult};
use crate::transport::HttpTransport;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Ashby API.
///
/// A client without an API key can still be built; every call on it then
/// fails with [`AshbyError::NotConnected`] before touching the network.
#[derive(Debug, Clone)]
pub struct AshbyClient {
    config: Arc<ClientConfig>,
    http: HttpTransport,
}

impl AshbyClient {
    /// Create a new client builder.
    pub fn builder() -> AshbyClientBuilder {
        AshbyClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> AshbyResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Whether an API key is available.
    pub fn is_connected(&self) -> bool {
        self.config.has_api_key()
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// POST `body` to `endpoint` and return the decoded JSON response.
    ///
    /// A `null` body is sent as `{}`.
    pub async fn post(&self, endpoint: &str, body: &Value) -> AshbyResult<Value> {
        if !self.is_connected() {
            return Err(AshbyError::NotConnected);
        }

        if body.is_null() {
            return self.http.post(endpoint, &Value::Object(Map::new())).await;
        }
        self.http.post(endpoint, body).await
    }

    /// POST and interpret the response envelope.
    pub async fn call(&self, endpoint: &str, body: &Value) -> AshbyResult<Outcome> {
        let response = self.post(endpoint, body).await?;
        Ok(Envelope::from_value(response)?.into_outcome())
    }
}

/// Builder for creating an AshbyClient.
pub struct AshbyClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl AshbyClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
        }
    }

    /// Override the Ashby API root. Defaults to the production API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API key only when one is present.
    pub fn maybe_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> AshbyResult<AshbyClient> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);

        let config = ClientConfig {
            base_url: Url::parse(base_url)?,
            api_key: self.api_key,
            timeout: self.timeout,
        };

        AshbyClient::from_config(config)
    }
}

impl Default for AshbyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
