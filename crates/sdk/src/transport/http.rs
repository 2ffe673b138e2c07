//! HTTP transport layer for the Ashby SDK.

use crate::auth::basic_auth_value;
use crate::config::ClientConfig;
use crate::error::{AshbyError, AshbyResult};
use reqwest::{header, Client};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> AshbyResult<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(api_key) = config.api_key() {
            let mut value = header::HeaderValue::from_str(&basic_auth_value(api_key))
                .map_err(|_| AshbyError::Config("Invalid API key format".to_string()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Append an endpoint path to the base URL.
    ///
    /// Paths are concatenated rather than resolved so a base URL carrying a
    /// path prefix keeps it.
    fn build_url(&self, endpoint: &str) -> AshbyResult<url::Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let url = url::Url::parse(&format!("{base}{endpoint}"))?;
        Ok(url)
    }

    /// Execute a single POST and decode the 2xx body as JSON.
    ///
    /// Non-2xx responses become [`AshbyError::Api`] with the body left raw.
    pub async fn post(&self, endpoint: &str, body: &Value) -> AshbyResult<Value> {
        let url = self.build_url(endpoint)?;
        debug!(url = %url, "POST request");

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), endpoint, "Ashby returned an error status");
            return Err(AshbyError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
