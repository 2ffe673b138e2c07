//! Error types for the Ashby SDK.

/// Result type for SDK operations.
pub type AshbyResult<T> = Result<T, AshbyError>;

/// Error types that can occur when calling the Ashby API.
#[derive(Debug, thiserror::Error)]
pub enum AshbyError {
    /// No API key was configured, so no request can be authenticated.
    #[error("Ashby connection not established")]
    NotConnected,

    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-2xx status. The body is kept raw.
    #[error("HTTP Error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response was JSON but not shaped like an Ashby envelope.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_keeps_raw_body() {
        let err = AshbyError::Api {
            status: 500,
            body: "server error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP Error: 500 - server error");
    }

    #[test]
    fn test_not_connected_display() {
        assert_eq!(
            AshbyError::NotConnected.to_string(),
            "Ashby connection not established"
        );
    }
}
