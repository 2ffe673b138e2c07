//! Ashby authenticates with HTTP Basic: the API key is the username and the
//! password is empty.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Build the `Authorization` header value for an API key.
pub fn basic_auth_value(api_key: &str) -> String {
    let credentials = format!("{api_key}:");
    format!("Basic {}", STANDARD.encode(credentials))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_uses_empty_password() {
        assert_eq!(basic_auth_value("test-key"), "Basic dGVzdC1rZXk6");
        assert_eq!(basic_auth_value("sk_live_123"), "Basic c2tfbGl2ZV8xMjM6");
    }
}
