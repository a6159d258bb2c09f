/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials, transport)
[OUTPUT]: Configured client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::auth::{MonotonicNonce, NonceSource};
use crate::http::Result;
use crate::http::transport::HttpTransport;

/// Base URL for EXMO API v1
pub const BASE_URL: &str = "https://api.exmo.com/v1/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// API key and secret for authenticated requests
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for EXMO API
///
/// Transport, nonce source and credentials are fixed while the client is
/// built; the `with_*` and [`auth`](Self::auth) methods consume the client,
/// so nothing changes once it is shared.
#[derive(Debug, Clone)]
pub struct ExmoClient {
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) nonce_source: Arc<dyn NonceSource>,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl ExmoClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(BASE_URL).expect("BASE_URL is a valid absolute URL");
        Self::from_parts(config, base_url)
    }

    /// Create a client against another base URL, e.g. a mock server
    ///
    /// A trailing `/` is added when missing so relative paths resolve below
    /// the given path rather than replacing its last segment.
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self::from_parts(config, base_url)
    }

    fn from_parts(config: ClientConfig, base_url: Url) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            transport: Arc::new(http_client),
            nonce_source: Arc::new(MonotonicNonce::new()),
            base_url,
            credentials: None,
        })
    }

    /// Replace the HTTP transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the nonce source used for signed requests
    pub fn with_nonce_source(mut self, nonce_source: Arc<dyn NonceSource>) -> Self {
        self.nonce_source = nonce_source;
        self
    }

    /// Attach API key and secret for authenticated requests
    pub fn auth(mut self, api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(api_key, api_secret));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_new_uses_fixed_base_url() {
        let client = ExmoClient::new().unwrap();
        assert_eq!(client.base_url().as_str(), BASE_URL);
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_custom_base_url_gets_trailing_slash() {
        let client = ExmoClient::with_config_and_base_url(
            ClientConfig::default(),
            "http://127.0.0.1:8080/v1",
        )
        .unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/v1/");
    }

    #[test]
    fn test_custom_base_url_rejects_relative() {
        let result = ExmoClient::with_config_and_base_url(ClientConfig::default(), "v1/");
        assert!(result.is_err());
    }

    #[test]
    fn test_auth_is_fluent() {
        let client = ExmoClient::new().unwrap().auth("key", "secret");
        let credentials = client.credentials().expect("credentials should be set");
        assert_eq!(credentials.api_key(), "key");
        assert_eq!(credentials.api_secret(), "secret");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let client = ExmoClient::new().unwrap().auth("key", "very-secret");
        let debug = format!("{:?}", client);
        assert!(debug.contains("key"));
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExmoClient>();
    }
}
