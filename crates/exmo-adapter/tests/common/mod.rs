/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for exmo-adapter tests

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use exmo_adapter::{ClientConfig, ExmoClient, NonceSource};
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "K-7f3c2a91b0d84e55";
#[allow(dead_code)]
pub const TEST_API_SECRET: &str = "S-0c1d2e3f4a5b6c7d8e9f";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client whose base URL points at the mock server's `/v1/`
pub fn client_for(server: &MockServer) -> ExmoClient {
    ExmoClient::with_config_and_base_url(ClientConfig::default(), &format!("{}/v1/", server.uri()))
        .expect("client init")
}

/// Nonce source that always returns the same value
#[derive(Debug)]
#[allow(dead_code)]
pub struct FixedNonce(pub u64);

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

/// Decode an `X-BFX-PAYLOAD` header value back into its JSON envelope
#[allow(dead_code)]
pub fn decode_payload(payload: &str) -> serde_json::Value {
    let bytes = BASE64.decode(payload).expect("payload is base64");
    serde_json::from_slice(&bytes).expect("payload is JSON")
}
