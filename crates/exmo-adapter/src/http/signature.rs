/*
[INPUT]:  Canonical request path, nonce, caller data and credentials
[OUTPUT]: Base64 payload envelope and signed auth headers (X-BFX-*)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing the payload envelope or header names
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::auth::HmacSigner;
use crate::http::{Credentials, ExmoError, Result};

pub const HEADER_API_KEY: &str = "x-bfx-apikey";
pub const HEADER_PAYLOAD: &str = "x-bfx-payload";
pub const HEADER_SIGNATURE: &str = "x-bfx-signature";

/// Build the pre-encoding payload envelope
///
/// Starts from `request` and `nonce`, then merges the caller's fields on
/// top; caller keys win on collision. `Null` data means no extra fields.
pub fn build_envelope(request_path: &str, nonce: u64, data: Value) -> Result<Map<String, Value>> {
    let mut envelope = Map::new();
    envelope.insert("request".to_string(), Value::String(request_path.to_string()));
    envelope.insert("nonce".to_string(), Value::from(nonce));

    match data {
        Value::Null => {}
        Value::Object(fields) => envelope.extend(fields),
        other => {
            return Err(ExmoError::InvalidPayload(format!(
                "request data must be a JSON object, got {other}"
            )));
        }
    }

    Ok(envelope)
}

/// Base64 payload together with its hex signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    pub payload: String,
    pub signature: String,
}

/// Signs payload envelopes with the account credentials
#[derive(Debug)]
pub struct RequestSigner {
    api_key: String,
    signer: HmacSigner,
}

impl RequestSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.api_key().to_string(),
            signer: HmacSigner::new(credentials.api_secret()),
        }
    }

    /// Encode the envelope as base64 JSON and sign the encoded string
    pub fn sign_envelope(&self, envelope: &Map<String, Value>) -> Result<SignedPayload> {
        let json = serde_json::to_vec(envelope)?;
        let payload = BASE64.encode(json);
        let signature = self.signer.sign(&payload);
        Ok(SignedPayload { payload, signature })
    }

    /// JSON content headers plus key, payload and signature headers
    pub fn headers(&self, signed: &SignedPayload) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(HEADER_API_KEY),
            HeaderValue::from_str(&self.api_key)?,
        );
        headers.insert(
            HeaderName::from_static(HEADER_PAYLOAD),
            HeaderValue::from_str(&signed.payload)?,
        );
        headers.insert(
            HeaderName::from_static(HEADER_SIGNATURE),
            HeaderValue::from_str(&signed.signature)?,
        );
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sign_payload;
    use serde_json::json;

    #[test]
    fn test_envelope_merges_caller_fields() {
        let envelope = build_envelope("/v1/trades", 7, json!({"pair": "BTC_USD"})).unwrap();

        assert_eq!(envelope.len(), 3);
        assert_eq!(envelope["request"], "/v1/trades");
        assert_eq!(envelope["nonce"], 7);
        assert_eq!(envelope["pair"], "BTC_USD");
    }

    #[test]
    fn test_envelope_caller_keys_override_defaults() {
        let envelope = build_envelope("/v1/trades", 7, json!({"nonce": 99})).unwrap();
        assert_eq!(envelope["nonce"], 99);
    }

    #[test]
    fn test_envelope_null_data() {
        let envelope = build_envelope("/v1/user_info", 1, Value::Null).unwrap();
        assert_eq!(envelope.len(), 2);
    }

    #[test]
    fn test_envelope_rejects_non_object() {
        let err = build_envelope("/v1/trades", 1, json!(["BTC_USD"])).unwrap_err();
        assert!(matches!(err, ExmoError::InvalidPayload(_)));
    }

    #[test]
    fn test_sign_envelope() {
        let signer = RequestSigner::new(&Credentials::new("key", "secret"));
        let envelope = build_envelope("/v1/trades", 1, Value::Null).unwrap();

        let signed = signer.sign_envelope(&envelope).unwrap();
        let decoded: Value =
            serde_json::from_slice(&BASE64.decode(&signed.payload).unwrap()).unwrap();

        assert_eq!(decoded, json!({"request": "/v1/trades", "nonce": 1}));
        assert_eq!(signed.signature, sign_payload(b"secret", &signed.payload));
    }

    #[test]
    fn test_headers() {
        let signer = RequestSigner::new(&Credentials::new("key", "secret"));
        let signed = SignedPayload {
            payload: "e30=".to_string(),
            signature: "abc123".to_string(),
        };

        let headers = signer.headers(&signed).unwrap();
        assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(headers.get("Accept").unwrap(), "application/json");
        assert_eq!(headers.get("X-BFX-APIKEY").unwrap(), "key");
        assert_eq!(headers.get("X-BFX-PAYLOAD").unwrap(), "e30=");
        assert_eq!(headers.get("X-BFX-SIGNATURE").unwrap(), "abc123");
    }

    #[test]
    fn test_headers_reject_invalid_api_key() {
        let signer = RequestSigner::new(&Credentials::new("bad\nkey", "secret"));
        let signed = SignedPayload {
            payload: "e30=".to_string(),
            signature: "abc".to_string(),
        };
        assert!(matches!(
            signer.headers(&signed),
            Err(ExmoError::InvalidHeader(_))
        ));
    }
}
