/*
[INPUT]:  Account secret bytes and payload string
[OUTPUT]: Lowercase hex HMAC-SHA384 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or signature encoding
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha384;

type HmacSha384 = Hmac<Sha384>;

/// Compute the HMAC-SHA384 of `payload` keyed by `secret`, hex encoded
pub fn sign_payload(secret: &[u8], payload: &str) -> String {
    let mut mac = HmacSha384::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// HMAC-SHA384 signer holding the account secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: Vec<u8>,
}

impl HmacSigner {
    /// Create a signer from the raw API secret
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Sign a payload and return the hex digest
    pub fn sign(&self, payload: &str) -> String {
        sign_payload(&self.secret, payload)
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
