/*
[INPUT]:  API secret and request payloads
[OUTPUT]: HMAC signatures and request nonces
[POS]:    Auth layer - primitives for EXMO API authentication
[UPDATE]: When auth primitives change
*/

pub mod nonce;
pub mod signer;

pub use nonce::{MonotonicNonce, NonceSource};
pub use signer::{HmacSigner, sign_payload};
