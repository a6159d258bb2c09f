/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public EXMO adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{HmacSigner, MonotonicNonce, NonceSource, sign_payload};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    ErrorResponse,
    ExmoClient,
    ExmoError,
    HttpTransport,
    Response,
    Result,
};

// Re-export all types
pub use types::*;
