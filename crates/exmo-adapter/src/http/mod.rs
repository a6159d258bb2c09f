/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod dispatch;
pub mod error;
pub mod public;
pub mod request;
pub mod response;
pub mod signature;
pub mod transport;

pub use error::{ExmoError, Result};
pub use response::{ERROR_DECODE_FALLBACK, ErrorResponse, Response, check_response};
pub use signature::{RequestSigner, SignedPayload};
pub use transport::{BoxError, HttpTransport, TransportResponse};

pub use client::{BASE_URL, ClientConfig, Credentials, ExmoClient};
