/*
[INPUT]:  Error sources (URL resolution, serialization, transport, API, decoding)
[OUTPUT]: Structured error types carrying the buffered response when one exists
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::response::{ErrorResponse, Response};
use crate::http::transport::BoxError;

/// Main error type for the EXMO adapter
#[derive(Error, Debug)]
pub enum ExmoError {
    /// The underlying HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Network failure before any response was received
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-2xx status; carries the decoded message and the response
    #[error("{0}")]
    Api(Box<ErrorResponse>),

    /// 2xx status but the body does not match the expected shape
    #[error("Failed to decode response body: {source}")]
    Decode {
        source: serde_json::Error,
        response: Box<Response>,
    },

    /// Request payload could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request payload encoded, but not into a shape the API accepts
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    /// Relative path could not be resolved against the base URL
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Header value contained bytes not allowed on the wire
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Authenticated request attempted without an API key and secret
    #[error("Authenticated request requires API credentials")]
    MissingCredentials,
}

impl ExmoError {
    /// Buffered response attached to the error, if the server answered
    pub fn response(&self) -> Option<&Response> {
        match self {
            ExmoError::Api(err) => Some(err.response()),
            ExmoError::Decode { response, .. } => Some(response.as_ref()),
            _ => None,
        }
    }

    /// HTTP status of the attached response
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(Response::status)
    }

    /// Check if the server rejected the request with a non-2xx status
    pub fn is_api_error(&self) -> bool {
        matches!(self, ExmoError::Api(_))
    }
}

/// Result type alias for EXMO operations
pub type Result<T> = std::result::Result<T, ExmoError>;
