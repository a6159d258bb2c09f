/*
[INPUT]:  HTTP status, headers and the buffered response body
[OUTPUT]: Response snapshots and success/failure classification
[POS]:    HTTP layer - response classification and error message decoding
[UPDATE]: When the API error body format changes
*/

use std::borrow::Cow;
use std::fmt;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use crate::http::{ExmoError, Result};
use crate::types::ApiErrorBody;

/// Message used when a failure body carries no decodable error message
pub const ERROR_DECODE_FALLBACK: &str = "Error decoding response error message. \
     Please see response body for more information.";

/// Snapshot of an HTTP exchange with the fully buffered body
///
/// Kept alongside errors so callers can inspect the raw bytes and status code
/// when classification or decoding fails.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            url,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the request
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the buffered body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

/// Error returned by the API for a non-2xx status
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    message: String,
    response: Response,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, response: Response) -> Self {
        Self {
            message: message.into(),
            response,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Response that produced this error
    pub fn response(&self) -> &Response {
        &self.response
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API error ({}) {}: {}",
            self.response.status.as_u16(),
            self.response.url,
            self.message
        )
    }
}

/// Classify a response by status code
///
/// 2xx passes the response through untouched. Anything else becomes
/// [`ExmoError::Api`]. Any JSON object or `null` body yields its `message`
/// (empty when absent); a body that is not such JSON gets
/// [`ERROR_DECODE_FALLBACK`].
pub fn check_response(response: Response) -> Result<Response> {
    if response.status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<Option<ApiErrorBody>>() {
        Ok(body) => body.map(|body| body.message).unwrap_or_default(),
        Err(_) => ERROR_DECODE_FALLBACK.to_string(),
    };

    Err(ExmoError::Api(Box::new(ErrorResponse::new(message, response))))
}
