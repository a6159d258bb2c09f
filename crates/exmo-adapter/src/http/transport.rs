/*
[INPUT]:  Fully built reqwest requests
[OUTPUT]: Status, headers and the body read (or the read failure)
[POS]:    HTTP layer - pluggable network transport
[UPDATE]: When changing how requests reach the network
*/

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode};
use url::Url;

/// Boxed error used at the transport seam
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Raw result of a round trip, before classification
#[derive(Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub url: Url,
    /// Body bytes, or the error that interrupted reading them
    pub body: Result<Vec<u8>, BoxError>,
}

/// Executes HTTP requests for the client
///
/// `reqwest::Client` is the production implementation. Tests swap in doubles
/// to script responses without a network.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Send the request and read the whole body once
    ///
    /// `Err` means no response exists (DNS, refused connection, timeout).
    /// A failure while reading the body is reported inside the response.
    async fn execute(&self, request: Request) -> Result<TransportResponse, BoxError>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<TransportResponse, BoxError> {
        let response = reqwest::Client::execute(self, request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(BoxError::from);

        Ok(TransportResponse {
            status,
            headers,
            url,
            body,
        })
    }
}
