/*
[INPUT]:  Built requests and the client's transport
[OUTPUT]: Classified responses, optionally decoded into caller types
[POS]:    HTTP layer - request execution pipeline
[UPDATE]: When changing execution, body buffering or decode behavior
*/

use reqwest::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::response::{Response, check_response};
use crate::http::{ExmoClient, ExmoError, Result};

impl ExmoClient {
    /// Execute a request and classify the response
    ///
    /// The body is read from the transport once. If that read fails partway
    /// the body becomes a diagnostic string and the status code still
    /// decides the outcome.
    pub async fn perform_request(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let raw = self
            .transport
            .execute(request)
            .await
            .map_err(ExmoError::Transport)?;

        let body = match raw.body {
            Ok(body) => body,
            Err(err) => format!("Error reading body:{err}").into_bytes(),
        };
        let response = Response::new(raw.status, raw.headers, raw.url, body);

        debug!(
            status = response.status().as_u16(),
            body_len = response.body().len(),
            "received response"
        );

        check_response(response)
    }

    /// Execute a request and decode a successful body into `T`
    ///
    /// Returns the decoded value together with the response it came from.
    pub async fn perform_request_json<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<(T, Response)> {
        let response = self.perform_request(request).await?;

        match response.json() {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(ExmoError::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }
}
