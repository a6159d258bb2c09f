/*
[INPUT]:  HTTP method, path relative to the base URL, optional request data
[OUTPUT]: reqwest requests, signed with X-BFX-* headers when authenticated
[POS]:    HTTP layer - request construction
[UPDATE]: When changing URL resolution or the authenticated request layout
*/

use reqwest::{Method, Request};
use serde::Serialize;
use url::Url;

use crate::http::signature::{RequestSigner, build_envelope};
use crate::http::{ExmoClient, ExmoError, Result};

impl ExmoClient {
    /// Resolve a path relative to the base URL
    pub fn resolve_url(&self, ref_url: &str) -> Result<Url> {
        Ok(self.base_url().join(ref_url)?)
    }

    /// Build an unauthenticated request with no body
    pub fn new_request(&self, method: Method, ref_url: &str) -> Result<Request> {
        let url = self.resolve_url(ref_url)?;
        Ok(Request::new(method, url))
    }

    /// Build a request carrying a signed payload
    ///
    /// `data` must serialize to a JSON object (or `null` for no fields). It is
    /// merged over `{"request": <path>, "nonce": <nonce>}`, encoded as base64
    /// JSON and signed with the API secret.
    pub fn new_authenticated_request<D>(
        &self,
        method: Method,
        ref_url: &str,
        data: &D,
    ) -> Result<Request>
    where
        D: Serialize + ?Sized,
    {
        let credentials = self.credentials().ok_or(ExmoError::MissingCredentials)?;
        let mut request = self.new_request(method, ref_url)?;

        let data = serde_json::to_value(data)?;
        let nonce = self.nonce_source.next_nonce();
        let envelope = build_envelope(&canonical_path(request.url()), nonce, data)?;

        let signer = RequestSigner::new(credentials);
        let signed = signer.sign_envelope(&envelope)?;
        request.headers_mut().extend(signer.headers(&signed)?);

        Ok(request)
    }
}

/// Path plus query of a resolved URL, e.g. `/v1/trades`
fn canonical_path(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
