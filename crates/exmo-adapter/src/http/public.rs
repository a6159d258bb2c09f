/*
[INPUT]:  Currency pair identifiers
[OUTPUT]: Market data (recent trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{ExmoClient, ExmoError, Result};
use crate::types::TradesResponse;

impl ExmoClient {
    /// List recent trades for one or more currency pairs
    ///
    /// GET /v1/trades/?pair={pair1},{pair2}
    pub async fn trades(&self, pairs: &[&str]) -> Result<TradesResponse> {
        if pairs.is_empty() {
            return Err(ExmoError::InvalidPayload(
                "at least one currency pair is required".to_string(),
            ));
        }

        let mut request = self.new_request(Method::GET, "trades/")?;
        request
            .url_mut()
            .query_pairs_mut()
            .append_pair("pair", &pairs.join(","));

        let (trades, _) = self.perform_request_json(request).await?;
        Ok(trades)
    }
}
