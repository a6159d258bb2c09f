/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::models::Trade;

/// Error body returned with non-2xx statuses
///
/// A JSON body without `message` decodes to an empty message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

/// Recent trades keyed by currency pair, e.g. `BTC_USD`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradesResponse(pub HashMap<String, Vec<Trade>>);

impl TradesResponse {
    /// Trades for one pair, if the response contains it
    pub fn pair(&self, pair: &str) -> Option<&[Trade]> {
        self.0.get(pair).map(Vec::as_slice)
    }
}
