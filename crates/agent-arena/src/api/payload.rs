//! Wire types of the arena API and envelope validation
//!
//! Every response is wrapped as `{ "success": bool, "<field>": [...] }`. A
//! falsy `success` or a missing array is a [`ArenaError::MalformedResponse`];
//! so is any element that does not decode, so callers never see partial data.

use crate::error::{ArenaError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One leaderboard row as served by `/leaderboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLeaderboardEntry {
    pub rank: u32,
    pub display_name: String,
    #[serde(default)]
    pub llm_name: Option<String>,
    /// Realized plus unrealized P&L relative to the initial balance
    pub total_pnl: f64,
    /// Already expressed as a percentage
    pub win_rate: f64,
    #[serde(default)]
    pub total_trades: u64,
    #[serde(default)]
    pub winning_trades: u64,
    #[serde(default)]
    pub losing_trades: u64,
    #[serde(default)]
    pub open_positions: u64,
    #[serde(default)]
    pub polymarket_profile: Option<String>,
}

/// One open position as served by `/agents/{id}/positions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    pub market_title: String,
    pub outcome: String,
    #[serde(default)]
    pub entry_price: Option<f64>,
    #[serde(default)]
    pub current_price: Option<f64>,
    pub shares: f64,
    pub amount_invested: f64,
    pub current_value: f64,
    pub unrealized_pnl: f64,
    #[serde(default)]
    pub opened_at: Option<String>,
}

impl RawPosition {
    /// Whether two positions are on the same side of a market
    pub fn same_outcome(&self, other: &RawPosition) -> bool {
        self.outcome.to_lowercase() == other.outcome.to_lowercase()
    }

    /// Difference between the reported P&L and current value minus cost
    pub fn pnl_drift(&self) -> f64 {
        self.unrealized_pnl - (self.current_value - self.amount_invested)
    }
}

/// JavaScript-style truthiness, which is what the API's producers assume
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validate the envelope and take ownership of its `field` array
pub fn envelope_array(payload: Value, endpoint: &str, field: &str) -> Result<Vec<Value>> {
    let Value::Object(mut body) = payload else {
        return Err(ArenaError::malformed(endpoint, "response is not a JSON object"));
    };

    if !body.get("success").is_some_and(truthy) {
        return Err(ArenaError::malformed(endpoint, "success flag is not set"));
    }

    match body.remove(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ArenaError::malformed(
            endpoint,
            format!("`{field}` is not an array"),
        )),
        None => Err(ArenaError::malformed(endpoint, format!("`{field}` is missing"))),
    }
}

/// Decode every element of an envelope array, failing on the first bad one
pub fn decode_array<T: DeserializeOwned>(
    payload: Value,
    endpoint: &str,
    field: &str,
) -> Result<Vec<T>> {
    envelope_array(payload, endpoint, field)?
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value(item).map_err(|e| {
                ArenaError::malformed(endpoint, format!("`{field}[{idx}]`: {e}"))
            })
        })
        .collect()
}

/// Decode a `/leaderboard` response
pub fn parse_leaderboard(payload: Value, endpoint: &str) -> Result<Vec<RawLeaderboardEntry>> {
    decode_array(payload, endpoint, "leaderboard")
}

/// Decode a `/agents/{id}/positions` response
pub fn parse_positions(payload: Value, endpoint: &str) -> Result<Vec<RawPosition>> {
    decode_array(payload, endpoint, "positions")
}
