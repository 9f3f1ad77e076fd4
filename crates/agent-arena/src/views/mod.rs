//! Derived, serializable views over arena data
//!
//! Monetary totals are rendered with two decimals, P&L deltas with four, win
//! rates as a one-decimal percentage. Views are built fresh per request and
//! never mutated afterwards.

pub mod comparison;
pub mod leaderboard;
pub mod positions;
pub mod summary;

pub use comparison::{CommonPosition, ComparisonResult, ExclusivePosition, OppositePosition, Side};
pub use leaderboard::{LeaderboardRow, LeaderboardView};
pub use positions::{AgentPositionSummary, AgentPositions, AllPositions, PositionBrief, PositionRow};
pub use summary::{CompetitionSummary, KeyStats, Ranking};

use crate::agent::AgentId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Fixed-point rendering with ties rounded away from zero
///
/// Rounds the exact binary value of `value`, so `0.125` becomes `0.13` while
/// `1.005` (stored just below the midpoint) becomes `1.00`.
fn fixed(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let half_up =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{half_up:.precision$}")
        }
        None => format!("{value:.precision$}"),
    }
}

/// Two-decimal rendering for balances, invested amounts and values
pub fn money(value: f64) -> String {
    fixed(value, 2)
}

/// Four-decimal rendering for unrealized P&L
pub fn pnl(value: f64) -> String {
    fixed(value, 4)
}

/// One-decimal percentage, for values already expressed in percent
pub fn percent(value: f64) -> String {
    format!("{}%", fixed(value, 1))
}

/// The value as it reads once rendered with `decimals` places
pub(crate) fn rounded(value: f64, decimals: u32) -> f64 {
    fixed(value, decimals).parse().unwrap_or(value)
}

/// Per-agent values in configured agent order
///
/// Serializes as a JSON object keyed by agent identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentMap<T>(Vec<(AgentId, T)>);

impl<T> AgentMap<T> {
    /// Look up the value for one agent
    pub fn get(&self, agent: AgentId) -> Option<&T> {
        self.0.iter().find(|(a, _)| *a == agent).map(|(_, v)| v)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(AgentId, T)> {
        self.0.iter()
    }

    /// Number of agents present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no agent is present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Agents present, in order
    pub fn agents(&self) -> Vec<AgentId> {
        self.0.iter().map(|(a, _)| *a).collect()
    }
}

impl<T> FromIterator<(AgentId, T)> for AgentMap<T> {
    fn from_iter<I: IntoIterator<Item = (AgentId, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Serialize> Serialize for AgentMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (agent, value) in &self.0 {
            map.serialize_entry(agent.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_formatting() {
        assert_eq!(money(0.0), "0.00");
        assert_eq!(money(12.345_67), "12.35");
        assert_eq!(money(-3.1), "-3.10");
        assert_eq!(pnl(0.0), "0.0000");
        assert_eq!(pnl(1.234_567), "1.2346");
        assert_eq!(percent(62.5), "62.5%");
        assert_eq!(percent(80.0), "80.0%");
    }

    #[test]
    fn test_midpoints_round_away_from_zero() {
        assert_eq!(money(0.125), "0.13");
        assert_eq!(money(-0.125), "-0.13");
        assert_eq!(money(2.375), "2.38");
        assert_eq!(money(250.125), "250.13");
        assert_eq!(percent(6.25), "6.3%");
        assert_eq!(percent(62.25), "62.3%");
        assert_eq!(pnl(0.031_25), "0.0313");
        // stored just below the midpoint
        assert_eq!(money(1.005), "1.00");
    }

    #[test]
    fn test_non_finite_values_still_render() {
        assert_eq!(money(f64::NAN), "NaN");
    }

    #[test]
    fn test_rounded() {
        assert!((rounded(0.125, 2) - 0.13).abs() < 1e-12);
        assert!((rounded(1.234_567, 2) - 1.23).abs() < 1e-12);
        assert!((rounded(1.234_567, 4) - 1.2346).abs() < 1e-12);
    }

    #[test]
    fn test_agent_map_serializes_in_order() {
        let map: AgentMap<u32> = [(AgentId::Gpt51, 1), (AgentId::ClaudeSonnet45, 2)]
            .into_iter()
            .collect();
        let text = serde_json::to_string(&map).unwrap();
        assert_eq!(text, r#"{"gpt-5.1":1,"claude-sonnet-4.5":2}"#);
        assert_eq!(serde_json::to_value(&map).unwrap(), json!({ "gpt-5.1": 1, "claude-sonnet-4.5": 2 }));
        assert_eq!(map.get(AgentId::ClaudeSonnet45), Some(&2));
        assert_eq!(map.get(AgentId::Grok4), None);
    }
}
