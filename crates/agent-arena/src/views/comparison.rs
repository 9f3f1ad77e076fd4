//! Pairwise position comparison
//!
//! Positions are joined on market title. Relative to a pair of agents every
//! position lands in exactly one of four buckets: opposite, common, first-only
//! or second-only.

use crate::api::RawPosition;
use crate::views::money;
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// One agent's side of a contested market
#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    pub outcome: String,
    pub invested: String,
}

/// Market where the two agents hold different outcomes
#[derive(Debug, Clone, PartialEq)]
pub struct OppositePosition {
    pub market: String,
    pub agent1: Side,
    pub agent2: Side,
}

/// Market where both agents hold the same outcome
#[derive(Debug, Clone, PartialEq)]
pub struct CommonPosition {
    pub market: String,
    pub outcome: String,
    pub agent1_invested: String,
    pub agent2_invested: String,
}

/// Market held by only one of the two agents
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusivePosition {
    pub market: String,
    pub outcome: String,
    pub invested: String,
}

impl From<&RawPosition> for ExclusivePosition {
    fn from(p: &RawPosition) -> Self {
        Self {
            market: p.market_title.clone(),
            outcome: p.outcome.clone(),
            invested: money(p.amount_invested),
        }
    }
}

/// Partition of two agents' positions
///
/// Result keys embed the caller-supplied agent identifiers verbatim
/// (`"<agent>_only"`, `"<agent>_invested"`), so it serializes through a JSON
/// object rather than a fixed struct layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub agent1: String,
    pub agent2: String,
    pub opposite: Vec<OppositePosition>,
    pub common: Vec<CommonPosition>,
    pub agent1_only: Vec<ExclusivePosition>,
    pub agent2_only: Vec<ExclusivePosition>,
}

impl ComparisonResult {
    /// Classify two position sets
    ///
    /// A market title repeated within one agent's list resolves to its last
    /// occurrence when used as the lookup side.
    pub fn compare(
        agent1: &str,
        positions1: &[RawPosition],
        agent2: &str,
        positions2: &[RawPosition],
    ) -> Self {
        let by_title1: HashMap<&str, &RawPosition> = positions1
            .iter()
            .map(|p| (p.market_title.as_str(), p))
            .collect();
        let by_title2: HashMap<&str, &RawPosition> = positions2
            .iter()
            .map(|p| (p.market_title.as_str(), p))
            .collect();

        let mut opposite = Vec::new();
        let mut common = Vec::new();
        let mut agent1_only = Vec::new();

        for p1 in positions1 {
            match by_title2.get(p1.market_title.as_str()) {
                Some(p2) if p1.same_outcome(p2) => common.push(CommonPosition {
                    market: p1.market_title.clone(),
                    outcome: p1.outcome.clone(),
                    agent1_invested: money(p1.amount_invested),
                    agent2_invested: money(p2.amount_invested),
                }),
                Some(p2) => opposite.push(OppositePosition {
                    market: p1.market_title.clone(),
                    agent1: Side {
                        outcome: p1.outcome.clone(),
                        invested: money(p1.amount_invested),
                    },
                    agent2: Side {
                        outcome: p2.outcome.clone(),
                        invested: money(p2.amount_invested),
                    },
                }),
                None => agent1_only.push(ExclusivePosition::from(p1)),
            }
        }

        let agent2_only = positions2
            .iter()
            .filter(|p2| !by_title1.contains_key(p2.market_title.as_str()))
            .map(ExclusivePosition::from)
            .collect();

        Self {
            agent1: agent1.to_string(),
            agent2: agent2.to_string(),
            opposite,
            common,
            agent1_only,
            agent2_only,
        }
    }

    /// Key of the first agent's exclusive list
    pub fn agent1_only_key(&self) -> String {
        format!("{}_only", self.agent1)
    }

    /// Key of the second agent's exclusive list
    pub fn agent2_only_key(&self) -> String {
        format!("{}_only", self.agent2)
    }

    /// JSON rendering with agent-keyed fields
    ///
    /// When both agents are the same, agent-keyed fields collapse onto one
    /// key and the second agent's value wins.
    pub fn to_json(&self) -> Value {
        let (a1, a2) = (self.agent1.as_str(), self.agent2.as_str());

        let exclusive = |list: &[ExclusivePosition]| -> Vec<Value> {
            list.iter()
                .map(|p| json!({ "market": p.market, "outcome": p.outcome, "invested": p.invested }))
                .collect()
        };

        let opposite: Vec<Value> = self
            .opposite
            .iter()
            .map(|p| {
                let mut entry = Map::new();
                entry.insert("market".into(), json!(p.market));
                entry.insert(
                    a1.into(),
                    json!({ "outcome": p.agent1.outcome, "invested": p.agent1.invested }),
                );
                entry.insert(
                    a2.into(),
                    json!({ "outcome": p.agent2.outcome, "invested": p.agent2.invested }),
                );
                Value::Object(entry)
            })
            .collect();

        let common: Vec<Value> = self
            .common
            .iter()
            .map(|p| {
                let mut entry = Map::new();
                entry.insert("market".into(), json!(p.market));
                entry.insert("outcome".into(), json!(p.outcome));
                entry.insert(format!("{a1}_invested"), json!(p.agent1_invested));
                entry.insert(format!("{a2}_invested"), json!(p.agent2_invested));
                Value::Object(entry)
            })
            .collect();

        let mut summary = Map::new();
        summary.insert("opposite_positions".into(), json!(self.opposite.len()));
        summary.insert("common_positions".into(), json!(self.common.len()));
        summary.insert(self.agent1_only_key(), json!(self.agent1_only.len()));
        summary.insert(self.agent2_only_key(), json!(self.agent2_only.len()));

        let mut result = Map::new();
        result.insert("comparison".into(), json!(format!("{a1} vs {a2}")));
        result.insert("summary".into(), Value::Object(summary));
        result.insert("opposite_positions".into(), Value::Array(opposite));
        result.insert("common_positions".into(), Value::Array(common));
        result.insert(self.agent1_only_key(), Value::Array(exclusive(&self.agent1_only)));
        result.insert(self.agent2_only_key(), Value::Array(exclusive(&self.agent2_only)));
        Value::Object(result)
    }
}

impl Serialize for ComparisonResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
