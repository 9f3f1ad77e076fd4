//! Arena analytics tools for LLM agents
//!
//! Each tool wraps one aggregator operation. Failures surface as
//! `agent_core::Error`, which the registry turns into `{ "error": ... }`.

pub mod compare;
pub mod leaderboard;
pub mod positions;
pub mod summary;

pub use compare::ComparePositionsTool;
pub use leaderboard::LeaderboardTool;
pub use positions::{AgentPositionsTool, AllPositionsTool};
pub use summary::CompetitionSummaryTool;

use crate::agent::AgentId;
use crate::aggregator::ArenaAggregator;
use crate::error::ArenaError;
use agent_core::Result as AgentResult;
use agent_tools::ToolRegistry;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;

/// Registry holding all five arena tools, in listing order
pub fn arena_registry(aggregator: Arc<ArenaAggregator>) -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(LeaderboardTool::new(Arc::clone(&aggregator))));
    registry.register(Arc::new(AgentPositionsTool::new(Arc::clone(&aggregator))));
    registry.register(Arc::new(AllPositionsTool::new(Arc::clone(&aggregator))));
    registry.register(Arc::new(ComparePositionsTool::new(Arc::clone(&aggregator))));
    registry.register(Arc::new(CompetitionSummaryTool::new(aggregator)));
    registry
}

fn parse_params<T: DeserializeOwned>(params: Value) -> AgentResult<T> {
    serde_json::from_value(params)
        .map_err(|e| ArenaError::InvalidParameters(e.to_string()).into())
}

fn to_json<T: Serialize>(value: &T) -> AgentResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| agent_core::Error::ProcessingFailed(format!("Failed to serialize result: {e}")))
}

/// Schema of a string argument restricted to the configured agents
fn agent_property(agents: &[AgentId], description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
        "enum": agents.iter().map(AgentId::as_str).collect::<Vec<_>>(),
    })
}

fn empty_schema() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "required": [],
    })
}
