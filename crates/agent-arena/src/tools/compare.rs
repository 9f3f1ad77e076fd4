//! Tool comparing two agents market by market

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::{agent_property, parse_params};
use crate::aggregator::ArenaAggregator;

/// `compare_positions`: opposite, common and exclusive positions of two agents
pub struct ComparePositionsTool {
    aggregator: Arc<ArenaAggregator>,
}

#[derive(Debug, Deserialize)]
struct CompareParams {
    agent1: String,
    agent2: String,
}

impl ComparePositionsTool {
    pub fn new(aggregator: Arc<ArenaAggregator>) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl Tool for ComparePositionsTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: CompareParams = parse_params(params)?;
        let result = self
            .aggregator
            .compare_positions(&params.agent1, &params.agent2)
            .await?;
        Ok(result.to_json())
    }

    fn name(&self) -> &'static str {
        "compare_positions"
    }

    fn description(&self) -> &'static str {
        "Compare positions between two AI agents to identify opposite bets, \
         common positions, and unique strategies"
    }

    fn input_schema(&self) -> Value {
        let agents = &self.aggregator.config().agents;
        json!({
            "type": "object",
            "properties": {
                "agent1": agent_property(agents, "First agent name"),
                "agent2": agent_property(agents, "Second agent name"),
            },
            "required": ["agent1", "agent2"]
        })
    }
}
