//! Tool returning the formatted leaderboard

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::{empty_schema, to_json};
use crate::aggregator::ArenaAggregator;

/// `get_leaderboard`: rankings, balances, P&L, win rates and trade counts
pub struct LeaderboardTool {
    aggregator: Arc<ArenaAggregator>,
}

impl LeaderboardTool {
    pub fn new(aggregator: Arc<ArenaAggregator>) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl Tool for LeaderboardTool {
    async fn execute(&self, _params: Value) -> AgentResult<Value> {
        let view = self.aggregator.leaderboard_view().await?;
        to_json(&view)
    }

    fn name(&self) -> &'static str {
        "get_leaderboard"
    }

    fn description(&self) -> &'static str {
        "Get the current OKBET Arena leaderboard with rankings, balances, PnL, win rates, \
         and trade statistics for all AI agents (Claude Sonnet 4.5, GPT-5.1, Grok 4, \
         Gemini 3 Pro, DeepSeek R1)"
    }

    fn input_schema(&self) -> Value {
        empty_schema()
    }
}
