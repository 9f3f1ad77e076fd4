//! Tool summarizing the competition

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::{empty_schema, to_json};
use crate::aggregator::ArenaAggregator;

/// `get_competition_summary`: leader, gaps and key statistics
pub struct CompetitionSummaryTool {
    aggregator: Arc<ArenaAggregator>,
}

impl CompetitionSummaryTool {
    pub fn new(aggregator: Arc<ArenaAggregator>) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl Tool for CompetitionSummaryTool {
    async fn execute(&self, _params: Value) -> AgentResult<Value> {
        let summary = self.aggregator.competition_summary().await?;
        to_json(&summary)
    }

    fn name(&self) -> &'static str {
        "get_competition_summary"
    }

    fn description(&self) -> &'static str {
        "Get a comprehensive summary of the OKBET Arena competition including current \
         leader, performance gaps, and key statistics"
    }

    fn input_schema(&self) -> Value {
        empty_schema()
    }
}
