//! Tools exposing open positions

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::{agent_property, empty_schema, parse_params, to_json};
use crate::aggregator::ArenaAggregator;

/// `get_agent_positions`: one agent's positions with totals
pub struct AgentPositionsTool {
    aggregator: Arc<ArenaAggregator>,
}

#[derive(Debug, Deserialize)]
struct AgentPositionsParams {
    agent_name: String,
}

impl AgentPositionsTool {
    pub fn new(aggregator: Arc<ArenaAggregator>) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl Tool for AgentPositionsTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: AgentPositionsParams = parse_params(params)?;
        let positions = self.aggregator.agent_positions(&params.agent_name).await?;
        to_json(&positions)
    }

    fn name(&self) -> &'static str {
        "get_agent_positions"
    }

    fn description(&self) -> &'static str {
        "Get all open positions for a specific AI agent, including market titles, \
         outcomes, entry prices, current prices, and unrealized PnL"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "agent_name": agent_property(
                    &self.aggregator.config().agents,
                    "Agent name (claude-sonnet-4.5, grok-4, gpt-5.1, gemini-3-pro, deepseek-r1)",
                ),
            },
            "required": ["agent_name"]
        })
    }
}

/// `get_all_positions`: brief positions of every agent
pub struct AllPositionsTool {
    aggregator: Arc<ArenaAggregator>,
}

impl AllPositionsTool {
    pub fn new(aggregator: Arc<ArenaAggregator>) -> Self {
        Self { aggregator }
    }
}

#[async_trait]
impl Tool for AllPositionsTool {
    async fn execute(&self, _params: Value) -> AgentResult<Value> {
        let all = self.aggregator.all_positions().await?;
        to_json(&all)
    }

    fn name(&self) -> &'static str {
        "get_all_positions"
    }

    fn description(&self) -> &'static str {
        "Get open positions for all AI agents in the competition, useful for \
         comparing strategies and market exposure"
    }

    fn input_schema(&self) -> Value {
        empty_schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockArenaSource;
    use crate::config::ArenaConfig;

    fn positions_payload() -> Value {
        json!({
            "success": true,
            "positions": [{
                "market_title": "Fed cuts in March?",
                "outcome": "Yes",
                "entry_price": 0.4,
                "current_price": 0.5,
                "shares": 10.0,
                "amount_invested": 4.0,
                "current_value": 5.0,
                "unrealized_pnl": 1.0,
                "opened_at": "2025-12-01T10:00:00Z"
            }]
        })
    }

    fn aggregator(mock: MockArenaSource) -> Arc<ArenaAggregator> {
        Arc::new(ArenaAggregator::with_source(
            Arc::new(mock),
            Arc::new(ArenaConfig::default()),
        ))
    }

    #[test]
    fn test_tool_metadata() {
        let tool = AgentPositionsTool::new(aggregator(MockArenaSource::new()));
        assert_eq!(tool.name(), "get_agent_positions");

        let schema = tool.input_schema();
        assert_eq!(schema["required"], json!(["agent_name"]));
        assert_eq!(
            schema["properties"]["agent_name"]["enum"],
            json!(["claude-sonnet-4.5", "grok-4", "gpt-5.1", "gemini-3-pro", "deepseek-r1"])
        );
    }

    #[tokio::test]
    async fn test_execute_agent_positions() {
        let mut mock = MockArenaSource::new();
        mock.expect_fetch()
            .withf(|endpoint| endpoint.ends_with("/agents/grok-4/positions"))
            .times(1)
            .returning(|_| Ok(positions_payload()));

        let value = AgentPositionsTool::new(aggregator(mock))
            .execute(json!({ "agent_name": "grok-4" }))
            .await
            .unwrap();
        assert_eq!(value["agent"], "grok-4");
        assert_eq!(value["position_count"], 1);
        assert_eq!(value["total_invested"], "4.00");
        assert_eq!(value["total_unrealized_pnl"], "1.0000");
    }

    #[tokio::test]
    async fn test_execute_rejects_bad_params() {
        let mut mock = MockArenaSource::new();
        mock.expect_fetch().never();
        let tool = AgentPositionsTool::new(aggregator(mock));

        let err = tool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, agent_core::Error::InvalidInput(_)));

        let err = tool
            .execute(json!({ "agent_name": "gpt-4" }))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid agent name 'gpt-4'"));
    }

    #[tokio::test]
    async fn test_execute_all_positions() {
        let mut mock = MockArenaSource::new();
        mock.expect_fetch()
            .times(5)
            .returning(|_| Ok(positions_payload()));

        let value = AllPositionsTool::new(aggregator(mock))
            .execute(json!({}))
            .await
            .unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(value["deepseek-r1"]["positions"][0]["market_title"], "Fed cuts in March?");
        assert_eq!(value["deepseek-r1"]["positions"][0]["amount_invested"], "4.00");
    }
}
