//! Data snapshot and event vocabulary of the streaming prediction endpoint
//!
//! The endpoint emits `status` events while fetching, then the
//! [`PredictionSnapshot`] is embedded in a prompt and the model's text is
//! relayed as `assistant` events, ending with `done` (or `error`). The
//! generation step itself lives outside this crate.

use crate::views::AgentMap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Status message sent before fetching
pub const STATUS_FETCHING: &str = "Fetching arena data...";

/// Status message sent once the snapshot is ready
pub const STATUS_ANALYZING: &str = "Data fetched, analyzing...";

/// Leaderboard and positions exactly as the remote served them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSnapshot {
    pub leaderboard: Vec<Value>,
    pub positions: AgentMap<Vec<Value>>,
    pub fetched_at: DateTime<Utc>,
}

impl PredictionSnapshot {
    pub fn new(leaderboard: Vec<Value>, positions: AgentMap<Vec<Value>>) -> Self {
        Self {
            leaderboard,
            positions,
            fetched_at: Utc::now(),
        }
    }

    /// Pretty-printed JSON, as appended to the prediction prompt
    pub fn to_prompt_input(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Text block of an assistant event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// Message wrapper of an assistant event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantMessage {
    pub content: Vec<ContentBlock>,
}

/// Payload of an assistant event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantContent {
    pub message: AssistantMessage,
}

/// One server-sent event of the prediction stream
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    Status { message: String },
    Assistant { content: AssistantContent },
    Error { error: String },
    Done,
}

impl StreamEvent {
    pub fn status(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
        }
    }

    /// Wrap one incremental chunk of generated text
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self::Assistant {
            content: AssistantContent {
                message: AssistantMessage {
                    content: vec![ContentBlock::Text { text: text.into() }],
                },
            },
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }

    /// `data: <json>\n\n`
    pub fn to_sse_frame(&self) -> serde_json::Result<String> {
        Ok(format!("data: {}\n\n", serde_json::to_string(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;
    use serde_json::json;

    #[test]
    fn test_event_shapes() {
        assert_eq!(
            serde_json::to_value(StreamEvent::status(STATUS_FETCHING)).unwrap(),
            json!({ "type": "status", "message": "Fetching arena data..." })
        );
        assert_eq!(
            serde_json::to_value(StreamEvent::assistant_text("Grok leads")).unwrap(),
            json!({
                "type": "assistant",
                "content": { "message": { "content": [{ "type": "text", "text": "Grok leads" }] } }
            })
        );
        assert_eq!(
            serde_json::to_value(StreamEvent::error("boom")).unwrap(),
            json!({ "type": "error", "error": "boom" })
        );
        assert_eq!(
            serde_json::to_value(StreamEvent::Done).unwrap(),
            json!({ "type": "done" })
        );
    }

    #[test]
    fn test_sse_frame() {
        assert_eq!(
            StreamEvent::Done.to_sse_frame().unwrap(),
            "data: {\"type\":\"done\"}\n\n"
        );
    }

    #[test]
    fn test_snapshot_prompt_input() {
        let positions: AgentMap<Vec<Value>> =
            [(AgentId::Grok4, vec![json!({ "market_title": "M" })])]
                .into_iter()
                .collect();
        let snapshot = PredictionSnapshot::new(vec![json!({ "rank": 1 })], positions);

        let text = snapshot.to_prompt_input().unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["leaderboard"][0]["rank"], 1);
        assert_eq!(parsed["positions"]["grok-4"][0]["market_title"], "M");
        assert!(parsed["fetched_at"].is_string());
        assert!(text.contains('\n'));
    }
}
