//! The closed set of competing agents

use crate::error::ArenaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One competitor in the arena
///
/// The set is fixed for the lifetime of the competition, so identifiers are
/// validated once at the boundary by parsing into this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentId {
    #[serde(rename = "claude-sonnet-4.5")]
    ClaudeSonnet45,
    #[serde(rename = "grok-4")]
    Grok4,
    #[serde(rename = "gpt-5.1")]
    Gpt51,
    #[serde(rename = "gemini-3-pro")]
    Gemini3Pro,
    #[serde(rename = "deepseek-r1")]
    DeepseekR1,
}

impl AgentId {
    /// Every agent, in canonical order
    pub const ALL: [AgentId; 5] = [
        AgentId::ClaudeSonnet45,
        AgentId::Grok4,
        AgentId::Gpt51,
        AgentId::Gemini3Pro,
        AgentId::DeepseekR1,
    ];

    /// Identifier used by the remote API and in tool arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClaudeSonnet45 => "claude-sonnet-4.5",
            Self::Grok4 => "grok-4",
            Self::Gpt51 => "gpt-5.1",
            Self::Gemini3Pro => "gemini-3-pro",
            Self::DeepseekR1 => "deepseek-r1",
        }
    }

    /// Relative endpoint serving this agent's open positions
    pub fn positions_endpoint(&self) -> String {
        format!("/agents/{}/positions", self.as_str())
    }

    /// Comma-separated identifiers, for error messages and schema descriptions
    pub fn joined(agents: &[AgentId]) -> String {
        agents
            .iter()
            .map(AgentId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|agent| agent.as_str() == s)
            .ok_or_else(|| ArenaError::InvalidAgent {
                agent: s.to_string(),
                valid: Self::joined(&Self::ALL),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for agent in AgentId::ALL {
            assert_eq!(agent.as_str().parse::<AgentId>().unwrap(), agent);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Grok-4".parse::<AgentId>().is_err());
        assert!(" grok-4".parse::<AgentId>().is_err());

        let err = "gpt-4".parse::<AgentId>().unwrap_err();
        assert!(matches!(err, ArenaError::InvalidAgent { ref agent, .. } if agent == "gpt-4"));
        assert!(err.to_string().contains("claude-sonnet-4.5, grok-4"));
    }

    #[test]
    fn test_serde_uses_wire_identifier() {
        assert_eq!(
            serde_json::to_value(AgentId::Gpt51).unwrap(),
            serde_json::json!("gpt-5.1")
        );
        let parsed: AgentId = serde_json::from_value(serde_json::json!("deepseek-r1")).unwrap();
        assert_eq!(parsed, AgentId::DeepseekR1);
    }

    #[test]
    fn test_positions_endpoint() {
        assert_eq!(
            AgentId::Gemini3Pro.positions_endpoint(),
            "/agents/gemini-3-pro/positions"
        );
    }
}
