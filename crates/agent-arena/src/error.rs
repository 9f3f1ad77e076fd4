//! Error types for arena analytics operations

use thiserror::Error;

/// Arena analytics errors
///
/// Every error is local to one request: nothing is retried or remembered.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// Agent identifier outside the configured agent set
    #[error("Invalid agent name '{agent}'. Must be one of: {valid}")]
    InvalidAgent {
        agent: String,
        valid: String,
    },

    /// Network failure, timeout, non-2xx status or undecodable body
    #[error("API error on {endpoint}: {cause}")]
    RemoteFetch {
        endpoint: String,
        cause: String,
    },

    /// The remote answered, but not with the expected envelope
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse {
        endpoint: String,
        reason: String,
    },

    /// The leaderboard has no entries, so there is no leader
    #[error("Leaderboard is empty")]
    EmptyLeaderboard,

    /// Tool parameters did not match the tool's schema
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ArenaError {
    pub(crate) fn remote(endpoint: &str, cause: impl std::fmt::Display) -> Self {
        Self::RemoteFetch {
            endpoint: endpoint.to_string(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn malformed(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for arena operations
pub type Result<T> = std::result::Result<T, ArenaError>;

/// Convert ArenaError to agent_core::Error
impl From<ArenaError> for agent_core::Error {
    fn from(err: ArenaError) -> Self {
        match err {
            ArenaError::InvalidParameters(msg) => agent_core::Error::InvalidInput(msg),
            other => agent_core::Error::ProcessingFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArenaError::InvalidAgent {
            agent: "gpt-2".to_string(),
            valid: "grok-4, gpt-5.1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid agent name 'gpt-2'. Must be one of: grok-4, gpt-5.1"
        );

        let err = ArenaError::remote("/leaderboard", "HTTP 503 Service Unavailable");
        assert_eq!(
            err.to_string(),
            "API error on /leaderboard: HTTP 503 Service Unavailable"
        );

        let err = ArenaError::malformed("/leaderboard", "success flag is not true");
        assert_eq!(
            err.to_string(),
            "Malformed response from /leaderboard: success flag is not true"
        );
    }

    #[test]
    fn test_error_conversion() {
        let agent_err: agent_core::Error = ArenaError::EmptyLeaderboard.into();
        match agent_err {
            agent_core::Error::ProcessingFailed(msg) => assert_eq!(msg, "Leaderboard is empty"),
            _ => panic!("Expected ProcessingFailed variant"),
        }

        let agent_err: agent_core::Error =
            ArenaError::InvalidParameters("missing field `agent1`".to_string()).into();
        assert!(matches!(agent_err, agent_core::Error::InvalidInput(_)));
    }
}
