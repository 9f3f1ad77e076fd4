//! Error types for agent-core

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tool operations
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied parameters that do not match the tool's schema
    #[error("Invalid parameters: {0}")]
    InvalidInput(String),

    /// No tool is registered under the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool processing failed
    #[error("{0}")]
    ProcessingFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::UnknownTool("get_weather".to_string()).to_string(),
            "Unknown tool: get_weather"
        );
        assert_eq!(
            Error::InvalidInput("missing field `agent1`".to_string()).to_string(),
            "Invalid parameters: missing field `agent1`"
        );
        // Processing failures carry the domain message unchanged
        assert_eq!(
            Error::ProcessingFailed("Failed to fetch leaderboard".to_string()).to_string(),
            "Failed to fetch leaderboard"
        );
    }
}
